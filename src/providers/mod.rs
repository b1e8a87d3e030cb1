use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

pub mod captions;
pub mod download;
pub mod local;
pub mod youtube;

use crate::config::ProviderConfig;
use crate::{DigestError, Result};

/// Metadata about a video, as supplied by its platform.
///
/// Read-only input for report rendering; nothing in the analysis pipeline
/// derives from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoMetadata {
    /// Video title
    pub title: String,

    /// Channel or uploader name
    pub author: String,

    /// Duration in seconds if the platform reports one
    pub duration_seconds: Option<u64>,

    /// View count if the platform reports one
    pub views: Option<u64>,

    /// Description, truncated to 200 chars by the provider
    pub description: String,
}

/// Trait for fetching transcripts and metadata from different platforms
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CaptionProvider: Send + Sync {
    /// Fetch the caption track for a URL as flat plain text
    async fn fetch_transcript(&self, url: &str, language: &str) -> Result<String>;

    /// Fetch video metadata for a URL
    async fn fetch_metadata(&self, url: &str) -> Result<VideoMetadata>;

    /// Check if this provider supports the given URL
    fn supports_url(&self, url: &str) -> bool;

    /// Get the name of this platform
    fn platform_name(&self) -> &'static str;

    /// Download the audio track to a file
    async fn download_audio(&self, url: &str, output_path: &Path) -> Result<()> {
        download::download_to_file(url, output_path).await
    }
}

/// Registry for managing multiple caption providers
pub struct ProviderRegistry {
    providers: Vec<Box<dyn CaptionProvider>>,
}

impl ProviderRegistry {
    /// Create a new registry with default providers
    pub fn new() -> Self {
        let mut registry = Self {
            providers: Vec::new(),
        };

        registry.register(Box::new(youtube::YoutubeProvider::new()));

        registry
    }

    /// Create a registry whose providers honor the user's configuration
    pub fn with_config(config: &ProviderConfig) -> Self {
        let mut registry = Self {
            providers: Vec::new(),
        };

        registry.register(Box::new(youtube::YoutubeProvider::from_config(config)));

        registry
    }

    /// Create the local transcript provider (not stored in the registry
    /// since path inputs are dispatched differently from URLs)
    pub fn create_local_provider() -> local::LocalTranscriptProvider {
        local::LocalTranscriptProvider::new()
    }

    /// Register a new provider
    pub fn register(&mut self, provider: Box<dyn CaptionProvider>) {
        self.providers.push(provider);
    }

    /// Find a provider that supports the given URL
    pub fn find_provider(&self, url: &str) -> Option<&dyn CaptionProvider> {
        self.providers
            .iter()
            .find(|provider| provider.supports_url(url))
            .map(|boxed| boxed.as_ref())
    }

    /// List all supported platforms
    pub fn list_platforms(&self) -> Vec<&'static str> {
        self.providers
            .iter()
            .map(|provider| provider.platform_name())
            .collect()
    }

    /// Check if input is a local file path
    pub fn is_local_file(&self, input: &str) -> bool {
        // First, check if it's clearly a URL
        if input.starts_with("http://") || input.starts_with("https://") {
            return false;
        }

        // Check if the file exists (handles both absolute and relative paths)
        let path = Path::new(input);
        if path.exists() {
            return true;
        }

        // Check if it looks like a file path (has file extension or path separators)
        let has_extension = path.extension().is_some();
        let has_path_separators = input.contains('/') || input.contains('\\');
        let starts_with_dot = input.starts_with("./") || input.starts_with(".\\");

        has_extension || has_path_separators || starts_with_dot
    }

    /// Fetch a transcript using the appropriate provider
    pub async fn fetch_transcript(&self, input: &str, language: &str) -> Result<String> {
        if self.is_local_file(input) {
            return Self::create_local_provider()
                .fetch_transcript(input, language)
                .await;
        }

        let provider = self
            .find_provider(input)
            .ok_or_else(|| DigestError::UnsupportedUrl(input.to_string()))?;

        provider.fetch_transcript(input, language).await
    }

    /// Fetch video metadata using the appropriate provider
    pub async fn fetch_metadata(&self, input: &str) -> Result<VideoMetadata> {
        if self.is_local_file(input) {
            return Self::create_local_provider().fetch_metadata(input).await;
        }

        let provider = self
            .find_provider(input)
            .ok_or_else(|| DigestError::UnsupportedUrl(input.to_string()))?;

        provider.fetch_metadata(input).await
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate and normalize URLs
pub fn validate_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|_| anyhow::anyhow!("Invalid URL format: {}", url))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        anyhow::bail!("URL must use HTTP or HTTPS protocol");
    }

    Ok(parsed)
}
