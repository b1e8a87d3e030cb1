use anyhow::Context;
use async_trait::async_trait;
use std::path::Path;

use super::{captions, CaptionProvider, VideoMetadata};
use crate::{DigestError, Result};

/// Provider for transcripts stored as local files.
///
/// Plain-text files are taken verbatim; `.vtt` and `.srt` subtitle files are
/// flattened to plain text first. Dispatched on path-ness by the registry,
/// so it never competes with URL providers.
pub struct LocalTranscriptProvider;

impl LocalTranscriptProvider {
    pub fn new() -> Self {
        Self
    }

    fn check_file(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(
                DigestError::FileError(format!("File does not exist: {}", path.display())).into(),
            );
        }

        if !path.is_file() {
            return Err(
                DigestError::FileError(format!("Path is not a file: {}", path.display())).into(),
            );
        }

        Ok(())
    }
}

#[async_trait]
impl CaptionProvider for LocalTranscriptProvider {
    async fn fetch_transcript(&self, path_str: &str, _language: &str) -> Result<String> {
        let path = Path::new(path_str);
        Self::check_file(path)?;

        let raw = fs_err::read_to_string(path).context("Failed to read transcript file")?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase);

        let text = match extension.as_deref() {
            Some("vtt") => captions::flatten_vtt(&raw),
            Some("srt") => captions::flatten_srt(&raw),
            _ => raw,
        };

        Ok(text)
    }

    async fn fetch_metadata(&self, path_str: &str) -> Result<VideoMetadata> {
        let path = Path::new(path_str);
        Self::check_file(path)?;

        Ok(VideoMetadata {
            title: path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("local transcript")
                .to_string(),
            author: "local file".to_string(),
            duration_seconds: None,
            views: None,
            description: String::new(),
        })
    }

    fn supports_url(&self, input: &str) -> bool {
        Path::new(input).is_file()
    }

    fn platform_name(&self) -> &'static str {
        "Local transcript files"
    }
}

impl Default for LocalTranscriptProvider {
    fn default() -> Self {
        Self::new()
    }
}
