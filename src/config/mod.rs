use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Caption provider settings
    pub provider: ProviderConfig,

    /// Application settings
    pub app: AppConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Path to the yt-dlp binary
    pub yt_dlp_path: String,

    /// Language requested for caption tracks
    pub default_language: String,

    /// Language tried when the requested one has no captions
    pub fallback_language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory for downloaded audio files
    pub downloads_dir: Option<PathBuf>,

    /// Default output format
    pub default_output_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderConfig {
                yt_dlp_path: "yt-dlp".to_string(),
                default_language: "pt".to_string(),
                fallback_language: "en".to_string(),
            },
            app: AppConfig {
                downloads_dir: None,
                default_output_format: "text".to_string(),
            },
        }
    }
}

impl Config {
    /// Load configuration from file or create default
    pub async fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content =
                fs_err::read_to_string(&config_path).context("Failed to read config file")?;

            let config: Config =
                serde_yaml::from_str(&content).context("Failed to parse config file")?;

            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save().await?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub async fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs_err::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;

        fs_err::write(&config_path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// Get configuration file path
    fn config_path() -> Result<PathBuf> {
        // First try current directory for easy testing
        let local_config = PathBuf::from("config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        let config_dir = dirs::config_dir().context("Could not determine config directory")?;

        Ok(config_dir.join("yt-digest").join("config.yaml"))
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        if self.provider.default_language.trim().is_empty() {
            anyhow::bail!("Default caption language must not be empty");
        }

        if self.provider.fallback_language.trim().is_empty() {
            anyhow::bail!("Fallback caption language must not be empty");
        }

        if !matches!(self.app.default_output_format.as_str(), "text" | "json") {
            anyhow::bail!(
                "Unknown default output format: {}",
                self.app.default_output_format
            );
        }

        Ok(())
    }

    /// Display current configuration
    pub fn display(&self) {
        println!("Current Configuration:");
        println!("  yt-dlp path: {}", self.provider.yt_dlp_path);
        println!("  Caption language: {}", self.provider.default_language);
        println!("  Fallback language: {}", self.provider.fallback_language);
        if let Some(dir) = &self.app.downloads_dir {
            println!("  Downloads dir: {}", dir.display());
        }
        println!("  Default format: {}", self.app.default_output_format);
    }
}
