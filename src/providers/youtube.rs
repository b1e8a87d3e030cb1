use anyhow::Context;
use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use url::Url;

use super::{captions, CaptionProvider, VideoMetadata};
use crate::config::ProviderConfig;
use crate::utils;
use crate::{DigestError, Result};

/// Descriptions longer than this are truncated in metadata
const DESCRIPTION_LIMIT: usize = 200;

/// YouTube caption and metadata provider using yt-dlp
pub struct YoutubeProvider {
    yt_dlp_path: String,
    fallback_language: String,
}

impl YoutubeProvider {
    pub fn new() -> Self {
        Self {
            yt_dlp_path: "yt-dlp".to_string(),
            fallback_language: "en".to_string(),
        }
    }

    pub fn from_config(config: &ProviderConfig) -> Self {
        Self {
            yt_dlp_path: config.yt_dlp_path.clone(),
            fallback_language: config.fallback_language.clone(),
        }
    }

    /// Check if yt-dlp is available
    pub async fn check_availability(&self) -> Result<bool> {
        let output = Command::new(&self.yt_dlp_path)
            .arg("--version")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await;

        Ok(matches!(output, Ok(out) if out.status.success()))
    }

    /// Extract the 11-character video id from the usual URL shapes
    pub fn extract_video_id(url: &str) -> Option<String> {
        let parsed = Url::parse(url).ok()?;
        let host = parsed.host_str()?;

        if host.ends_with("youtu.be") {
            return parsed
                .path_segments()?
                .next()
                .filter(|segment| !segment.is_empty())
                .map(str::to_string);
        }

        if !host.ends_with("youtube.com") {
            return None;
        }

        if let Some((_, id)) = parsed.query_pairs().find(|(key, _)| key == "v") {
            return Some(id.into_owned());
        }

        let mut segments = parsed.path_segments()?;
        match segments.next() {
            Some("embed") | Some("v") | Some("shorts") => segments
                .next()
                .filter(|segment| !segment.is_empty())
                .map(str::to_string),
            _ => None,
        }
    }

    /// Get video information using yt-dlp
    async fn dump_video_info(&self, url: &str) -> Result<Value> {
        tracing::debug!("Extracting video info for: {}", url);

        let output = Command::new(&self.yt_dlp_path)
            .args(["--dump-json", "--no-playlist", url])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        if !output.status.success() {
            let error = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("yt-dlp failed: {}", error);
        }

        let json_str = String::from_utf8(output.stdout)?;
        let info: Value = serde_json::from_str(&json_str)?;

        Ok(info)
    }

    /// Pick a caption track URL for a language: manual subtitles first, then
    /// automatic captions; json3 preferred over vtt within a track list.
    fn select_caption_track(info: &Value, language: &str) -> Option<(String, String)> {
        for source in ["subtitles", "automatic_captions"] {
            let Some(tracks) = info[source][language].as_array() else {
                continue;
            };

            for preferred in ["json3", "vtt", "srt"] {
                if let Some(track) = tracks
                    .iter()
                    .find(|track| track["ext"].as_str() == Some(preferred))
                {
                    if let Some(track_url) = track["url"].as_str() {
                        return Some((track_url.to_string(), preferred.to_string()));
                    }
                }
            }

            if let Some(track) = tracks.iter().find(|track| track["url"].as_str().is_some()) {
                let ext = track["ext"].as_str().unwrap_or("vtt").to_string();
                if let Some(track_url) = track["url"].as_str() {
                    return Some((track_url.to_string(), ext));
                }
            }
        }

        None
    }

    /// Download and flatten the caption track for one language, if any
    async fn fetch_caption_text(&self, info: &Value, language: &str) -> Result<Option<String>> {
        let Some((track_url, ext)) = Self::select_caption_track(info, language) else {
            return Ok(None);
        };

        tracing::debug!("Fetching {} caption track for language '{}'", ext, language);

        let response = reqwest::get(&track_url)
            .await
            .context("Failed to download caption track")?;

        if !response.status().is_success() {
            return Err(DigestError::DownloadFailed(format!(
                "caption track returned HTTP {}",
                response.status()
            ))
            .into());
        }

        let payload = response
            .text()
            .await
            .context("Failed to read caption track body")?;

        let text = match ext.as_str() {
            "json3" => captions::flatten_json3(&payload)?,
            "srt" => captions::flatten_srt(&payload),
            _ => captions::flatten_vtt(&payload),
        };

        Ok(Some(text))
    }

    /// Download audio directly using yt-dlp
    pub async fn download_audio_direct(&self, url: &str, output_path: &Path) -> Result<()> {
        tracing::debug!("Downloading audio for: {}", url);

        let output = Command::new(&self.yt_dlp_path)
            .args([
                "--output",
                &output_path.to_string_lossy(),
                "--extract-audio",
                "--audio-format",
                "mp3",
                "--format",
                "bestaudio/best",
                "--no-playlist",
                "--newline",
                url,
            ])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        if !output.status.success() {
            let error = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("Failed to download audio: {}", error);
        }

        Ok(())
    }
}

#[async_trait]
impl CaptionProvider for YoutubeProvider {
    async fn fetch_transcript(&self, url: &str, language: &str) -> Result<String> {
        if !self.check_availability().await? {
            anyhow::bail!(
                "yt-dlp is not available. Please install it: https://github.com/yt-dlp/yt-dlp"
            );
        }

        if Self::extract_video_id(url).is_none() {
            return Err(DigestError::UnsupportedUrl(url.to_string()).into());
        }

        let info = self.dump_video_info(url).await?;

        if let Some(text) = self.fetch_caption_text(&info, language).await? {
            return Ok(text);
        }

        // Original-tool behavior: fall back to English when the requested
        // language has no caption track
        if language != self.fallback_language {
            tracing::warn!(
                "No '{}' captions for {}, trying '{}'",
                language,
                url,
                self.fallback_language
            );

            if let Some(text) = self
                .fetch_caption_text(&info, &self.fallback_language)
                .await?
            {
                return Ok(text);
            }
        }

        Err(DigestError::TranscriptUnavailable(url.to_string()).into())
    }

    async fn fetch_metadata(&self, url: &str) -> Result<VideoMetadata> {
        if !self.check_availability().await? {
            anyhow::bail!(
                "yt-dlp is not available. Please install it: https://github.com/yt-dlp/yt-dlp"
            );
        }

        let info = self
            .dump_video_info(url)
            .await
            .map_err(|e| DigestError::MetadataUnavailable(e.to_string()))?;

        Ok(VideoMetadata {
            title: info["title"].as_str().unwrap_or("Unknown").to_string(),
            author: info["uploader"]
                .as_str()
                .or_else(|| info["channel"].as_str())
                .unwrap_or("Unknown")
                .to_string(),
            duration_seconds: info["duration"].as_f64().map(|d| d as u64),
            views: info["view_count"].as_u64(),
            description: utils::truncate_chars(
                info["description"].as_str().unwrap_or(""),
                DESCRIPTION_LIMIT,
            ),
        })
    }

    fn supports_url(&self, url: &str) -> bool {
        // Support various YouTube URL formats
        let url_lower = url.to_lowercase();
        url_lower.contains("youtube.com/watch")
            || url_lower.contains("youtu.be/")
            || url_lower.contains("youtube.com/embed/")
            || url_lower.contains("youtube.com/v/")
            || url_lower.contains("youtube.com/shorts/")
            || url_lower.contains("m.youtube.com/")
    }

    fn platform_name(&self) -> &'static str {
        "YouTube"
    }

    async fn download_audio(&self, url: &str, output_path: &Path) -> Result<()> {
        self.download_audio_direct(url, output_path).await
    }
}

impl Default for YoutubeProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_video_id() {
        let id = Some("dQw4w9WgXcQ".to_string());

        assert_eq!(
            YoutubeProvider::extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            id
        );
        assert_eq!(
            YoutubeProvider::extract_video_id("https://youtu.be/dQw4w9WgXcQ"),
            id
        );
        assert_eq!(
            YoutubeProvider::extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            id
        );
        assert_eq!(
            YoutubeProvider::extract_video_id("https://www.youtube.com/shorts/dQw4w9WgXcQ"),
            id
        );
        assert_eq!(
            YoutubeProvider::extract_video_id("https://www.youtube.com/watch?t=10&v=dQw4w9WgXcQ"),
            id
        );
    }

    #[test]
    fn test_extract_video_id_rejects_non_video_urls() {
        assert_eq!(
            YoutubeProvider::extract_video_id("https://www.youtube.com/feed/trending"),
            None
        );
        assert_eq!(
            YoutubeProvider::extract_video_id("https://example.com/watch?v=dQw4w9WgXcQ"),
            None
        );
        assert_eq!(YoutubeProvider::extract_video_id("not a url"), None);
    }

    #[test]
    fn test_supports_url() {
        let provider = YoutubeProvider::new();

        assert!(provider.supports_url("https://www.youtube.com/watch?v=abc"));
        assert!(provider.supports_url("https://youtu.be/abc"));
        assert!(provider.supports_url("https://m.youtube.com/watch?v=abc"));
        assert!(!provider.supports_url("https://vimeo.com/12345"));
    }

    #[test]
    fn test_select_caption_track_prefers_manual_subtitles() {
        let info = json!({
            "subtitles": {
                "pt": [{"ext": "vtt", "url": "https://example.com/manual.vtt"}]
            },
            "automatic_captions": {
                "pt": [{"ext": "json3", "url": "https://example.com/auto.json3"}]
            }
        });

        assert_eq!(
            YoutubeProvider::select_caption_track(&info, "pt"),
            Some(("https://example.com/manual.vtt".to_string(), "vtt".to_string()))
        );
    }

    #[test]
    fn test_select_caption_track_prefers_json3_within_a_track_list() {
        let info = json!({
            "automatic_captions": {
                "en": [
                    {"ext": "vtt", "url": "https://example.com/auto.vtt"},
                    {"ext": "json3", "url": "https://example.com/auto.json3"}
                ]
            }
        });

        assert_eq!(
            YoutubeProvider::select_caption_track(&info, "en"),
            Some((
                "https://example.com/auto.json3".to_string(),
                "json3".to_string()
            ))
        );
    }

    #[test]
    fn test_select_caption_track_missing_language() {
        let info = json!({
            "subtitles": {},
            "automatic_captions": {}
        });

        assert_eq!(YoutubeProvider::select_caption_track(&info, "pt"), None);
    }
}
