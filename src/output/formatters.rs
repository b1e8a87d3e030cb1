use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::{report, AnalysisResult};
use crate::providers::VideoMetadata;
use crate::utils;
use crate::Result;

const BANNER_WIDTH: usize = 80;

/// A complete digest: one analysis result plus the context it came from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestReport {
    /// URL or file path the transcript came from
    pub source: String,

    /// Video metadata, when the provider could supply it
    pub metadata: Option<VideoMetadata>,

    /// The analysis result
    pub analysis: AnalysisResult,

    /// Timestamp when the digest was generated
    pub generated_at: DateTime<Utc>,
}

impl DigestReport {
    pub fn new(source: String, metadata: Option<VideoMetadata>, analysis: AnalysisResult) -> Self {
        Self {
            source,
            metadata,
            analysis,
            generated_at: Utc::now(),
        }
    }
}

/// Format a digest as the full human-readable report
pub fn format_as_text(digest: &DigestReport) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let mut out = String::new();

    out.push_str(&banner);
    out.push_str("\nVIDEO DIGEST REPORT\n");
    out.push_str(&banner);
    out.push_str("\n\n");

    out.push_str(&format!("Source: {}\n\n", digest.source));

    if let Some(metadata) = &digest.metadata {
        out.push_str(&metadata_section(metadata));
        out.push('\n');
    }

    out.push_str(&report::render(&digest.analysis));

    out
}

/// Format a digest as pretty-printed JSON
pub fn format_as_json(digest: &DigestReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(digest)?)
}

/// Render the metadata block used by both the text report and `info`
pub fn metadata_section(metadata: &VideoMetadata) -> String {
    let mut out = String::new();

    out.push_str("📹 VIDEO INFORMATION:\n");
    out.push_str(&format!("  • Title: {}\n", metadata.title));
    out.push_str(&format!("  • Author: {}\n", metadata.author));

    if let Some(seconds) = metadata.duration_seconds {
        out.push_str(&format!(
            "  • Duration: {}\n",
            utils::format_duration(seconds)
        ));
    }

    if let Some(views) = metadata.views {
        out.push_str(&format!("  • Views: {}\n", views));
    }

    if !metadata.description.is_empty() {
        out.push_str(&format!("  • Description: {}\n", metadata.description));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;

    fn sample_metadata() -> VideoMetadata {
        VideoMetadata {
            title: "A talk about cats".to_string(),
            author: "Some Channel".to_string(),
            duration_seconds: Some(125),
            views: Some(4321),
            description: "A description".to_string(),
        }
    }

    fn sample_digest() -> DigestReport {
        DigestReport::new(
            "https://www.youtube.com/watch?v=abc123def45".to_string(),
            Some(sample_metadata()),
            analyze("O gato correu muito rápido. O gato pulou alto também. Fim."),
        )
    }

    #[test]
    fn test_text_format_includes_source_metadata_and_analysis() {
        let text = format_as_text(&sample_digest());

        assert!(text.contains("VIDEO DIGEST REPORT"));
        assert!(text.contains("Source: https://www.youtube.com/watch?v=abc123def45"));
        assert!(text.contains("  • Title: A talk about cats"));
        assert!(text.contains("  • Duration: 2m 5s"));
        assert!(text.contains("  • Total words: 11"));
        assert!(text.contains("O gato correu muito rápido. O gato pulou alto também."));
    }

    #[test]
    fn test_text_format_omits_metadata_block_when_absent() {
        let mut digest = sample_digest();
        digest.metadata = None;

        let text = format_as_text(&digest);
        assert!(!text.contains("VIDEO INFORMATION"));
        assert!(text.contains("TRANSCRIPT ANALYSIS"));
    }

    #[test]
    fn test_json_format_round_trips() {
        let digest = sample_digest();
        let json = format_as_json(&digest).unwrap();
        let back: DigestReport = serde_json::from_str(&json).unwrap();

        assert_eq!(back.source, digest.source);
        assert_eq!(back.metadata, digest.metadata);
        assert_eq!(back.analysis, digest.analysis);
    }

    #[test]
    fn test_metadata_section_skips_missing_fields() {
        let metadata = VideoMetadata {
            title: "Untitled".to_string(),
            author: "Unknown".to_string(),
            duration_seconds: None,
            views: None,
            description: String::new(),
        };

        let section = metadata_section(&metadata);
        assert!(section.contains("  • Title: Untitled\n"));
        assert!(!section.contains("Duration"));
        assert!(!section.contains("Views"));
        assert!(!section.contains("Description"));
    }
}
