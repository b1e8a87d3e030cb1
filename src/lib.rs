//! YouTube Digest - A Rust CLI tool for analyzing video transcripts
//!
//! This library fetches caption tracks and metadata from YouTube (or reads
//! transcripts from local files) and produces a deterministic statistical
//! digest: word/sentence counts, a frequency-ranked keyword table, an
//! estimated reading time, and a short extractive summary.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod output;
pub mod providers;
pub mod utils;

pub use analysis::{analyze, render, AnalysisResult};
pub use cli::{Cli, Commands, OutputFormat};
pub use config::Config;
pub use output::DigestReport;
pub use providers::{CaptionProvider, ProviderRegistry, VideoMetadata};

/// Result type used throughout the library
pub type Result<T> = anyhow::Result<T>;

/// Error types specific to the digest tool
#[derive(thiserror::Error, Debug)]
pub enum DigestError {
    #[error("Unsupported URL format: {0}")]
    UnsupportedUrl(String),

    #[error("No caption track available: {0}")]
    TranscriptUnavailable(String),

    #[error("Video metadata unavailable: {0}")]
    MetadataUnavailable(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("File operation failed: {0}")]
    FileError(String),
}
