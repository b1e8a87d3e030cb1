use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ytdigest",
    about = "YouTube Digest - Fetch caption tracks and produce deterministic transcript digests",
    version,
    long_about = "A CLI tool that fetches a video's caption track (or reads a local transcript file) and produces a statistical digest: word and sentence counts, the most frequent keywords, an estimated reading time, and a short extractive summary."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable dependency warnings and progress chatter
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a video transcript and print or save the digest
    Analyze {
        /// Video URL or local transcript file (.txt, .vtt, .srt)
        #[arg(value_name = "URL_OR_FILE")]
        source: String,

        /// Output file path (prints to console if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Caption language to request (config default if not specified)
        #[arg(short, long, value_name = "LANG")]
        language: Option<String>,

        /// Also save the raw transcript to this file
        #[arg(long, value_name = "FILE")]
        save_transcript: Option<PathBuf>,

        /// Skip fetching video metadata for the report header
        #[arg(long)]
        no_metadata: bool,
    },

    /// Show metadata for a video without analyzing it
    Info {
        /// Video URL
        #[arg(value_name = "URL")]
        url: String,
    },

    /// Download the audio track of a video
    Download {
        /// Video URL (YouTube or a direct media link)
        #[arg(value_name = "URL")]
        url: String,

        /// Destination directory (defaults to ./downloads)
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Configure provider and application settings
    Config {
        /// Show current configuration
        #[arg(short, long)]
        show: bool,
    },

    /// List supported sources
    Platforms,
}

#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormat {
    /// Plain text report
    Text,
    /// JSON with all computed fields
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
