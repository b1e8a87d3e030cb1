use std::path::Path;

use crate::cli::OutputFormat;
use crate::providers::VideoMetadata;
use crate::Result;

pub mod formatters;

pub use formatters::*;

/// Save a digest report to file
pub async fn save_to_file(digest: &DigestReport, path: &Path, format: &OutputFormat) -> Result<()> {
    let content = match format {
        OutputFormat::Text => format_as_text(digest),
        OutputFormat::Json => format_as_json(digest)?,
    };

    fs_err::write(path, content)?;
    Ok(())
}

/// Print a digest report to console
pub fn print_to_console(digest: &DigestReport, format: &OutputFormat) -> Result<()> {
    let content = match format {
        OutputFormat::Text => format_as_text(digest),
        OutputFormat::Json => format_as_json(digest)?,
    };

    println!("{}", content);
    Ok(())
}

/// Save the raw transcript with a small provenance header
pub fn save_transcript(
    path: &Path,
    metadata: Option<&VideoMetadata>,
    source: &str,
    transcript: &str,
) -> Result<()> {
    let title = metadata.map(|m| m.title.as_str()).unwrap_or("Unknown");
    let author = metadata.map(|m| m.author.as_str()).unwrap_or("Unknown");

    let mut content = String::new();
    content.push_str(&format!("Transcript of video: {}\n", title));
    content.push_str(&format!("Author: {}\n", author));
    content.push_str(&format!("Source: {}\n", source));
    content.push_str(&"=".repeat(80));
    content.push_str("\n\n");
    content.push_str(transcript);
    content.push('\n');

    fs_err::write(path, content)?;
    Ok(())
}
