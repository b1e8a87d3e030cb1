use anyhow::Context;
use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::Path;

use super::validate_url;
use crate::{DigestError, Result};

/// Stream a direct media URL to disk with a progress bar.
///
/// Downloads into a temp file next to the target and persists it once
/// complete, so an interrupted download never leaves a partial file at the
/// final path.
pub async fn download_to_file(url: &str, output_path: &Path) -> Result<()> {
    validate_url(url)?;

    let response = reqwest::get(url).await.context("Failed to start download")?;

    if !response.status().is_success() {
        return Err(DigestError::DownloadFailed(format!("HTTP {}", response.status())).into());
    }

    let total_size = response.content_length().unwrap_or(0);
    let progress = ProgressBar::new(total_size);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
            .unwrap(),
    );
    progress.set_message("Downloading media...");

    let parent = output_path.parent().unwrap_or_else(|| Path::new("."));
    let mut staging =
        tempfile::NamedTempFile::new_in(parent).context("Failed to create staging file")?;

    let mut downloaded = 0u64;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.context("Failed to read download stream")?;
        staging
            .write_all(&chunk)
            .context("Failed to write media chunk")?;
        downloaded += chunk.len() as u64;
        progress.set_position(downloaded);
    }

    staging
        .persist(output_path)
        .map_err(|e| anyhow::anyhow!("Failed to finalize downloaded file: {}", e))?;

    progress.finish_with_message("Download complete");

    Ok(())
}
