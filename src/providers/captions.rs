//! Flattening of platform caption formats into plain transcript text.
//!
//! The analysis pipeline only ever sees flat text; whatever timed-cue format
//! a caption track arrives in (yt-dlp json3, WebVTT, SRT) is reduced here to
//! a single whitespace-joined string.

use anyhow::Context;
use serde_json::Value;

use crate::Result;

/// Flatten a yt-dlp json3 caption payload (`events[].segs[].utf8`)
pub fn flatten_json3(raw: &str) -> Result<String> {
    let payload: Value =
        serde_json::from_str(raw).context("Failed to parse json3 caption payload")?;

    let mut words: Vec<String> = Vec::new();

    if let Some(events) = payload["events"].as_array() {
        for event in events {
            if let Some(segs) = event["segs"].as_array() {
                for seg in segs {
                    if let Some(text) = seg["utf8"].as_str() {
                        words.extend(text.split_whitespace().map(str::to_string));
                    }
                }
            }
        }
    }

    Ok(words.join(" "))
}

/// Flatten a WebVTT caption payload
pub fn flatten_vtt(raw: &str) -> String {
    flatten_cue_lines(raw)
}

/// Flatten an SRT caption payload
pub fn flatten_srt(raw: &str) -> String {
    flatten_cue_lines(raw)
}

/// Keep only cue text lines: headers, timing lines, cue numbers, and blank
/// lines are dropped; inline styling tags are stripped. Rolling captions
/// repeat the previous line, so consecutive duplicates collapse to one.
fn flatten_cue_lines(raw: &str) -> String {
    let mut lines: Vec<String> = Vec::new();

    for line in raw.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty()
            || trimmed.starts_with("WEBVTT")
            || trimmed.starts_with("Kind:")
            || trimmed.starts_with("Language:")
            || trimmed.starts_with("NOTE")
            || trimmed.starts_with("STYLE")
            || trimmed.contains("-->")
        {
            continue;
        }

        // Cue sequence numbers
        if trimmed.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }

        let text = strip_inline_tags(trimmed);
        if text.is_empty() {
            continue;
        }

        if lines.last().map(String::as_str) != Some(text.as_str()) {
            lines.push(text);
        }
    }

    lines.join(" ")
}

/// Remove `<...>` styling and timing tags from a cue line
fn strip_inline_tags(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut in_tag = false;

    for c in line.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }

    out.trim().to_string()
}
