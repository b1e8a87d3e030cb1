//! Transcript analytics engine.
//!
//! Four pure stages composed in a fixed pipeline: tokenization, sentence
//! splitting, frequency counting, and extractive summarization, assembled
//! into a single [`AnalysisResult`]. Every stage is a value-in/value-out
//! function with no shared state, so [`analyze`] is total over all input
//! strings and bit-identical across repeated calls — an empty transcript is
//! a defined zero-valued result, not an error.

use serde::{Deserialize, Serialize};

pub mod frequency;
pub mod report;
pub mod summary;
pub mod tokenizer;

pub use frequency::FrequencyTable;
pub use report::render;

/// Assumed reading speed for the reading-time estimate
pub const WORDS_PER_MINUTE: f64 = 200.0;

/// Maximum number of entries in the top-word ranking
pub const TOP_WORD_LIMIT: usize = 10;

/// Tokens at or below this normalized char length are excluded from
/// frequency accounting (but still count toward total words)
pub const TOKEN_LENGTH_FLOOR: usize = 3;

/// Maximum number of sentences included in the summary
pub const SUMMARY_SENTENCE_LIMIT: usize = 3;

/// Sentences must exceed this trimmed char length to qualify for the summary
pub const SUMMARY_MIN_CHARS: usize = 20;

/// The complete, immutable output of one analysis call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Total whitespace-delimited words in the transcript
    pub total_words: usize,

    /// Total non-empty sentences (split on `.`)
    pub total_sentences: usize,

    /// Distinct normalized tokens that passed the length filter
    pub unique_words: usize,

    /// Up to 10 (token, count) pairs, descending count, first-occurrence
    /// order on ties
    pub top_words: Vec<(String, u64)>,

    /// Estimated reading time in minutes, rounded to one decimal
    pub reading_time_minutes: f64,

    /// Extractive summary; `"."` when no sentence qualifies
    pub summary: String,
}

/// Analyze a transcript and produce its statistical digest.
///
/// Pure and deterministic: no I/O, no hidden state, and no failure mode for
/// any string input, including the empty string.
pub fn analyze(transcript: &str) -> AnalysisResult {
    let total_words = tokenizer::tokenize(transcript).count();
    let sentences = tokenizer::split_sentences(transcript);
    let frequencies = FrequencyTable::from_raw_tokens(tokenizer::tokenize(transcript));

    AnalysisResult {
        total_words,
        total_sentences: sentences.len(),
        unique_words: frequencies.len(),
        top_words: frequencies.top(TOP_WORD_LIMIT),
        reading_time_minutes: reading_time_minutes(total_words),
        summary: summary::extract_summary(&sentences),
    }
}

/// Reading time at ~200 words per minute, rounded to one decimal place.
///
/// Rounding happens here, once; rendering only formats the stored value.
fn reading_time_minutes(total_words: usize) -> f64 {
    (total_words as f64 / WORDS_PER_MINUTE * 10.0).round() / 10.0
}
