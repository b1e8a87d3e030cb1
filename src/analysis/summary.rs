use super::{SUMMARY_MIN_CHARS, SUMMARY_SENTENCE_LIMIT};

/// Build a naive extractive summary from already-split sentences.
///
/// Takes the first three sentences longer than 20 chars, in transcript
/// order, joined with `". "` and terminated with a period. Sentences arrive
/// trimmed from the splitter, so the length check needs no further trimming.
///
/// When no sentence qualifies the result is the single character `"."` — a
/// degenerate but non-empty summary that the report renderer relies on.
pub fn extract_summary(sentences: &[String]) -> String {
    let selected: Vec<&str> = sentences
        .iter()
        .filter(|sentence| sentence.chars().count() > SUMMARY_MIN_CHARS)
        .take(SUMMARY_SENTENCE_LIMIT)
        .map(String::as_str)
        .collect();

    let mut summary = selected.join(". ");
    summary.push('.');
    summary
}
