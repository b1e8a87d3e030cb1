/// Split a transcript into whitespace-delimited word tokens.
///
/// Tokens are returned lazily, in transcript order, without any
/// normalization. The total word count is the length of this sequence, so
/// punctuation attached to a word still counts as part of that word here;
/// case-folding and punctuation stripping happen later, in frequency
/// accounting only.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Split a transcript into trimmed, non-empty sentences.
///
/// Sentences are delimited by the literal `.` character. Fragments that are
/// empty after trimming are dropped, so a transcript without any period
/// yields a single sentence equal to the whole trimmed text, and an empty
/// transcript yields no sentences at all.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split('.')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_on_any_whitespace() {
        let tokens: Vec<&str> = tokenize("hello  world\tfoo\nbar").collect();
        assert_eq!(tokens, vec!["hello", "world", "foo", "bar"]);
    }

    #[test]
    fn test_tokenize_keeps_punctuation_attached() {
        let tokens: Vec<&str> = tokenize("hello, world!").collect();
        assert_eq!(tokens, vec!["hello,", "world!"]);
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize("   \n\t  ").count(), 0);
    }

    #[test]
    fn test_split_sentences_trims_and_drops_empties() {
        let sentences = split_sentences("First one.  Second one. . ");
        assert_eq!(sentences, vec!["First one", "Second one"]);
    }

    #[test]
    fn test_split_sentences_without_period() {
        let sentences = split_sentences("  no period here  ");
        assert_eq!(sentences, vec!["no period here"]);
    }

    #[test]
    fn test_split_sentences_empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn test_split_sentences_preserves_order() {
        let sentences = split_sentences("O gato correu muito rápido. O gato pulou alto também. Fim.");
        assert_eq!(
            sentences,
            vec![
                "O gato correu muito rápido",
                "O gato pulou alto também",
                "Fim",
            ]
        );
    }
}
