use std::cmp::Reverse;
use std::collections::HashMap;

use super::TOKEN_LENGTH_FLOOR;

/// Punctuation stripped from both ends of a token during normalization
const TOKEN_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Normalize a raw token for frequency accounting.
///
/// Lower-cases the token and strips the fixed punctuation set from both
/// ends. Returns `None` for tokens whose normalized length (in chars) is at
/// or below the floor; those still count toward the total word count but are
/// excluded from the frequency table.
pub fn normalize_token(raw: &str) -> Option<String> {
    let lowered = raw.to_lowercase();
    let stripped = lowered.trim_matches(TOKEN_PUNCTUATION);

    if stripped.chars().count() > TOKEN_LENGTH_FLOOR {
        Some(stripped.to_string())
    } else {
        None
    }
}

/// Token occurrence counts in first-occurrence order.
///
/// Entries are kept in the order each token was first seen, which is what
/// makes the top-N ranking deterministic: ranking is a stable sort on count
/// alone, so tokens with equal counts keep their first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Build a table from raw tokenizer output, normalizing and filtering
    /// each token along the way.
    pub fn from_raw_tokens<'a>(tokens: impl Iterator<Item = &'a str>) -> Self {
        let mut table = Self::default();

        for raw in tokens {
            if let Some(token) = normalize_token(raw) {
                table.increment(token);
            }
        }

        table
    }

    fn increment(&mut self, token: String) {
        match self.index.get(&token) {
            Some(&position) => self.entries[position].1 += 1,
            None => {
                self.index.insert(token.clone(), self.entries.len());
                self.entries.push((token, 1));
            }
        }
    }

    /// Number of distinct tokens in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Occurrence count for a normalized token, if present
    pub fn get(&self, token: &str) -> Option<u64> {
        self.index.get(token).map(|&position| self.entries[position].1)
    }

    /// Entries in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = &(String, u64)> {
        self.entries.iter()
    }

    /// The `n` highest-count entries, sorted by descending count.
    ///
    /// `sort_by_key` is stable, so entries with equal counts keep their
    /// first-occurrence order.
    pub fn top(&self, n: usize) -> Vec<(String, u64)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by_key(|&(_, count)| Reverse(count));
        ranked.truncate(n);
        ranked
    }
}
