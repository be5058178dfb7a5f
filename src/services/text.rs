//! Text normalization for content matching.
//!
//! Turns free text into lowercase terms with punctuation, short words and
//! common English function words removed.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Tokens with this many characters or fewer are dropped
const MIN_TOKEN_LENGTH: usize = 2;

const ENGLISH_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "up", "about", "into", "through", "during", "before", "after", "above", "below", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did",
    "will", "would", "could", "should", "may", "might", "must", "can", "his", "her", "him",
    "she", "he", "it", "they", "them", "their", "this", "that", "these", "those", "i", "me",
    "my", "myself", "we", "our", "ours",
];

static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH_STOP_WORDS.iter().copied().collect());

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Splits text into significant terms, keeping order and duplicates.
///
/// Anything other than ASCII letters, digits, `_` and whitespace becomes a
/// space, so `"sci-fi"` yields `["sci"]` after the length filter rather
/// than `"scifi"`.
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|word| word.len() > MIN_TOKEN_LENGTH && !is_stop_word(word))
        .map(str::to_string)
        .collect()
}
