//! Keyword extraction from free-text questions

use std::collections::HashSet;
use std::sync::OnceLock;

/// Interrogatives, auxiliaries and filler that survive the length filter
/// but carry no topical signal.
static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// Characters deleted outright before splitting (straight and curly quotes included).
const STRIPPED_PUNCTUATION: &[char] = &[
    '.', ',', '?', '!', ';', ':', '(', ')', '[', ']', '{', '}', '"', '\u{201C}', '\u{201D}',
    '\'', '\u{2018}', '\u{2019}',
];

/// Tokens of this many chars or fewer are dropped.
pub const MIN_KEYWORD_CHARS: usize = 4;

fn get_stop_words() -> &'static HashSet<&'static str> {
    STOP_WORDS.get_or_init(|| {
        [
            "what", "when", "where", "which", "who", "whom", "whose", "why", "how", "does", "did",
            "will", "would", "could", "should", "about", "with", "from", "that", "this", "these",
            "those", "have", "has", "had",
        ]
        .iter()
        .copied()
        .collect()
    })
}

/// Whether a lowercase token is on the stop-word list
pub fn is_stop_word(token: &str) -> bool {
    get_stop_words().contains(token)
}

/// Derive search terms from a question.
///
/// Lowercases, deletes punctuation, splits on whitespace, then drops short
/// tokens and stop words. Order and duplicates are preserved.
pub fn extract_keywords(question: &str) -> Vec<String> {
    let cleaned: String = question
        .to_lowercase()
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect();

    cleaned
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_KEYWORD_CHARS)
        .filter(|word| !is_stop_word(word))
        .map(|word| word.to_string())
        .collect()
}
