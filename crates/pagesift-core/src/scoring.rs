//! Keyword-frequency page scoring

use std::time::Instant;

use crate::trace_time;
use crate::transcript::Transcript;

/// A page paired with its relevance score for one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredPage<'a> {
    pub number: usize,
    pub text: &'a str,
    /// Total keyword occurrences on the page
    pub score: usize,
}

/// Count non-overlapping occurrences of `needle` in `haystack`.
///
/// Matches are substrings, not whole words: "cell" is found in "cellular".
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Score every page of a transcript against a keyword list.
///
/// Keywords are expected in lowercase (as produced by
/// [`crate::text::extract_keywords`]); page text is lowercased here. A keyword
/// repeated in the list counts again. Results are in page order.
pub fn score_pages<'a>(transcript: &'a Transcript, keywords: &[String]) -> Vec<ScoredPage<'a>> {
    let start = Instant::now();

    let scored: Vec<ScoredPage<'a>> = transcript
        .pages()
        .iter()
        .map(|page| {
            let lowered = page.text.to_lowercase();
            let score = keywords
                .iter()
                .map(|keyword| count_occurrences(&lowered, keyword))
                .sum();

            ScoredPage {
                number: page.number,
                text: &page.text,
                score,
            }
        })
        .collect();

    trace_time!(start, "score_pages", pages = scored.len(), keywords = keywords.len());

    scored
}
