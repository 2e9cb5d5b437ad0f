//! Transcript statistics and extraction sanity checks

use serde::Serialize;

use super::page_marker;
use crate::error::{PagesiftError, Result};

/// Below this many characters an extraction is treated as having failed.
pub const MIN_MEANINGFUL_CHARS: usize = 50;

/// Size figures reported back to the user after extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TranscriptStats {
    /// Number of literal `[Page N]` markers
    pub page_count: usize,
    /// Whitespace-separated runs, markers included
    pub word_count: usize,
    pub char_count: usize,
}

impl TranscriptStats {
    pub fn from_raw(raw: &str) -> Self {
        let page_count = page_marker().map_or(0, |re| re.find_iter(raw).count());

        Self {
            page_count,
            word_count: raw.split_whitespace().count(),
            char_count: raw.chars().count(),
        }
    }
}

/// Reject extractions that produced (almost) no text.
///
/// Scanned, encrypted or image-only documents typically come back empty or
/// with a handful of stray characters.
pub fn ensure_meaningful(raw: &str) -> Result<()> {
    let chars = raw.trim().chars().count();
    if chars < MIN_MEANINGFUL_CHARS {
        return Err(PagesiftError::NoMeaningfulText {
            chars,
            minimum: MIN_MEANINGFUL_CHARS,
        });
    }
    Ok(())
}
