//! Paginated document transcripts
//!
//! A transcript is the text an upstream extractor produced for a document,
//! one `[Page N] ` marker in front of each page. Pages are numbered by their
//! position in the split, not by the number written in the marker.

mod stats;

pub use stats::{ensure_meaningful, TranscriptStats, MIN_MEANINGFUL_CHARS};

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use tracing::warn;

/// Placeholder text written for a page the extractor could not read
pub const EXTRACTION_FAILED_TEXT: &str = "[Error extracting content from this page]";

static PAGE_MARKER: OnceLock<Option<Regex>> = OnceLock::new();

/// The `[Page N]` marker pattern, or `None` if it failed to compile.
pub(crate) fn page_marker() -> Option<&'static Regex> {
    PAGE_MARKER
        .get_or_init(|| match Regex::new(r"\[Page ([0-9]+)\]") {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(error = %e, "Failed to compile page marker regex");
                None
            }
        })
        .as_ref()
}

/// A single page of extracted text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    /// 1-based position in the transcript
    pub number: usize,
    /// Page text with surrounding whitespace removed
    pub text: String,
    /// Number written in the marker that introduced this page, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<usize>,
}

impl Page {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into().trim().to_string(),
            marker: None,
        }
    }

    /// A page whose text could not be extracted
    pub fn extraction_failed(number: usize) -> Self {
        Self::new(number, EXTRACTION_FAILED_TEXT)
    }

    /// The page as it appears in a transcript or context: `[Page N] text`
    pub fn block(&self) -> String {
        format!("[Page {}] {}", self.number, self.text)
    }
}

/// An ordered, immutable sequence of pages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transcript {
    pages: Vec<Page>,
}

impl Transcript {
    /// Split raw marked-up text into pages.
    ///
    /// Empty fragments (such as the one before a leading marker) are dropped.
    /// Text with no markers at all becomes a single page 1.
    pub fn parse(raw: &str) -> Self {
        let pages = segments(raw)
            .into_iter()
            .filter(|(_, fragment)| !fragment.is_empty())
            .enumerate()
            .map(|(index, (marker, fragment))| Page {
                marker,
                ..Page::new(index + 1, fragment)
            })
            .collect();

        Self { pages }
    }

    /// Build a transcript from per-page extracted text, numbered from 1
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_extracted(texts.into_iter().map(Some))
    }

    /// Build a transcript from per-page extraction results.
    ///
    /// `None` marks a page the extractor could not read; it keeps its number
    /// and carries the placeholder text.
    pub fn from_extracted<I, S>(results: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let pages = results
            .into_iter()
            .enumerate()
            .map(|(index, text)| match text {
                Some(text) => Page::new(index + 1, text),
                None => Page::extraction_failed(index + 1),
            })
            .collect();

        Self { pages }
    }

    /// Render back to the marked-up form an extractor emits
    pub fn render(&self) -> String {
        let mut out = String::new();
        for page in &self.pages {
            out.push_str(&page.block());
            out.push_str("\n\n");
        }
        out.trim().to_string()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Pages whose marker number differs from their position.
    ///
    /// Returns `(position, marker)` pairs. Numbering stays positional; this
    /// only reports where a marker was skipped, repeated or out of order.
    pub fn marker_mismatches(&self) -> Vec<(usize, usize)> {
        self.pages
            .iter()
            .filter_map(|page| match page.marker {
                Some(marker) if marker != page.number => Some((page.number, marker)),
                _ => None,
            })
            .collect()
    }
}

/// Cut raw text at each marker, pairing every fragment with the number of
/// the marker in front of it.
fn segments(raw: &str) -> Vec<(Option<usize>, &str)> {
    let Some(re) = page_marker() else {
        return vec![(None, raw)];
    };

    let mut out = Vec::new();
    let mut marker = None;
    let mut last_end = 0;

    for caps in re.captures_iter(raw) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        out.push((marker, &raw[last_end..whole.start()]));
        marker = caps.get(1).and_then(|n| n.as_str().parse().ok());
        last_end = whole.end();
    }
    out.push((marker, &raw[last_end..]));

    out
}
