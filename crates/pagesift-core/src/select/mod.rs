//! Budgeted selection of relevant pages
//!
//! Pages are ranked by keyword score and packed whole into a character
//! budget. Page 1 is pulled to the front when it fits, and spare budget is
//! backfilled with unselected pages in rank order.

mod packer;
mod types;

pub use types::{SelectedPage, Selection, SelectionReason};

use std::time::Instant;

use tracing::debug;

use crate::config::SelectorConfig;
use crate::scoring::score_pages;
use crate::text::extract_keywords;
use crate::transcript::Transcript;
use packer::Packer;

/// Pick the pages of `full_transcript` most relevant to `question`, within
/// `max_chars` characters, using the default backfill thresholds.
///
/// Never fails: an empty question, empty transcript or zero budget all give
/// a well-defined (possibly empty) string.
pub fn select_relevant_content(question: &str, full_transcript: &str, max_chars: usize) -> String {
    Selector::new(SelectorConfig::with_max_chars(max_chars))
        .select(question, full_transcript)
        .content
}

/// Page selector with fixed thresholds
#[derive(Debug, Clone, Copy, Default)]
pub struct Selector {
    config: SelectorConfig,
}

impl Selector {
    pub fn new(config: SelectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Parse a marked-up transcript and select from it
    pub fn select(&self, question: &str, full_transcript: &str) -> Selection {
        self.select_transcript(question, &Transcript::parse(full_transcript))
    }

    /// Select from an already parsed transcript
    pub fn select_transcript(&self, question: &str, transcript: &Transcript) -> Selection {
        let start = Instant::now();
        let budget = self.config.max_chars;
        let keywords = extract_keywords(question);

        if budget == 0 || transcript.is_empty() {
            debug!(budget, pages = transcript.len(), "select_skipped");
            return Selection::empty(budget, keywords, transcript.len());
        }

        let mut ranked = score_pages(transcript, &keywords);
        // stable: equal scores keep page order
        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        let mut packer = Packer::new(budget);

        for page in ranked.iter().filter(|p| p.score > 0) {
            packer.append(page, SelectionReason::Relevant);
        }
        let any_relevant = ranked.first().is_some_and(|p| p.score > 0);

        if !packer.contains(1) {
            if let Some(first) = ranked.iter().find(|p| p.number == 1) {
                packer.prepend(first, SelectionReason::FirstPage);
            }
        }

        let trigger = budget as f64 * self.config.backfill_trigger_ratio;
        if !any_relevant || (packer.used() as f64) < trigger {
            let target = budget as f64 * self.config.backfill_target_ratio;
            for page in &ranked {
                if packer.used() as f64 >= target {
                    break;
                }
                if !packer.contains(page.number) {
                    packer.append(page, SelectionReason::Backfill);
                }
            }
        }

        let selection = packer.finish(keywords, transcript.len());

        debug!(
            budget,
            pages = selection.total_pages,
            keywords = selection.keywords.len(),
            selected = selection.pages.len(),
            used_chars = selection.used_chars,
            elapsed = ?start.elapsed(),
            "select_complete"
        );

        selection
    }
}
