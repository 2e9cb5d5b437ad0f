//! Whole-page packing under a character budget

use std::collections::{HashSet, VecDeque};

use super::types::{SelectedPage, Selection, SelectionReason};
use crate::scoring::ScoredPage;

const BLOCK_SEPARATOR: &str = "\n\n";

pub(super) struct Packer {
    budget: usize,
    used: usize,
    blocks: VecDeque<(SelectedPage, String)>,
    included: HashSet<usize>,
}

impl Packer {
    pub(super) fn new(budget: usize) -> Self {
        Self {
            budget,
            used: 0,
            blocks: VecDeque::new(),
            included: HashSet::new(),
        }
    }

    pub(super) fn used(&self) -> usize {
        self.used
    }

    pub(super) fn contains(&self, number: usize) -> bool {
        self.included.contains(&number)
    }

    /// Add a page at the end if its block fits. Returns whether it was added.
    pub(super) fn append(&mut self, page: &ScoredPage<'_>, reason: SelectionReason) -> bool {
        match self.admit(page, reason) {
            Some(entry) => {
                self.blocks.push_back(entry);
                true
            }
            None => false,
        }
    }

    /// Add a page at the front if its block fits. Returns whether it was added.
    pub(super) fn prepend(&mut self, page: &ScoredPage<'_>, reason: SelectionReason) -> bool {
        match self.admit(page, reason) {
            Some(entry) => {
                self.blocks.push_front(entry);
                true
            }
            None => false,
        }
    }

    fn admit(
        &mut self,
        page: &ScoredPage<'_>,
        reason: SelectionReason,
    ) -> Option<(SelectedPage, String)> {
        if self.included.contains(&page.number) {
            return None;
        }

        let block = format!("[Page {}] {}{}", page.number, page.text, BLOCK_SEPARATOR);
        let chars = block.chars().count();
        if self.used + chars > self.budget {
            return None;
        }

        self.used += chars;
        self.included.insert(page.number);

        Some((
            SelectedPage {
                number: page.number,
                score: page.score,
                chars,
                reason,
            },
            block,
        ))
    }

    pub(super) fn finish(self, keywords: Vec<String>, total_pages: usize) -> Selection {
        let mut content = String::new();
        let mut pages = Vec::with_capacity(self.blocks.len());
        for (page, block) in self.blocks {
            content.push_str(&block);
            pages.push(page);
        }

        Selection {
            content: content.trim_end().to_string(),
            budget: self.budget,
            used_chars: self.used,
            keywords,
            total_pages,
            pages,
        }
    }
}
