use serde::Serialize;

/// Why a page made it into the context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionReason {
    /// Matched at least one keyword
    Relevant,
    /// Page 1, added for baseline context
    FirstPage,
    /// Added to use spare budget
    Backfill,
}

impl std::fmt::Display for SelectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionReason::Relevant => write!(f, "relevant"),
            SelectionReason::FirstPage => write!(f, "first_page"),
            SelectionReason::Backfill => write!(f, "backfill"),
        }
    }
}

/// One page included in a selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedPage {
    pub number: usize,
    pub score: usize,
    /// Budget consumed by the page's block, separator included
    pub chars: usize,
    pub reason: SelectionReason,
}

/// Result of one selection pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    /// The assembled context, ready to embed in a prompt
    pub content: String,
    pub budget: usize,
    /// Budget consumed by all included blocks
    pub used_chars: usize,
    pub keywords: Vec<String>,
    pub total_pages: usize,
    /// Included pages in output order
    pub pages: Vec<SelectedPage>,
}

impl Selection {
    pub(crate) fn empty(budget: usize, keywords: Vec<String>, total_pages: usize) -> Self {
        Self {
            content: String::new(),
            budget,
            used_chars: 0,
            keywords,
            total_pages,
            pages: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Page numbers in output order
    pub fn page_numbers(&self) -> Vec<usize> {
        self.pages.iter().map(|p| p.number).collect()
    }
}
