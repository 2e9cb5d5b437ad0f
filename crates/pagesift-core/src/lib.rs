//! Pagesift Core Library
//!
//! Chooses which pages of a long document transcript to hand a language
//! model as grounding context for a question, within a character budget.
//!
//! ```
//! use pagesift_core::select::select_relevant_content;
//!
//! let transcript = "[Page 1] Intro.\n\n[Page 2] Mitochondria drive respiration.";
//! let context = select_relevant_content("How does respiration work?", transcript, 8000);
//! assert!(context.starts_with("[Page 1] Intro."));
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod prompt;
pub mod records;
pub mod scoring;
pub mod select;
pub mod text;
pub mod transcript;
