//! Command implementations for pagesift

pub mod assemble;
pub mod config;
pub mod dispatch;
pub mod keywords;
pub mod prompt;
pub mod score;
pub mod select;
pub mod stats;
