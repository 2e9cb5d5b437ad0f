//! CLI argument parsing for pagesift
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod input;
pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{SelectArgs, TranscriptArgs};
pub use output::OutputFormat;
use parse::parse_format;

/// Pagesift - pick the pages of a document worth showing a language model
#[derive(Parser, Debug)]
#[command(name = "pagesift")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json, or records
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log debug events (selection decisions, timings) to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, pagesift_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (default: ./pagesift.toml, then the global config)
    #[arg(long, global = true, env = "PAGESIFT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Join per-page text files into a `[Page N]` transcript
    Assemble {
        /// One extracted-text file per page, in page order
        #[arg(required = true)]
        pages: Vec<PathBuf>,
    },

    /// Show the search terms extracted from a question
    Keywords {
        /// The question to analyze
        question: String,
    },

    /// Score every page of a transcript against a question
    Score {
        /// The question to score against
        question: String,

        #[command(flatten)]
        input: TranscriptArgs,
    },

    /// Select the most relevant pages within a character budget
    Select(SelectArgs),

    /// Show transcript statistics
    Stats {
        #[command(flatten)]
        input: TranscriptArgs,

        /// Fail when the transcript holds no meaningful text
        #[arg(long)]
        require_text: bool,
    },

    /// Build the chat message list for a question
    Prompt {
        #[command(flatten)]
        select: SelectArgs,

        /// JSON file with prior messages ([{"role": ..., "content": ...}])
        #[arg(long)]
        history: Option<PathBuf>,

        /// Prior messages to keep (overrides config)
        #[arg(long)]
        history_window: Option<usize>,
    },

    /// Print the effective configuration
    Config,
}
