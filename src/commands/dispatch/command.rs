//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use pagesift_core::config::{Config, ConfigSource, SelectorConfig};
use pagesift_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: Config,
    pub config_source: ConfigSource,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: Config, config_source: ConfigSource, start: Instant) -> Self {
        Self {
            cli,
            config,
            config_source,
            start,
        }
    }

    /// Selector settings with an optional `--max-chars` override applied
    pub fn selector_config(&self, max_chars: Option<usize>) -> SelectorConfig {
        let mut selector = self.config.selector;
        if let Some(max_chars) = max_chars {
            selector.max_chars = max_chars;
        }
        selector
    }

    /// Selector settings for prompt assembly, budgeted by the `[prompt]` section
    pub fn prompt_selector_config(&self, max_chars: Option<usize>) -> SelectorConfig {
        self.selector_config(Some(max_chars.unwrap_or(self.config.prompt.max_chars)))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("pagesift {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Budgeted page selection for questions about long documents.");
        println!();
        println!("Run `pagesift --help` for usage information.");
        Ok(())
    }
}
