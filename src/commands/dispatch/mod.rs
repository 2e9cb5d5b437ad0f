//! Command dispatch logic for pagesift

use std::env;
use std::time::Instant;

use crate::cli::Cli;
use pagesift_core::config::Config;
use pagesift_core::error::{PagesiftError, Result};

mod command;
mod commands;
mod macros;

pub use command::{Command, CommandContext, NoCommand};
use macros::trace_command_always;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = env::current_dir()
        .map_err(|e| PagesiftError::io_operation("resolve", "working directory", e))?;
    let (config, config_source) = Config::discover(cli.config.as_deref(), &cwd)?;

    trace_command_always!(start, "load_config");

    let ctx = CommandContext::new(cli, config, config_source, start);

    let result = match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    };

    trace_command_always!(start, "command_complete");
    result
}
