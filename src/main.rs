//! Pagesift - budgeted page selection for document question answering
//!
//! Reads a paginated transcript, scores its pages against a question, and
//! prints the pages worth sending to a language model as grounding context.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::parse::parse_failure;
use cli::{Cli, Commands, OutputFormat};
use commands::dispatch;
use pagesift_core::error::ExitCode as PagesiftExitCode;
use pagesift_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // `Cli.format` is unavailable when parsing fails, so JSON mode is
        // detected from raw argv
        Err(err) => match parse_failure(&err).filter(|_| argv_requests_json()) {
            Some(error) => {
                eprintln!("{}", error.to_json());
                return ExitCode::from(error.exit_code() as u8);
            }
            None => err.exit(),
        },
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {}", e);
    }

    tracing::debug!(
        command = cli.command.as_ref().map_or("none", command_name),
        format = %cli.format,
        elapsed = ?start.elapsed(),
        "parse_args"
    );

    match dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(PagesiftExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Assemble { .. } => "assemble",
        Commands::Keywords { .. } => "keywords",
        Commands::Score { .. } => "score",
        Commands::Select(_) => "select",
        Commands::Stats { .. } => "stats",
        Commands::Prompt { .. } => "prompt",
        Commands::Config => "config",
    }
}

/// Whether raw argv asks for JSON output, in either `--format json` or
/// `--format=json` form
fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
