//! Command implementations for all pagesift commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use pagesift_core::error::Result;

use super::macros::trace_command;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Assemble { pages } => crate::commands::assemble::execute(ctx.cli, pages),
            Commands::Keywords { question } => crate::commands::keywords::execute(ctx.cli, question),
            Commands::Score { question, input } => {
                crate::commands::score::execute(ctx, question, input)
            }
            Commands::Select(args) => crate::commands::select::execute(ctx, args),
            Commands::Stats {
                input,
                require_text,
            } => crate::commands::stats::execute(ctx.cli, input, *require_text),
            Commands::Prompt {
                select,
                history,
                history_window,
            } => crate::commands::prompt::execute(
                ctx,
                select,
                history.as_deref(),
                *history_window,
            ),
            Commands::Config => crate::commands::config::execute(ctx),
        };

        trace_command!(ctx.cli, ctx.start, "execute_command");
        result
    }
}
