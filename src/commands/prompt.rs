//! `pagesift prompt` - chat messages grounded in the selected pages

use std::path::Path;

use crate::cli::input::read_history;
use crate::cli::output::print_json;
use crate::cli::{OutputFormat, SelectArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::select::run_selection;
use pagesift_core::error::Result;
use pagesift_core::prompt::{ChatRole, PromptBuilder};

pub fn execute(
    ctx: &CommandContext,
    args: &SelectArgs,
    history: Option<&Path>,
    history_window: Option<usize>,
) -> Result<()> {
    let cli = ctx.cli;
    let history = match history {
        Some(path) => read_history(path)?,
        None => Vec::new(),
    };

    let selection = run_selection(args, ctx.prompt_selector_config(args.max_chars))?;

    let mut prompt_config = ctx.config.prompt;
    if let Some(window) = history_window {
        prompt_config.history_window = window;
    }
    let messages = PromptBuilder::from(prompt_config).build(&args.question, &selection.content, &history);

    match cli.format {
        OutputFormat::Json => print_json(&messages)?,
        OutputFormat::Human => {
            for (i, message) in messages.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("== {} ==", role_label(message.role));
                println!("{}", message.content);
            }
        }
        OutputFormat::Records => {
            println!(
                "H pagesift=1 records=1 mode=prompt messages={} context_pages={} context_chars={}",
                messages.len(),
                selection.pages.len(),
                selection.content.chars().count()
            );
            for message in &messages {
                println!("M {}", role_label(message.role));
                println!("{}", message.content);
                println!("M-END");
            }
        }
    }

    Ok(())
}

fn role_label(role: ChatRole) -> &'static str {
    match role {
        ChatRole::System => "system",
        ChatRole::User => "user",
        ChatRole::Assistant => "assistant",
    }
}
