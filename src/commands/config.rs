//! `pagesift config` - show the effective configuration

use crate::cli::output::print_json;
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use pagesift_core::error::Result;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let cli = ctx.cli;

    match cli.format {
        OutputFormat::Human => {
            if !cli.quiet {
                println!("# source: {}", ctx.config_source);
            }
            print!("{}", ctx.config.to_toml()?);
        }
        OutputFormat::Json => {
            print_json(&serde_json::json!({
                "source": ctx.config_source.to_string(),
                "config": ctx.config,
            }))?;
        }
        OutputFormat::Records => {
            let selector = &ctx.config.selector;
            println!(
                "H pagesift=1 records=1 mode=config source=\"{}\" max_chars={} backfill_trigger_ratio={} backfill_target_ratio={} history_window={} prompt_max_chars={}",
                ctx.config_source,
                selector.max_chars,
                selector.backfill_trigger_ratio,
                selector.backfill_target_ratio,
                ctx.config.prompt.history_window,
                ctx.config.prompt.max_chars
            );
        }
    }

    Ok(())
}
