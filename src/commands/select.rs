//! `pagesift select` - budgeted context selection

use crate::cli::input::read_transcript;
use crate::cli::output::print_json;
use crate::cli::{OutputFormat, SelectArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::stats::warn_marker_mismatches;
use pagesift_core::error::Result;
use pagesift_core::records::{csv_or_dash, escape_field};
use pagesift_core::config::SelectorConfig;
use pagesift_core::select::{Selection, Selector};
use pagesift_core::transcript::Transcript;
use tracing::debug;

/// Read the transcript and run the selector with the given settings
pub fn run_selection(args: &SelectArgs, config: SelectorConfig) -> Result<Selection> {
    let raw = read_transcript(&args.input)?;
    let transcript = Transcript::parse(&raw);
    warn_marker_mismatches(&transcript);

    let selector = Selector::new(config);
    debug!(
        max_chars = selector.config().max_chars,
        pages = transcript.len(),
        "run_selection"
    );

    Ok(selector.select_transcript(&args.question, &transcript))
}

pub fn execute(ctx: &CommandContext, args: &SelectArgs) -> Result<()> {
    let cli = ctx.cli;
    let selection = run_selection(args, ctx.selector_config(args.max_chars))?;

    match cli.format {
        OutputFormat::Human => {
            if selection.is_empty() {
                if !cli.quiet {
                    eprintln!(
                        "No pages fit within a budget of {} chars ({} pages in transcript)",
                        selection.budget, selection.total_pages
                    );
                }
                return Ok(());
            }
            println!("{}", selection.content);
        }
        OutputFormat::Json => print_json(&selection)?,
        OutputFormat::Records => output_records(&args.question, &selection),
    }

    Ok(())
}

fn output_records(question: &str, selection: &Selection) {
    println!(
        "H pagesift=1 records=1 mode=select question=\"{}\" keywords={} budget={} used={} pages={} total_pages={}",
        escape_field(question),
        csv_or_dash(&selection.keywords),
        selection.budget,
        selection.used_chars,
        selection.pages.len(),
        selection.total_pages
    );

    for page in &selection.pages {
        println!(
            "P {} reason={} score={} chars={}",
            page.number, page.reason, page.score, page.chars
        );
    }

    if !selection.content.is_empty() {
        println!("C");
        println!("{}", selection.content);
        println!("C-END");
    }
}
