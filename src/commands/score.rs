//! `pagesift score` - per-page keyword scores

use crate::cli::input::read_transcript;
use crate::cli::output::print_json;
use crate::cli::{OutputFormat, TranscriptArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::stats::warn_marker_mismatches;
use pagesift_core::error::Result;
use pagesift_core::records::{csv_or_dash, escape_field};
use pagesift_core::scoring::score_pages;
use pagesift_core::text::extract_keywords;
use pagesift_core::transcript::Transcript;

pub fn execute(ctx: &CommandContext, question: &str, input: &TranscriptArgs) -> Result<()> {
    let cli = ctx.cli;
    let raw = read_transcript(input)?;
    let transcript = Transcript::parse(&raw);
    warn_marker_mismatches(&transcript);

    let keywords = extract_keywords(question);
    let scored = score_pages(&transcript, &keywords);

    match cli.format {
        OutputFormat::Human => {
            if !cli.quiet {
                if keywords.is_empty() {
                    println!("Keywords: (none)");
                } else {
                    println!("Keywords: {}", keywords.join(", "));
                }
            }
            if scored.is_empty() && !cli.quiet {
                println!("No pages in transcript");
            }
            for page in &scored {
                println!(
                    "Page {:>3}  score {:>3}  ({} chars)",
                    page.number,
                    page.score,
                    page.text.chars().count()
                );
            }
        }
        OutputFormat::Json => {
            let pages: Vec<_> = scored
                .iter()
                .map(|page| {
                    serde_json::json!({
                        "page": page.number,
                        "score": page.score,
                        "chars": page.text.chars().count(),
                    })
                })
                .collect();
            print_json(&serde_json::json!({
                "question": question,
                "keywords": keywords,
                "pages": pages,
            }))?;
        }
        OutputFormat::Records => {
            println!(
                "H pagesift=1 records=1 mode=score question=\"{}\" keywords={} pages={}",
                escape_field(question),
                csv_or_dash(&keywords),
                scored.len()
            );
            for page in &scored {
                println!(
                    "P {} score={} chars={}",
                    page.number,
                    page.score,
                    page.text.chars().count()
                );
            }
        }
    }

    Ok(())
}
