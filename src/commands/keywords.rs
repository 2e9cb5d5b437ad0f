//! `pagesift keywords` - show extracted search terms

use crate::cli::output::print_json;
use crate::cli::{Cli, OutputFormat};
use pagesift_core::error::Result;
use pagesift_core::records::{csv_or_dash, escape_field};
use pagesift_core::text::extract_keywords;

pub fn execute(cli: &Cli, question: &str) -> Result<()> {
    let keywords = extract_keywords(question);

    match cli.format {
        OutputFormat::Human => {
            if keywords.is_empty() {
                if !cli.quiet {
                    println!("No keywords extracted from '{}'", question);
                }
                return Ok(());
            }
            for keyword in &keywords {
                println!("{}", keyword);
            }
        }
        OutputFormat::Json => {
            print_json(&serde_json::json!({
                "question": question,
                "keywords": keywords,
            }))?;
        }
        OutputFormat::Records => {
            println!(
                "H pagesift=1 records=1 mode=keywords question=\"{}\" count={} keywords={}",
                escape_field(question),
                keywords.len(),
                csv_or_dash(&keywords)
            );
        }
    }

    Ok(())
}
