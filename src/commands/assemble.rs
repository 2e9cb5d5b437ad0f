//! `pagesift assemble` - join per-page text into a marked-up transcript

use std::path::PathBuf;

use crate::cli::input::read_page_text;
use crate::cli::output::print_json;
use crate::cli::{Cli, OutputFormat};
use pagesift_core::error::Result;
use pagesift_core::records::csv_or_dash;
use pagesift_core::transcript::Transcript;
use tracing::debug;

pub fn execute(cli: &Cli, paths: &[PathBuf]) -> Result<()> {
    let texts = paths
        .iter()
        .map(|path| read_page_text(path))
        .collect::<Result<Vec<_>>>()?;

    let failed: Vec<usize> = texts
        .iter()
        .enumerate()
        .filter(|(_, text)| text.is_none())
        .map(|(index, _)| index + 1)
        .collect();

    let transcript = Transcript::from_extracted(texts);
    let rendered = transcript.render();
    debug!(pages = transcript.len(), failed = failed.len(), "assemble");

    match cli.format {
        OutputFormat::Human => println!("{}", rendered),
        OutputFormat::Json => {
            print_json(&serde_json::json!({
                "pages": transcript.len(),
                "failed_pages": failed,
                "transcript": rendered,
            }))?;
        }
        OutputFormat::Records => {
            let failed: Vec<String> = failed.iter().map(|n| n.to_string()).collect();
            println!(
                "H pagesift=1 records=1 mode=assemble pages={} failed={}",
                transcript.len(),
                csv_or_dash(&failed)
            );
            println!("C");
            println!("{}", rendered);
            println!("C-END");
        }
    }

    Ok(())
}
