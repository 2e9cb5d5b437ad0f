//! Transcript and history input

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use pagesift_core::error::{PagesiftError, Result};
use pagesift_core::prompt::ChatMessage;
use tracing::{debug, warn};

use super::TranscriptArgs;

/// Read the transcript from `--transcript` or stdin
pub fn read_transcript(args: &TranscriptArgs) -> Result<String> {
    match &args.transcript {
        Some(path) => read_file(path),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| PagesiftError::io_operation("read", "stdin", e))?;
            debug!(bytes = buf.len(), "read_transcript_stdin");
            Ok(buf)
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(PagesiftError::TranscriptNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = fs::read_to_string(path)
        .map_err(|e| PagesiftError::io_operation("read", path.display(), e))?;
    debug!(path = %path.display(), bytes = text.len(), "read_transcript_file");
    Ok(text)
}

/// Read one page of extracted text; `None` when the file is not valid text
pub fn read_page_text(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Err(PagesiftError::not_found("page file", path.display()));
    }
    let bytes = fs::read(path).map_err(|e| PagesiftError::io_operation("read", path.display(), e))?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(Some(text)),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "page text could not be decoded");
            Ok(None)
        }
    }
}

/// Load prior chat messages from a JSON array file
pub fn read_history(path: &Path) -> Result<Vec<ChatMessage>> {
    if !path.exists() {
        return Err(PagesiftError::not_found("history file", path.display()));
    }
    let text = fs::read_to_string(path)
        .map_err(|e| PagesiftError::io_operation("read", path.display(), e))?;
    Ok(serde_json::from_str(&text)?)
}
