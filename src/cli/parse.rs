use crate::cli::OutputFormat;
use clap::error::ErrorKind;
use pagesift_core::error::PagesiftError;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Map a clap parse failure to the error carried by the JSON envelope.
///
/// `None` for help and version output, which clap prints itself.
pub fn parse_failure(err: &clap::Error) -> Option<PagesiftError> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        // other repeated flags stay generic usage errors
        ErrorKind::ArgumentConflict if err.to_string().contains("--format") => {
            Some(PagesiftError::DuplicateFormat)
        }
        _ => Some(PagesiftError::UsageError(err.to_string())),
    }
}
