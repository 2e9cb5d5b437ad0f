//! Error types and exit codes for pagesift
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid configuration values)
//! - 3: Data error (missing transcript, no extractable text)
//!
//! Selection itself never fails; these errors cover the I/O and configuration
//! around it.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the pagesift binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or unusable transcript (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur around a selection run
#[derive(Error, Debug)]
pub enum PagesiftError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("transcript not found: {path:?}")]
    TranscriptNotFound { path: PathBuf },

    #[error("no meaningful text: extracted {chars} characters (minimum {minimum}); the document may be scanned, encrypted, or contain only images")]
    NoMeaningfulText { chars: usize, minimum: usize },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl PagesiftError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        PagesiftError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PagesiftError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        PagesiftError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PagesiftError::UnknownFormat(_)
            | PagesiftError::DuplicateFormat
            | PagesiftError::UsageError(_)
            | PagesiftError::InvalidValue { .. } => ExitCode::Usage,

            PagesiftError::TranscriptNotFound { .. }
            | PagesiftError::NoMeaningfulText { .. }
            | PagesiftError::NotFound { .. } => ExitCode::Data,

            PagesiftError::Io(_)
            | PagesiftError::Json(_)
            | PagesiftError::Toml(_)
            | PagesiftError::FailedOperationWithTarget { .. }
            | PagesiftError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            PagesiftError::UnknownFormat(_) => "unknown_format",
            PagesiftError::DuplicateFormat => "duplicate_format",
            PagesiftError::UsageError(_) => "usage_error",
            PagesiftError::InvalidValue { .. } => "invalid_value",
            PagesiftError::TranscriptNotFound { .. } => "transcript_not_found",
            PagesiftError::NoMeaningfulText { .. } => "no_meaningful_text",
            PagesiftError::NotFound { .. } => "not_found",
            PagesiftError::Io(_) => "io_error",
            PagesiftError::Json(_) => "json_error",
            PagesiftError::Toml(_) => "toml_error",
            PagesiftError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            PagesiftError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for pagesift operations
pub type Result<T> = std::result::Result<T, PagesiftError>;
