//! Output format handling for pagesift
//!
//! - human: the context itself, or a short readable summary
//! - json: stable, machine-readable JSON
//! - records: line-oriented format for prompt injection and scripting

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PagesiftError;

/// Output format for pagesift commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Records output for prompt injection
    Records,
}

impl FromStr for OutputFormat {
    type Err = PagesiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(PagesiftError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}
