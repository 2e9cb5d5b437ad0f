//! Structured logging setup
//!
//! Events go to stderr so that stdout stays clean for context output that is
//! piped into other tools.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "score_pages");
/// // Or with additional fields:
/// trace_time!(start, "score_pages", pages = scored.len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (true, None) => "pagesift=debug,pagesift_core=debug",
        (false, None) => "pagesift=warn,pagesift_core=warn",
        (_, Some(level)) => return init_with_level(level, log_json),
    };

    init_with_level(level, log_json)
}

/// Expand a bare level (`debug`) into directives for both crates.
/// Full directives (`pagesift_core=trace`) pass through untouched.
fn directives_for(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("pagesift={level},pagesift_core={level}")
    }
}

fn init_with_level(level: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG wins, then PAGESIFT_LOG, then the flag-derived level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("PAGESIFT_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(directives_for(level)));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
