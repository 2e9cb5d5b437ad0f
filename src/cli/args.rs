use clap::Args;
use std::path::PathBuf;

/// Where to read the transcript from
#[derive(Args, Debug, Clone)]
pub struct TranscriptArgs {
    /// Transcript file with `[Page N]` markers (reads stdin when omitted)
    #[arg(long, short)]
    pub transcript: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct SelectArgs {
    /// The question to select context for
    pub question: String,

    #[command(flatten)]
    pub input: TranscriptArgs,

    /// Maximum context characters (overrides config)
    #[arg(long)]
    pub max_chars: Option<usize>,
}
