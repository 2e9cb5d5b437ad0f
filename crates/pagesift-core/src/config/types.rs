//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Current config format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Default context budget in characters
pub const DEFAULT_MAX_CHARS: usize = 8000;

/// Context budget for grounding prompts, roomier than a bare selection
pub const DEFAULT_PROMPT_MAX_CHARS: usize = 12000;

/// Backfill starts when relevant pages fill less than this share of the budget
pub const DEFAULT_BACKFILL_TRIGGER_RATIO: f64 = 0.7;

/// Backfill stops once this share of the budget is used
pub const DEFAULT_BACKFILL_TARGET_RATIO: f64 = 0.9;

/// Messages of prior conversation carried into a prompt (three exchanges)
pub const DEFAULT_HISTORY_WINDOW: usize = 6;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Config format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Page selection settings
    #[serde(default)]
    pub selector: SelectorConfig,

    /// Prompt assembly settings
    #[serde(default)]
    pub prompt: PromptConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            selector: SelectorConfig::default(),
            prompt: PromptConfig::default(),
        }
    }
}

/// Budget and backfill thresholds for page selection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Maximum context size in characters
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,

    #[serde(default = "default_backfill_trigger_ratio")]
    pub backfill_trigger_ratio: f64,

    #[serde(default = "default_backfill_target_ratio")]
    pub backfill_target_ratio: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            backfill_trigger_ratio: DEFAULT_BACKFILL_TRIGGER_RATIO,
            backfill_target_ratio: DEFAULT_BACKFILL_TARGET_RATIO,
        }
    }
}

impl SelectorConfig {
    /// Default thresholds with a specific budget
    pub fn with_max_chars(max_chars: usize) -> Self {
        Self {
            max_chars,
            ..Self::default()
        }
    }
}

/// Prompt assembly settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Trailing conversation messages included before the new question
    #[serde(default = "default_history_window")]
    pub history_window: usize,

    /// Context budget used when `--max-chars` is not given
    #[serde(default = "default_prompt_max_chars")]
    pub max_chars: usize,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            history_window: DEFAULT_HISTORY_WINDOW,
            max_chars: DEFAULT_PROMPT_MAX_CHARS,
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_max_chars() -> usize {
    DEFAULT_MAX_CHARS
}

fn default_backfill_trigger_ratio() -> f64 {
    DEFAULT_BACKFILL_TRIGGER_RATIO
}

fn default_backfill_target_ratio() -> f64 {
    DEFAULT_BACKFILL_TARGET_RATIO
}

fn default_history_window() -> usize {
    DEFAULT_HISTORY_WINDOW
}

fn default_prompt_max_chars() -> usize {
    DEFAULT_PROMPT_MAX_CHARS
}
