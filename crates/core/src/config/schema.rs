//! Configuration schema definitions

use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub matching: MatchingConfig,
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log event format (`"text"` or `"json"`)
    #[serde(default = "default_format")]
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_format(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Coordinate entry settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InputConfig {
    /// Entry format used without asking (`"decimal"` or `"dms"`); prompt when unset
    #[serde(default)]
    pub default_format: Option<String>,
}

/// Result display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Decimal places shown for distances
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Output format (`"text"` or `"json"`)
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            format: default_format(),
        }
    }
}

fn default_precision() -> usize {
    2
}

fn default_format() -> String {
    "text".to_string()
}

/// Matcher tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Source-set size at which matching switches to the parallel path
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

fn default_parallel_threshold() -> usize {
    64
}
