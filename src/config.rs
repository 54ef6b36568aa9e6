//! Application configuration.
//!
//! The configuration is loaded from a JSON file
//! (`$XDG_CONFIG_HOME/cubease/config.json`).  It lets users register their
//! own named curves next to the built-in presets and tune the output of the
//! `table` command.
//!
//! # Example
//!
//! ```json
//! {
//!   "curves": {
//!     "Snappy": [0.2, 0.0, 0.0, 1.0],
//!     "Soft": { "x1": 0.4, "y1": 0.0, "x2": 0.2, "y2": 1.0 },
//!     "Bouncy": "EaseOutBack"
//!   },
//!   "table": { "steps": 20, "precision": 4 }
//! }
//! ```

use crate::bezier::CubicBezier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Top-level configuration.
///
/// Every field is optional: a minimal `{}` file is valid and all sections
/// fall back to their compiled-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// User-defined curves, keyed by name.
    ///
    /// Each value is a `[x1, y1, x2, y2]` array, an `{x1, y1, x2, y2}`
    /// object, or the name of a built-in preset.
    #[serde(default)]
    pub curves: BTreeMap<String, CubicBezier>,

    /// Output settings for the `table` command.
    #[serde(default)]
    pub table: TableConfig,
}

/// Output settings for the `table` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Number of intervals between `x = 0` and `x = 1` (rows minus one).
    pub steps: usize,
    /// Digits printed after the decimal point.
    pub precision: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            steps: 100,
            precision: 6,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e.0)))
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError(e.to_string()))
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);
