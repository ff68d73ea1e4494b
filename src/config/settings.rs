//! User settings for balance-cli
//!
//! Manages user preferences for output formatting.

use serde::{Deserialize, Serialize};

use super::paths::BalancePaths;
use crate::error::BalanceError;
use crate::storage::{read_json_required, write_json_atomic};

/// User settings for balance-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default currency symbol for terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Whether JSON output is pretty-printed by default
    #[serde(default)]
    pub pretty_output: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            pretty_output: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if absent
    pub fn load_or_create(paths: &BalancePaths) -> Result<Self, BalanceError> {
        let settings_file = paths.settings_file();

        if settings_file.exists() {
            read_json_required(&settings_file)
        } else {
            let settings = Self::default();
            paths.ensure_directories()?;
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BalancePaths) -> Result<(), BalanceError> {
        write_json_atomic(paths.settings_file(), self, true)
    }
}
