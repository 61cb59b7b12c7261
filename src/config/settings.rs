//! User settings for Findual
//!
//! Manages user preferences, currently the business-context (PJ) toggle.
//! Settings live in `config.json` under the base directory and are created
//! with defaults on first use.

use serde::{Deserialize, Serialize};

use super::paths::FindualPaths;
use crate::error::FindualError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings for Findual
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Whether the business (PJ) context is enabled. When disabled the UI
    /// hides PJ features; existing PJ data is kept untouched.
    #[serde(default = "default_pj_enabled")]
    pub pj_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_pj_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            pj_enabled: default_pj_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if absent
    pub fn load_or_create(paths: &FindualPaths) -> Result<Self, FindualError> {
        let file = paths.settings_file();
        if file.exists() {
            read_json(&file)
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FindualPaths) -> Result<(), FindualError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Flip the PJ toggle and persist
    pub fn toggle_pj(&mut self, paths: &FindualPaths) -> Result<bool, FindualError> {
        self.pj_enabled = !self.pj_enabled;
        self.save(paths)?;
        Ok(self.pj_enabled)
    }
}
