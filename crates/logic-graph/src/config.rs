//! Editor configuration
//!
//! Stored as JSON. Missing fields fall back to [`defaults`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{defaults, limits};
use crate::error::{LogicGraphError, Result};

/// Configuration for graph editing sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Maximum number of undo snapshots to keep
    pub max_undo_snapshots: usize,
    /// zstd level for undo snapshots (1-22)
    pub undo_compression_level: i32,
    /// Also write rejected edits to the `log` facade
    pub log_diagnostics: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_undo_snapshots: defaults::MAX_UNDO_SNAPSHOTS,
            undo_compression_level: defaults::UNDO_COMPRESSION_LEVEL,
            log_diagnostics: defaults::LOG_DIAGNOSTICS,
        }
    }
}

impl EditorConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        log::debug!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Load configuration, falling back to defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No editor config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Save configuration as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.max_undo_snapshots == 0 {
            return Err(LogicGraphError::config("maxUndoSnapshots must be at least 1"));
        }
        if !(1..=limits::MAX_COMPRESSION_LEVEL).contains(&self.undo_compression_level) {
            return Err(LogicGraphError::config(format!(
                "undoCompressionLevel must be between 1 and {}",
                limits::MAX_COMPRESSION_LEVEL
            )));
        }
        Ok(())
    }
}
