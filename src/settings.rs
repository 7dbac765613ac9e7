//! Game settings
//!
//! Loaded once at startup from an optional JSON file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::DEFAULT_VIEWPORT;
use crate::tuning::Tuning;

/// Environment variable naming a settings file (native only)
pub const SETTINGS_ENV: &str = "DIAMOND_CHASE_SETTINGS";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Viewport width in pixels (for cursor to world conversion)
    pub viewport_width: f32,
    /// Viewport height in pixels
    pub viewport_height: f32,
    /// Show the score overlay
    pub show_hud: bool,
    /// Simulation tuning
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT.0,
            viewport_height: DEFAULT_VIEWPORT.1,
            show_hud: true,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from the file named by `DIAMOND_CHASE_SETTINGS`, if set
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, SettingsError> {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self, SettingsError> {
        Ok(Self::default())
    }
}
