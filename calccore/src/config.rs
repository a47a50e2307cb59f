//! Persisted calculator settings.
//!
//! Stored as pretty JSON in the platform config directory. A missing or
//! unreadable file means defaults; it is never an error for the app.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const APP_NAME: &str = "calculator";

/// Highest accepted rounding precision.
pub const MAX_PRECISION: u32 = 8;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SettingsError>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcSettings {
    /// Decimal places kept by square, square root and evaluate.
    pub precision: u32,
    /// Start with a random emoticon instead of `0`.
    pub show_greeting: bool,
}

impl Default for CalcSettings {
    fn default() -> Self {
        Self {
            precision: 2,
            show_greeting: true,
        }
    }
}

impl CalcSettings {
    pub fn config_path() -> PathBuf {
        config_dir(APP_NAME).join("settings.json")
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&contents)?;
        Ok(settings.sanitized())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        let path = Self::config_path();
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable settings");
                Self::default()
            }
        }
    }

    fn sanitized(mut self) -> Self {
        self.precision = self.precision.min(MAX_PRECISION);
        self
    }
}

/// Config directory for the given app name.
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("", "", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
