//! Game settings and preferences
//!
//! Read from an optional JSON file; anything missing falls back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::Difficulty;

/// Problems reading a settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("difficulty must be 0, 1 or 2 (got {0})")]
    InvalidDifficulty(u8),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Difficulty slider position (0 = easy, 1 = medium, 2 = hard)
    pub difficulty: u8,
    /// Fixed session seed; random when unset
    pub seed: Option<u64>,
    /// Headless runs stop after this many ticks
    pub max_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: 0,
            seed: None,
            // Ten minutes at 60 Hz
            max_ticks: 36_000,
        }
    }
}

impl Settings {
    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if Difficulty::from_index(self.difficulty).is_none() {
            return Err(SettingsError::InvalidDifficulty(self.difficulty));
        }
        Ok(())
    }

    /// Selected difficulty (easy if out of range)
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::from_index(self.difficulty).unwrap_or_default()
    }
}
