//! Game settings
//!
//! Stored as JSON next to the score record. Every field has a default, so a
//! partial file only overrides what it names.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::highscores::temp_path_for;
use crate::sim::{Arena, BallServe};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O on {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub arena_width: f32,
    pub arena_height: f32,
    /// Delay between frames handed to the scheduler
    pub frame_delay_ms: u64,
    /// Ball spawn position, velocity, acceleration and radius
    pub serve: BallServe,
    /// High score record location
    pub score_path: PathBuf,
    /// Color RNG seed; random per run when unset
    pub seed: Option<u64>,
    /// Let the demo steering play
    pub autopilot: bool,
    /// Rounds the headless driver plays before exiting
    pub rounds: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            frame_delay_ms: FRAME_DELAY_MS,
            serve: BallServe::default(),
            score_path: PathBuf::from(SCORE_FILE),
            seed: None,
            autopilot: true,
            rounds: 1,
        }
    }
}

impl Settings {
    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// The arena must fit a full-length paddle and hold a real ball
    pub fn validate(&self) -> Result<(), SettingsError> {
        let min_width = 2.0 * PADDLE_HALF_LENGTH;
        if self.arena_width.is_nan() || self.arena_width < min_width {
            return Err(SettingsError::Invalid(format!(
                "arena_width {} is narrower than the paddle ({})",
                self.arena_width, min_width
            )));
        }
        if self.arena_height.is_nan() || self.arena_height <= 0.0 {
            return Err(SettingsError::Invalid(format!(
                "arena_height {} must be positive",
                self.arena_height
            )));
        }
        if self.serve.radius.is_nan() || self.serve.radius <= 0.0 {
            return Err(SettingsError::Invalid(format!(
                "serve.radius {} must be positive",
                self.serve.radius
            )));
        }
        Ok(())
    }

    /// Load settings, falling back to defaults if the file is missing or bad
    pub fn load_from_path(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Using default settings: {}", e);
                Self::default()
            }
        }
    }

    fn try_load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Save settings with a temp-file-then-rename write
    pub fn save_to_path(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        let temp_path = temp_path_for(path);
        let io_err = |source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };

        fs::write(&temp_path, json).map_err(io_err)?;
        fs::rename(&temp_path, path).map_err(io_err)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
