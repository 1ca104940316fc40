// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Configuration persistence (save/load).

use crate::config::SoundSettings;
use crate::state::SavedState;
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    NoConfigDir,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Manages settings and dialog-state file persistence.
pub struct ConfigManager {
    config_dir: PathBuf,
    state_dir: PathBuf,
}

impl ConfigManager {
    /// Create a new config manager, initializing directories.
    pub fn new() -> Result<Self, ConfigError> {
        let project_dirs = ProjectDirs::from("", "", "voldial").ok_or(ConfigError::NoConfigDir)?;

        let config_dir = project_dirs.config_dir().to_path_buf();

        // State dir for transient data (the cross-teardown dialog blob)
        let state_dir = project_dirs
            .state_dir()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| config_dir.join("state"));

        Self::with_dirs(config_dir, state_dir)
    }

    /// Create a config manager rooted at explicit directories.
    pub fn with_dirs(config_dir: PathBuf, state_dir: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&config_dir)?;
        fs::create_dir_all(&state_dir)?;
        Ok(Self {
            config_dir,
            state_dir,
        })
    }

    /// Get the path to the settings file.
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join("settings.toml")
    }

    /// Load the sound settings, defaulting when the file does not exist.
    pub fn load_settings(&self) -> Result<SoundSettings, ConfigError> {
        let path = self.settings_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Ok(SoundSettings::from_toml(&content)?)
        } else {
            Ok(SoundSettings::default())
        }
    }

    /// Save the sound settings.
    pub fn save_settings(&self, settings: &SoundSettings) -> Result<(), ConfigError> {
        let content = settings.to_toml()?;
        fs::write(self.settings_path(), content)?;
        Ok(())
    }

    /// Path to the cross-teardown dialog state blob.
    pub fn dialog_state_path(&self) -> PathBuf {
        self.state_dir.join("dialog_state.json")
    }

    /// Save the dialog state blob for a later recreate.
    pub fn save_dialog_state(&self, state: &SavedState) -> Result<(), ConfigError> {
        let content = serde_json::to_string(state)?;
        fs::write(self.dialog_state_path(), content)?;
        Ok(())
    }

    /// Load the dialog state blob from a previous teardown, if any.
    pub fn load_dialog_state(&self) -> Result<Option<SavedState>, ConfigError> {
        let path = self.dialog_state_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Ok(Some(serde_json::from_str(&content)?))
        } else {
            Ok(None)
        }
    }

    /// Clear the dialog state blob once it has been consumed.
    pub fn clear_dialog_state(&self) -> Result<(), ConfigError> {
        let path = self.dialog_state_path();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
