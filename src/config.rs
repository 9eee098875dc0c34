// SPDX-License-Identifier: GPL-3.0-only

//! User configuration, persisted as JSON in the platform config directory

use crate::constants::{APP_NAME, DEFAULT_OBJECT_PREFIX};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Endpoint the finished photo is uploaded to (empty = not configured)
    pub upload_url: String,
    /// Photo library directory (default: the platform pictures directory)
    pub library_dir: Option<PathBuf>,
    /// Prefix for uploaded object names
    pub object_name_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upload_url: String::new(),
            library_dir: None,
            object_name_prefix: DEFAULT_OBJECT_PREFIX.to_string(),
        }
    }
}

impl Config {
    /// Path of the config file, if a config directory exists
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.json"))
    }

    /// Load the config, falling back to defaults when the file is missing
    /// or unreadable
    pub fn load() -> Self {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load the config from an explicit file
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "Invalid config, using defaults");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Write the config back to its default location
    pub fn save(&self) -> AppResult<()> {
        let path =
            Self::path().ok_or_else(|| AppError::Config("No config directory".to_string()))?;
        self.save_to(&path)
    }

    /// Write the config to an explicit file, creating parent directories
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::Config(format!("{}: {}", parent.display(), e)))?;
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Config(e.to_string()))?;
        std::fs::write(path, contents)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    /// The library directory to pick photos from
    pub fn resolve_library_dir(&self) -> PathBuf {
        self.library_dir
            .clone()
            .or_else(dirs::picture_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
