//! # Global Configuration
//!
//! Handles the user configuration stored at `~/.config/boom/config`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{home_dir, ConfigStore, BACKEND_KEY, EDITOR_KEY};
use crate::{
    constants::{DEFAULT_BACKEND, GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILENAME},
    error::{BoomError, Result},
    storage::{file::DATA_FILE_KEY, gist},
};

const HEADER: &str = "\
# boom configuration
#
# backend    Storage backend: \"json\" (local file) or \"gist\"
# editor     Editor command for `boom edit` (falls back to $VISUAL, $EDITOR, vi)
# data_file  Location of the json backend's file (default: ~/.boom)
# [gist]     token, gist_id, filename, api_url for the gist backend
";

/// Gist backend settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GistConfig {
    /// GitHub token with the `gist` scope
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Gist holding the data (created on first use)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gist_id: Option<String>,

    /// File name inside the gist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// API endpoint (GitHub Enterprise)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl GistConfig {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Global configuration stored at ~/.config/boom/config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Active storage backend
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Editor command (e.g., "nvim", "code --wait")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,

    /// Data file for the json backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<String>,

    /// Gist backend settings
    #[serde(default, skip_serializing_if = "GistConfig::is_empty")]
    pub gist: GistConfig,

    /// Where this config is saved to
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            editor: None,
            data_file: None,
            gist: GistConfig::default(),
            path: None,
        }
    }
}

fn default_backend() -> String {
    DEFAULT_BACKEND.to_string()
}

impl GlobalConfig {
    /// Returns the path to the global config file (~/.config/boom/config)
    pub fn path() -> Option<PathBuf> {
        home_dir().map(|home| {
            home.join(".config")
                .join(GLOBAL_CONFIG_DIR)
                .join(GLOBAL_CONFIG_FILENAME)
        })
    }

    /// Loads the global config. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let path = Self::path()
            .ok_or_else(|| BoomError::Config("could not determine home directory".into()))?;
        Self::load_from(&path)
    }

    /// Loads config from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self {
                path: Some(path.to_path_buf()),
                ..Self::default()
            });
        }

        let content = fs::read_to_string(path).map_err(|e| {
            BoomError::Config(format!("failed to read {}: {e}", path.display()))
        })?;

        let mut config: Self = toml::from_str(&content).map_err(|e| {
            BoomError::Config(format!("failed to parse {}: {e}", path.display()))
        })?;
        config.path = Some(path.to_path_buf());

        debug!(path = %path.display(), backend = %config.backend, "loaded config");
        Ok(config)
    }

    /// Writes the config back to where it was loaded from.
    pub fn save(&self) -> Result<()> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| BoomError::Config("config has no file location".into()))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                BoomError::Config(format!("failed to create {}: {e}", parent.display()))
            })?;
        }

        let body = toml::to_string_pretty(self)
            .map_err(|e| BoomError::Config(format!("failed to serialize config: {e}")))?;

        fs::write(path, format!("{HEADER}\n{body}"))
            .map_err(|e| BoomError::Config(format!("failed to write {}: {e}", path.display())))
    }

    fn slot(&mut self, key: &str) -> Option<&mut Option<String>> {
        match key {
            EDITOR_KEY => Some(&mut self.editor),
            DATA_FILE_KEY => Some(&mut self.data_file),
            gist::TOKEN_KEY => Some(&mut self.gist.token),
            gist::GIST_ID_KEY => Some(&mut self.gist.gist_id),
            gist::FILENAME_KEY => Some(&mut self.gist.filename),
            gist::API_URL_KEY => Some(&mut self.gist.api_url),
            _ => None,
        }
    }
}

impl ConfigStore for GlobalConfig {
    fn get(&self, key: &str) -> Option<String> {
        match key {
            BACKEND_KEY => Some(self.backend.clone()),
            EDITOR_KEY => self.editor.clone(),
            DATA_FILE_KEY => self.data_file.clone(),
            gist::TOKEN_KEY => self.gist.token.clone(),
            gist::GIST_ID_KEY => self.gist.gist_id.clone(),
            gist::FILENAME_KEY => self.gist.filename.clone(),
            gist::API_URL_KEY => self.gist.api_url.clone(),
            _ => None,
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if key == BACKEND_KEY {
            self.backend = value.to_string();
        } else {
            let slot = self
                .slot(key)
                .ok_or_else(|| BoomError::Config(format!("unknown config key '{key}'")))?;
            *slot = Some(value.to_string());
        }
        self.save()
    }
}
