//! # File Backend
//!
//! Stores the JSON document in a local file, `~/.boom` by default. Writes go to a
//! sibling temp file that is renamed over the target, so a failed save leaves the
//! previous file intact.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::Builder;
use tracing::debug;

use super::Backend;
use crate::{
    config::{self, ConfigStore},
    constants::{BACKEND_JSON, DEFAULT_DATA_FILE},
    error::{BoomError, Result},
};

/// Config key overriding the data file location.
pub const DATA_FILE_KEY: &str = "data_file";

/// Local JSON file backend.
///
/// There is no locking: two processes saving at once means the last writer wins.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Creates a backend for the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates the backend from the `data_file` config key, or `~/.boom`.
    pub fn from_config(config: &mut dyn ConfigStore) -> Result<Box<dyn Backend>> {
        let path = match config.get(DATA_FILE_KEY) {
            Some(path) => PathBuf::from(path),
            None => config::home_dir()
                .ok_or_else(|| BoomError::Config("could not determine home directory".into()))?
                .join(DEFAULT_DATA_FILE),
        };
        Ok(Box::new(Self::new(path)))
    }

    /// Returns the file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Backend for FileBackend {
    fn name(&self) -> &str {
        BACKEND_JSON
    }

    fn load(&self) -> Result<Vec<u8>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "data file missing, starting empty");
                Ok(Vec::new())
            }
            Err(e) => Err(BoomError::LoadFailure {
                backend: BACKEND_JSON.to_string(),
                message: format!("{}: {e}", self.path.display()),
            }),
        }
    }

    fn save(&self, bytes: &[u8]) -> Result<()> {
        let failure = |e: io::Error| BoomError::PersistenceFailure {
            backend: BACKEND_JSON.to_string(),
            message: format!("{}: {e}", self.path.display()),
        };

        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(failure)?;

        // Dropping an unpersisted temp file deletes it
        let mut temp = Builder::new()
            .prefix(".boom-")
            .suffix(".tmp")
            .tempfile_in(parent)
            .map_err(failure)?;
        temp.write_all(bytes).map_err(failure)?;
        temp.as_file().sync_all().map_err(failure)?;
        temp.persist(&self.path).map_err(|e| failure(e.error))?;
        Ok(())
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.path)
    }
}
