//! # Backends
//!
//! Byte-level persistence behind `Storage`, plus the registry that maps backend
//! identifiers (as stored in the config) to constructors.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::Path;

use tracing::debug;

use super::{file::FileBackend, gist::GistBackend};
use crate::{
    config::ConfigStore,
    constants::{BACKEND_GIST, BACKEND_JSON},
    error::{BoomError, Result},
};

/// A place the serialized storage document lives.
pub trait Backend {
    /// Identifier of this backend, as used by `boom switch`.
    fn name(&self) -> &str;

    /// Returns the stored document. Missing data is an empty vector, not an error.
    fn load(&self) -> Result<Vec<u8>>;

    /// Replaces the stored document.
    fn save(&self, bytes: &[u8]) -> Result<()>;

    /// Local file backing this backend, if any (used by `boom edit`).
    fn location(&self) -> Option<&Path> {
        None
    }

    /// Config entries the backend learned since the last call (e.g. a newly
    /// created gist id). The caller writes them back to the config.
    fn take_settings(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// Builds a backend from configuration.
pub type Constructor = fn(&mut dyn ConfigStore) -> Result<Box<dyn Backend>>;

/// Maps backend identifiers to constructors.
pub struct Registry {
    entries: Vec<(&'static str, Constructor)>,
}

impl Registry {
    /// Creates an empty registry
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers a constructor under `name`, replacing any previous entry.
    pub fn register(&mut self, name: &'static str, constructor: Constructor) {
        self.entries.retain(|(existing, _)| *existing != name);
        self.entries.push((name, constructor));
    }

    /// Returns the canonical identifier for `name` (case-insensitive).
    pub fn resolve(&self, name: &str) -> Result<&'static str> {
        self.entries
            .iter()
            .map(|(id, _)| *id)
            .find(|id| id.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| BoomError::BackendNotFound(name.to_string()))
    }

    /// Returns true if `name` resolves to a registered backend
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_ok()
    }

    /// Returns all registered identifiers in registration order
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(id, _)| *id).collect()
    }

    /// Constructs the backend registered under `name`.
    pub fn open(&self, name: &str, config: &mut dyn ConfigStore) -> Result<Box<dyn Backend>> {
        let id = self.resolve(name)?;
        let constructor = self
            .entries
            .iter()
            .find(|(existing, _)| *existing == id)
            .map(|(_, constructor)| *constructor)
            .ok_or_else(|| BoomError::BackendNotFound(name.to_string()))?;

        debug!(backend = id, "opening backend");
        constructor(config)
    }
}

impl Default for Registry {
    /// The built-in backends: local JSON file and GitHub gist.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(BACKEND_JSON, FileBackend::from_config);
        registry.register(BACKEND_GIST, GistBackend::from_config);
        registry
    }
}
