//! # Configuration
//!
//! Key/value configuration consumed by backends and the `switch` command. Keys
//! are dotted paths into the config file (e.g. `backend`, `gist.token`).
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod global;

use std::{cell::RefCell, path::PathBuf};

pub use self::global::GlobalConfig;
use crate::error::Result;

/// Config key holding the active backend identifier.
pub const BACKEND_KEY: &str = "backend";

/// Config key holding the editor command.
pub const EDITOR_KEY: &str = "editor";

/// A string key/value store.
pub trait ConfigStore {
    /// Returns the value for `key`, if set
    fn get(&self, key: &str) -> Option<String>;

    /// Sets `key` to `value` and persists the change
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config and data to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// This is used by tests to redirect global config without modifying env vars.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

/// Returns the home directory, honoring the test override.
pub fn home_dir() -> Option<PathBuf> {
    HOME_OVERRIDE
        .with(|cell| cell.borrow().clone())
        .or_else(dirs::home_dir)
}
