//! # Memory Backend
//!
//! Keeps the document in memory. Used for embedding and for exercising the
//! resolver without touching the file system.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::cell::{Cell, RefCell};

use super::Backend;
use crate::{
    constants::BACKEND_MEMORY,
    error::{BoomError, Result},
};

/// In-memory backend that records how often it was saved.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    contents: RefCell<Vec<u8>>,
    saves: Cell<usize>,
    fail_saves: Cell<bool>,
}

impl MemoryBackend {
    /// Creates an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend preloaded with `contents`
    pub fn with_contents(contents: &str) -> Self {
        Self {
            contents: RefCell::new(contents.as_bytes().to_vec()),
            ..Self::default()
        }
    }

    /// Returns the stored document as text
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.contents.borrow()).into_owned()
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// Makes every following save fail with `PersistenceFailure`.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }
}

impl Backend for MemoryBackend {
    fn name(&self) -> &str {
        BACKEND_MEMORY
    }

    fn load(&self) -> Result<Vec<u8>> {
        Ok(self.contents.borrow().clone())
    }

    fn save(&self, bytes: &[u8]) -> Result<()> {
        if self.fail_saves.get() {
            return Err(BoomError::PersistenceFailure {
                backend: BACKEND_MEMORY.to_string(),
                message: "backend is read-only".to_string(),
            });
        }
        *self.contents.borrow_mut() = bytes.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
