//! # Errors
//!
//! Error taxonomy shared by the data model, storage backends and the command resolver.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use thiserror::Error;

/// Errors produced by boom.
///
/// `NotFound`, `InvalidArgument` and `BackendNotFound` are resolution-level: the
/// command resolver turns them into a printed message. Everything else aborts the
/// command before any success message is shown.
#[derive(Debug, Error)]
pub enum BoomError {
    /// Malformed item or list construction (e.g. an empty name).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An item or list name did not resolve.
    #[error("{0}")]
    NotFound(String),

    /// Persisted data exists but cannot be parsed.
    #[error("corrupt data in {source_name}: {message}")]
    CorruptData {
        source_name: String,
        message: String,
    },

    /// No backend is registered under the requested identifier.
    #[error("no storage backend named '{0}'")]
    BackendNotFound(String),

    /// Writing to the backend failed. In-memory state is not rolled back.
    #[error("failed to save to {backend}: {message}")]
    PersistenceFailure { backend: String, message: String },

    /// Reading from the backend failed (I/O or network, not parsing).
    #[error("failed to load from {backend}: {message}")]
    LoadFailure { backend: String, message: String },

    /// Configuration could not be read, parsed or written.
    #[error("configuration error: {0}")]
    Config(String),

    /// A platform capability (clipboard, browser, editor) failed.
    #[error("{0}")]
    Platform(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl BoomError {
    /// Returns true for errors the resolver reports as text instead of propagating.
    pub const fn is_resolution(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_) | Self::NotFound(_) | Self::BackendNotFound(_)
        )
    }
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, BoomError>;
