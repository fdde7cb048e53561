//! # Constants
//!
//! Centralized constants for magic values used throughout boom.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// UI Display
// =============================================================================

/// Maximum width of an item name in list displays (truncated with ellipsis).
pub const SHORT_NAME_MAX_WIDTH: usize = 20;

/// Column width the short name is padded to in list displays.
pub const SHORT_NAME_COLUMN_WIDTH: usize = 20;

/// Marker appended to truncated item names.
pub const ELLIPSIS: &str = "...";

/// Single-character ellipsis, also stripped when matching truncated names.
pub const ELLIPSIS_CHAR: char = '…';

/// Prefix shown in front of success messages.
pub const BOOM_PREFIX: &str = "Boom!";

// =============================================================================
// Commands
// =============================================================================

/// Argument that turns a list or item command into a deletion.
pub const DELETE_KEYWORD: &str = "delete";

/// Answer accepted by the delete confirmation prompt.
pub const CONFIRM_YES: &str = "y";

// =============================================================================
// Storage
// =============================================================================

/// Default data file name (inside the user's home directory).
pub const DEFAULT_DATA_FILE: &str = ".boom";

/// Identifier of the local JSON file backend.
pub const BACKEND_JSON: &str = "json";

/// Identifier of the GitHub gist backend.
pub const BACKEND_GIST: &str = "gist";

/// Identifier of the in-memory backend.
pub const BACKEND_MEMORY: &str = "memory";

/// Default backend for new installs.
pub const DEFAULT_BACKEND: &str = BACKEND_JSON;

/// Default GitHub API endpoint for the gist backend.
pub const GIST_API_URL: &str = "https://api.github.com";

/// Default file name inside the gist holding the data.
pub const GIST_FILENAME: &str = "boom.json";

/// Description set on the gist.
pub const GIST_DESCRIPTION: &str = "Data for boom";

/// User agent sent to the GitHub API.
pub const GIST_USER_AGENT: &str = concat!("boom/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Configuration
// =============================================================================

/// Global configuration directory name (inside `~/.config`).
pub const GLOBAL_CONFIG_DIR: &str = "boom";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";

/// Environment variable selecting the log level.
pub const LOG_ENV_VAR: &str = "BOOM_LOG";
