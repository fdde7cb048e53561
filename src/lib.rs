//! # boom
//!
//! Text snippets on the command line. Items (name/value pairs, usually URLs) live
//! in named lists; typing an item's name drops its value into the clipboard.
//!
//! ## Features
//!
//! - **Positional grammar**: `boom <list> <item> <value>` and friends, resolved by an
//!   ordered rule table
//! - **Pluggable storage**: local JSON file or a private GitHub gist
//! - **Injected side effects**: clipboard, browser, prompts and editor sit behind
//!   the `Platform` trait
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod commands;
pub mod config;
pub mod constants;
pub mod editor;
pub mod error;
pub mod item;
pub mod list;
pub mod platform;
pub mod storage;
pub mod ui;

pub use commands::{execute, Invocation, Session};
pub use config::{set_home_override, ConfigStore, GlobalConfig};
pub use error::{BoomError, Result};
pub use item::{is_url, Item};
pub use list::List;
pub use platform::{Platform, SystemPlatform};
pub use storage::{Backend, FileBackend, GistBackend, MemoryBackend, Registry, Storage};
pub use ui::Style;
