//! # UI Utilities
//!
//! Message and table formatting shared by the commands.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use owo_colors::OwoColorize;

use crate::{constants::BOOM_PREFIX, item::Item};

/// Output styling switch. Colors are only emitted when enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
}

impl Style {
    /// Plain output, no escape codes
    pub const fn plain() -> Self {
        Self { color: false }
    }

    /// Colored output
    pub const fn colored() -> Self {
        Self { color: true }
    }

    /// Prefixes a success message with `Boom!`.
    pub fn boom(self, message: &str) -> String {
        if self.color {
            format!("{} {message}", BOOM_PREFIX.magenta())
        } else {
            format!("{BOOM_PREFIX} {message}")
        }
    }

    /// Formats a list heading
    pub fn list_name(self, name: &str) -> String {
        if self.color {
            name.bold().to_string()
        } else {
            name.to_string()
        }
    }

    /// Formats an item as a table row: `    short:<spacer> value`.
    pub fn item_row(self, item: &Item) -> String {
        let short = item.short_name();
        let short = if self.color {
            short.yellow().to_string()
        } else {
            short
        };
        format!("    {short}:{} {}", item.spacer(), item.value())
    }
}
