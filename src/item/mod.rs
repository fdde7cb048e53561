//! # Item
//!
//! The base unit in boom: a name and a value. An item does not know which list it
//! belongs to; the owning `List` keeps track of its items.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod url;

use serde_json::{Map, Value};
use unicode_width::UnicodeWidthStr;

pub use self::url::{extract_url, is_url};
use crate::{
    constants::{ELLIPSIS, SHORT_NAME_COLUMN_WIDTH, SHORT_NAME_MAX_WIDTH},
    error::{BoomError, Result},
};

/// A named value, usually a URL or a text snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    value: String,
}

impl Item {
    /// Creates a new item. Fails if `name` is empty.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(BoomError::InvalidArgument(
                "item name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            name,
            value: value.into(),
        })
    }

    /// Returns the name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the name truncated to the default display width.
    pub fn short_name(&self) -> String {
        self.short_name_with(SHORT_NAME_MAX_WIDTH)
    }

    /// Returns the name truncated to `max_width` characters.
    ///
    /// Names that fit are returned unchanged. Longer names keep their first
    /// `max_width - 3` characters followed by `...`, so the result never exceeds
    /// `max_width` characters and truncating it again is a no-op.
    pub fn short_name_with(&self, max_width: usize) -> String {
        if self.name.chars().count() <= max_width {
            return self.name.clone();
        }

        let Some(keep) = max_width.checked_sub(ELLIPSIS.len()) else {
            return self.name.chars().take(max_width).collect();
        };

        let mut short: String = self.name.chars().take(keep).collect();
        short.push_str(ELLIPSIS);
        short
    }

    /// Returns the padding that aligns `short_name` to the default column width.
    pub fn spacer(&self) -> String {
        self.spacer_with(SHORT_NAME_COLUMN_WIDTH)
    }

    /// Returns the padding that aligns `short_name` to `column_width`.
    pub fn spacer_with(&self, column_width: usize) -> String {
        let width = self.short_name().width();
        " ".repeat(column_width.saturating_sub(width))
    }

    /// Returns the first URL embedded in the value, or the whole value.
    pub fn url(&self) -> &str {
        extract_url(&self.value).unwrap_or(&self.value)
    }

    /// Returns the persisted form: a single-entry `{name: value}` object.
    pub fn to_json(&self) -> Value {
        let mut map = Map::with_capacity(1);
        map.insert(self.name.clone(), Value::String(self.value.clone()));
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn github() -> Item {
        Item::new("github", "https://github.com").unwrap()
    }

    #[test]
    fn test_new_rejects_empty_name() {
        let err = Item::new("", "value").unwrap_err();
        assert!(matches!(err, BoomError::InvalidArgument(_)));
    }

    #[test]
    fn test_empty_value_is_allowed() {
        let item = Item::new("blank", "").unwrap();
        assert_eq!(item.value(), "");
    }

    #[test]
    fn test_short_name_unchanged() {
        assert_eq!(github().short_name(), "github");
    }

    #[test]
    fn test_short_name_truncated() {
        let item = Item::new("github github github lol lol lol", "x").unwrap();
        assert_eq!(item.short_name(), "github github git...");
        assert_eq!(item.short_name().chars().count(), SHORT_NAME_MAX_WIDTH);
    }

    #[test]
    fn test_short_name_exact_width() {
        let item = Item::new("a".repeat(20), "x").unwrap();
        assert_eq!(item.short_name(), "a".repeat(20));
    }

    #[test]
    fn test_short_name_idempotent() {
        let item = Item::new("a very long item name indeed", "x").unwrap();
        let once = item.short_name_with(12);
        let again = Item::new(once.clone(), "x").unwrap().short_name_with(12);
        assert_eq!(once, again);
        assert_eq!(once, "a very lo...");
    }

    #[test]
    fn test_short_name_tiny_width() {
        let item = Item::new("github", "x").unwrap();
        assert_eq!(item.short_name_with(2), "gi");
        assert_eq!(item.short_name_with(3), "...");
    }

    #[test]
    fn test_short_name_counts_characters() {
        let item = Item::new("ü".repeat(25), "x").unwrap();
        let short = item.short_name();
        assert_eq!(short.chars().count(), 20);
        assert!(short.ends_with("..."));
    }

    #[test]
    fn test_spacer_none() {
        let item = Item::new("github github github lol lol lol", "x").unwrap();
        assert_eq!(item.spacer(), "");
    }

    #[test]
    fn test_spacer_pads_to_column() {
        assert_eq!(github().spacer(), " ".repeat(14));
        assert_eq!(github().spacer_with(10), " ".repeat(4));
        assert_eq!(github().spacer_with(3), "");
    }

    #[test]
    fn test_to_json() {
        let json = github().to_json();
        let map = json.as_object().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["github"], "https://github.com");
    }

    #[test]
    fn test_url() {
        assert_eq!(github().url(), "https://github.com");
    }

    #[test]
    fn test_url_with_additional_description() {
        let item = Item::new("github", "social coding https://github.com").unwrap();
        assert_eq!(item.url(), "https://github.com");
    }

    #[test]
    fn test_url_without_url() {
        let item = Item::new("didum", "dadam lol omg").unwrap();
        assert_eq!(item.url(), "dadam lol omg");
    }
}
