//! # List
//!
//! Lists are buckets of items. The relationship is kept on the list side as an
//! ordered vector; insertion order is what gets persisted.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use serde_json::{Map, Value};

use crate::{
    constants::{ELLIPSIS, ELLIPSIS_CHAR},
    error::{BoomError, Result},
    item::Item,
};

/// A named collection of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    name: String,
    items: Vec<Item>,
}

impl List {
    /// Creates an empty list. Fails if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(BoomError::InvalidArgument(
                "list name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            name,
            items: Vec::new(),
        })
    }

    /// Returns the name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the items in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an item.
    ///
    /// Items with the same name are left in place; callers wanting
    /// overwrite semantics delete first.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes every item named `name`. Returns whether anything was removed.
    pub fn delete_item(&mut self, name: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.name() != name);
        self.items.len() != before
    }

    /// Finds an item by name.
    ///
    /// Exact matches win. Otherwise the query and each item's short name are
    /// compared with ellipsis markers removed, so a name copied from a truncated
    /// listing still resolves.
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.items
            .iter()
            .find(|item| item.name() == name)
            .or_else(|| {
                let query = strip_ellipsis(name);
                self.items
                    .iter()
                    .find(|item| strip_ellipsis(&item.short_name()) == query)
            })
    }

    /// Returns the items sorted by name (ascending).
    pub fn items_by_name(&self) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.items.iter().collect();
        items.sort_by(|a, b| a.name().cmp(b.name()));
        items
    }

    /// Moves all items of `other` to the end of this list.
    pub(crate) fn absorb(&mut self, other: Self) {
        self.items.extend(other.items);
    }

    /// Returns the persisted form: `{name: [{item: value}, ...]}`.
    pub fn to_json(&self) -> Value {
        let items = self.items.iter().map(Item::to_json).collect();
        let mut map = Map::with_capacity(1);
        map.insert(self.name.clone(), Value::Array(items));
        Value::Object(map)
    }
}

fn strip_ellipsis(s: &str) -> String {
    s.replace(ELLIPSIS, "").replace(ELLIPSIS_CHAR, "")
}
