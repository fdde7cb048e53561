//! # Storage
//!
//! The middleman between in-memory changes and how they are persisted. Storage owns
//! every list, answers lookups, and hands the serialized document to a `Backend`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod backend;
pub mod file;
pub mod gist;
pub mod memory;

use std::cmp::Reverse;

use serde_json::{json, Value};
use tracing::{debug, warn};

pub use self::{
    backend::{Backend, Registry},
    file::FileBackend,
    gist::GistBackend,
    memory::MemoryBackend,
};
use crate::{
    error::{BoomError, Result},
    item::Item,
    list::List,
};

/// All lists known to boom, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Storage {
    lists: Vec<List>,
}

impl Storage {
    /// Creates an empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads storage from a backend.
    ///
    /// An empty stream is an empty dataset. Anything else must parse.
    pub fn load(backend: &dyn Backend) -> Result<Self> {
        let bytes = backend.load()?;
        let storage = Self::from_slice(&bytes, backend.name())?;
        debug!(
            backend = backend.name(),
            lists = storage.lists.len(),
            "loaded storage"
        );
        Ok(storage)
    }

    /// Persists storage to a backend in insertion order.
    pub fn save(&self, backend: &dyn Backend) -> Result<()> {
        let json = self.to_json();
        backend.save(json.as_bytes())?;
        debug!(
            backend = backend.name(),
            bytes = json.len(),
            "saved storage"
        );
        Ok(())
    }

    /// Parses the persisted JSON document.
    ///
    /// `source_name` is only used for error messages.
    pub fn from_slice(bytes: &[u8], source_name: &str) -> Result<Self> {
        let corrupt = |message: String| BoomError::CorruptData {
            source_name: source_name.to_string(),
            message,
        };

        let text = std::str::from_utf8(bytes).map_err(|e| corrupt(e.to_string()))?;
        if text.trim().is_empty() {
            return Ok(Self::new());
        }

        let document: Value = serde_json::from_str(text).map_err(|e| corrupt(e.to_string()))?;

        let lists = match document.get("lists") {
            Some(Value::Array(lists)) => lists,
            Some(_) => return Err(corrupt("\"lists\" must be an array".to_string())),
            None => return Err(corrupt("missing \"lists\" key".to_string())),
        };

        let mut storage = Self::new();
        for entry in lists {
            let entry = entry
                .as_object()
                .ok_or_else(|| corrupt("list entries must be objects".to_string()))?;

            for (list_name, items) in entry {
                let mut list = List::new(list_name.as_str()).map_err(|e| corrupt(e.to_string()))?;
                let items = items
                    .as_array()
                    .ok_or_else(|| corrupt(format!("items of \"{list_name}\" must be an array")))?;

                for item in items {
                    let item = item.as_object().ok_or_else(|| {
                        corrupt(format!("items of \"{list_name}\" must be objects"))
                    })?;
                    for (name, value) in item {
                        let value = value.as_str().ok_or_else(|| {
                            corrupt(format!("value of \"{name}\" must be a string"))
                        })?;
                        let item = Item::new(name.as_str(), value).map_err(|e| corrupt(e.to_string()))?;
                        list.add_item(item);
                    }
                }

                storage.insert_list(list);
            }
        }

        Ok(storage)
    }

    /// Serializes every list in insertion order as pretty JSON.
    pub fn to_json(&self) -> String {
        let lists: Vec<Value> = self.lists.iter().map(List::to_json).collect();
        format!("{:#}", json!({ "lists": lists }))
    }

    /// Returns the lists in display order: most items first, ties in insertion order.
    pub fn lists(&self) -> Vec<&List> {
        let mut lists: Vec<&List> = self.lists.iter().collect();
        lists.sort_by_key(|list| Reverse(list.len()));
        lists
    }

    /// Returns the lists in insertion order.
    pub fn lists_in_insertion_order(&self) -> &[List] {
        &self.lists
    }

    /// Finds a list by exact name
    pub fn list(&self, name: &str) -> Option<&List> {
        self.lists.iter().find(|list| list.name() == name)
    }

    /// Finds a list by exact name for mutation
    pub fn list_mut(&mut self, name: &str) -> Option<&mut List> {
        self.lists.iter_mut().find(|list| list.name() == name)
    }

    /// Returns true if a list named `name` exists
    pub fn list_exists(&self, name: &str) -> bool {
        self.list(name).is_some()
    }

    /// Returns every item, in list display order then item insertion order.
    pub fn items(&self) -> Vec<&Item> {
        self.lists()
            .into_iter()
            .flat_map(|list| list.items().iter())
            .collect()
    }

    /// Returns true if any list holds an item named `name`
    pub fn item_exists(&self, name: &str) -> bool {
        self.find_item(name).is_some()
    }

    /// Finds the first item named `name` across all lists (display order).
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.items().into_iter().find(|item| item.name() == name)
    }

    /// Returns the list named `name`, creating it if needed.
    pub fn create_list(&mut self, name: &str) -> Result<&mut List> {
        let index = match self.lists.iter().position(|list| list.name() == name) {
            Some(index) => index,
            None => {
                self.lists.push(List::new(name)?);
                self.lists.len() - 1
            }
        };
        Ok(&mut self.lists[index])
    }

    /// Deletes a list and all of its items. Returns whether it existed.
    pub fn delete_list(&mut self, name: &str) -> bool {
        let before = self.lists.len();
        self.lists.retain(|list| list.name() != name);
        self.lists.len() != before
    }

    /// Deletes every item named `name` from every list.
    ///
    /// Returns the number of lists the item was removed from.
    pub fn delete_item_everywhere(&mut self, name: &str) -> usize {
        self.lists
            .iter_mut()
            .map(|list| list.delete_item(name))
            .filter(|removed| *removed)
            .count()
    }

    /// Adds a list, folding it into an existing list of the same name.
    fn insert_list(&mut self, list: List) {
        if let Some(existing) = self.list_mut(list.name()) {
            warn!(list = list.name(), "duplicate list in data, merging items");
            existing.absorb(list);
        } else {
            self.lists.push(list);
        }
    }
}
