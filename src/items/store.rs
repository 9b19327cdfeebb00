//! Shopping List State Management
//!
//! This module holds the in-memory item collection and the application
//! state shared across request handlers.

use super::models::{Item, ItemPatch};
use std::sync::{Arc, RwLock};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing the item store
pub struct AppState {
    /// In-memory storage for shopping list items
    pub items: ItemStore,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new AppState with an empty item store
    pub fn new() -> Self {
        Self {
            items: ItemStore::new(),
        }
    }
}

// =============================================================================
// Item Store
// =============================================================================

/// Ordered, in-memory collection of items.
///
/// Insertion order is preserved and duplicate names are permitted; every
/// name-keyed operation addresses the first match. Each operation acquires
/// the lock exactly once, so a mutation is a single critical section.
#[derive(Default)]
pub struct ItemStore {
    inner: RwLock<Vec<Item>>,
}

impl ItemStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }

    /// Returns a snapshot of the full ordered sequence of items
    pub fn list(&self) -> Vec<Item> {
        self.inner.read().expect("item store lock poisoned").clone()
    }

    /// Appends an item to the end of the list and returns the stored copy
    pub fn append(&self, item: Item) -> Item {
        let mut items = self.inner.write().expect("item store lock poisoned");
        items.push(item.clone());
        item
    }

    /// Returns the first item whose name matches exactly (case-sensitive)
    pub fn find_by_name(&self, name: &str) -> Option<Item> {
        let items = self.inner.read().expect("item store lock poisoned");
        items.iter().find(|item| item.name == name).cloned()
    }

    /// Shallow-merges a patch into the first item matching `name`,
    /// overwriting the record in place, and returns the merged record.
    pub fn merge_by_name(&self, name: &str, patch: ItemPatch) -> Option<Item> {
        let mut items = self.inner.write().expect("item store lock poisoned");
        let index = items.iter().position(|item| item.name == name)?;
        let merged = items[index].merged_with(patch);
        items[index] = merged.clone();
        Some(merged)
    }

    /// Removes the first item matching `name`, preserving the order of the
    /// remaining items, and returns the removed record.
    pub fn remove_by_name(&self, name: &str) -> Option<Item> {
        let mut items = self.inner.write().expect("item store lock poisoned");
        let index = items.iter().position(|item| item.name == name)?;
        Some(items.remove(index))
    }

    /// Empties the store. Intended for test harnesses; not routed.
    pub fn clear(&self) {
        self.inner.write().expect("item store lock poisoned").clear();
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.inner.read().expect("item store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
