//! Keyed listener table
//!
//! Maps a key (property, table or container index) to the ordered list of
//! listeners registered under it. A key's list is created on first
//! registration and lives as long as the table.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::types::Category;

pub(crate) struct KeyedListeners<L: ?Sized> {
    category: Category,
    lists: RwLock<HashMap<u32, Vec<Arc<L>>>>,
}

impl<L: ?Sized> KeyedListeners<L> {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            lists: RwLock::new(HashMap::new()),
        }
    }

    /// Append a listener under `key`, creating the key's list if needed
    pub fn add(&self, key: u32, listener: Arc<L>) {
        let mut lists = self.lists.write();

        let list = lists.entry(key).or_insert_with(|| {
            tracing::debug!(category = %self.category, key, "Creating listener list");
            Vec::new()
        });
        list.push(listener);

        tracing::trace!(
            category = %self.category,
            key,
            total = list.len(),
            "Added listener"
        );
    }

    /// Clone the listener list for `key`
    ///
    /// Returns `None` if nothing was ever registered under `key`. The read
    /// lock is released before the caller invokes anything, so listeners may
    /// re-enter the table.
    pub fn snapshot(&self, key: u32) -> Option<Vec<Arc<L>>> {
        self.lists.read().get(&key).cloned()
    }

    pub fn contains_key(&self, key: u32) -> bool {
        self.lists.read().contains_key(&key)
    }

    /// Number of listeners under `key`, or under all keys for `None`
    pub fn listener_count(&self, key: Option<u32>) -> usize {
        let lists = self.lists.read();
        match key {
            Some(key) => lists.get(&key).map_or(0, Vec::len),
            None => lists.values().map(Vec::len).sum(),
        }
    }

    /// Number of keys with a listener list
    pub fn key_count(&self) -> usize {
        self.lists.read().len()
    }
}
