//! Class callback registry
//!
//! [`ClassCallbacks`] holds the listeners of one entity class, split into four
//! independent collections:
//!
//! - class events: one global list, not keyed
//! - data events: one list per property index
//! - table events: one list per table index
//! - container events: one list per container index
//!
//! Keyed lists are created on the first registration for their key. Nothing
//! is ever unregistered; every list is released with the registry.
//!
//! # Dispatch
//!
//! The entity system calls one of the `dispatch_*` functions when it performs
//! a change. Every listener for the category (and key) runs synchronously, in
//! registration order, before the call returns. A panicking listener is not
//! caught; the panic reaches the dispatch caller.
//!
//! # Example
//!
//! ```ignore
//! use ark_core::callbacks::{ClassCallbacks, DispatchResult};
//! use ark_sdk::{Data, Guid};
//!
//! let callbacks = ClassCallbacks::new();
//!
//! callbacks.add_data_listener(5, |id, name, _index, old, new| {
//!     tracing::info!("{} changed {} from {} to {}", id, name, old, new);
//! });
//!
//! let result = callbacks.dispatch_data_event(
//!     &Guid::new(1),
//!     "hp",
//!     5,
//!     &Data::Int(10),
//!     &Data::Int(8),
//! );
//! assert_eq!(result, DispatchResult::Invoked(1));
//! ```

mod table;
mod types;

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;

use ark_sdk::{ContainerOpType, Data, DataList, EntityEvent, Guid, TableEventData};

use crate::config::CoreConfig;
use table::KeyedListeners;

pub use types::{
    Category, ClassCallback, ClassListener, ContainerListener, DataListener, DispatchResult,
    TableListener,
};

/// Dispatches slower than this are logged as warnings unless configured otherwise
pub const DEFAULT_SLOW_DISPATCH: Duration = Duration::from_millis(1);

/// Listener registry for one entity class
pub struct ClassCallbacks {
    class_events: RwLock<Vec<ClassCallback>>,
    data: KeyedListeners<DataListener>,
    table: KeyedListeners<TableListener>,
    container: KeyedListeners<ContainerListener>,
    slow_dispatch: Option<Duration>,
}

impl ClassCallbacks {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            class_events: RwLock::new(Vec::new()),
            data: KeyedListeners::new(Category::Data),
            table: KeyedListeners::new(Category::Table),
            container: KeyedListeners::new(Category::Container),
            slow_dispatch: Some(DEFAULT_SLOW_DISPATCH),
        }
    }

    /// Create an empty registry using the slow dispatch threshold from `config`
    pub fn with_config(config: &CoreConfig) -> Self {
        Self::new().with_slow_dispatch_threshold(config.slow_dispatch_threshold())
    }

    /// Set the duration above which a dispatch is logged as slow
    ///
    /// `None` disables the check.
    pub fn with_slow_dispatch_threshold(mut self, threshold: Option<Duration>) -> Self {
        self.slow_dispatch = threshold;
        self
    }

    // === Registration ===

    /// Register a listener for class lifecycle events
    ///
    /// # Arguments
    /// The callback receives (entity, class name, lifecycle stage, arguments).
    pub fn add_class_listener<F>(&self, callback: F)
    where
        F: Fn(&Guid, &str, EntityEvent, &DataList) + Send + Sync + 'static,
    {
        let mut class_events = self.class_events.write();
        class_events.push(Arc::new(callback));
        tracing::trace!(
            category = %Category::Class,
            total = class_events.len(),
            "Added listener"
        );
    }

    /// Register a listener for changes of the property at `index`
    ///
    /// # Arguments
    /// The callback receives (entity, property name, index, old value, new value).
    pub fn add_data_listener<F>(&self, index: u32, callback: F)
    where
        F: Fn(&Guid, &str, u32, &Data, &Data) + Send + Sync + 'static,
    {
        self.data.add(index, Arc::new(callback));
    }

    /// Register a listener for row changes of the table at `index`
    ///
    /// # Arguments
    /// The callback receives (entity, change descriptor, old value, new value).
    pub fn add_table_listener<F>(&self, index: u32, callback: F)
    where
        F: Fn(&Guid, &TableEventData, &Data, &Data) + Send + Sync + 'static,
    {
        self.table.add(index, Arc::new(callback));
    }

    /// Register a listener for slot changes of the container at `index`
    ///
    /// # Arguments
    /// The callback receives (entity, index, operation, source slot, destination slot).
    pub fn add_container_listener<F>(&self, index: u32, callback: F)
    where
        F: Fn(&Guid, u32, ContainerOpType, u32, u32) + Send + Sync + 'static,
    {
        self.container.add(index, Arc::new(callback));
    }

    // === Dispatch ===

    /// Fire a class event
    ///
    /// Always returns `Invoked`, with a count of 0 when no class listener exists.
    pub fn dispatch_class_event(
        &self,
        id: &Guid,
        class_name: &str,
        event: EntityEvent,
        args: &DataList,
    ) -> DispatchResult {
        let listeners = self.class_listeners();
        let start = Instant::now();

        for callback in &listeners {
            callback(id, class_name, event, args);
        }

        self.finish(Category::Class, None, listeners.len(), start)
    }

    /// Fire a property change event for the property at `index`
    ///
    /// Returns `NoListeners` if nothing was registered under `index`.
    pub fn dispatch_data_event(
        &self,
        id: &Guid,
        name: &str,
        index: u32,
        old: &Data,
        new: &Data,
    ) -> DispatchResult {
        let Some(listeners) = self.data.snapshot(index) else {
            return Self::no_listeners(Category::Data, index);
        };
        let start = Instant::now();

        for callback in &listeners {
            callback(id, name, index, old, new);
        }

        self.finish(Category::Data, Some(index), listeners.len(), start)
    }

    /// Fire a table change event, keyed by `event.table_index`
    ///
    /// Returns `NoListeners` if nothing was registered under the table index.
    pub fn dispatch_table_event(
        &self,
        id: &Guid,
        event: &TableEventData,
        old: &Data,
        new: &Data,
    ) -> DispatchResult {
        let index = event.table_index;
        let Some(listeners) = self.table.snapshot(index) else {
            return Self::no_listeners(Category::Table, index);
        };
        let start = Instant::now();

        for callback in &listeners {
            callback(id, event, old, new);
        }

        self.finish(Category::Table, Some(index), listeners.len(), start)
    }

    /// Fire a container slot event for the container at `index`
    ///
    /// Returns `NoListeners` if nothing was registered under `index`.
    pub fn dispatch_container_event(
        &self,
        id: &Guid,
        index: u32,
        op: ContainerOpType,
        src: u32,
        dest: u32,
    ) -> DispatchResult {
        let Some(listeners) = self.container.snapshot(index) else {
            return Self::no_listeners(Category::Container, index);
        };
        let start = Instant::now();

        for callback in &listeners {
            callback(id, index, op, src, dest);
        }

        self.finish(Category::Container, Some(index), listeners.len(), start)
    }

    // === Introspection ===

    /// Number of listeners in `category`
    ///
    /// For keyed categories, `None` counts across all keys. The key is
    /// ignored for class listeners.
    pub fn listener_count(&self, category: Category, key: Option<u32>) -> usize {
        match category {
            Category::Class => self.class_events.read().len(),
            Category::Data => self.data.listener_count(key),
            Category::Table => self.table.listener_count(key),
            Category::Container => self.container.listener_count(key),
        }
    }

    /// Number of keys with a listener list in `category` (0 for class)
    pub fn key_count(&self, category: Category) -> usize {
        match category {
            Category::Class => 0,
            Category::Data => self.data.key_count(),
            Category::Table => self.table.key_count(),
            Category::Container => self.container.key_count(),
        }
    }

    /// Check if a dispatch for `category` and `key` would reach any listener
    pub fn has_listeners(&self, category: Category, key: u32) -> bool {
        match category {
            Category::Class => !self.class_events.read().is_empty(),
            Category::Data => self.data.contains_key(key),
            Category::Table => self.table.contains_key(key),
            Category::Container => self.container.contains_key(key),
        }
    }

    /// Check if no listener of any category is registered
    pub fn is_empty(&self) -> bool {
        self.class_events.read().is_empty()
            && self.data.key_count() == 0
            && self.table.key_count() == 0
            && self.container.key_count() == 0
    }

    /// Clone the class listener list; invoking outside the lock allows re-entry
    pub(crate) fn class_listeners(&self) -> Vec<ClassCallback> {
        self.class_events.read().clone()
    }

    fn no_listeners(category: Category, key: u32) -> DispatchResult {
        tracing::trace!(category = %category, key, "No listeners registered");
        DispatchResult::NoListeners
    }

    fn finish(
        &self,
        category: Category,
        key: Option<u32>,
        count: usize,
        start: Instant,
    ) -> DispatchResult {
        finish_dispatch(self.slow_dispatch, category, key, count, start)
    }
}

/// Log a completed dispatch, warning if it ran longer than `slow_dispatch`
pub(crate) fn finish_dispatch(
    slow_dispatch: Option<Duration>,
    category: Category,
    key: Option<u32>,
    count: usize,
    start: Instant,
) -> DispatchResult {
    debug_assert_eq!(category.is_keyed(), key.is_some());
    let elapsed = start.elapsed();

    if let Some(threshold) = slow_dispatch {
        if elapsed > threshold {
            tracing::warn!(
                category = %category,
                ?key,
                listeners = count,
                "Dispatch took {}us",
                elapsed.as_micros()
            );
        }
    }

    tracing::trace!(category = %category, ?key, listeners = count, "Dispatched");
    DispatchResult::Invoked(count)
}

impl Default for ClassCallbacks {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ClassCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassCallbacks")
            .field("class_listeners", &self.class_events.read().len())
            .field("data_keys", &self.data.key_count())
            .field("table_keys", &self.table.key_count())
            .field("container_keys", &self.container.key_count())
            .field("slow_dispatch", &self.slow_dispatch)
            .finish()
    }
}
