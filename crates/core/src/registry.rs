//! Class registry - one callback registry per entity class
//!
//! Every entity class owns a [`ClassCallbacks`]. The registry creates it on
//! first use and keeps it until [`ClassRegistry::clear`]. Common class
//! listeners observe class events of every class and run before the class's
//! own listeners.
//!
//! # Example
//!
//! ```ignore
//! use ark_core::ClassRegistry;
//! use ark_sdk::{DataList, EntityEvent, Guid};
//!
//! let registry = ClassRegistry::new();
//!
//! registry.add_common_class_listener(|id, class_name, event, _| {
//!     tracing::debug!("{} {} {}", class_name, id, event.as_str());
//! });
//! registry.add_class_listener("Player", |id, _, event, _| {
//!     if event == EntityEvent::DataFinished {
//!         tracing::info!("Player {} ready", id);
//!     }
//! });
//!
//! let _ = registry.dispatch_class_event(
//!     "Player",
//!     &Guid::new(1),
//!     EntityEvent::DataFinished,
//!     &DataList::new(),
//! );
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use parking_lot::RwLock;

use ark_sdk::{ContainerOpType, Data, DataList, EntityEvent, Guid, TableEventData};

use crate::callbacks::{
    finish_dispatch, Category, ClassCallback, ClassCallbacks, DispatchResult,
    DEFAULT_SLOW_DISPATCH,
};
use crate::config::CoreConfig;

/// Callback registries keyed by class name
pub struct ClassRegistry {
    classes: DashMap<String, Arc<ClassCallbacks>>,
    common: RwLock<Vec<ClassCallback>>,
    slow_dispatch: Option<Duration>,
}

impl ClassRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            classes: DashMap::new(),
            common: RwLock::new(Vec::new()),
            slow_dispatch: Some(DEFAULT_SLOW_DISPATCH),
        }
    }

    /// Create an empty registry whose class registries use `config`
    pub fn with_config(config: &CoreConfig) -> Self {
        Self {
            slow_dispatch: config.slow_dispatch_threshold(),
            ..Self::new()
        }
    }

    // ========================================================================
    // Class lookup
    // ========================================================================

    /// Get the callback registry of `class_name`, creating it if needed
    pub fn callbacks(&self, class_name: &str) -> Arc<ClassCallbacks> {
        if let Some(existing) = self.classes.get(class_name) {
            return existing.value().clone();
        }

        self.classes
            .entry(class_name.to_string())
            .or_insert_with(|| {
                tracing::debug!("Creating callback registry for class '{}'", class_name);
                Arc::new(ClassCallbacks::new().with_slow_dispatch_threshold(self.slow_dispatch))
            })
            .value()
            .clone()
    }

    /// Get the callback registry of `class_name` if it exists
    pub fn get(&self, class_name: &str) -> Option<Arc<ClassCallbacks>> {
        self.classes
            .get(class_name)
            .map(|entry| entry.value().clone())
    }

    /// Check if `class_name` has a callback registry
    pub fn contains(&self, class_name: &str) -> bool {
        self.classes.contains_key(class_name)
    }

    /// Number of classes with a callback registry
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Names of all classes with a callback registry, sorted
    pub fn class_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.classes.iter().map(|entry| entry.key().clone()).collect();
        names.sort();
        names
    }

    /// Drop every class registry and common listener
    pub fn clear(&self) {
        let classes = self.classes.len();
        self.classes.clear();
        self.common.write().clear();
        tracing::debug!("Cleared {} class registries", classes);
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Register a listener for class events of every class
    pub fn add_common_class_listener<F>(&self, callback: F)
    where
        F: Fn(&Guid, &str, EntityEvent, &DataList) + Send + Sync + 'static,
    {
        let mut common = self.common.write();
        common.push(Arc::new(callback));
        tracing::trace!("Added common class listener (total: {})", common.len());
    }

    /// Register a class event listener for `class_name`
    pub fn add_class_listener<F>(&self, class_name: &str, callback: F)
    where
        F: Fn(&Guid, &str, EntityEvent, &DataList) + Send + Sync + 'static,
    {
        self.callbacks(class_name).add_class_listener(callback);
    }

    /// Register a property listener for `class_name`
    pub fn add_data_listener<F>(&self, class_name: &str, index: u32, callback: F)
    where
        F: Fn(&Guid, &str, u32, &Data, &Data) + Send + Sync + 'static,
    {
        self.callbacks(class_name).add_data_listener(index, callback);
    }

    /// Register a table listener for `class_name`
    pub fn add_table_listener<F>(&self, class_name: &str, index: u32, callback: F)
    where
        F: Fn(&Guid, &TableEventData, &Data, &Data) + Send + Sync + 'static,
    {
        self.callbacks(class_name).add_table_listener(index, callback);
    }

    /// Register a container listener for `class_name`
    pub fn add_container_listener<F>(&self, class_name: &str, index: u32, callback: F)
    where
        F: Fn(&Guid, u32, ContainerOpType, u32, u32) + Send + Sync + 'static,
    {
        self.callbacks(class_name).add_container_listener(index, callback);
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Fire a class event: common listeners first, then the class's own
    ///
    /// Always returns `Invoked` with the total number of listeners that ran.
    pub fn dispatch_class_event(
        &self,
        class_name: &str,
        id: &Guid,
        event: EntityEvent,
        args: &DataList,
    ) -> DispatchResult {
        let mut listeners = self.common.read().clone();
        if let Some(callbacks) = self.get(class_name) {
            listeners.extend(callbacks.class_listeners());
        }
        let start = Instant::now();

        for callback in &listeners {
            callback(id, class_name, event, args);
        }

        finish_dispatch(self.slow_dispatch, Category::Class, None, listeners.len(), start)
    }

    /// Fire a property change event for `class_name`
    ///
    /// Returns `NoListeners` if the class or the key was never registered.
    pub fn dispatch_data_event(
        &self,
        class_name: &str,
        id: &Guid,
        name: &str,
        index: u32,
        old: &Data,
        new: &Data,
    ) -> DispatchResult {
        match self.get(class_name) {
            Some(callbacks) => callbacks.dispatch_data_event(id, name, index, old, new),
            None => DispatchResult::NoListeners,
        }
    }

    /// Fire a table change event for `class_name`
    ///
    /// Returns `NoListeners` if the class or the table index was never registered.
    pub fn dispatch_table_event(
        &self,
        class_name: &str,
        id: &Guid,
        event: &TableEventData,
        old: &Data,
        new: &Data,
    ) -> DispatchResult {
        match self.get(class_name) {
            Some(callbacks) => callbacks.dispatch_table_event(id, event, old, new),
            None => DispatchResult::NoListeners,
        }
    }

    /// Fire a container slot event for `class_name`
    ///
    /// Returns `NoListeners` if the class or the key was never registered.
    pub fn dispatch_container_event(
        &self,
        class_name: &str,
        id: &Guid,
        index: u32,
        op: ContainerOpType,
        src: u32,
        dest: u32,
    ) -> DispatchResult {
        match self.get(class_name) {
            Some(callbacks) => callbacks.dispatch_container_event(id, index, op, src, dest),
            None => DispatchResult::NoListeners,
        }
    }
}

impl Default for ClassRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ClassRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassRegistry")
            .field("classes", &self.classes.len())
            .field("common_listeners", &self.common.read().len())
            .field("slow_dispatch", &self.slow_dispatch)
            .finish()
    }
}
