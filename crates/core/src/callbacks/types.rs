//! Callback system types

use std::fmt;
use std::sync::Arc;

use ark_sdk::{ContainerOpType, Data, DataList, EntityEvent, Guid, TableEventData};

/// The four listener categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Whole-class lifecycle events (not keyed)
    Class,
    /// Property changes, keyed by property index
    Data,
    /// Table row changes, keyed by table index
    Table,
    /// Container slot changes, keyed by container index
    Container,
}

impl Category {
    /// Check if listeners of this category are registered under a key
    pub const fn is_keyed(&self) -> bool {
        !matches!(self, Self::Class)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Data => "data",
            Self::Table => "table",
            Self::Container => "container",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a dispatch
///
/// Keyed categories report [`DispatchResult::NoListeners`] for a key that was
/// never registered. Class dispatch always reports `Invoked`, even when no
/// class listener exists.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DispatchResult {
    /// This many listeners ran to completion
    Invoked(usize),
    /// No listener list exists for the key
    NoListeners,
}

impl DispatchResult {
    /// `true` unless the key had no listener list
    pub fn is_invoked(&self) -> bool {
        matches!(self, Self::Invoked(_))
    }

    /// Number of listeners that ran
    pub fn count(&self) -> usize {
        match self {
            Self::Invoked(n) => *n,
            Self::NoListeners => 0,
        }
    }
}

/// Class event listener
///
/// # Arguments
/// * `id` - Entity the event is about
/// * `class_name` - Entity class name
/// * `event` - Lifecycle stage
/// * `args` - Event arguments
pub type ClassListener = dyn Fn(&Guid, &str, EntityEvent, &DataList) + Send + Sync;

/// Property change listener
///
/// # Arguments
/// * `id` - Entity whose property changed
/// * `name` - Property name
/// * `index` - Property index (the subscription key)
/// * `old` / `new` - Value before and after the change
pub type DataListener = dyn Fn(&Guid, &str, u32, &Data, &Data) + Send + Sync;

/// Table row listener
///
/// # Arguments
/// * `id` - Entity owning the table
/// * `event` - Change descriptor (`event.table_index` is the subscription key)
/// * `old` / `new` - Cell value before and after the change
pub type TableListener = dyn Fn(&Guid, &TableEventData, &Data, &Data) + Send + Sync;

/// Container slot listener
///
/// # Arguments
/// * `id` - Entity owning the container
/// * `index` - Container index (the subscription key)
/// * `op` - Slot operation
/// * `src` / `dest` - Source and destination slots
pub type ContainerListener = dyn Fn(&Guid, u32, ContainerOpType, u32, u32) + Send + Sync;

/// Registered class listener
pub type ClassCallback = Arc<ClassListener>;
