//! ark core - Entity Callback Registry
//!
//! This crate lets modules subscribe to entity lifecycle notifications and
//! fans those notifications out synchronously when the entity system reports
//! a change.
//!
//! # Modules
//!
//! - [`callbacks`] - Per-class listener registry (class, data, table, container events)
//! - [`registry`] - Class name to registry mapping with common class listeners
//! - [`error`] - Categorized error codes
//! - [`config`] - TOML core configuration
//! - [`logging`] - Tracing subscriber setup
//!
//! # Re-exports
//!
//! The payload types from [`sdk`] are re-exported for convenience.

use tracing::info;

pub use ark_sdk as sdk;

pub mod callbacks;
pub mod config;
pub mod error;
pub mod logging;
pub mod registry;

// Re-export commonly used items
pub use callbacks::{Category, ClassCallbacks, DispatchResult};
pub use config::{ConfigError, ConfigResult, CoreConfig};
pub use error::{ErrorCategory, ErrorCode};
pub use logging::LoggingError;
pub use registry::ClassRegistry;

/// Shutdown the registry
///
/// Drops every class registry and common listener.
pub fn shutdown(registry: &ClassRegistry) {
    info!(
        "ark core shutting down ({} class registries)",
        registry.class_count()
    );
    registry.clear();
}
