//! ark SDK - Entity Payload Type Definitions
//!
//! This crate contains the value types that the entity system hands to
//! callback listeners. It has no dependencies and compiles quickly, allowing
//! parallel compilation of dependent crates.
//!
//! # Modules
//!
//! - [`guid`] - Entity identifiers
//! - [`data`] - Tagged property values and argument lists
//! - [`events`] - Class, table and container event kinds

pub mod data;
pub mod events;
pub mod guid;

pub use data::{Data, DataList, DataType};
pub use events::{ContainerOpType, EntityEvent, TableEventData, TableOpType};
pub use guid::Guid;
