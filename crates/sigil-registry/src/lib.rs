//! Sigil metadata registry
//!
//! The central index from program entities to their tags. Producers build the
//! registry during a single-threaded initialization phase; consumers query it
//! by entity, by tag predicate, or by entity kind, without compile-time
//! knowledge of which entities carry which annotations.
//!
//! # Usage
//!
//! ```ignore
//! use sigil_core::{EntityDescriptor, MethodEntity, Tag};
//! use sigil_registry::TagRegistry;
//!
//! let mut registry = TagRegistry::new();
//! registry.register(
//!     EntityDescriptor::of_type("UserService"),
//!     Tag::new("service").with_priority(2),
//! );
//! registry.register(
//!     MethodEntity::nullary("UserService", "ProcessUser").into(),
//!     Tag::new("processor"),
//! );
//!
//! for (entity, tag) in registry.find_by(|t| t.priority() >= 2) {
//!     println!("{entity}: {}", tag.description());
//! }
//! ```

#![warn(missing_docs)]

pub mod global;
mod registry;
mod snapshot;

pub use registry::{RegistryEntry, TagRegistry};
pub use snapshot::{EntrySnapshot, RegistrySnapshot};
