//! Sigil core types
//!
//! This crate provides the value model, tags, and entity descriptors shared
//! by the Sigil metadata registry and invoker. Metadata here is *registered
//! data*: entities are described explicitly with [`EntityDescriptor`] values
//! rather than discovered through a runtime type system, so the model works
//! in hosts without reflection support.
//!
//! # Example
//!
//! ```ignore
//! use sigil_core::{EntityDescriptor, MethodEntity, Tag};
//!
//! let entity: EntityDescriptor = MethodEntity::nullary("UserService", "ProcessUser").into();
//! let tag = Tag::new("processor").with_priority(2);
//! ```

#![warn(missing_docs)]

mod entity;
mod error;
mod tag;
mod value;

pub use entity::{EntityDescriptor, EntityKind, FieldEntity, MethodEntity, TypeEntity};
pub use error::{FieldAccessError, InvocationError, InvokeResult};
pub use tag::Tag;
pub use value::{ReturnType, Value, ValueType};
