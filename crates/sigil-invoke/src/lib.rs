//! Sigil invoker
//!
//! Executes method entities against opaque target instances. Producers bind
//! callables to method descriptors in a [`MethodTable`] at startup; consumers
//! call [`invoke`] with a descriptor they hold, or [`execute_all_tagged`] to
//! run every tagged method matching a target. Every call is arity- and
//! type-checked against the descriptor before the handler runs, and handler
//! panics surface as [`sigil_core::InvocationError::TargetThrew`].
//!
//! Field entities get the same treatment through a [`FieldTable`] of
//! getter/setter bindings, driven by [`read_field`] and [`write_field`].
//!
//! # Example
//!
//! ```ignore
//! use sigil_core::{MethodEntity, Value};
//! use sigil_invoke::{invoke, Instance, MethodTable};
//!
//! let mut table = MethodTable::new();
//! let method = MethodEntity::nullary("UserService", "ProcessUser");
//! table.bind::<UserService, _>(method.clone(), |svc, _args| {
//!     svc.process();
//!     Ok(Value::null())
//! });
//!
//! let svc = UserService::default();
//! invoke(&table, &svc, &method, &[])?;
//! ```

#![warn(missing_docs)]

mod batch;
mod fields;
mod instance;
mod invoker;
mod table;

pub use batch::{execute_all_tagged, BatchOutcome};
pub use fields::{read_field, write_field, FieldGetFn, FieldSetFn, FieldTable};
pub use instance::Instance;
pub use invoker::invoke;
pub use table::{MethodFn, MethodTable};
