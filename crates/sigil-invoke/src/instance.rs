//! Instance trait — the opaque target handle
//!
//! Consumers own the target's lifecycle; the invoker only needs a runtime
//! type name (to match against a method's declaring type) and `Any` access
//! for the downcast at the binding seam.

use std::any::Any;

/// An opaque instance a method entity can be invoked against.
pub trait Instance: Any {
    /// The instance's runtime type name, matched against `MethodEntity::owner`
    fn type_name(&self) -> &str;

    /// `Any` access for downcasting inside typed bindings
    fn as_any(&self) -> &dyn Any;

    /// Mutable `Any` access, used by field setters
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
