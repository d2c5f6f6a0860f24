//! Method binding table
//!
//! Maps method descriptors to callable handlers. Producers bind handlers
//! during the same single-threaded startup phase that populates the tag
//! registry; afterwards the table is read-only and dispatch is a hash lookup
//! on the full method descriptor, so two overloads with different signatures
//! bind independently.

use std::any::Any;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use sigil_core::{InvocationError, MethodEntity, Value};

/// A bound method handler.
///
/// Receives the target as `&dyn Any` plus the (already arity- and
/// type-checked) arguments. Handlers produced by [`MethodTable::bind`] wrap a
/// typed closure; [`MethodTable::bind_raw`] accepts this form directly.
pub type MethodFn =
    Arc<dyn Fn(&dyn Any, &[Value]) -> Result<Value, InvocationError> + Send + Sync>;

/// Registry of callables indexed by method descriptor.
#[derive(Default)]
pub struct MethodTable {
    bindings: FxHashMap<MethodEntity, MethodFn>,
}

impl std::fmt::Debug for MethodTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodTable")
            .field("count", &self.bindings.len())
            .finish()
    }
}

impl MethodTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a typed closure as the handler for `method`.
    ///
    /// The wrapper downcasts the target to `T` and maps a closure error to
    /// `TargetThrew`. A failed downcast surfaces as `TargetTypeMismatch`
    /// naming the Rust type the handler was bound for; [`crate::invoke`]
    /// checks the registered type name first, so that branch is only
    /// reachable when a handler is called directly off the table.
    /// Binding the same descriptor again replaces the previous handler.
    pub fn bind<T, F>(&mut self, method: MethodEntity, f: F)
    where
        T: 'static,
        F: Fn(&T, &[Value]) -> Result<Value, String> + Send + Sync + 'static,
    {
        let qualified = method.qualified_name();
        let handler: MethodFn = Arc::new(move |target, args| {
            let target = target
                .downcast_ref::<T>()
                .ok_or_else(|| InvocationError::TargetTypeMismatch {
                    method: qualified.clone(),
                    expected: std::any::type_name::<T>().to_string(),
                    got: "opaque instance".to_string(),
                })?;
            f(target, args).map_err(|cause| InvocationError::TargetThrew {
                method: qualified.clone(),
                cause,
            })
        });
        self.bindings.insert(method, handler);
    }

    /// Bind a pre-wrapped handler for `method`.
    pub fn bind_raw(&mut self, method: MethodEntity, handler: MethodFn) {
        self.bindings.insert(method, handler);
    }

    /// Get the handler bound to `method`, if any
    pub fn get(&self, method: &MethodEntity) -> Option<&MethodFn> {
        self.bindings.get(method)
    }

    /// Check if a handler is bound for `method`
    pub fn contains(&self, method: &MethodEntity) -> bool {
        self.bindings.contains_key(method)
    }

    /// Number of bound methods
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigil_core::{ReturnType, ValueType};

    struct Greeter {
        name: String,
    }

    #[test]
    fn test_bind_and_get() {
        let mut table = MethodTable::new();
        let method = MethodEntity::nullary("Greeter", "greet");

        table.bind::<Greeter, _>(method.clone(), |g, _args| {
            Ok(Value::str(format!("hello, {}", g.name)))
        });

        assert!(table.contains(&method));
        assert_eq!(table.len(), 1);

        let greeter = Greeter {
            name: "world".to_string(),
        };
        let handler = table.get(&method).unwrap();
        let result = handler(&greeter, &[]).unwrap();
        assert_eq!(result.as_str(), Some("hello, world"));
    }

    #[test]
    fn test_downcast_failure_is_target_type_mismatch() {
        let mut table = MethodTable::new();
        let method = MethodEntity::nullary("Greeter", "greet");
        table.bind::<Greeter, _>(method.clone(), |_, _| Ok(Value::null()));

        let wrong_target = 42i64;
        let handler = table.get(&method).unwrap();
        let err = handler(&wrong_target, &[]).unwrap_err();
        match err {
            InvocationError::TargetTypeMismatch { expected, .. } => {
                assert!(expected.contains("Greeter"), "expected was {expected}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_closure_error_becomes_target_threw() {
        let mut table = MethodTable::new();
        let method = MethodEntity::nullary("Greeter", "fail");
        table.bind::<Greeter, _>(method.clone(), |_, _| Err("db offline".to_string()));

        let greeter = Greeter {
            name: "x".to_string(),
        };
        let handler = table.get(&method).unwrap();
        let err = handler(&greeter, &[]).unwrap_err();
        match err {
            InvocationError::TargetThrew { method, cause } => {
                assert_eq!(method, "Greeter.fail");
                assert_eq!(cause, "db offline");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_overloads_bind_independently() {
        let mut table = MethodTable::new();
        let unary = MethodEntity::new(
            "Greeter",
            "greet",
            vec![ValueType::Str],
            ReturnType::Void,
        );
        let nullary = MethodEntity::nullary("Greeter", "greet");

        table.bind::<Greeter, _>(unary.clone(), |_, _| Ok(Value::int(1)));
        table.bind::<Greeter, _>(nullary.clone(), |_, _| Ok(Value::int(0)));

        assert_eq!(table.len(), 2);
        assert!(table.contains(&unary));
        assert!(table.contains(&nullary));
    }
}
