//! Field value access
//!
//! Reads and writes declared fields on a target instance through accessor
//! bindings, the field counterpart of the method binding table. Producers
//! bind a getter (and optionally a setter) per field descriptor at startup;
//! fields bound without a setter are read-only. Both directions are checked
//! against the declared field type before any accessor runs.

use std::any::Any;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use sigil_core::{FieldAccessError, FieldEntity, Value};

use crate::instance::Instance;

/// A bound field getter.
pub type FieldGetFn = Arc<dyn Fn(&dyn Any) -> Result<Value, FieldAccessError> + Send + Sync>;

/// A bound field setter.
pub type FieldSetFn =
    Arc<dyn Fn(&mut dyn Any, Value) -> Result<(), FieldAccessError> + Send + Sync>;

struct FieldBinding {
    getter: FieldGetFn,
    setter: Option<FieldSetFn>,
}

/// Registry of field accessors indexed by field descriptor.
#[derive(Default)]
pub struct FieldTable {
    bindings: FxHashMap<FieldEntity, FieldBinding>,
}

impl std::fmt::Debug for FieldTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldTable")
            .field("count", &self.bindings.len())
            .finish()
    }
}

impl FieldTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a read-only accessor for `field`.
    ///
    /// Binding the same descriptor again replaces the previous accessors.
    pub fn bind<T, G>(&mut self, field: FieldEntity, getter: G)
    where
        T: 'static,
        G: Fn(&T) -> Value + Send + Sync + 'static,
    {
        let binding = FieldBinding {
            getter: wrap_getter(&field, getter),
            setter: None,
        };
        self.bindings.insert(field, binding);
    }

    /// Bind a read/write accessor pair for `field`.
    pub fn bind_mut<T, G, S>(&mut self, field: FieldEntity, getter: G, setter: S)
    where
        T: 'static,
        G: Fn(&T) -> Value + Send + Sync + 'static,
        S: Fn(&mut T, Value) + Send + Sync + 'static,
    {
        let qualified = field.qualified_name();
        let set: FieldSetFn = Arc::new(move |target, value| {
            let target = target.downcast_mut::<T>().ok_or_else(|| {
                FieldAccessError::TargetTypeMismatch {
                    field: qualified.clone(),
                    expected: std::any::type_name::<T>().to_string(),
                    got: "opaque instance".to_string(),
                }
            })?;
            setter(target, value);
            Ok(())
        });
        let binding = FieldBinding {
            getter: wrap_getter(&field, getter),
            setter: Some(set),
        };
        self.bindings.insert(field, binding);
    }

    /// Check if an accessor is bound for `field`
    pub fn contains(&self, field: &FieldEntity) -> bool {
        self.bindings.contains_key(field)
    }

    /// Check if `field` is bound with a setter
    pub fn is_writable(&self, field: &FieldEntity) -> bool {
        self.bindings
            .get(field)
            .is_some_and(|b| b.setter.is_some())
    }

    /// Number of bound fields
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn binding(&self, field: &FieldEntity) -> Option<&FieldBinding> {
        self.bindings.get(field)
    }
}

fn wrap_getter<T, G>(field: &FieldEntity, getter: G) -> FieldGetFn
where
    T: 'static,
    G: Fn(&T) -> Value + Send + Sync + 'static,
{
    let qualified = field.qualified_name();
    Arc::new(move |target| {
        let target = target.downcast_ref::<T>().ok_or_else(|| {
            FieldAccessError::TargetTypeMismatch {
                field: qualified.clone(),
                expected: std::any::type_name::<T>().to_string(),
                got: "opaque instance".to_string(),
            }
        })?;
        Ok(getter(target))
    })
}

/// Read the value of `field` from `target`.
///
/// Fails with `TargetTypeMismatch` if the target's runtime type is not the
/// declaring type, `UnboundField` if no accessor is bound, and
/// `TypeMismatch` if the getter produced a value not assignable to the
/// declared field type (a producer bug surfaced instead of propagated).
pub fn read_field(
    table: &FieldTable,
    target: &dyn Instance,
    field: &FieldEntity,
) -> Result<Value, FieldAccessError> {
    if target.type_name() != field.owner {
        return Err(FieldAccessError::TargetTypeMismatch {
            field: field.qualified_name(),
            expected: field.owner.clone(),
            got: target.type_name().to_string(),
        });
    }

    let binding = table
        .binding(field)
        .ok_or_else(|| FieldAccessError::UnboundField(field.to_string()))?;
    let value = (binding.getter)(target.as_any())?;

    let got = value.value_type();
    if !field.value_type.is_assignable_from(got) {
        return Err(FieldAccessError::TypeMismatch {
            field: field.qualified_name(),
            expected: field.value_type,
            got,
        });
    }
    Ok(value)
}

/// Write `value` into `field` on `target`.
///
/// Fails with `TargetTypeMismatch` if the target's runtime type is not the
/// declaring type, `TypeMismatch` if the value's runtime type is not
/// assignable to the declared field type, `UnboundField` if no accessor is
/// bound, and `ReadOnlyField` if the binding has no setter. A failed check
/// never mutates the target.
pub fn write_field(
    table: &FieldTable,
    target: &mut dyn Instance,
    field: &FieldEntity,
    value: Value,
) -> Result<(), FieldAccessError> {
    if target.type_name() != field.owner {
        return Err(FieldAccessError::TargetTypeMismatch {
            field: field.qualified_name(),
            expected: field.owner.clone(),
            got: target.type_name().to_string(),
        });
    }

    let got = value.value_type();
    if !field.value_type.is_assignable_from(got) {
        return Err(FieldAccessError::TypeMismatch {
            field: field.qualified_name(),
            expected: field.value_type,
            got,
        });
    }

    let binding = table
        .binding(field)
        .ok_or_else(|| FieldAccessError::UnboundField(field.to_string()))?;
    let setter = binding
        .setter
        .as_ref()
        .ok_or_else(|| FieldAccessError::ReadOnlyField(field.qualified_name()))?;
    setter(target.as_any_mut(), value)
}
