//! Checked method invocation
//!
//! The invoker is stateless: it validates a call against the method
//! descriptor the caller supplies, resolves the handler from the binding
//! table, and executes it under a panic guard. Checks run in a fixed order —
//! arity, argument types, target type, binding — and a failed check never
//! partially executes the target.

use std::panic::{self, AssertUnwindSafe};

use sigil_core::{InvocationError, InvokeResult, MethodEntity, Value};

use crate::instance::Instance;
use crate::table::MethodTable;

/// Invoke `method` against `target` with `args`.
///
/// Fails with:
/// - `ArityMismatch` if `args.len()` differs from the declared parameter count
/// - `TypeMismatch` if an argument's runtime type is not assignable to the
///   corresponding declared parameter type
/// - `TargetTypeMismatch` if the target's runtime type is not the declaring type
/// - `UnboundMethod` if no handler is bound for the descriptor
/// - `TargetThrew` if the handler panics or returns an error
///
/// Panics in the handler are caught and surfaced, never swallowed. The
/// invoked method's own thread-safety is the caller's responsibility.
pub fn invoke(
    table: &MethodTable,
    target: &dyn Instance,
    method: &MethodEntity,
    args: &[Value],
) -> InvokeResult<Value> {
    if args.len() != method.arity() {
        return Err(InvocationError::ArityMismatch {
            method: method.qualified_name(),
            expected: method.arity(),
            got: args.len(),
        });
    }

    for (index, (arg, param)) in args.iter().zip(method.params.iter()).enumerate() {
        let got = arg.value_type();
        if !param.is_assignable_from(got) {
            return Err(InvocationError::TypeMismatch {
                method: method.qualified_name(),
                index,
                expected: *param,
                got,
            });
        }
    }

    if target.type_name() != method.owner {
        return Err(InvocationError::TargetTypeMismatch {
            method: method.qualified_name(),
            expected: method.owner.clone(),
            got: target.type_name().to_string(),
        });
    }

    let handler = table
        .get(method)
        .ok_or_else(|| InvocationError::UnboundMethod(method.to_string()))?;

    match panic::catch_unwind(AssertUnwindSafe(|| handler(target.as_any(), args))) {
        Ok(result) => result,
        Err(payload) => Err(InvocationError::TargetThrew {
            method: method.qualified_name(),
            cause: panic_message(payload),
        }),
    }
}

/// Extract a readable message from a panic payload.
fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
