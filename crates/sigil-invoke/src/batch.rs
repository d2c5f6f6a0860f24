//! Tag-driven batch execution
//!
//! Runs every registered method whose declaring type matches the target's
//! runtime type and whose tags satisfy a predicate. Each call goes through
//! the checked invoker; one failure never halts the batch. The caller owns
//! the aggregate policy ("zero failures" vs "best effort") — nothing here
//! logs or exits.

use sigil_core::{InvokeResult, MethodEntity, Tag, Value};
use sigil_registry::TagRegistry;

use crate::instance::Instance;
use crate::invoker::invoke;
use crate::table::MethodTable;

/// The outcome of one invocation within a batch.
#[derive(Debug)]
pub struct BatchOutcome {
    /// The method that was invoked
    pub method: MethodEntity,
    /// The invocation result
    pub result: InvokeResult<Value>,
}

impl BatchOutcome {
    /// Check whether this invocation succeeded
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}

/// Invoke every matching tagged method against `target`, in registration
/// order, with no arguments.
///
/// A method matches when its declaring type equals `target.type_name()` and
/// at least one of its tags satisfies `predicate`. Every call is fully
/// checked, so a matched method that declares parameters yields an
/// `ArityMismatch` outcome instead of executing. Returns one outcome per
/// matched method; outcomes are independent and the batch never
/// short-circuits.
pub fn execute_all_tagged<P>(
    registry: &TagRegistry,
    table: &MethodTable,
    target: &dyn Instance,
    predicate: P,
) -> Vec<BatchOutcome>
where
    P: Fn(&Tag) -> bool,
{
    let mut outcomes = Vec::new();
    for entry in registry.entries() {
        let Some(method) = entry.entity.as_method() else {
            continue;
        };
        if method.owner != target.type_name() {
            continue;
        }
        if !entry.tags.iter().any(&predicate) {
            continue;
        }
        let result = invoke(table, target, method, &[]);
        outcomes.push(BatchOutcome {
            method: method.clone(),
            result,
        });
    }
    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use sigil_core::EntityDescriptor;

    struct Worker {
        runs: AtomicUsize,
    }

    impl Instance for Worker {
        fn type_name(&self) -> &str {
            "Worker"
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[test]
    fn test_untagged_and_foreign_methods_are_skipped() {
        let mut registry = TagRegistry::new();
        let mut table = MethodTable::new();

        let ours = MethodEntity::nullary("Worker", "run");
        let theirs = MethodEntity::nullary("Other", "run");
        registry.register(ours.clone().into(), Tag::new("job"));
        registry.register(theirs.clone().into(), Tag::new("job"));
        // A tagged type entity is never invoked
        registry.register(EntityDescriptor::of_type("Worker"), Tag::new("job"));

        table.bind::<Worker, _>(ours, |w, _| {
            w.runs.fetch_add(1, Ordering::SeqCst);
            Ok(Value::null())
        });

        let worker = Worker {
            runs: AtomicUsize::new(0),
        };
        let outcomes = execute_all_tagged(&registry, &table, &worker, |_| true);

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].method.name, "run");
        assert!(outcomes[0].succeeded());
        assert_eq!(worker.runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_predicate_filters_by_tag() {
        let mut registry = TagRegistry::new();
        let mut table = MethodTable::new();

        let low = MethodEntity::nullary("Worker", "low");
        let high = MethodEntity::nullary("Worker", "high");
        registry.register(low.clone().into(), Tag::new("job").with_priority(1));
        registry.register(high.clone().into(), Tag::new("job").with_priority(9));

        for method in [low, high] {
            table.bind::<Worker, _>(method, |w, _| {
                w.runs.fetch_add(1, Ordering::SeqCst);
                Ok(Value::null())
            });
        }

        let worker = Worker {
            runs: AtomicUsize::new(0),
        };
        let outcomes = execute_all_tagged(&registry, &table, &worker, |t| t.priority() >= 5);

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].method.name, "high");
        assert_eq!(worker.runs.load(Ordering::SeqCst), 1);
    }
}
