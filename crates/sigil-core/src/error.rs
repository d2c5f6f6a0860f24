//! Error types for method invocation
//!
//! Registration is total and has no error taxonomy; lookup misses are empty
//! sequences, not errors. Invocation is the only fallible operation, and its
//! failures are returned, never swallowed.

use crate::value::ValueType;

/// Result type for invocation calls
pub type InvokeResult<T> = Result<T, InvocationError>;

/// Reasons a method invocation can fail.
///
/// Every variant carries the qualified method name so batch consumers can
/// report outcomes without extra bookkeeping.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InvocationError {
    /// Argument count does not match the declared parameter count
    #[error("{method}: expected {expected} arguments, got {got}")]
    ArityMismatch {
        /// Qualified method name
        method: String,
        /// Declared parameter count
        expected: usize,
        /// Supplied argument count
        got: usize,
    },

    /// An argument's runtime type is not assignable to the declared parameter type
    #[error("{method}: argument {index} expected {expected}, got {got}")]
    TypeMismatch {
        /// Qualified method name
        method: String,
        /// Zero-based argument index
        index: usize,
        /// Declared parameter type
        expected: ValueType,
        /// Runtime argument type
        got: ValueType,
    },

    /// The target instance's runtime type is not the method's declaring type
    #[error("{method}: declared on {expected}, target is {got}")]
    TargetTypeMismatch {
        /// Qualified method name
        method: String,
        /// Declaring type name
        expected: String,
        /// Target's runtime type name
        got: String,
    },

    /// No callable has been bound for the method descriptor
    #[error("no binding for method {0}")]
    UnboundMethod(String),

    /// The underlying call panicked or returned an error
    #[error("{method} threw: {cause}")]
    TargetThrew {
        /// Qualified method name
        method: String,
        /// Panic or error message
        cause: String,
    },
}

/// Reasons a field read or write can fail.
///
/// Reads and writes go through bound accessors; the checks mirror the method
/// invocation checks, with a write-only extension for fields bound without a
/// setter.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FieldAccessError {
    /// A value's runtime type is not assignable to the declared field type
    #[error("{field}: expected {expected}, got {got}")]
    TypeMismatch {
        /// Qualified field name
        field: String,
        /// Declared field type
        expected: ValueType,
        /// Runtime value type
        got: ValueType,
    },

    /// The target instance's runtime type is not the field's declaring type
    #[error("{field}: declared on {expected}, target is {got}")]
    TargetTypeMismatch {
        /// Qualified field name
        field: String,
        /// Declaring type name
        expected: String,
        /// Target's runtime type name
        got: String,
    },

    /// No accessor has been bound for the field descriptor
    #[error("no binding for field {0}")]
    UnboundField(String),

    /// The field was bound without a setter
    #[error("field {0} is read-only")]
    ReadOnlyField(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = InvocationError::ArityMismatch {
            method: "Svc.run".to_string(),
            expected: 0,
            got: 1,
        };
        assert_eq!(err.to_string(), "Svc.run: expected 0 arguments, got 1");

        let err = InvocationError::TypeMismatch {
            method: "Svc.run".to_string(),
            index: 0,
            expected: ValueType::Int,
            got: ValueType::Str,
        };
        assert_eq!(err.to_string(), "Svc.run: argument 0 expected int, got string");

        let err = InvocationError::TargetThrew {
            method: "Svc.run".to_string(),
            cause: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Svc.run threw: boom");
    }

    #[test]
    fn test_field_error_display() {
        let err = FieldAccessError::TypeMismatch {
            field: "Person.Age".to_string(),
            expected: ValueType::Int,
            got: ValueType::Str,
        };
        assert_eq!(err.to_string(), "Person.Age: expected int, got string");

        let err = FieldAccessError::ReadOnlyField("Person.Name".to_string());
        assert_eq!(err.to_string(), "field Person.Name is read-only");
    }
}
