//! Tags — typed annotation values
//!
//! A `Tag` is an immutable unit of metadata attached to an entity: a
//! human-readable description, a priority for conflict resolution, and an
//! arbitrary key/value payload of primitives. Tags are built once at
//! registration time and owned by the registry entry they are attached to.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// An immutable, typed annotation attached to a program entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    description: String,
    priority: i32,
    payload: FxHashMap<String, Value>,
}

impl Tag {
    /// Create a tag with the given description and default priority 1.
    ///
    /// The description must be non-empty.
    pub fn new(description: impl Into<String>) -> Self {
        let description = description.into();
        debug_assert!(!description.is_empty(), "tag description must be non-empty");
        Tag {
            description,
            priority: 1,
            payload: FxHashMap::default(),
        }
    }

    /// Set the priority (builder style).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Add a payload entry (builder style).
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }

    /// The tag's description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The tag's priority (higher wins; default 1)
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Look up a payload entry by key
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }

    /// Iterate over the payload entries
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.payload.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of payload entries
    pub fn field_count(&self) -> usize {
        self.payload.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_defaults() {
        let tag = Tag::new("service");
        assert_eq!(tag.description(), "service");
        assert_eq!(tag.priority(), 1);
        assert_eq!(tag.field_count(), 0);
    }

    #[test]
    fn test_tag_builder() {
        let tag = Tag::new("processor")
            .with_priority(2)
            .with_field("route", "users")
            .with_field("retries", 3i64);

        assert_eq!(tag.priority(), 2);
        assert_eq!(tag.field("route"), Some(&Value::str("users")));
        assert_eq!(tag.field("retries"), Some(&Value::int(3)));
        assert_eq!(tag.field("missing"), None);
        assert_eq!(tag.field_count(), 2);
    }

    #[test]
    fn test_tag_equality() {
        let a = Tag::new("x").with_priority(2).with_field("k", true);
        let b = Tag::new("x").with_priority(2).with_field("k", true);
        let c = Tag::new("x").with_priority(3).with_field("k", true);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_tag_fields_iteration() {
        let tag = Tag::new("t").with_field("a", 1i64).with_field("b", 2i64);
        let mut keys: Vec<&str> = tag.fields().map(|(k, _)| k).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
