//! Registry snapshots
//!
//! Captures the full entity/tag listing of a registry for debugging, state
//! tracking, or carrying metadata between processes. Snapshots serialize to
//! JSON and restore by replaying registrations in the original order, so a
//! restored registry answers every query identically.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use sigil_core::{EntityDescriptor, Tag};

use crate::registry::TagRegistry;

/// Snapshot of a single registry entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntrySnapshot {
    /// The registered entity
    pub entity: EntityDescriptor,
    /// Tags in registration order
    pub tags: Vec<Tag>,
}

/// A captured registry state at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// Timestamp when the snapshot was taken (ms since epoch)
    pub timestamp: u64,
    /// Entries in registration order
    pub entries: Vec<EntrySnapshot>,
}

impl RegistrySnapshot {
    /// Capture the current state of `registry`.
    pub fn capture(registry: &TagRegistry) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0);

        let entries = registry
            .entries()
            .map(|e| EntrySnapshot {
                entity: e.entity.clone(),
                tags: e.tags.clone(),
            })
            .collect();

        RegistrySnapshot { timestamp, entries }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Rebuild a registry by replaying the captured registrations in order.
    pub fn restore(&self) -> TagRegistry {
        let mut registry = TagRegistry::new();
        for entry in &self.entries {
            for tag in &entry.tags {
                registry.register(entry.entity.clone(), tag.clone());
            }
        }
        registry
    }

    /// Number of captured entities
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of captured tags across all entities
    pub fn tag_count(&self) -> usize {
        self.entries.iter().map(|e| e.tags.len()).sum()
    }
}
