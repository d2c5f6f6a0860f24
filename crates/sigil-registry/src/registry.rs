//! The entity → tags index
//!
//! `TagRegistry` is the central index built once during a single-threaded
//! initialization phase and queried many times afterwards. Entries preserve
//! registration order, both across entities and for the tags within a single
//! entity; queries iterate in that order. After the build phase the registry
//! is read-only (`register` takes `&mut self`), so shared references may be
//! read concurrently from any thread.

use rustc_hash::FxHashMap;

use sigil_core::{EntityDescriptor, EntityKind, FieldEntity, MethodEntity, Tag};

/// One registered entity together with its accumulated tags.
///
/// An entity may accumulate any number of tags; nothing is deduplicated.
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    /// The registered entity
    pub entity: EntityDescriptor,
    /// Tags in registration order
    pub tags: Vec<Tag>,
}

/// The process-wide index from entity to its tags.
#[derive(Debug, Default)]
pub struct TagRegistry {
    /// Entries in first-registration order
    entries: Vec<RegistryEntry>,
    /// Lookup index into `entries`
    index: FxHashMap<EntityDescriptor, usize>,
}

impl TagRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `tag` to `entity`, creating the entry if this is the entity's
    /// first registration. Always succeeds.
    pub fn register(&mut self, entity: EntityDescriptor, tag: Tag) {
        match self.index.get(&entity) {
            Some(&i) => self.entries[i].tags.push(tag),
            None => {
                self.index.insert(entity.clone(), self.entries.len());
                self.entries.push(RegistryEntry {
                    entity,
                    tags: vec![tag],
                });
            }
        }
    }

    /// The tags attached to `entity`, in registration order.
    ///
    /// Returns an empty slice for entities never registered; absence is not
    /// an error.
    pub fn tags_for(&self, entity: &EntityDescriptor) -> &[Tag] {
        match self.index.get(entity) {
            Some(&i) => &self.entries[i].tags,
            None => &[],
        }
    }

    /// All (entity, tag) pairs whose tag satisfies `predicate`.
    ///
    /// Lazy and restartable: re-invoking produces the same sequence as long
    /// as no registration happened in between. Entries are visited in
    /// registration order, tags within an entry in registration order.
    pub fn find_by<'a, P>(
        &'a self,
        predicate: P,
    ) -> impl Iterator<Item = (&'a EntityDescriptor, &'a Tag)> + 'a
    where
        P: Fn(&Tag) -> bool + 'a,
    {
        self.entries
            .iter()
            .flat_map(|entry| entry.tags.iter().map(move |tag| (&entry.entity, tag)))
            .filter(move |(_, tag)| predicate(tag))
    }

    /// All registered entities of the given kind, in registration order.
    pub fn all_of_kind(&self, kind: EntityKind) -> impl Iterator<Item = &EntityDescriptor> {
        self.entries
            .iter()
            .map(|e| &e.entity)
            .filter(move |e| e.kind() == kind)
    }

    /// Names of all registered type entities, in registration order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|e| match &e.entity {
            EntityDescriptor::Type(t) => Some(t.name.as_str()),
            _ => None,
        })
    }

    /// All registered fields declared on `owner`, in registration order.
    pub fn fields_of<'a>(&'a self, owner: &'a str) -> impl Iterator<Item = &'a FieldEntity> + 'a {
        self.entries.iter().filter_map(move |e| match &e.entity {
            EntityDescriptor::Field(f) if f.owner == owner => Some(f),
            _ => None,
        })
    }

    /// All registered methods declared on `owner`, in registration order.
    pub fn methods_of<'a>(&'a self, owner: &'a str) -> impl Iterator<Item = &'a MethodEntity> + 'a {
        self.entries.iter().filter_map(move |e| match &e.entity {
            EntityDescriptor::Method(m) if m.owner == owner => Some(m),
            _ => None,
        })
    }

    /// All entries, in registration order
    pub fn entries(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter()
    }

    /// Check whether `entity` has been registered
    pub fn contains(&self, entity: &EntityDescriptor) -> bool {
        self.index.contains_key(entity)
    }

    /// Number of registered entities
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no entity has been registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
