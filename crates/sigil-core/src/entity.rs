//! Entity descriptors
//!
//! An `EntityDescriptor` is a uniform handle over "a type", "a field of a
//! type", or "a method of a type", independent of any native reflection
//! facility. Descriptors are pure values with structural equality and hashing
//! so they can serve as registry lookup keys. Field and method descriptors
//! carry the declaring type's name as a non-owning back-reference.

use serde::{Deserialize, Serialize};

use crate::value::{ReturnType, ValueType};

/// Describes a type registered with the metadata system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeEntity {
    /// Type name
    pub name: String,
}

impl TypeEntity {
    /// Create a type descriptor
    pub fn new(name: impl Into<String>) -> Self {
        TypeEntity { name: name.into() }
    }
}

/// Describes a field declared on a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldEntity {
    /// Declaring type name
    pub owner: String,
    /// Field name
    pub name: String,
    /// Declared field type
    pub value_type: ValueType,
}

impl FieldEntity {
    /// Create a field descriptor
    pub fn new(owner: impl Into<String>, name: impl Into<String>, value_type: ValueType) -> Self {
        FieldEntity {
            owner: owner.into(),
            name: name.into(),
            value_type,
        }
    }

    /// Qualified `Owner.name` form, used in error messages
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.owner, self.name)
    }
}

impl std::fmt::Display for FieldEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.owner, self.name, self.value_type)
    }
}

/// Describes a method declared on a type, including its signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodEntity {
    /// Declaring type name
    pub owner: String,
    /// Method name
    pub name: String,
    /// Declared parameter types, in order
    pub params: Vec<ValueType>,
    /// Declared return type
    pub returns: ReturnType,
}

impl MethodEntity {
    /// Create a method descriptor
    pub fn new(
        owner: impl Into<String>,
        name: impl Into<String>,
        params: Vec<ValueType>,
        returns: ReturnType,
    ) -> Self {
        MethodEntity {
            owner: owner.into(),
            name: name.into(),
            params,
            returns,
        }
    }

    /// Create a descriptor for a method taking no parameters and returning void
    pub fn nullary(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(owner, name, Vec::new(), ReturnType::Void)
    }

    /// Number of declared parameters
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Qualified `Owner.name` form, used in error messages
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.owner, self.name)
    }
}

impl std::fmt::Display for MethodEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}(", self.owner, self.name)?;
        for (i, p) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", p)?;
        }
        write!(f, ") -> {}", self.returns)
    }
}

/// The kind of a registered entity, for dispatch without matching on the
/// full descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// A type
    Type,
    /// A field of a type
    Field,
    /// A method of a type
    Method,
}

/// A uniform handle over a type, field, or method.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityDescriptor {
    /// A type entity
    Type(TypeEntity),
    /// A field entity
    Field(FieldEntity),
    /// A method entity
    Method(MethodEntity),
}

impl EntityDescriptor {
    /// Create a type descriptor
    pub fn of_type(name: impl Into<String>) -> Self {
        EntityDescriptor::Type(TypeEntity::new(name))
    }

    /// The kind of this entity
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityDescriptor::Type(_) => EntityKind::Type,
            EntityDescriptor::Field(_) => EntityKind::Field,
            EntityDescriptor::Method(_) => EntityKind::Method,
        }
    }

    /// The entity's own name (unqualified)
    pub fn name(&self) -> &str {
        match self {
            EntityDescriptor::Type(t) => &t.name,
            EntityDescriptor::Field(f) => &f.name,
            EntityDescriptor::Method(m) => &m.name,
        }
    }

    /// The declaring type's name for fields and methods; the type's own name
    /// for types.
    pub fn owner(&self) -> &str {
        match self {
            EntityDescriptor::Type(t) => &t.name,
            EntityDescriptor::Field(f) => &f.owner,
            EntityDescriptor::Method(m) => &m.owner,
        }
    }

    /// Get the inner method descriptor if this is a method entity
    pub fn as_method(&self) -> Option<&MethodEntity> {
        match self {
            EntityDescriptor::Method(m) => Some(m),
            _ => None,
        }
    }

    /// Get the inner field descriptor if this is a field entity
    pub fn as_field(&self) -> Option<&FieldEntity> {
        match self {
            EntityDescriptor::Field(f) => Some(f),
            _ => None,
        }
    }
}

impl From<TypeEntity> for EntityDescriptor {
    fn from(t: TypeEntity) -> Self {
        EntityDescriptor::Type(t)
    }
}

impl From<FieldEntity> for EntityDescriptor {
    fn from(f: FieldEntity) -> Self {
        EntityDescriptor::Field(f)
    }
}

impl From<MethodEntity> for EntityDescriptor {
    fn from(m: MethodEntity) -> Self {
        EntityDescriptor::Method(m)
    }
}

impl std::fmt::Display for EntityDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityDescriptor::Type(t) => write!(f, "{}", t.name),
            EntityDescriptor::Field(fd) => fd.fmt(f),
            EntityDescriptor::Method(m) => m.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        let a = EntityDescriptor::of_type("UserService");
        let b = EntityDescriptor::of_type("UserService");
        let c = EntityDescriptor::of_type("OrderService");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_method_equality_includes_signature() {
        let a = MethodEntity::new("Svc", "run", vec![ValueType::Int], ReturnType::Void);
        let b = MethodEntity::new("Svc", "run", vec![ValueType::Int], ReturnType::Void);
        let c = MethodEntity::new("Svc", "run", vec![ValueType::Str], ReturnType::Void);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_kind_dispatch() {
        let ty = EntityDescriptor::of_type("T");
        let field: EntityDescriptor = FieldEntity::new("T", "x", ValueType::Int).into();
        let method: EntityDescriptor = MethodEntity::nullary("T", "go").into();

        assert_eq!(ty.kind(), EntityKind::Type);
        assert_eq!(field.kind(), EntityKind::Field);
        assert_eq!(method.kind(), EntityKind::Method);
    }

    #[test]
    fn test_owner_back_reference() {
        let field: EntityDescriptor = FieldEntity::new("Player", "health", ValueType::Int).into();
        let method: EntityDescriptor = MethodEntity::nullary("Player", "respawn").into();

        assert_eq!(field.owner(), "Player");
        assert_eq!(method.owner(), "Player");
        assert_eq!(EntityDescriptor::of_type("Player").owner(), "Player");
    }

    #[test]
    fn test_display_forms() {
        let m = MethodEntity::new(
            "Player",
            "damage",
            vec![ValueType::Int, ValueType::Float],
            ReturnType::Value(ValueType::Bool),
        );
        assert_eq!(m.to_string(), "Player.damage(int, float) -> bool");
        assert_eq!(m.qualified_name(), "Player.damage");

        let f = FieldEntity::new("Player", "name", ValueType::Str);
        assert_eq!(f.to_string(), "Player.name: string");
        assert_eq!(f.qualified_name(), "Player.name");
        assert_eq!(EntityDescriptor::from(f).to_string(), "Player.name: string");
    }

    #[test]
    fn test_hashable_as_map_key() {
        use rustc_hash::FxHashMap;

        let mut map: FxHashMap<EntityDescriptor, i32> = FxHashMap::default();
        map.insert(EntityDescriptor::of_type("A"), 1);
        map.insert(MethodEntity::nullary("A", "run").into(), 2);

        assert_eq!(map.get(&EntityDescriptor::of_type("A")), Some(&1));
        assert_eq!(
            map.get(&EntityDescriptor::from(MethodEntity::nullary("A", "run"))),
            Some(&2)
        );
    }
}
