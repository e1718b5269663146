//! Schema model definitions.
//!
//! This module contains the data structures describing a loaded schema:
//! entities, JSON objects, unions, enums and their typed properties.

use crate::error::SchemaError;
use indexmap::{IndexMap, IndexSet};
use std::fmt;

/// Complete schema model.
///
/// Items keep their declaration order, which is also the order in which
/// generated modules are emitted.
#[derive(Debug, Clone, Default)]
pub struct Model {
    items: IndexMap<String, Item>,
}

impl Model {
    /// Creates a new empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item, returning the previous item registered under that name.
    pub fn insert(&mut self, name: impl Into<String>, item: Item) -> Option<Item> {
        self.items.insert(name.into(), item)
    }

    /// Looks up an item by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    /// Iterates over items in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Item)> {
        self.items.iter().map(|(name, item)| (name.as_str(), item))
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the model has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an item, failing when it is missing.
    ///
    /// # Errors
    /// Returns `SchemaError::ItemNotFound` if no item has that name.
    pub fn item(&self, name: &str) -> Result<&Item, SchemaError> {
        self.get(name).ok_or_else(|| SchemaError::not_found(name))
    }

    /// Looks up an enum item by name.
    ///
    /// # Errors
    /// Returns `SchemaError` if the item is missing or is not an enum.
    pub fn enumeration(&self, name: &str) -> Result<&Enum, SchemaError> {
        match self.item(name)? {
            Item::Enum(e) => Ok(e),
            other => Err(kind_mismatch(name, ItemKind::Enum, other.kind())),
        }
    }

    /// Looks up a JSON object item by name.
    ///
    /// # Errors
    /// Returns `SchemaError` if the item is missing or is not an object.
    pub fn object(&self, name: &str) -> Result<&JsonObject, SchemaError> {
        match self.item(name)? {
            Item::Object(o) => Ok(o),
            other => Err(kind_mismatch(name, ItemKind::Object, other.kind())),
        }
    }
}

fn kind_mismatch(name: &str, expected: ItemKind, found: ItemKind) -> SchemaError {
    SchemaError::KindMismatch {
        name: name.to_string(),
        expected: expected.to_string(),
        found: found.to_string(),
    }
}

/// Schema item variants.
#[derive(Debug, Clone)]
pub enum Item {
    /// Persisted entity.
    Entity(Entity),
    /// Non-persisted JSON value object.
    Object(JsonObject),
    /// Union over object and entity shapes.
    Union(Union),
    /// Closed string enumeration.
    Enum(Enum),
}

impl Item {
    /// Returns the kind of the item.
    #[must_use]
    pub const fn kind(&self) -> ItemKind {
        match self {
            Self::Entity(_) => ItemKind::Entity,
            Self::Object(_) => ItemKind::Object,
            Self::Union(_) => ItemKind::Union,
            Self::Enum(_) => ItemKind::Enum,
        }
    }
}

/// Item kind discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Entity item.
    Entity,
    /// JSON object item.
    Object,
    /// Union item.
    Union,
    /// Enum item.
    Enum,
}

impl ItemKind {
    /// Returns the schema keyword for this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Object => "object",
            Self::Union => "union",
            Self::Enum => "enum",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entity definition.
#[derive(Debug, Clone, Default)]
pub struct Entity {
    /// Entity description.
    pub description: Option<String>,
    /// Properties in declaration order.
    pub properties: IndexMap<String, Prop>,
}

/// JSON object definition.
#[derive(Debug, Clone, Default)]
pub struct JsonObject {
    /// Object description.
    pub description: Option<String>,
    /// Properties in declaration order.
    pub properties: IndexMap<String, Prop>,
}

/// Union definition.
#[derive(Debug, Clone, Default)]
pub struct Union {
    /// Union description.
    pub description: Option<String>,
    /// Variant item names in declaration order.
    pub variants: Vec<String>,
}

/// Enum definition.
#[derive(Debug, Clone, Default)]
pub struct Enum {
    /// Enum description.
    pub description: Option<String>,
    /// Value names in declaration order.
    pub values: IndexSet<String>,
}

impl Enum {
    /// Returns the length of the longest value name.
    #[must_use]
    pub fn max_value_length(&self) -> usize {
        self.values.iter().map(String::len).max().unwrap_or(0)
    }
}

/// Typed property of an entity or object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prop {
    /// Property type.
    pub ty: PropType,
    /// Whether the property may be absent.
    pub nullable: bool,
    /// Property description.
    pub description: Option<String>,
}

impl Prop {
    /// Creates a property without description.
    #[must_use]
    pub const fn new(ty: PropType, nullable: bool) -> Self {
        Self {
            ty,
            nullable,
            description: None,
        }
    }

    /// Attaches a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Property type descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropType {
    /// Built-in scalar, by name as written in the schema.
    Scalar {
        /// Scalar name.
        name: String,
    },
    /// Reference to an enum item.
    Enum {
        /// Enum item name.
        name: String,
    },
    /// Reference to a JSON object item.
    Object {
        /// Object item name.
        name: String,
    },
    /// Reference to a union item.
    Union {
        /// Union item name.
        name: String,
    },
    /// Many-to-one reference to an entity.
    Fk {
        /// Referenced entity name.
        foreign_entity: String,
    },
    /// Inverse side of a many-to-one reference.
    ListRelation {
        /// Related entity name.
        entity: String,
        /// Field on the related entity pointing back here.
        field: String,
    },
    /// Ordered list of values.
    List {
        /// Element property.
        item: Box<Prop>,
    },
}

impl PropType {
    /// Creates a scalar type.
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::Scalar { name: name.into() }
    }

    /// Creates a list type.
    #[must_use]
    pub fn list(item: Prop) -> Self {
        Self::List {
            item: Box::new(item),
        }
    }

    /// Returns the descriptor kind as written in diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Scalar { .. } => "scalar",
            Self::Enum { .. } => "enum",
            Self::Object { .. } => "object",
            Self::Union { .. } => "union",
            Self::Fk { .. } => "fk",
            Self::ListRelation { .. } => "list-relation",
            Self::List { .. } => "list",
        }
    }
}

/// Supported scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// Primary identifier.
    Id,
    /// UTF-8 text.
    String,
    /// 32-bit signed integer.
    Int,
    /// Double precision float.
    Float,
    /// Boolean.
    Boolean,
    /// Timestamp with timezone.
    DateTime,
    /// Arbitrary precision integer.
    BigInt,
    /// Byte string.
    Bytes,
}

impl ScalarType {
    /// All supported scalars.
    pub const ALL: [Self; 8] = [
        Self::Id,
        Self::String,
        Self::Int,
        Self::Float,
        Self::Boolean,
        Self::DateTime,
        Self::BigInt,
        Self::Bytes,
    ];

    /// Parses a scalar from its schema name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ID" => Some(Self::Id),
            "String" => Some(Self::String),
            "Int" => Some(Self::Int),
            "Float" => Some(Self::Float),
            "Boolean" => Some(Self::Boolean),
            "DateTime" => Some(Self::DateTime),
            "BigInt" => Some(Self::BigInt),
            "Bytes" => Some(Self::Bytes),
            _ => None,
        }
    }

    /// Returns the schema name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::String => "String",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::Boolean => "Boolean",
            Self::DateTime => "DateTime",
            Self::BigInt => "BigInt",
            Self::Bytes => "Bytes",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_from_name_round_trip() {
        for scalar in ScalarType::ALL {
            assert_eq!(ScalarType::from_name(scalar.name()), Some(scalar));
        }
        assert_eq!(ScalarType::from_name("Decimal"), None);
        assert_eq!(ScalarType::from_name("string"), None);
    }

    #[test]
    fn test_enum_max_value_length() {
        let e = Enum {
            description: None,
            values: ["ACTIVE", "INACTIVE_LONG"]
                .into_iter()
                .map(String::from)
                .collect(),
        };
        assert_eq!(e.max_value_length(), 13);
        assert_eq!(Enum::default().max_value_length(), 0);
    }

    #[test]
    fn test_model_preserves_declaration_order() {
        let mut model = Model::new();
        model.insert("Zeta", Item::Enum(Enum::default()));
        model.insert("Alpha", Item::Object(JsonObject::default()));
        model.insert("Mid", Item::Entity(Entity::default()));

        let names: Vec<&str> = model.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_model_typed_lookup() {
        let mut model = Model::new();
        model.insert("Status", Item::Enum(Enum::default()));

        assert!(model.enumeration("Status").is_ok());
        assert!(matches!(
            model.object("Status"),
            Err(SchemaError::KindMismatch { .. })
        ));
        assert!(matches!(
            model.enumeration("Missing"),
            Err(SchemaError::ItemNotFound { .. })
        ));
    }

    #[test]
    fn test_item_kind_display() {
        assert_eq!(ItemKind::Entity.to_string(), "entity");
        assert_eq!(ItemKind::Object.to_string(), "object");
        assert_eq!(Item::Union(Union::default()).kind(), ItemKind::Union);
    }

    #[test]
    fn test_prop_type_kind_name() {
        assert_eq!(PropType::scalar("Int").kind_name(), "scalar");
        let list = PropType::list(Prop::new(PropType::scalar("Int"), false));
        assert_eq!(list.kind_name(), "list");
        let relation = PropType::ListRelation {
            entity: "Transfer".to_string(),
            field: "from".to_string(),
        };
        assert_eq!(relation.kind_name(), "list-relation");
    }
}
