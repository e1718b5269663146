//! Type mapping.
//!
//! Maps property descriptors to the Rust type emitted for them and, for
//! entity properties, to the abstract column binding rendered into the
//! entity's registration table.

use crate::error::CodegenError;
use modelgen_schema::{Model, Prop, PropType, ScalarType};

/// Kind of item owning a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    /// Persisted entity.
    Entity,
    /// JSON value object.
    Object,
}

/// Resolves a scalar name to a supported scalar.
///
/// # Errors
/// Returns `CodegenError::UnsupportedType` for names outside the
/// supported set.
pub fn scalar_type(name: &str) -> Result<ScalarType, CodegenError> {
    ScalarType::from_name(name).ok_or_else(|| CodegenError::unsupported("scalar", name))
}

/// Returns the Rust type of a scalar.
#[must_use]
pub const fn rust_scalar_type(scalar: ScalarType) -> &'static str {
    match scalar {
        ScalarType::Id | ScalarType::String => "String",
        ScalarType::Int => "i32",
        ScalarType::Float => "f64",
        ScalarType::Boolean => "bool",
        ScalarType::DateTime => "chrono::DateTime<chrono::Utc>",
        ScalarType::BigInt => "num_bigint::BigInt",
        ScalarType::Bytes => "Vec<u8>",
    }
}

/// Returns the Rust type of a property of the given owner.
///
/// Nullable properties map to `Option<T>`. Entity references are boxed on
/// entities and carried as their identifier on objects.
///
/// # Errors
/// Returns `CodegenError::UnsupportedType` for unknown scalar names.
pub fn map_type(owner: Owner, ty: &PropType, nullable: bool) -> Result<String, CodegenError> {
    let base = match ty {
        PropType::Scalar { name } => rust_scalar_type(scalar_type(name)?).to_string(),
        PropType::Enum { name } | PropType::Object { name } | PropType::Union { name } => {
            name.clone()
        }
        PropType::Fk { foreign_entity } => match owner {
            Owner::Entity => format!("Box<{foreign_entity}>"),
            Owner::Object => "String".to_string(),
        },
        PropType::List { item } => format!("Vec<{}>", map_prop(Owner::Object, item)?),
        PropType::ListRelation { entity, .. } => format!("Vec<{entity}>"),
    };

    if nullable {
        Ok(format!("Option<{base}>"))
    } else {
        Ok(base)
    }
}

/// Returns the Rust type of a property, honouring its nullability.
///
/// # Errors
/// Returns `CodegenError::UnsupportedType` for unknown scalar names.
pub fn map_prop(owner: Owner, prop: &Prop) -> Result<String, CodegenError> {
    map_type(owner, &prop.ty, prop.nullable)
}

/// Read path of a structured JSON column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonTransform {
    /// Rebuilt through the object's constructor.
    Object(String),
    /// Rebuilt through the union's dispatch function.
    Union(String),
}

/// Storage kind of an entity field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnKind {
    /// Primary key.
    PrimaryKey,
    /// Unbounded text.
    Text,
    /// 32-bit integer.
    Integer,
    /// Double precision float.
    DoublePrecision,
    /// Boolean.
    Boolean,
    /// Timestamp with time zone.
    TimestampTz,
    /// Arbitrary precision numeric.
    Numeric,
    /// Binary blob.
    Bytea,
    /// Fixed-width text.
    VarChar {
        /// Maximum number of characters.
        length: usize,
    },
    /// Many-to-one relation.
    ManyToOne {
        /// Referenced entity.
        entity: String,
    },
    /// One-to-many relation bound to a field of the related entity.
    OneToMany {
        /// Related entity.
        entity: String,
        /// Inverse field on the related entity.
        inverse: String,
    },
    /// Structured JSON column.
    Json(JsonTransform),
}

impl ColumnKind {
    /// Returns false for relation sides that own no column.
    #[must_use]
    pub const fn is_column(&self) -> bool {
        !matches!(self, Self::OneToMany { .. })
    }
}

/// Abstract persistence binding of one entity field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnBinding {
    /// Storage kind.
    pub kind: ColumnKind,
    /// Whether the column accepts null.
    pub nullable: bool,
    /// Whether the column is indexed.
    pub indexed: bool,
}

/// Returns the column kind of a scalar.
#[must_use]
pub const fn column_kind(scalar: ScalarType) -> ColumnKind {
    match scalar {
        ScalarType::Id => ColumnKind::PrimaryKey,
        ScalarType::String => ColumnKind::Text,
        ScalarType::Int => ColumnKind::Integer,
        ScalarType::Float => ColumnKind::DoublePrecision,
        ScalarType::Boolean => ColumnKind::Boolean,
        ScalarType::DateTime => ColumnKind::TimestampTz,
        ScalarType::BigInt => ColumnKind::Numeric,
        ScalarType::Bytes => ColumnKind::Bytea,
    }
}

/// Returns the column binding of an entity property.
///
/// # Errors
/// Returns `CodegenError::UnsupportedType` for unknown scalars and for
/// lists, which entities cannot persist, and `CodegenError::Schema` when a
/// referenced enum is missing.
pub fn column_binding(model: &Model, prop: &Prop) -> Result<ColumnBinding, CodegenError> {
    let kind = match &prop.ty {
        PropType::Scalar { name } => column_kind(scalar_type(name)?),
        PropType::Enum { name } => ColumnKind::VarChar {
            length: model.enumeration(name)?.max_value_length(),
        },
        PropType::Fk { foreign_entity } => ColumnKind::ManyToOne {
            entity: foreign_entity.clone(),
        },
        PropType::ListRelation { entity, field } => ColumnKind::OneToMany {
            entity: entity.clone(),
            inverse: field.clone(),
        },
        PropType::Object { name } => ColumnKind::Json(JsonTransform::Object(name.clone())),
        PropType::Union { name } => ColumnKind::Json(JsonTransform::Union(name.clone())),
        PropType::List { .. } => {
            return Err(CodegenError::unsupported(prop.ty.kind_name(), "entity property"));
        }
    };

    Ok(ColumnBinding {
        nullable: prop.nullable && kind != ColumnKind::PrimaryKey,
        indexed: matches!(kind, ColumnKind::ManyToOne { .. }),
        kind,
    })
}
