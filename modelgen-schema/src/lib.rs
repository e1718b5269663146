//! # modelgen Schema
//!
//! Schema model and loader for the modelgen code generator.
//!
//! This crate provides:
//! - The [`Model`] of entities, JSON objects, unions and enums
//! - An XML schema loader resolving property type expressions
//! - Model validation
//! - Identifier conversions shared with the generators

pub mod error;
pub mod naming;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use parser::{ID_PROPERTY, parse_model, parse_model_file};
pub use types::{
    Entity, Enum, Item, ItemKind, JsonObject, Model, Prop, PropType, ScalarType, Union,
};
pub use validation::validate_model;

/// Loads and validates a schema file.
///
/// # Errors
/// Returns `SchemaError` if the file cannot be parsed or fails validation.
pub fn load_model(path: &std::path::Path) -> Result<Model, SchemaError> {
    let model = parse_model_file(path)?;
    validate_model(&model)?;
    Ok(model)
}
