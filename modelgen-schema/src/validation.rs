//! Model validation utilities.
//!
//! Checks the structural invariants the generators rely on when they emit
//! references between items.

use crate::error::SchemaError;
use crate::types::{Item, ItemKind, Model};

/// Validates a loaded model.
///
/// # Arguments
/// * `model` - The model to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the issue.
///
/// # Errors
/// Returns `SchemaError` if validation fails.
pub fn validate_model(model: &Model) -> Result<(), SchemaError> {
    for (name, item) in model.iter() {
        match item {
            Item::Enum(e) => {
                if e.values.is_empty() {
                    return Err(SchemaError::validation(format!(
                        "enum '{name}' declares no values"
                    )));
                }
            }
            Item::Union(u) => validate_union(model, name, &u.variants)?,
            Item::Entity(_) | Item::Object(_) => {}
        }
    }
    Ok(())
}

/// Validates that every variant of a union names an entity or object.
fn validate_union(model: &Model, name: &str, variants: &[String]) -> Result<(), SchemaError> {
    if variants.is_empty() {
        return Err(SchemaError::validation(format!(
            "union '{name}' declares no variants"
        )));
    }

    for variant in variants {
        let kind = model.item(variant)?.kind();
        if !matches!(kind, ItemKind::Entity | ItemKind::Object) {
            return Err(SchemaError::KindMismatch {
                name: variant.clone(),
                expected: "entity or object".to_string(),
                found: kind.to_string(),
            });
        }
    }

    Ok(())
}
