//! Marshal expression builders.
//!
//! Builds the Rust expressions that read a property from its JSON form and
//! write it back. Every builder registers the symbols its expression needs
//! with the file's [`ImportRegistry`].
//!
//! Read expressions take an expression of type `&serde_json::Value` and
//! evaluate to `Result<T, MarshalError>` (`Result<Option<T>, _>` when
//! nullable). Write expressions take `&T` (`Option<&T>` when nullable) and
//! evaluate to `serde_json::Value`.

use super::imports::ImportRegistry;
use super::types::scalar_type;
use crate::error::CodegenError;
use modelgen_schema::{Prop, PropType, ScalarType, naming};

/// Returns the module of the runtime marshal helpers handling a scalar.
#[must_use]
pub const fn scalar_module(scalar: ScalarType) -> &'static str {
    match scalar {
        ScalarType::Id => "id",
        ScalarType::String => "string",
        ScalarType::Int => "int",
        ScalarType::Float => "float",
        ScalarType::Boolean => "boolean",
        ScalarType::DateTime => "datetime",
        ScalarType::BigInt => "bigint",
        ScalarType::Bytes => "bytes",
    }
}

/// Builds the expression reading `prop` from the JSON value `exp`.
///
/// # Errors
/// Returns `CodegenError::UnsupportedType` for unknown scalars and for
/// list-relations, which have no JSON form.
pub fn marshal_from(
    imports: &mut ImportRegistry,
    prop: &Prop,
    exp: &str,
) -> Result<String, CodegenError> {
    if prop.nullable {
        imports.use_marshal();
        let inner = marshal_from_type(imports, &prop.ty, "json")?;
        return Ok(format!("marshal::nullable({exp}, |json| {inner})"));
    }
    marshal_from_type(imports, &prop.ty, exp)
}

fn marshal_from_type(
    imports: &mut ImportRegistry,
    ty: &PropType,
    exp: &str,
) -> Result<String, CodegenError> {
    let code = match ty {
        PropType::Scalar { name } => {
            imports.use_marshal();
            let module = scalar_module(scalar_type(name)?);
            format!("marshal::{module}::from_json({exp})")
        }
        PropType::Enum { name } => {
            imports.use_marshal();
            imports.use_model(name);
            format!("marshal::enumeration::from_json::<{name}>({exp})")
        }
        PropType::Fk { .. } => {
            imports.use_marshal();
            format!("marshal::string::from_json({exp})")
        }
        PropType::Object { name } => {
            imports.use_marshal();
            imports.use_model(name);
            format!("marshal::non_null({exp}).and_then(|json| {name}::new(Some(json)))")
        }
        PropType::Union { name } => {
            imports.use_model(name);
            format!("{}({exp})", naming::dispatch_fn_name(name))
        }
        PropType::List { item } => {
            imports.use_marshal();
            let inner = marshal_from(imports, item, "json")?;
            format!("marshal::from_list({exp}, |json| {inner})")
        }
        PropType::ListRelation { entity, .. } => {
            return Err(CodegenError::unsupported(ty.kind_name(), entity));
        }
    };
    Ok(code)
}

/// Builds the expression writing `prop`, read through `exp`, as JSON.
///
/// # Errors
/// Returns `CodegenError::UnsupportedType` for unknown scalars and for
/// list-relations.
pub fn marshal_to(
    imports: &mut ImportRegistry,
    prop: &Prop,
    exp: &str,
) -> Result<String, CodegenError> {
    if prop.nullable {
        let inner = marshal_to_type(imports, &prop.ty, "value")?;
        return Ok(format!(
            "{exp}.map_or(serde_json::Value::Null, |value| {inner})"
        ));
    }
    marshal_to_type(imports, &prop.ty, exp)
}

fn marshal_to_type(
    imports: &mut ImportRegistry,
    ty: &PropType,
    exp: &str,
) -> Result<String, CodegenError> {
    let code = match ty {
        PropType::Scalar { name } => match scalar_type(name)? {
            ScalarType::Id | ScalarType::String => {
                format!("serde_json::Value::from({exp}.as_str())")
            }
            ScalarType::Int | ScalarType::Float | ScalarType::Boolean => {
                format!("serde_json::Value::from(*{exp})")
            }
            scalar @ (ScalarType::DateTime | ScalarType::BigInt | ScalarType::Bytes) => {
                imports.use_marshal();
                format!("marshal::{}::to_json({exp})", scalar_module(scalar))
            }
        },
        PropType::Fk { .. } => format!("serde_json::Value::from({exp}.as_str())"),
        PropType::Enum { name } => {
            imports.use_model(name);
            format!("serde_json::Value::from({exp}.as_str())")
        }
        PropType::Object { name } | PropType::Union { name } => {
            imports.use_model(name);
            format!("{exp}.to_json()")
        }
        PropType::List { item } => {
            let value = if item.nullable { "value.as_ref()" } else { "value" };
            let inner = marshal_to(imports, item, value)?;
            format!("serde_json::Value::Array({exp}.iter().map(|value| {inner}).collect())")
        }
        PropType::ListRelation { entity, .. } => {
            return Err(CodegenError::unsupported(ty.kind_name(), entity));
        }
    };
    Ok(code)
}
