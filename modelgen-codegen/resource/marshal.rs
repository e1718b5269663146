//! Conversions between generated model values and their JSON form.
//!
//! Copied verbatim by modelgen into every generated tree that contains JSON
//! objects. Requires `serde_json`, `chrono` and `num-bigint`.

use std::fmt;

use serde_json::Value;

/// Key carrying the variant name of union members.
pub const DISCRIMINATOR: &str = "isTypeOf";

/// Error raised while reading a JSON record into a generated value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarshalError {
    /// The JSON value does not have the expected shape.
    InvalidType {
        /// Expected JSON shape.
        expected: &'static str,
        /// Actual JSON shape.
        found: &'static str,
    },
    /// The JSON value has the right shape but cannot be parsed.
    InvalidValue {
        /// Expected value format.
        expected: &'static str,
        /// Rejected value.
        value: String,
    },
    /// A required value is null or missing.
    NullValue,
    /// A union record names no declared variant.
    UnknownDiscriminator {
        /// Union name.
        union: &'static str,
        /// Discriminator found in the record, if any.
        discriminator: Option<String>,
    },
}

impl MarshalError {
    /// Creates an unknown discriminator error.
    pub fn unknown_discriminator(union: &'static str, discriminator: Option<&str>) -> Self {
        Self::UnknownDiscriminator {
            union,
            discriminator: discriminator.map(str::to_owned),
        }
    }
}

impl fmt::Display for MarshalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidType { expected, found } => {
                write!(f, "expected JSON {expected}, found {found}")
            }
            Self::InvalidValue { expected, value } => {
                write!(f, "invalid {expected}: '{value}'")
            }
            Self::NullValue => f.write_str("unexpected null value"),
            Self::UnknownDiscriminator {
                union,
                discriminator: Some(name),
            } => write!(f, "unknown json object passed as {union}: '{name}'"),
            Self::UnknownDiscriminator {
                union,
                discriminator: None,
            } => write!(f, "unknown json object passed as {union}"),
        }
    }
}

impl std::error::Error for MarshalError {}

/// Panic payload raised when a required property is read before being set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UninitializedAccessError {
    /// Owning type.
    pub owner: &'static str,
    /// Property name.
    pub field: &'static str,
}

impl fmt::Display for UninitializedAccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "uninitialized access: {}.{}", self.owner, self.field)
    }
}

impl std::error::Error for UninitializedAccessError {}

/// Returns the value of a required property.
///
/// # Panics
/// Panics with [`UninitializedAccessError`] if the property was never set.
#[track_caller]
pub fn assert_initialized<'a, T>(
    value: Option<&'a T>,
    owner: &'static str,
    field: &'static str,
) -> &'a T {
    match value {
        Some(value) => value,
        None => panic!("{}", UninitializedAccessError { owner, field }),
    }
}

static NULL: Value = Value::Null;

/// Returns the named member of a JSON record, or null when absent.
pub fn field<'a>(json: &'a Value, key: &str) -> &'a Value {
    json.get(key).unwrap_or(&NULL)
}

/// Rejects null.
pub fn non_null(json: &Value) -> Result<&Value, MarshalError> {
    if json.is_null() {
        Err(MarshalError::NullValue)
    } else {
        Ok(json)
    }
}

/// Maps null to `None`, anything else through `f`.
pub fn nullable<T>(
    json: &Value,
    f: impl FnOnce(&Value) -> Result<T, MarshalError>,
) -> Result<Option<T>, MarshalError> {
    if json.is_null() { Ok(None) } else { f(json).map(Some) }
}

/// Reads a JSON array element by element.
pub fn from_list<T>(
    json: &Value,
    f: impl Fn(&Value) -> Result<T, MarshalError>,
) -> Result<Vec<T>, MarshalError> {
    match json {
        Value::Array(items) => items.iter().map(f).collect(),
        other => Err(invalid_type("array", other)),
    }
}

fn shape(json: &Value) -> &'static str {
    match json {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn invalid_type(expected: &'static str, found: &Value) -> MarshalError {
    MarshalError::InvalidType {
        expected,
        found: shape(found),
    }
}

fn invalid_value(expected: &'static str, value: impl Into<String>) -> MarshalError {
    MarshalError::InvalidValue {
        expected,
        value: value.into(),
    }
}

pub mod string {
    use super::{MarshalError, Value, invalid_type};

    pub fn from_json(json: &Value) -> Result<String, MarshalError> {
        json.as_str()
            .map(str::to_owned)
            .ok_or_else(|| invalid_type("string", json))
    }

    pub fn to_json(value: &str) -> Value {
        Value::from(value)
    }
}

pub mod id {
    use super::{MarshalError, Value};

    pub fn from_json(json: &Value) -> Result<String, MarshalError> {
        super::string::from_json(json)
    }

    pub fn to_json(value: &str) -> Value {
        Value::from(value)
    }
}

pub mod int {
    use super::{MarshalError, Value, invalid_type};

    pub fn from_json(json: &Value) -> Result<i32, MarshalError> {
        json.as_i64()
            .and_then(|value| i32::try_from(value).ok())
            .ok_or_else(|| invalid_type("32-bit integer", json))
    }

    pub fn to_json(value: &i32) -> Value {
        Value::from(*value)
    }
}

pub mod float {
    use super::{MarshalError, Value, invalid_type};

    pub fn from_json(json: &Value) -> Result<f64, MarshalError> {
        json.as_f64().ok_or_else(|| invalid_type("number", json))
    }

    pub fn to_json(value: &f64) -> Value {
        Value::from(*value)
    }
}

pub mod boolean {
    use super::{MarshalError, Value, invalid_type};

    pub fn from_json(json: &Value) -> Result<bool, MarshalError> {
        json.as_bool().ok_or_else(|| invalid_type("boolean", json))
    }

    pub fn to_json(value: &bool) -> Value {
        Value::from(*value)
    }
}

/// Timestamps travel as RFC 3339 strings in UTC with millisecond precision.
pub mod datetime {
    use super::{MarshalError, Value, invalid_value};
    use chrono::{DateTime, SecondsFormat, Utc};

    pub fn from_json(json: &Value) -> Result<DateTime<Utc>, MarshalError> {
        let s = super::string::from_json(json)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|value| value.with_timezone(&Utc))
            .map_err(|_| invalid_value("RFC 3339 timestamp", s))
    }

    pub fn to_json(value: &DateTime<Utc>) -> Value {
        Value::from(value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

/// Arbitrary precision integers travel as decimal strings.
pub mod bigint {
    use super::{MarshalError, Value, invalid_value};
    use num_bigint::BigInt;

    pub fn from_json(json: &Value) -> Result<BigInt, MarshalError> {
        let s = super::string::from_json(json)?;
        s.parse().map_err(|_| invalid_value("decimal integer", s))
    }

    pub fn to_json(value: &BigInt) -> Value {
        Value::from(value.to_string())
    }
}

/// Byte strings travel as `0x`-prefixed lowercase hex.
pub mod bytes {
    use super::{MarshalError, Value, invalid_value};

    pub fn from_json(json: &Value) -> Result<Vec<u8>, MarshalError> {
        let s = super::string::from_json(json)?;
        let hex = match s.strip_prefix("0x") {
            Some(hex) if hex.is_ascii() && hex.len() % 2 == 0 => hex,
            _ => return Err(invalid_value("0x-prefixed hex string", s.as_str())),
        };
        (0..hex.len())
            .step_by(2)
            .map(|i| {
                u8::from_str_radix(&hex[i..i + 2], 16)
                    .map_err(|_| invalid_value("0x-prefixed hex string", s.as_str()))
            })
            .collect()
    }

    pub fn to_json(value: &[u8]) -> Value {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";
        let mut out = String::with_capacity(2 + value.len() * 2);
        out.push_str("0x");
        for byte in value {
            out.push(char::from(DIGITS[usize::from(byte >> 4)]));
            out.push(char::from(DIGITS[usize::from(byte & 0x0f)]));
        }
        Value::from(out)
    }
}

/// Enum members travel as their name.
pub mod enumeration {
    use super::{MarshalError, Value, invalid_value};
    use std::str::FromStr;

    pub fn from_json<T: FromStr>(json: &Value) -> Result<T, MarshalError> {
        let s = super::string::from_json(json)?;
        s.parse().map_err(|_| invalid_value("enum member", s))
    }
}
