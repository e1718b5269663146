// Generated by modelgen. Do not edit.

use super::super::orm::{Column, ColumnKind, Entity};
use super::super::marshal;
use super::status::Status;
use super::drawing::Drawing;

/// An account holding a balance
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: String,
    /// Balance in wei
    pub balance: num_bigint::BigInt,
    pub status: Option<Status>,
    pub drawing: Option<Drawing>,
}

impl Entity for Account {
    const NAME: &'static str = "Account";
    const COLUMNS: &'static [Column] = &[
        Column { field: "id", kind: ColumnKind::PrimaryKey, nullable: false, indexed: false },
        Column { field: "balance", kind: ColumnKind::Numeric, nullable: false, indexed: false },
        Column { field: "status", kind: ColumnKind::VarChar(13), nullable: true, indexed: false },
        Column { field: "drawing", kind: ColumnKind::Jsonb, nullable: true, indexed: false },
    ];
}

impl Account {
    /// Discriminator written into the JSON form.
    pub const IS_TYPE_OF: &'static str = "Account";

    /// Reads a `Account` from a JSON record.
    ///
    /// # Errors
    /// Returns `MarshalError` if the record is absent or a property has the
    /// wrong shape.
    pub fn new(json: Option<&serde_json::Value>) -> Result<Self, marshal::MarshalError> {
        let Some(json) = json else {
            return Err(marshal::MarshalError::NullValue);
        };
        Ok(Self {
            id: marshal::id::from_json(marshal::field(json, "id"))?,
            balance: marshal::bigint::from_json(marshal::field(json, "balance"))?,
            status: marshal::nullable(marshal::field(json, "status"), |json| marshal::enumeration::from_json::<Status>(json))?,
            drawing: marshal::nullable(marshal::field(json, "drawing"), |json| marshal::non_null(json).and_then(|json| Drawing::new(Some(json))))?,
        })
    }

    /// Returns the discriminator written into the JSON form.
    #[must_use]
    pub fn is_type_of(&self) -> &'static str {
        Self::IS_TYPE_OF
    }

    /// Writes this entity as a JSON record, discriminator included.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let Self { id, balance, status, drawing } = self;
        let mut json = serde_json::Map::new();
        json.insert(marshal::DISCRIMINATOR.to_string(), serde_json::Value::from(Self::IS_TYPE_OF));
        json.insert("id".to_string(), serde_json::Value::from(id.as_str()));
        json.insert("balance".to_string(), marshal::bigint::to_json(balance));
        json.insert("status".to_string(), status.as_ref().map_or(serde_json::Value::Null, |value| serde_json::Value::from(value.as_str())));
        json.insert("drawing".to_string(), drawing.as_ref().map_or(serde_json::Value::Null, |value| value.to_json()));
        serde_json::Value::Object(json)
    }

    /// Writes `drawing` into its JSON column.
    #[must_use]
    pub fn drawing_to_column(value: &Option<Drawing>) -> serde_json::Value {
        value.as_ref().map_or(serde_json::Value::Null, |value| value.to_json())
    }

    /// Reads `drawing` back from its JSON column.
    ///
    /// # Errors
    /// Returns `MarshalError` if the stored document does not match.
    pub fn drawing_from_column(json: &serde_json::Value) -> Result<Option<Drawing>, marshal::MarshalError> {
        marshal::nullable(json, |json| marshal::non_null(json).and_then(|json| Drawing::new(Some(json))))
    }
}
