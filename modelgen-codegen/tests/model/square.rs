// Generated by modelgen. Do not edit.

use super::super::marshal::assert_initialized;
use super::super::marshal;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Square {
    side: Option<i32>,
    created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Square {
    /// Discriminator written into the JSON form.
    pub const IS_TYPE_OF: &'static str = "Square";

    /// Reads a `Square` from a JSON record. `None` yields an empty value.
    ///
    /// # Errors
    /// Returns `MarshalError` if a property has the wrong shape.
    pub fn new(json: Option<&serde_json::Value>) -> Result<Self, marshal::MarshalError> {
        let mut this = Self::default();
        let Some(json) = json else {
            return Ok(this);
        };
        this.side = Some(marshal::int::from_json(marshal::field(json, "side"))?);
        this.created_at = marshal::nullable(marshal::field(json, "createdAt"), |json| marshal::datetime::from_json(json))?;
        Ok(this)
    }

    /// Returns the discriminator written into the JSON form.
    #[must_use]
    pub fn is_type_of(&self) -> &'static str {
        Self::IS_TYPE_OF
    }

    #[must_use]
    pub fn side(&self) -> &i32 {
        assert_initialized(self.side.as_ref(), "Square", "side")
    }

    pub fn set_side(&mut self, value: i32) {
        self.side = Some(value);
    }

    #[must_use]
    pub fn created_at(&self) -> Option<&chrono::DateTime<chrono::Utc>> {
        self.created_at.as_ref()
    }

    pub fn set_created_at(&mut self, value: Option<chrono::DateTime<chrono::Utc>>) {
        self.created_at = value;
    }

    /// Writes this value as a JSON record.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let mut json = serde_json::Map::new();
        json.insert(marshal::DISCRIMINATOR.to_string(), serde_json::Value::from(Self::IS_TYPE_OF));
        json.insert("side".to_string(), serde_json::Value::from(*self.side()));
        json.insert("createdAt".to_string(), self.created_at().map_or(serde_json::Value::Null, |value| marshal::datetime::to_json(value)));
        serde_json::Value::Object(json)
    }
}
