// Generated by modelgen. Do not edit.

use super::super::marshal::assert_initialized;
use super::super::marshal;

/// A circle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Circle {
    radius: Option<f64>,
}

impl Circle {
    /// Discriminator written into the JSON form.
    pub const IS_TYPE_OF: &'static str = "Circle";

    /// Reads a `Circle` from a JSON record. `None` yields an empty value.
    ///
    /// # Errors
    /// Returns `MarshalError` if a property has the wrong shape.
    pub fn new(json: Option<&serde_json::Value>) -> Result<Self, marshal::MarshalError> {
        let mut this = Self::default();
        let Some(json) = json else {
            return Ok(this);
        };
        this.radius = Some(marshal::float::from_json(marshal::field(json, "radius"))?);
        Ok(this)
    }

    /// Returns the discriminator written into the JSON form.
    #[must_use]
    pub fn is_type_of(&self) -> &'static str {
        Self::IS_TYPE_OF
    }

    #[must_use]
    pub fn radius(&self) -> &f64 {
        assert_initialized(self.radius.as_ref(), "Circle", "radius")
    }

    pub fn set_radius(&mut self, value: f64) {
        self.radius = Some(value);
    }

    /// Writes this value as a JSON record.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let mut json = serde_json::Map::new();
        json.insert(marshal::DISCRIMINATOR.to_string(), serde_json::Value::from(Self::IS_TYPE_OF));
        json.insert("radius".to_string(), serde_json::Value::from(*self.radius()));
        serde_json::Value::Object(json)
    }
}
