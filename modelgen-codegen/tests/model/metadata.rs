// Generated by modelgen. Do not edit.

use super::super::marshal;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    tag: Option<String>,
}

impl Metadata {
    /// Reads a `Metadata` from a JSON record. `None` yields an empty value.
    ///
    /// # Errors
    /// Returns `MarshalError` if a property has the wrong shape.
    pub fn new(json: Option<&serde_json::Value>) -> Result<Self, marshal::MarshalError> {
        let mut this = Self::default();
        let Some(json) = json else {
            return Ok(this);
        };
        this.tag = marshal::nullable(marshal::field(json, "tag"), |json| marshal::string::from_json(json))?;
        Ok(this)
    }

    #[must_use]
    pub fn tag(&self) -> Option<&String> {
        self.tag.as_ref()
    }

    pub fn set_tag(&mut self, value: Option<String>) {
        self.tag = value;
    }

    /// Writes this value as a JSON record.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let mut json = serde_json::Map::new();
        json.insert("tag".to_string(), self.tag().map_or(serde_json::Value::Null, |value| serde_json::Value::from(value.as_str())));
        serde_json::Value::Object(json)
    }
}
