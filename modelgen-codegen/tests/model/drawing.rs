// Generated by modelgen. Do not edit.

use super::super::marshal::assert_initialized;
use super::super::marshal;
use super::status::Status;
use super::shape::{Shape, shape_from_json};
use super::metadata::Metadata;

/// A drawing with its shapes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Drawing {
    status: Option<Status>,
    owner: Option<String>,
    shapes: Option<Vec<Shape>>,
    weights: Option<Vec<Option<num_bigint::BigInt>>>,
    payload: Option<Vec<u8>>,
    meta: Option<Metadata>,
}

impl Drawing {
    /// Reads a `Drawing` from a JSON record. `None` yields an empty value.
    ///
    /// # Errors
    /// Returns `MarshalError` if a property has the wrong shape.
    pub fn new(json: Option<&serde_json::Value>) -> Result<Self, marshal::MarshalError> {
        let mut this = Self::default();
        let Some(json) = json else {
            return Ok(this);
        };
        this.status = Some(marshal::enumeration::from_json::<Status>(marshal::field(json, "status"))?);
        this.owner = marshal::nullable(marshal::field(json, "owner"), |json| marshal::string::from_json(json))?;
        this.shapes = Some(marshal::from_list(marshal::field(json, "shapes"), |json| shape_from_json(json))?);
        this.weights = marshal::nullable(marshal::field(json, "weights"), |json| marshal::from_list(json, |json| marshal::nullable(json, |json| marshal::bigint::from_json(json))))?;
        this.payload = marshal::nullable(marshal::field(json, "payload"), |json| marshal::bytes::from_json(json))?;
        this.meta = marshal::nullable(marshal::field(json, "meta"), |json| marshal::non_null(json).and_then(|json| Metadata::new(Some(json))))?;
        Ok(this)
    }

    /// Current status
    #[must_use]
    pub fn status(&self) -> &Status {
        assert_initialized(self.status.as_ref(), "Drawing", "status")
    }

    pub fn set_status(&mut self, value: Status) {
        self.status = Some(value);
    }

    /// Identifier of the owning account
    #[must_use]
    pub fn owner(&self) -> Option<&String> {
        self.owner.as_ref()
    }

    pub fn set_owner(&mut self, value: Option<String>) {
        self.owner = value;
    }

    #[must_use]
    pub fn shapes(&self) -> &Vec<Shape> {
        assert_initialized(self.shapes.as_ref(), "Drawing", "shapes")
    }

    pub fn set_shapes(&mut self, value: Vec<Shape>) {
        self.shapes = Some(value);
    }

    #[must_use]
    pub fn weights(&self) -> Option<&Vec<Option<num_bigint::BigInt>>> {
        self.weights.as_ref()
    }

    pub fn set_weights(&mut self, value: Option<Vec<Option<num_bigint::BigInt>>>) {
        self.weights = value;
    }

    #[must_use]
    pub fn payload(&self) -> Option<&Vec<u8>> {
        self.payload.as_ref()
    }

    pub fn set_payload(&mut self, value: Option<Vec<u8>>) {
        self.payload = value;
    }

    #[must_use]
    pub fn meta(&self) -> Option<&Metadata> {
        self.meta.as_ref()
    }

    pub fn set_meta(&mut self, value: Option<Metadata>) {
        self.meta = value;
    }

    /// Writes this value as a JSON record.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let mut json = serde_json::Map::new();
        json.insert("status".to_string(), serde_json::Value::from(self.status().as_str()));
        json.insert("owner".to_string(), self.owner().map_or(serde_json::Value::Null, |value| serde_json::Value::from(value.as_str())));
        json.insert("shapes".to_string(), serde_json::Value::Array(self.shapes().iter().map(|value| value.to_json()).collect()));
        json.insert("weights".to_string(), self.weights().map_or(serde_json::Value::Null, |value| serde_json::Value::Array(value.iter().map(|value| value.as_ref().map_or(serde_json::Value::Null, |value| marshal::bigint::to_json(value))).collect())));
        json.insert("payload".to_string(), self.payload().map_or(serde_json::Value::Null, |value| marshal::bytes::to_json(value)));
        json.insert("meta".to_string(), self.meta().map_or(serde_json::Value::Null, |value| value.to_json()));
        serde_json::Value::Object(json)
    }
}
