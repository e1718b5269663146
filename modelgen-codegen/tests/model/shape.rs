// Generated by modelgen. Do not edit.

use super::super::marshal;
use super::circle::Circle;
use super::square::Square;

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Square(Square),
}

impl Shape {
    /// Returns the discriminator of the held variant.
    #[must_use]
    pub fn is_type_of(&self) -> &'static str {
        match self {
            Self::Circle(_) => Circle::IS_TYPE_OF,
            Self::Square(_) => Square::IS_TYPE_OF,
        }
    }

    /// Writes the held variant as JSON, discriminator included.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Circle(value) => value.to_json(),
            Self::Square(value) => value.to_json(),
        }
    }
}

impl From<Circle> for Shape {
    fn from(value: Circle) -> Self {
        Self::Circle(value)
    }
}

impl From<Square> for Shape {
    fn from(value: Square) -> Self {
        Self::Square(value)
    }
}

/// Reads a `Shape` from JSON, dispatching on its discriminator.
pub fn shape_from_json(json: &serde_json::Value) -> Result<Shape, marshal::MarshalError> {
    let discriminator = json
        .get(marshal::DISCRIMINATOR)
        .and_then(serde_json::Value::as_str);
    match discriminator {
        Some("Circle") => Circle::new(Some(json)).map(Shape::Circle),
        Some("Square") => Square::new(Some(json)).map(Shape::Square),
        other => Err(marshal::MarshalError::unknown_discriminator("Shape", other)),
    }
}
