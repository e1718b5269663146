// Generated by modelgen. Do not edit.

use super::super::marshal;
use super::account::Account;
use super::circle::Circle;

#[derive(Debug, Clone, PartialEq)]
pub enum Owner {
    Account(Account),
    Circle(Circle),
}

impl Owner {
    /// Returns the discriminator of the held variant.
    #[must_use]
    pub fn is_type_of(&self) -> &'static str {
        match self {
            Self::Account(_) => Account::IS_TYPE_OF,
            Self::Circle(_) => Circle::IS_TYPE_OF,
        }
    }

    /// Writes the held variant as JSON, discriminator included.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Account(value) => value.to_json(),
            Self::Circle(value) => value.to_json(),
        }
    }
}

impl From<Account> for Owner {
    fn from(value: Account) -> Self {
        Self::Account(value)
    }
}

impl From<Circle> for Owner {
    fn from(value: Circle) -> Self {
        Self::Circle(value)
    }
}

/// Reads a `Owner` from JSON, dispatching on its discriminator.
pub fn owner_from_json(json: &serde_json::Value) -> Result<Owner, marshal::MarshalError> {
    let discriminator = json
        .get(marshal::DISCRIMINATOR)
        .and_then(serde_json::Value::as_str);
    match discriminator {
        Some("Account") => Account::new(Some(json)).map(Owner::Account),
        Some("Circle") => Circle::new(Some(json)).map(Owner::Circle),
        other => Err(marshal::MarshalError::unknown_discriminator("Owner", other)),
    }
}
