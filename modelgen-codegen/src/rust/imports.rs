//! Per-file import tracking.

use crate::error::CodegenError;
use indexmap::IndexSet;
use modelgen_schema::{Item, Model, naming};
use std::collections::BTreeSet;

/// Persistence symbols exported by the `orm` support module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OrmSymbol {
    /// `orm::Column`.
    Column,
    /// `orm::ColumnKind`.
    ColumnKind,
    /// `orm::Entity`.
    Entity,
}

impl OrmSymbol {
    /// Returns the symbol name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Column => "Column",
            Self::ColumnKind => "ColumnKind",
            Self::Entity => "Entity",
        }
    }
}

/// Tracks the symbols a generated file needs and renders its `use` lines.
///
/// Every registration is idempotent. The body of a file is composed first;
/// the header is rendered afterwards from whatever the body registered.
#[derive(Debug, Clone)]
pub struct ImportRegistry {
    owner: String,
    orm: BTreeSet<OrmSymbol>,
    models: IndexSet<String>,
    marshal: bool,
    assert: bool,
}

impl ImportRegistry {
    /// Creates an empty registry for the file generated for `owner`.
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            orm: BTreeSet::new(),
            models: IndexSet::new(),
            marshal: false,
            assert: false,
        }
    }

    /// Registers persistence symbols.
    pub fn use_orm(&mut self, symbols: &[OrmSymbol]) {
        self.orm.extend(symbols.iter().copied());
    }

    /// Registers a model item. References to the owner itself are ignored.
    pub fn use_model(&mut self, name: &str) {
        if name != self.owner {
            self.models.insert(name.to_string());
        }
    }

    /// Registers the marshal module.
    pub fn use_marshal(&mut self) {
        self.marshal = true;
    }

    /// Registers the initialization assertion helper.
    pub fn use_assert(&mut self) {
        self.assert = true;
    }

    /// Returns true if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orm.is_empty() && self.models.is_empty() && !self.marshal && !self.assert
    }

    /// Renders the `use` lines of the file.
    ///
    /// # Errors
    /// Returns `CodegenError::Schema` if a registered item is not in the
    /// model.
    pub fn render(&self, model: &Model) -> Result<Vec<String>, CodegenError> {
        let mut lines = Vec::new();

        if self.assert {
            lines.push("use super::super::marshal::assert_initialized;".to_string());
        }
        if !self.orm.is_empty() {
            let symbols: Vec<&str> = self.orm.iter().map(OrmSymbol::as_str).collect();
            lines.push(format!("use super::super::orm::{{{}}};", symbols.join(", ")));
        }
        if self.marshal {
            lines.push("use super::super::marshal;".to_string());
        }

        for name in &self.models {
            let module = naming::module_name(name);
            let line = match model.item(name)? {
                Item::Union(_) => format!(
                    "use super::{module}::{{{name}, {}}};",
                    naming::dispatch_fn_name(name)
                ),
                Item::Entity(_) | Item::Object(_) | Item::Enum(_) => {
                    format!("use super::{module}::{name};")
                }
            };
            lines.push(line);
        }

        Ok(lines)
    }
}
