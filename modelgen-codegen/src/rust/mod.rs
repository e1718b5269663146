//! Rust code generation modules.

pub mod entities;
pub mod enums;
pub mod imports;
pub mod marshal;
pub mod objects;
pub mod types;
pub mod unions;

pub use entities::EntityGenerator;
pub use enums::EnumGenerator;
pub use imports::ImportRegistry;
pub use objects::ObjectGenerator;
pub use unions::UnionGenerator;

use crate::error::CodegenError;
use crate::output::Output;
use modelgen_schema::{Item, Model, naming};
use std::collections::{HashMap, HashSet};

/// First line of every generated model file.
pub const BANNER: &str = "// Generated by modelgen. Do not edit.";

/// Read-only state shared by the generators of one run.
#[derive(Debug, Clone, Copy)]
pub struct GenContext<'a> {
    /// The model being generated.
    pub model: &'a Model,
    /// Names of the items declared as union variants.
    pub variants: &'a HashSet<String>,
}

impl<'a> GenContext<'a> {
    /// Creates a new context.
    #[must_use]
    pub fn new(model: &'a Model, variants: &'a HashSet<String>) -> Self {
        Self { model, variants }
    }

    /// Returns true if the named item is a variant of some union.
    #[must_use]
    pub fn is_variant(&self, name: &str) -> bool {
        self.variants.contains(name)
    }
}

/// Collects the names of all union variants in the model.
#[must_use]
pub fn collect_variants(model: &Model) -> HashSet<String> {
    model
        .iter()
        .filter_map(|(_, item)| match item {
            Item::Union(union) => Some(union.variants.iter().cloned()),
            _ => None,
        })
        .flatten()
        .collect()
}

/// Identifiers already emitted into one Rust scope, keyed to the schema
/// name each was derived from.
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    scope: String,
    claimed: HashMap<String, String>,
}

impl Namespace {
    /// Creates an empty namespace. `scope` names it in error messages.
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            claimed: HashMap::new(),
        }
    }

    /// Claims `ident` for the schema name `source`.
    ///
    /// # Errors
    /// Returns `CodegenError::Generation` if a different schema name
    /// already produced the same identifier.
    pub fn claim(&mut self, ident: &str, source: &str) -> Result<(), CodegenError> {
        match self.claimed.get(ident) {
            Some(previous) if previous != source => Err(CodegenError::generation(format!(
                "{}: '{previous}' and '{source}' both generate '{ident}'",
                self.scope
            ))),
            Some(_) => Ok(()),
            None => {
                self.claimed.insert(ident.to_string(), source.to_string());
                Ok(())
            }
        }
    }
}

/// A generated model file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Item name.
    pub item: String,
    /// Module name declared in the barrel.
    pub module: String,
    /// Path relative to the output root.
    pub path: String,
    /// File content.
    pub content: String,
}

impl GeneratedFile {
    /// Assembles a file from its rendered imports and buffered body.
    #[must_use]
    pub fn new(item: &str, imports: Vec<String>, body: &Output) -> Self {
        let module = naming::module_name(item);
        let mut header = vec![BANNER.to_string()];
        if !imports.is_empty() {
            header.push(String::new());
            header.extend(imports);
        }
        Self {
            item: item.to_string(),
            path: format!("model/{}.rs", module.trim_start_matches("r#")),
            content: body.render(&header),
            module,
        }
    }

    /// Returns the barrel lines exporting this file.
    #[must_use]
    pub fn barrel_lines(&self) -> [String; 2] {
        [
            format!("mod {};", self.module),
            format!("pub use {}::*;", self.module),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelgen_schema::{JsonObject, Union};

    #[test]
    fn test_collect_variants() {
        let mut model = Model::new();
        model.insert("Circle", Item::Object(JsonObject::default()));
        model.insert(
            "Shape",
            Item::Union(Union {
                description: None,
                variants: vec!["Circle".to_string()],
            }),
        );
        let variants = collect_variants(&model);
        let ctx = GenContext::new(&model, &variants);
        assert!(ctx.is_variant("Circle"));
        assert!(!ctx.is_variant("Shape"));
    }

    #[test]
    fn test_generated_file_layout() {
        let mut body = Output::new();
        body.line("pub struct TransferEvent;");
        let file = GeneratedFile::new(
            "TransferEvent",
            vec!["use super::account::Account;".to_string()],
            &body,
        );
        assert_eq!(file.path, "model/transfer_event.rs");
        assert_eq!(file.module, "transfer_event");
        assert_eq!(
            file.content,
            format!("{BANNER}\n\nuse super::account::Account;\n\npub struct TransferEvent;\n")
        );
        assert_eq!(
            file.barrel_lines(),
            ["mod transfer_event;", "pub use transfer_event::*;"]
        );
    }

    #[test]
    fn test_keyword_module_name() {
        let file = GeneratedFile::new("Type", Vec::new(), &Output::new());
        assert_eq!(file.module, "r#type");
        assert_eq!(file.path, "model/type.rs");

        let file = GeneratedFile::new("Self", Vec::new(), &Output::new());
        assert_eq!(file.module, "self_");
        assert_eq!(file.path, "model/self_.rs");
    }

    #[test]
    fn test_namespace_collision() {
        let mut names = Namespace::new("model");
        names.claim("http_log", "HttpLog").expect("first claim");
        names.claim("http_log", "HttpLog").expect("same source");
        let err = names.claim("http_log", "HTTPLog").unwrap_err();
        assert!(matches!(err, CodegenError::Generation { .. }));
        assert_eq!(
            err.to_string(),
            "generation error: model: 'HttpLog' and 'HTTPLog' both generate 'http_log'"
        );
    }
}
