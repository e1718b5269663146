//! Union code generation.

use super::imports::ImportRegistry;
use super::{GenContext, GeneratedFile};
use crate::error::CodegenError;
use crate::output::Output;
use modelgen_schema::{Item, Union, naming};

/// Generator for union types and their dispatch functions.
pub struct UnionGenerator<'a> {
    ctx: GenContext<'a>,
}

impl<'a> UnionGenerator<'a> {
    /// Creates a new union generator.
    #[must_use]
    pub fn new(ctx: GenContext<'a>) -> Self {
        Self { ctx }
    }

    /// Generates the file of one union.
    ///
    /// # Arguments
    /// * `name` - Union name
    /// * `union` - Union definition
    ///
    /// Variants may be JSON objects or entities; both carry the
    /// discriminator in their JSON form.
    ///
    /// # Errors
    /// Returns `CodegenError::UnsupportedType` if a variant is neither,
    /// and `CodegenError::Schema` if a variant is missing.
    pub fn generate(&self, name: &str, union: &Union) -> Result<GeneratedFile, CodegenError> {
        for variant in &union.variants {
            match self.ctx.model.item(variant)? {
                Item::Object(_) | Item::Entity(_) => {}
                other => {
                    return Err(CodegenError::unsupported(
                        format!("{} union variant", other.kind()),
                        variant,
                    ));
                }
            }
        }

        let mut imports = ImportRegistry::new(name);
        imports.use_marshal();
        for variant in &union.variants {
            imports.use_model(variant);
        }

        let mut out = Output::new();
        out.doc_comment(union.description.as_deref());
        out.line("#[derive(Debug, Clone, PartialEq)]");
        out.block(format!("pub enum {name}"), |out| {
            for variant in &union.variants {
                out.line(format!("{variant}({variant}),"));
            }
        });
        out.blank();

        out.block(format!("impl {name}"), |out| {
            out.line("/// Returns the discriminator of the held variant.");
            out.line("#[must_use]");
            out.block("pub fn is_type_of(&self) -> &'static str", |out| {
                out.block("match self", |out| {
                    for variant in &union.variants {
                        out.line(format!("Self::{variant}(_) => {variant}::IS_TYPE_OF,"));
                    }
                });
            });
            out.blank();
            out.line("/// Writes the held variant as JSON, discriminator included.");
            out.line("#[must_use]");
            out.block("pub fn to_json(&self) -> serde_json::Value", |out| {
                out.block("match self", |out| {
                    for variant in &union.variants {
                        out.line(format!("Self::{variant}(value) => value.to_json(),"));
                    }
                });
            });
        });

        for variant in &union.variants {
            out.blank();
            out.block(format!("impl From<{variant}> for {name}"), |out| {
                out.block(format!("fn from(value: {variant}) -> Self"), |out| {
                    out.line(format!("Self::{variant}(value)"));
                });
            });
        }
        out.blank();

        out.line(format!(
            "/// Reads a `{name}` from JSON, dispatching on its discriminator."
        ));
        out.block(
            format!(
                "pub fn {}(json: &serde_json::Value) -> Result<{name}, marshal::MarshalError>",
                naming::dispatch_fn_name(name)
            ),
            |out| {
                out.line("let discriminator = json");
                out.indent();
                out.line(".get(marshal::DISCRIMINATOR)");
                out.line(".and_then(serde_json::Value::as_str);");
                out.dedent();
                out.block("match discriminator", |out| {
                    for variant in &union.variants {
                        out.line(format!(
                            "Some(\"{variant}\") => {variant}::new(Some(json)).map({name}::{variant}),"
                        ));
                    }
                    out.line(format!(
                        "other => Err(marshal::MarshalError::unknown_discriminator(\"{name}\", other)),"
                    ));
                });
            },
        );

        let header = imports.render(self.ctx.model)?;
        Ok(GeneratedFile::new(name, header, &out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rust::collect_variants;
    use modelgen_schema::{Entity, Enum, JsonObject, Model};

    fn model() -> Model {
        let mut model = Model::new();
        model.insert("Circle", Item::Object(JsonObject::default()));
        model.insert("Square", Item::Object(JsonObject::default()));
        model.insert("Account", Item::Entity(Entity::default()));
        model
    }

    fn shape(variants: &[&str]) -> Union {
        Union {
            description: Some("A drawable shape".to_string()),
            variants: variants.iter().map(|v| v.to_string()).collect(),
        }
    }

    fn generate(model: &Model, union: &Union) -> Result<GeneratedFile, CodegenError> {
        let variants = collect_variants(model);
        UnionGenerator::new(GenContext::new(model, &variants)).generate("Shape", union)
    }

    #[test]
    fn test_generate_union() {
        let file = generate(&model(), &shape(&["Circle", "Square"])).expect("generate");
        let code = &file.content;

        assert!(code.contains("use super::super::marshal;\n"));
        assert!(code.contains("use super::circle::Circle;\n"));
        assert!(code.contains("use super::square::Square;\n"));
        assert!(code.contains("/// A drawable shape\n"));
        assert!(code.contains("pub enum Shape {\n    Circle(Circle),\n    Square(Square),\n}"));
        assert!(code.contains("impl From<Square> for Shape"));
        assert!(code.contains(
            "pub fn shape_from_json(json: &serde_json::Value) -> Result<Shape, marshal::MarshalError>"
        ));
        assert!(code.contains("Some(\"Circle\") => Circle::new(Some(json)).map(Shape::Circle),"));
        assert!(code.contains(
            "other => Err(marshal::MarshalError::unknown_discriminator(\"Shape\", other)),"
        ));
    }

    #[test]
    fn test_dispatch_covers_every_variant() {
        let file = generate(&model(), &shape(&["Circle", "Square"])).expect("generate");
        for variant in ["Circle", "Square"] {
            assert!(file.content.contains(&format!("Some(\"{variant}\") =>")));
            assert!(
                file.content
                    .contains(&format!("Self::{variant}(value) => value.to_json(),"))
            );
        }
    }

    #[test]
    fn test_entity_variant_dispatch() {
        let file = generate(&model(), &shape(&["Circle", "Account"])).expect("generate");
        let code = &file.content;

        assert!(code.contains("use super::account::Account;\n"));
        assert!(code.contains("    Account(Account),\n"));
        assert!(code.contains("Self::Account(_) => Account::IS_TYPE_OF,"));
        assert!(code.contains("Some(\"Account\") => Account::new(Some(json)).map(Shape::Account),"));
    }

    #[test]
    fn test_enum_variant_is_unsupported() {
        let mut model = model();
        model.insert("Status", Item::Enum(Enum::default()));
        let err = generate(&model, &shape(&["Circle", "Status"])).unwrap_err();
        assert!(matches!(
            err,
            CodegenError::UnsupportedType { ref name, .. } if name == "Status"
        ));
    }

    #[test]
    fn test_missing_variant() {
        let err = generate(&model(), &shape(&["Triangle"])).unwrap_err();
        assert!(matches!(err, CodegenError::Schema(_)));
    }
}
