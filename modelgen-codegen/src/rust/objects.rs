//! JSON value object code generation.

use super::imports::ImportRegistry;
use super::marshal::{marshal_from, marshal_to};
use super::types::{Owner, map_type};
use super::{GenContext, GeneratedFile, Namespace};
use crate::error::CodegenError;
use crate::output::Output;
use modelgen_schema::{JsonObject, Prop, naming};

/// Methods every generated object defines, which properties may not shadow.
const RESERVED_METHODS: &[&str] = &["new", "to_json", "is_type_of"];

/// One property prepared for emission.
struct Field<'p> {
    key: &'p str,
    ident: String,
    setter: String,
    ty: String,
    prop: &'p Prop,
}

/// Generator for JSON value objects.
pub struct ObjectGenerator<'a> {
    ctx: GenContext<'a>,
}

impl<'a> ObjectGenerator<'a> {
    /// Creates a new object generator.
    #[must_use]
    pub fn new(ctx: GenContext<'a>) -> Self {
        Self { ctx }
    }

    /// Generates the file of one JSON object.
    ///
    /// Every property is backed by an `Option` so a value can be built empty
    /// and filled through setters. Reading a required property that was
    /// never set panics.
    ///
    /// # Arguments
    /// * `name` - Object name
    /// * `object` - Object definition
    ///
    /// # Errors
    /// Returns `CodegenError::UnsupportedType` for property types without a
    /// JSON form and `CodegenError::Generation` for properties clashing
    /// with generated methods or with each other.
    pub fn generate(&self, name: &str, object: &JsonObject) -> Result<GeneratedFile, CodegenError> {
        let mut imports = ImportRegistry::new(name);
        imports.use_marshal();

        let fields = object
            .properties
            .iter()
            .map(|(key, prop)| field(name, key, prop))
            .collect::<Result<Vec<_>, _>>()?;
        let mut methods = Namespace::new(format!("object {name}"));
        for field in &fields {
            methods.claim(&field.ident, field.key)?;
            methods.claim(&field.setter, field.key)?;
        }

        let mut reads = Vec::with_capacity(fields.len());
        let mut writes = Vec::with_capacity(fields.len());
        for field in &fields {
            let read = marshal_from(
                &mut imports,
                field.prop,
                &format!("marshal::field(json, {:?})", field.key),
            )?;
            reads.push(if field.prop.nullable {
                format!("this.{} = {read}?;", field.ident)
            } else {
                format!("this.{} = Some({read}?);", field.ident)
            });
            let write = marshal_to(&mut imports, field.prop, &format!("self.{}()", field.ident))?;
            writes.push(format!("json.insert({:?}.to_string(), {write});", field.key));
        }
        if fields.iter().any(|field| !field.prop.nullable) {
            imports.use_assert();
        }

        let is_variant = self.ctx.is_variant(name);

        let mut out = Output::new();
        out.doc_comment(object.description.as_deref());
        out.line("#[derive(Debug, Clone, Default, PartialEq)]");
        if fields.is_empty() {
            out.line(format!("pub struct {name} {{}}"));
        } else {
            out.block(format!("pub struct {name}"), |out| {
                for field in &fields {
                    out.line(format!("{}: Option<{}>,", field.ident, field.ty));
                }
            });
        }
        out.blank();

        out.block(format!("impl {name}"), |out| {
            if is_variant {
                out.line("/// Discriminator written into the JSON form.");
                out.line(format!("pub const IS_TYPE_OF: &'static str = \"{name}\";"));
                out.blank();
            }

            out.line(format!(
                "/// Reads a `{name}` from a JSON record. `None` yields an empty value."
            ));
            out.line("///");
            out.line("/// # Errors");
            out.line("/// Returns `MarshalError` if a property has the wrong shape.");
            out.block(
                "pub fn new(json: Option<&serde_json::Value>) -> Result<Self, marshal::MarshalError>",
                |out| {
                    if fields.is_empty() {
                        out.line("let _ = json;");
                        out.line("Ok(Self::default())");
                        return;
                    }
                    out.line("let mut this = Self::default();");
                    out.line("let Some(json) = json else {");
                    out.indent();
                    out.line("return Ok(this);");
                    out.dedent();
                    out.line("};");
                    for read in &reads {
                        out.line(read);
                    }
                    out.line("Ok(this)");
                },
            );

            if is_variant {
                out.blank();
                out.line("/// Returns the discriminator written into the JSON form.");
                out.line("#[must_use]");
                out.block("pub fn is_type_of(&self) -> &'static str", |out| {
                    out.line("Self::IS_TYPE_OF");
                });
            }

            for field in &fields {
                out.blank();
                accessors(out, name, field);
            }

            out.blank();
            out.line("/// Writes this value as a JSON record.");
            out.line("#[must_use]");
            out.block("pub fn to_json(&self) -> serde_json::Value", |out| {
                if is_variant || !writes.is_empty() {
                    out.line("let mut json = serde_json::Map::new();");
                } else {
                    out.line("let json = serde_json::Map::new();");
                }
                if is_variant {
                    out.line(
                        "json.insert(marshal::DISCRIMINATOR.to_string(), serde_json::Value::from(Self::IS_TYPE_OF));",
                    );
                }
                for write in &writes {
                    out.line(write);
                }
                out.line("serde_json::Value::Object(json)");
            });
        });

        let header = imports.render(self.ctx.model)?;
        Ok(GeneratedFile::new(name, header, &out))
    }
}

fn field<'p>(owner: &str, key: &'p str, prop: &'p Prop) -> Result<Field<'p>, CodegenError> {
    let ident = naming::field_ident(key);
    if RESERVED_METHODS.contains(&ident.as_str()) {
        return Err(CodegenError::generation(format!(
            "property {owner}.{key} clashes with a generated method"
        )));
    }
    Ok(Field {
        key,
        setter: naming::setter_ident(key),
        ty: map_type(Owner::Object, &prop.ty, false)?,
        ident,
        prop,
    })
}

fn accessors(out: &mut Output, owner: &str, field: &Field<'_>) {
    let Field {
        key,
        ident,
        setter,
        ty,
        prop,
    } = field;

    out.doc_comment(prop.description.as_deref());
    out.line("#[must_use]");
    if prop.nullable {
        out.block(format!("pub fn {ident}(&self) -> Option<&{ty}>"), |out| {
            out.line(format!("self.{ident}.as_ref()"));
        });
        out.blank();
        out.block(format!("pub fn {setter}(&mut self, value: Option<{ty}>)"), |out| {
            out.line(format!("self.{ident} = value;"));
        });
    } else {
        out.block(format!("pub fn {ident}(&self) -> &{ty}"), |out| {
            out.line(format!(
                "assert_initialized(self.{ident}.as_ref(), \"{owner}\", {key:?})"
            ));
        });
        out.blank();
        out.block(format!("pub fn {setter}(&mut self, value: {ty})"), |out| {
            out.line(format!("self.{ident} = Some(value);"));
        });
    }
}
