//! Entity code generation.

use super::imports::{ImportRegistry, OrmSymbol};
use super::marshal::{marshal_from, marshal_to};
use super::types::{ColumnBinding, ColumnKind, Owner, column_binding, map_type};
use super::{GenContext, GeneratedFile, Namespace};
use crate::error::CodegenError;
use crate::output::Output;
use modelgen_schema::{Entity, Prop, PropType, naming};

/// Generator for persisted entities.
pub struct EntityGenerator<'a> {
    ctx: GenContext<'a>,
}

impl<'a> EntityGenerator<'a> {
    /// Creates a new entity generator.
    #[must_use]
    pub fn new(ctx: GenContext<'a>) -> Self {
        Self { ctx }
    }

    /// Generates the file of one entity.
    ///
    /// The file holds the entity struct, its `Entity` registration table
    /// and the JSON column transforms of its object and union properties.
    /// Entities listed as union variants also get a JSON form carrying the
    /// discriminator.
    ///
    /// # Arguments
    /// * `name` - Entity name
    /// * `entity` - Entity definition
    ///
    /// # Errors
    /// Returns `CodegenError::UnsupportedType` for properties that cannot
    /// be persisted, `CodegenError::Generation` for properties mapping to
    /// the same field and `CodegenError::Schema` for dangling references.
    pub fn generate(&self, name: &str, entity: &Entity) -> Result<GeneratedFile, CodegenError> {
        let mut imports = ImportRegistry::new(name);
        imports.use_orm(&[OrmSymbol::Column, OrmSymbol::ColumnKind, OrmSymbol::Entity]);

        let is_variant = self.ctx.is_variant(name);
        let mut idents = Namespace::new(format!("entity {name}"));
        let mut fields = Vec::with_capacity(entity.properties.len());
        let mut columns = Vec::with_capacity(entity.properties.len());
        let mut json_fields = Vec::new();
        let mut transforms = Output::new();

        for (key, prop) in &entity.properties {
            let binding = column_binding(self.ctx.model, prop)?;
            let ident = naming::field_ident(key);
            idents.claim(&ident, key)?;
            let ty = map_type(Owner::Entity, &prop.ty, binding.nullable)?;
            let stored = Prop::new(prop.ty.clone(), binding.nullable);

            match &prop.ty {
                PropType::Fk { foreign_entity } => imports.use_model(foreign_entity),
                PropType::ListRelation { entity, .. } => imports.use_model(entity),
                PropType::Enum { name } => imports.use_model(name),
                PropType::Object { .. } | PropType::Union { .. } => {
                    json_transforms(&mut transforms, &mut imports, key, &ident, &ty, &stored)?;
                }
                PropType::Scalar { .. } | PropType::List { .. } => {}
            }
            if is_variant {
                json_fields.push(json_field(&mut imports, name, key, &ident, &stored)?);
            }

            fields.push((ident, ty, prop.description.as_deref()));
            columns.push(render_column(key, &binding));
        }

        let mut out = Output::new();
        out.doc_comment(entity.description.as_deref());
        out.line("#[derive(Debug, Clone, PartialEq)]");
        out.block(format!("pub struct {name}"), |out| {
            for (ident, ty, description) in &fields {
                out.doc_comment(*description);
                out.line(format!("pub {ident}: {ty},"));
            }
        });
        out.blank();

        out.block(format!("impl Entity for {name}"), |out| {
            out.line(format!("const NAME: &'static str = \"{name}\";"));
            out.line("const COLUMNS: &'static [Column] = &[");
            out.indent();
            for column in &columns {
                out.line(column);
            }
            out.dedent();
            out.line("];");
        });

        if is_variant || !transforms.is_empty() {
            out.blank();
            out.block(format!("impl {name}"), |out| {
                if is_variant {
                    json_form(out, name, &json_fields);
                    if !transforms.is_empty() {
                        out.blank();
                    }
                }
                for line in transforms.lines() {
                    out.line(line);
                }
            });
        }

        let header = imports.render(self.ctx.model)?;
        Ok(GeneratedFile::new(name, header, &out))
    }
}

/// One field of the JSON form of a union variant entity.
struct JsonField {
    ident: String,
    read: String,
    write: Option<String>,
}

fn json_field(
    imports: &mut ImportRegistry,
    owner: &str,
    key: &str,
    ident: &str,
    prop: &Prop,
) -> Result<JsonField, CodegenError> {
    imports.use_marshal();
    match &prop.ty {
        PropType::Fk { .. } => Err(CodegenError::unsupported(
            prop.ty.kind_name(),
            format!("{owner}.{key}"),
        )),
        PropType::ListRelation { .. } => Ok(JsonField {
            ident: ident.to_string(),
            read: format!("{ident}: Vec::new(),"),
            write: None,
        }),
        _ => {
            let read = marshal_from(imports, prop, &format!("marshal::field(json, {key:?})"))?;
            let value = if prop.nullable {
                format!("{ident}.as_ref()")
            } else {
                ident.to_string()
            };
            let write = marshal_to(imports, prop, &value)?;
            Ok(JsonField {
                ident: ident.to_string(),
                read: format!("{ident}: {read}?,"),
                write: Some(format!("json.insert({key:?}.to_string(), {write});")),
            })
        }
    }
}

/// Writes `IS_TYPE_OF`, `new`, `is_type_of` and `to_json` of a union
/// variant entity. List-relations are derived and stay out of the record.
fn json_form(out: &mut Output, name: &str, fields: &[JsonField]) {
    out.line("/// Discriminator written into the JSON form.");
    out.line(format!("pub const IS_TYPE_OF: &'static str = \"{name}\";"));
    out.blank();

    out.line(format!("/// Reads a `{name}` from a JSON record."));
    out.line("///");
    out.line("/// # Errors");
    out.line("/// Returns `MarshalError` if the record is absent or a property has the");
    out.line("/// wrong shape.");
    out.block(
        "pub fn new(json: Option<&serde_json::Value>) -> Result<Self, marshal::MarshalError>",
        |out| {
            out.line("let Some(json) = json else {");
            out.indent();
            out.line("return Err(marshal::MarshalError::NullValue);");
            out.dedent();
            out.line("};");
            out.line("Ok(Self {");
            out.indent();
            for field in fields {
                out.line(&field.read);
            }
            out.dedent();
            out.line("})");
        },
    );
    out.blank();

    out.line("/// Returns the discriminator written into the JSON form.");
    out.line("#[must_use]");
    out.block("pub fn is_type_of(&self) -> &'static str", |out| {
        out.line("Self::IS_TYPE_OF");
    });
    out.blank();

    let written: Vec<&str> = fields
        .iter()
        .filter(|field| field.write.is_some())
        .map(|field| field.ident.as_str())
        .collect();
    let rest = if written.len() < fields.len() { ", .." } else { "" };

    out.line("/// Writes this entity as a JSON record, discriminator included.");
    out.line("#[must_use]");
    out.block("pub fn to_json(&self) -> serde_json::Value", |out| {
        out.line(format!("let Self {{ {}{rest} }} = self;", written.join(", ")));
        out.line("let mut json = serde_json::Map::new();");
        out.line(
            "json.insert(marshal::DISCRIMINATOR.to_string(), serde_json::Value::from(Self::IS_TYPE_OF));",
        );
        for write in fields.iter().filter_map(|field| field.write.as_ref()) {
            out.line(write);
        }
        out.line("serde_json::Value::Object(json)");
    });
}

/// Renders the Rust expression of a column kind.
#[must_use]
pub fn render_column_kind(kind: &ColumnKind) -> String {
    match kind {
        ColumnKind::PrimaryKey => "ColumnKind::PrimaryKey".to_string(),
        ColumnKind::Text => "ColumnKind::Text".to_string(),
        ColumnKind::Integer => "ColumnKind::Integer".to_string(),
        ColumnKind::DoublePrecision => "ColumnKind::DoublePrecision".to_string(),
        ColumnKind::Boolean => "ColumnKind::Boolean".to_string(),
        ColumnKind::TimestampTz => "ColumnKind::TimestampTz".to_string(),
        ColumnKind::Numeric => "ColumnKind::Numeric".to_string(),
        ColumnKind::Bytea => "ColumnKind::Bytea".to_string(),
        ColumnKind::VarChar { length } => format!("ColumnKind::VarChar({length})"),
        ColumnKind::ManyToOne { entity } => format!("ColumnKind::ManyToOne({entity:?})"),
        ColumnKind::OneToMany { entity, inverse } => {
            format!("ColumnKind::OneToMany {{ entity: {entity:?}, inverse: {inverse:?} }}")
        }
        ColumnKind::Json(_) => "ColumnKind::Jsonb".to_string(),
    }
}

fn render_column(field: &str, binding: &ColumnBinding) -> String {
    format!(
        "Column {{ field: {field:?}, kind: {}, nullable: {}, indexed: {} }},",
        render_column_kind(&binding.kind),
        binding.nullable,
        binding.indexed
    )
}

/// Writes the `<field>_to_column` / `<field>_from_column` pair of a JSON
/// column. Nullable columns map JSON null to `None` before the transform.
fn json_transforms(
    out: &mut Output,
    imports: &mut ImportRegistry,
    key: &str,
    ident: &str,
    ty: &str,
    prop: &Prop,
) -> Result<(), CodegenError> {
    imports.use_marshal();
    let field = naming::to_snake_case(key);
    let write = marshal_to(
        imports,
        prop,
        if prop.nullable { "value.as_ref()" } else { "value" },
    )?;
    let read = marshal_from(imports, prop, "json")?;

    if !out.is_empty() {
        out.blank();
    }
    out.line(format!("/// Writes `{ident}` into its JSON column."));
    out.line("#[must_use]");
    out.block(
        format!("pub fn {field}_to_column(value: &{ty}) -> serde_json::Value"),
        |out| out.line(&write),
    );
    out.blank();
    out.line(format!("/// Reads `{ident}` back from its JSON column."));
    out.line("///");
    out.line("/// # Errors");
    out.line("/// Returns `MarshalError` if the stored document does not match.");
    out.block(
        format!(
            "pub fn {field}_from_column(json: &serde_json::Value) -> Result<{ty}, marshal::MarshalError>"
        ),
        |out| out.line(&read),
    );
    Ok(())
}
