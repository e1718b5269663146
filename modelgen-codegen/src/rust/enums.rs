//! Enum code generation.

use super::GeneratedFile;
use crate::error::CodegenError;
use crate::output::Output;
use modelgen_schema::{Enum, naming};

/// Generator for enum definitions.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnumGenerator;

impl EnumGenerator {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Generates the file of one enum.
    ///
    /// Members map to themselves: the variant, its string form and its
    /// JSON form all carry the declared name.
    ///
    /// # Errors
    /// Returns `CodegenError::Generation` if a member name is not a valid
    /// identifier.
    pub fn generate(&self, name: &str, enumeration: &Enum) -> Result<GeneratedFile, CodegenError> {
        let members = enumeration
            .values
            .iter()
            .map(|value| member_ident(name, value).map(|ident| (value.as_str(), ident)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut out = Output::new();
        out.doc_comment(enumeration.description.as_deref());
        out.line("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]");
        out.line("#[allow(non_camel_case_types)]");
        out.block(format!("pub enum {name}"), |out| {
            for (_, ident) in &members {
                out.line(format!("{ident},"));
            }
        });
        out.blank();

        out.block(format!("impl {name}"), |out| {
            out.line("/// Members in declaration order.");
            let values: Vec<String> = members
                .iter()
                .map(|(_, ident)| format!("Self::{ident}"))
                .collect();
            out.line(format!(
                "pub const VALUES: &'static [Self] = &[{}];",
                values.join(", ")
            ));
            out.blank();
            out.line("/// Returns the member name.");
            out.line("#[must_use]");
            out.block("pub const fn as_str(&self) -> &'static str", |out| {
                out.block("match self", |out| {
                    for (value, ident) in &members {
                        out.line(format!("Self::{ident} => \"{value}\","));
                    }
                });
            });
        });
        out.blank();

        out.block(format!("impl std::fmt::Display for {name}"), |out| {
            out.block(
                "fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result",
                |out| out.line("f.write_str(self.as_str())"),
            );
        });
        out.blank();

        out.block(format!("impl std::str::FromStr for {name}"), |out| {
            out.line("type Err = String;");
            out.blank();
            out.block("fn from_str(s: &str) -> Result<Self, Self::Err>", |out| {
                out.block("match s", |out| {
                    for (value, ident) in &members {
                        out.line(format!("\"{value}\" => Ok(Self::{ident}),"));
                    }
                    out.line(format!("other => Err(format!(\"unknown {name} member '{{other}}'\")),"));
                });
            });
        });

        Ok(GeneratedFile::new(name, Vec::new(), &out))
    }
}

fn member_ident(owner: &str, value: &str) -> Result<String, CodegenError> {
    let mut chars = value.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid || value == "_" {
        return Err(CodegenError::generation(format!(
            "enum {owner} member '{value}' is not a valid identifier"
        )));
    }
    Ok(naming::escape_ident(value))
}
