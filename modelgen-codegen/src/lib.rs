//! # modelgen Codegen
//!
//! Rust code generation from modelgen schemas.
//!
//! This crate provides:
//! - Type mapping from property descriptors to Rust types and column bindings
//! - Entity, JSON object, union and enum generators
//! - The orchestrator writing the generated module tree
//! - The static support modules copied into every tree

pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod resource;
pub mod rust;

pub use config::GeneratorConfig;
pub use error::CodegenError;
pub use generator::{GeneratedTree, Generator, run};
pub use output::{OutDir, Output};

/// Generates the module tree for a schema string, without writing it.
///
/// # Arguments
/// * `xml` - Schema document
///
/// # Returns
/// The generated files and the support modules they need.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation or generation fails.
pub fn generate_from_xml(xml: &str) -> Result<GeneratedTree, CodegenError> {
    let model = modelgen_schema::parse_model(xml)?;
    modelgen_schema::validate_model(&model)?;
    Generator::new(&model).generate()
}

/// Generates the module tree for a schema file, without writing it.
///
/// # Arguments
/// * `path` - Path to the schema document
///
/// # Returns
/// The generated files and the support modules they need.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, validation or generation
/// fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<GeneratedTree, CodegenError> {
    let xml = std::fs::read_to_string(path)?;
    generate_from_xml(&xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_from_xml() {
        let tree = generate_from_xml(
            r#"<schema>
                <enum name="Status"><value name="ACTIVE"/></enum>
            </schema>"#,
        )
        .expect("generate");
        assert_eq!(tree.files.len(), 1);
        assert!(tree.barrel().contains("pub use status::*;"));
        assert!(!tree.has_resource("marshal"));
    }

    #[test]
    fn test_generate_from_xml_rejects_invalid_model() {
        let err = generate_from_xml(
            r#"<schema>
                <union name="Shape"><variant name="Missing"/></union>
            </schema>"#,
        )
        .unwrap_err();
        assert!(matches!(err, CodegenError::Schema(_)));
    }
}
