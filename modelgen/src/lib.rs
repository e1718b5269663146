//! # modelgen
//!
//! Model-driven generator of typed data layers for Rust.
//!
//! Given a schema of entities, JSON value objects, unions and enums,
//! modelgen writes a module tree holding:
//!
//! - **Entities** with an explicit column registration table
//! - **Value objects** reading and writing their JSON form
//! - **Unions** dispatching on the `isTypeOf` discriminator
//! - **Enums** mapping every member to its declared name
//!
//! ## Quick Start
//!
//! ```ignore
//! use modelgen::prelude::*;
//!
//! let config = GeneratorConfig::new()
//!     .with_schema_path("schema.xml")
//!     .with_output_dir("src/generated");
//! let tree = run(&config)?;
//! println!("generated {} files", tree.files.len());
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Model types, XML schema loading and validation
//! - [`codegen`] - Code generation and the output tree

pub mod prelude;

/// Model types, XML schema loading and validation.
pub mod schema {
    pub use modelgen_schema::*;
}

/// Code generation from modelgen schemas.
pub mod codegen {
    pub use modelgen_codegen::*;
}
