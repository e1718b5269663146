//! Prelude module for convenient imports.
//!
//! ```ignore
//! use modelgen::prelude::*;
//! ```

// Schema types
pub use modelgen_schema::{
    Entity, Enum, Item, ItemKind, JsonObject, Model, ParseError, Prop, PropType, ScalarType,
    SchemaError, Union, load_model,
};

// Codegen types
pub use modelgen_codegen::{
    CodegenError, GeneratedTree, Generator, GeneratorConfig, generate_from_file,
    generate_from_xml, run,
};
