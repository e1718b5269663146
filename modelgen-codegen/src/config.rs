//! Generator configuration.

use std::path::{Path, PathBuf};

/// Default location of the schema document.
pub const DEFAULT_SCHEMA_PATH: &str = "schema.xml";

/// Default root of the generated module tree.
pub const DEFAULT_OUTPUT_DIR: &str = "src/generated";

/// Environment variable overriding the schema path.
pub const SCHEMA_ENV: &str = "MODELGEN_SCHEMA";

/// Environment variable overriding the output directory.
pub const OUTPUT_DIR_ENV: &str = "MODELGEN_OUT_DIR";

/// Paths used by a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Schema document to load.
    pub schema_path: PathBuf,
    /// Output root; destroyed and recreated on every run.
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            schema_path: PathBuf::from(DEFAULT_SCHEMA_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl GeneratorConfig {
    /// Creates a configuration with the default paths.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration from the default paths, overridden by
    /// `MODELGEN_SCHEMA` and `MODELGEN_OUT_DIR` when set.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(path) = lookup(SCHEMA_ENV).filter(|v| !v.is_empty()) {
            config.schema_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(OUTPUT_DIR_ENV).filter(|v| !v.is_empty()) {
            config.output_dir = PathBuf::from(path);
        }
        config
    }

    /// Sets the schema path.
    #[must_use]
    pub fn with_schema_path(mut self, path: impl AsRef<Path>) -> Self {
        self.schema_path = path.as_ref().to_path_buf();
        self
    }

    /// Sets the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.output_dir = path.as_ref().to_path_buf();
        self
    }
}
