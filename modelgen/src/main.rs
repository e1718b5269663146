//! Generates the model tree of the schema in the working directory.
//!
//! Reads `schema.xml` and writes `src/generated`. `MODELGEN_SCHEMA` and
//! `MODELGEN_OUT_DIR` override both paths; `RUST_LOG` sets the log level.

use anyhow::Context;
use modelgen::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = GeneratorConfig::from_env();
    tracing::debug!(
        "Schema {}, output {}",
        config.schema_path.display(),
        config.output_dir.display()
    );

    run(&config).with_context(|| {
        format!(
            "failed to generate {} from {}",
            config.output_dir.display(),
            config.schema_path.display()
        )
    })?;

    Ok(())
}
