//! Generation orchestrator.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::output::{OutDir, Output};
use crate::resource::{self, Resource};
use crate::rust::{
    BANNER, EntityGenerator, EnumGenerator, GenContext, GeneratedFile, Namespace,
    ObjectGenerator, UnionGenerator, collect_variants,
};
use modelgen_schema::{Item, Model};
use std::collections::HashSet;

/// Module declared by the root module for the barrel.
pub const MODEL_MODULE: &str = "model";

/// Main code generator.
pub struct Generator<'a> {
    model: &'a Model,
    variants: HashSet<String>,
}

impl<'a> Generator<'a> {
    /// Creates a new generator for the given model.
    #[must_use]
    pub fn new(model: &'a Model) -> Self {
        Self {
            model,
            variants: collect_variants(model),
        }
    }

    /// Generates every file of the output tree in memory.
    ///
    /// Items are visited in declaration order; the barrel follows the same
    /// order.
    ///
    /// # Errors
    /// Returns `CodegenError` if any item cannot be generated, or
    /// `CodegenError::Generation` if two items map to the same module.
    /// Nothing is written in that case.
    pub fn generate(&self) -> Result<GeneratedTree, CodegenError> {
        let ctx = GenContext::new(self.model, &self.variants);
        let mut files = Vec::with_capacity(self.model.len());
        let mut modules = Namespace::new(MODEL_MODULE);
        let mut needs_marshal = false;

        for (name, item) in self.model.iter() {
            tracing::debug!("Generating {} {}", item.kind(), name);
            let file = match item {
                Item::Entity(entity) => EntityGenerator::new(ctx).generate(name, entity)?,
                Item::Object(object) => {
                    needs_marshal = true;
                    ObjectGenerator::new(ctx).generate(name, object)?
                }
                Item::Union(union) => {
                    needs_marshal = true;
                    UnionGenerator::new(ctx).generate(name, union)?
                }
                Item::Enum(enumeration) => EnumGenerator::new().generate(name, enumeration)?,
            };
            modules.claim(&file.module, name)?;
            files.push(file);
        }

        let mut resources = vec![resource::ORM, resource::DB_CONFIG];
        if needs_marshal {
            resources.push(resource::MARSHAL);
        }

        Ok(GeneratedTree { files, resources })
    }
}

/// The output of one generation run, held in memory until written.
#[derive(Debug, Clone)]
pub struct GeneratedTree {
    /// One file per model item, in declaration order.
    pub files: Vec<GeneratedFile>,
    /// Static support modules copied into the root.
    pub resources: Vec<Resource>,
}

impl GeneratedTree {
    /// Returns the file generated for the named item.
    #[must_use]
    pub fn file(&self, item: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|file| file.item == item)
    }

    /// Returns true if the named support module is part of the tree.
    #[must_use]
    pub fn has_resource(&self, module: &str) -> bool {
        self.resources.iter().any(|resource| resource.module == module)
    }

    /// Renders the barrel module re-exporting every generated file.
    #[must_use]
    pub fn barrel(&self) -> String {
        let mut out = Output::new();
        for file in &self.files {
            for line in file.barrel_lines() {
                out.line(line);
            }
        }
        out.render(&[BANNER.to_string()])
    }

    /// Renders the root module declaring the barrel and the support modules.
    #[must_use]
    pub fn root_module(&self) -> String {
        let mut modules: Vec<&str> = self
            .resources
            .iter()
            .map(|resource| resource.module)
            .chain(std::iter::once(MODEL_MODULE))
            .collect();
        modules.sort_unstable();

        let mut out = Output::new();
        for module in modules {
            out.line(format!("pub mod {module};"));
        }
        out.render(&[BANNER.to_string()])
    }

    /// Replaces the contents of `out_dir` with this tree.
    ///
    /// # Errors
    /// Returns an IO error if the directory cannot be reset or a file
    /// cannot be written. A failure part way leaves a partial tree.
    pub fn write(&self, out_dir: &OutDir) -> Result<(), CodegenError> {
        out_dir.reset()?;

        for resource in &self.resources {
            tracing::debug!("Copying {}", resource.file_name);
            out_dir.add_resource(resource)?;
        }
        for file in &self.files {
            out_dir.write(&file.path, &file.content)?;
        }
        out_dir.write(format!("{MODEL_MODULE}.rs"), &self.barrel())?;
        out_dir.write("mod.rs", &self.root_module())?;
        Ok(())
    }
}

/// Runs a full generation: load, validate, generate and write.
///
/// # Errors
/// Returns `CodegenError` if the schema cannot be loaded, an item cannot
/// be generated or the output cannot be written.
pub fn run(config: &GeneratorConfig) -> Result<GeneratedTree, CodegenError> {
    tracing::info!("Loading schema from {}", config.schema_path.display());
    let model = modelgen_schema::load_model(&config.schema_path)?;

    let tree = Generator::new(&model).generate()?;
    tree.write(&OutDir::new(&config.output_dir))?;

    tracing::info!(
        "Generated {} items into {}",
        tree.files.len(),
        config.output_dir.display()
    );
    Ok(tree)
}
