//! List the models declared in the schema

use super::load_schema;
use anyhow::Result;
use console::{style, Emoji};
use nestgen::config::GeneratorConfig;
use nestgen_cli_lib::resolve_schema_path;
use std::path::PathBuf;

static MODEL: Emoji<'_, '_> = Emoji("📦 ", "- ");

pub struct ListCommand {
    config: GeneratorConfig,
    root: PathBuf,
}

impl ListCommand {
    #[must_use]
    pub const fn new(config: GeneratorConfig, root: PathBuf) -> Self {
        Self { config, root }
    }

    pub fn execute(&self) -> Result<()> {
        let schema_path = resolve_schema_path(&self.root, &self.config.schema_path);
        let schema = load_schema(&schema_path)?;

        let names = schema.model_names();
        if names.is_empty() {
            println!("{}", style("No models found in schema").yellow());
            return Ok(());
        }

        println!(
            "{} {}",
            style("Models in").cyan().bold(),
            style(schema_path.display()).dim()
        );
        for name in names {
            println!("  {MODEL}{}", style(name).green());
        }

        Ok(())
    }
}
