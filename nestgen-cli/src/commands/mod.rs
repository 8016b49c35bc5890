//! CLI command implementations

pub mod generate;
pub mod list;

pub use generate::GenerateCommand;
pub use list::ListCommand;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use nestgen::schema::Schema;
use std::path::Path;

/// Read the schema behind a spinner
fn load_schema(path: &Path) -> Result<Schema> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("Failed to set progress style")?,
    );
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner.set_message(format!("Reading schema {}...", path.display()));

    let schema = Schema::load(path);
    spinner.finish_and_clear();

    schema.with_context(|| format!("Failed to read schema: {}", path.display()))
}
