//! Command-line overrides applied on top of loaded configuration

use nestgen::config::GeneratorConfig;
use std::path::{Path, PathBuf};

/// Values given on the command line that replace configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// `--schema`
    pub schema_path: Option<PathBuf>,
    /// `--output`
    pub output_root: Option<PathBuf>,
}

impl Overrides {
    /// Apply the overrides, last layer wins
    #[must_use]
    pub fn apply(self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(schema_path) = self.schema_path {
            config.schema_path = schema_path;
        }
        if let Some(output_root) = self.output_root {
            config.output_root = output_root;
        }
        config
    }
}

/// Resolve the schema path against the project root unless it is absolute
#[must_use]
pub fn resolve_schema_path(root: &Path, schema_path: &Path) -> PathBuf {
    if schema_path.is_absolute() {
        schema_path.to_path_buf()
    } else {
        root.join(schema_path)
    }
}
