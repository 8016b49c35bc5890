//! Configuration management for nestgen
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Command-line flags (applied by the CLI after loading)
//! 2. Environment variables (`NESTGEN_` prefix, `__` separates nested keys)
//! 3. `nestgen.toml` in the project root, or an explicit `--config` file
//! 4. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # nestgen.toml
//! schema_path = "prisma/schema.prisma"
//! output_root = "src/modules"
//!
//! [reserved]
//! identifier = "id"
//! timestamps = ["createdAt", "updatedAt", "deletedAt"]
//! dto_optional = ["customId"]
//!
//! [imports]
//! validator_module = "class-validator"
//! client_module = "generated/prisma"
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use nestgen::config::GeneratorConfig;
//!
//! # fn example() -> nestgen::Result<()> {
//! let config = GeneratorConfig::load(None)?;
//! println!("reading {}", config.schema_path.display());
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file looked up in the project root
pub const DEFAULT_CONFIG_FILE: &str = "nestgen.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "NESTGEN_";

/// Field names that receive fixed treatment during classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReservedNames {
    /// Identifier field; always optional, validated as a UUID
    pub identifier: String,

    /// Timestamp fields; always optional and excluded from search
    pub timestamps: Vec<String>,

    /// Fields forced optional in DTOs only
    pub dto_optional: Vec<String>,
}

impl Default for ReservedNames {
    fn default() -> Self {
        Self {
            identifier: "id".to_string(),
            timestamps: vec![
                "createdAt".to_string(),
                "updatedAt".to_string(),
                "deletedAt".to_string(),
            ],
            dto_optional: vec!["customId".to_string()],
        }
    }
}

impl ReservedNames {
    /// Whether `name` is the identifier field
    #[must_use]
    pub fn is_identifier(&self, name: &str) -> bool {
        self.identifier == name
    }

    /// Whether `name` is one of the timestamp fields
    #[must_use]
    pub fn is_timestamp(&self, name: &str) -> bool {
        self.timestamps.iter().any(|t| t == name)
    }

    /// Whether `name` must carry an optional marker in DTOs
    #[must_use]
    pub fn is_dto_optional(&self, name: &str) -> bool {
        self.dto_optional.iter().any(|t| t == name)
    }
}

/// Module specifiers used in generated import statements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    /// Source of validation decorators
    pub validator_module: String,

    /// Source of generated client types (enums and relations)
    pub client_module: String,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            validator_module: "class-validator".to_string(),
            client_module: "generated/prisma".to_string(),
        }
    }
}

/// Complete generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Schema location, relative to the project root
    pub schema_path: PathBuf,

    /// Directory that receives one subdirectory per model
    pub output_root: PathBuf,

    /// Reserved field names
    pub reserved: ReservedNames,

    /// Import module specifiers
    pub imports: ImportSettings,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            schema_path: PathBuf::from("prisma/schema.prisma"),
            output_root: PathBuf::from("src/modules"),
            reserved: ReservedNames::default(),
            imports: ImportSettings::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from defaults, a TOML file and the environment
    ///
    /// When `path` is `None`, `./nestgen.toml` is used if present.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named file is missing, or if any
    /// source holds values of the wrong shape.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_for_project(Path::new("."), path)
    }

    /// Load configuration for the project rooted at `root`
    ///
    /// When `path` is `None`, `<root>/nestgen.toml` is used if present. An
    /// explicit `path` is used as given.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named file is missing, or if any
    /// source holds values of the wrong shape.
    pub fn load_for_project(root: &Path, path: Option<&Path>) -> Result<Self> {
        let figment = Self::figment(root, path)?.merge(Env::prefixed(ENV_PREFIX).split("__"));
        Ok(figment.extract()?)
    }

    /// Load configuration from defaults and a single file, ignoring the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed.
    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(Self::figment(Path::new("."), Some(path))?.extract()?)
    }

    fn figment(root: &Path, path: Option<&Path>) -> Result<Figment> {
        let figment = Figment::from(Serialized::defaults(Self::default()));

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(crate::NestgenError::io(
                        path,
                        std::io::Error::new(std::io::ErrorKind::NotFound, "configuration file not found"),
                    ));
                }
                Ok(figment.merge(Toml::file(path)))
            }
            None => Ok(figment.merge(Toml::file(root.join(DEFAULT_CONFIG_FILE)))),
        }
    }
}
