//! Error types and error handling

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T, E = NestgenError> = std::result::Result<T, E>;

/// Generator error type
#[derive(Debug, Error)]
pub enum NestgenError {
    /// Schema file does not exist
    #[error("Schema file not found: {}", .0.display())]
    SchemaNotFound(PathBuf),

    /// Prisma schema text could not be parsed
    #[error("Schema parse error at line {line}: {message}")]
    SchemaParse {
        /// 1-based line number
        line: usize,
        /// What went wrong
        message: String,
    },

    /// DMMF JSON document could not be decoded
    #[error("Invalid DMMF document: {0}")]
    Dmmf(#[from] serde_json::Error),

    /// Two models share a name
    #[error("Model '{0}' is defined more than once")]
    DuplicateModel(String),

    /// Nothing was requested for generation
    #[error("No model selected. Pass model names, --models, or --interactive")]
    NoModelsSelected,

    /// Interactive prompt finished without a choice
    #[error("No model was chosen in the interactive selection")]
    NoSelection,

    /// Template failed to compile
    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    /// Template failed to render
    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// Filesystem failure
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl NestgenError {
    /// Wrap an I/O error with the path it concerns
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<figment::Error> for NestgenError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = NestgenError::SchemaNotFound(PathBuf::from("prisma/schema.prisma"));
        assert_eq!(err.to_string(), "Schema file not found: prisma/schema.prisma");

        let err = NestgenError::SchemaParse {
            line: 12,
            message: "unterminated block".to_string(),
        };
        assert_eq!(err.to_string(), "Schema parse error at line 12: unterminated block");
    }

    #[test]
    fn test_io_helper() {
        let err = NestgenError::io(
            "out/file.ts",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("out/file.ts"));
    }
}
