//! Data-model schema reading
//!
//! A schema is read once per invocation, either from Prisma schema text or from
//! a DMMF JSON dump of it, into an ordered list of models and enums.
//!
//! ```
//! use nestgen::schema::{FieldKind, Schema};
//!
//! let schema = Schema::parse_prisma(r#"
//! enum Role {
//!   ADMIN
//!   MEMBER
//! }
//!
//! model Account {
//!   id    String @id @default(uuid())
//!   email String @unique
//!   role  Role
//! }
//! "#).unwrap();
//!
//! let account = schema.model("Account").unwrap();
//! assert_eq!(account.fields[2].kind, FieldKind::Enum);
//! ```

mod dmmf;
mod prisma;

use crate::error::{NestgenError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Relation kind of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Built-in scalar type
    #[serde(alias = "unsupported")]
    Scalar,
    /// Relation to another model or composite type
    Object,
    /// Schema-declared enumeration
    Enum,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => write!(f, "scalar"),
            Self::Object => write!(f, "object"),
            Self::Enum => write!(f, "enum"),
        }
    }
}

/// A field as declared in the schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name (e.g., "email", "`createdAt`")
    pub name: String,
    /// Declared type name (e.g., "String", "Role", "User")
    pub field_type: String,
    /// Relation kind
    pub kind: FieldKind,
    /// Whether the schema marks the field non-nullable
    pub required: bool,
    /// Whether the field is a list
    pub list: bool,
}

impl FieldDescriptor {
    /// Build a descriptor
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        field_type: impl Into<String>,
        kind: FieldKind,
        required: bool,
        list: bool,
    ) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            kind,
            required,
            list,
        }
    }

    /// Required, non-list scalar field
    #[must_use]
    pub fn scalar(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self::new(name, field_type, FieldKind::Scalar, true, false)
    }

    /// Return the same field marked optional
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// A named model with its ordered fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDefinition {
    /// Model name, as written in the schema
    pub name: String,
    /// Fields in declaration order
    pub fields: Vec<FieldDescriptor>,
}

/// A named enumeration with its values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDefinition {
    /// Enum name
    pub name: String,
    /// Values in declaration order
    pub values: Vec<String>,
}

/// Parsed schema
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    /// Models in declaration order
    pub models: Vec<ModelDefinition>,
    /// Enums in declaration order
    pub enums: Vec<EnumDefinition>,
}

impl Schema {
    /// Read a schema file
    ///
    /// Files with a `.json` extension are read as DMMF documents, anything
    /// else as Prisma schema text.
    ///
    /// # Errors
    ///
    /// Returns [`NestgenError::SchemaNotFound`] if the file does not exist, or
    /// a parse error if its contents are malformed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(NestgenError::SchemaNotFound(path.to_path_buf()));
        }

        let source = fs::read_to_string(path).map_err(|e| NestgenError::io(path, e))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let schema = if is_json {
            Self::parse_dmmf(&source)?
        } else {
            Self::parse_prisma(&source)?
        };

        tracing::debug!(
            path = %path.display(),
            models = schema.models.len(),
            enums = schema.enums.len(),
            "schema loaded"
        );

        Ok(schema)
    }

    /// Parse Prisma schema text
    ///
    /// # Errors
    ///
    /// Returns an error on unterminated blocks, malformed field lines or
    /// duplicate model names.
    pub fn parse_prisma(source: &str) -> Result<Self> {
        prisma::parse(source)
    }

    /// Parse a DMMF JSON document
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not have the DMMF shape or names a
    /// model twice.
    pub fn parse_dmmf(source: &str) -> Result<Self> {
        dmmf::parse(source)
    }

    /// Find a model by its exact name
    #[must_use]
    pub fn model(&self, name: &str) -> Option<&ModelDefinition> {
        self.models.iter().find(|m| m.name == name)
    }

    /// Model names in declaration order
    #[must_use]
    pub fn model_names(&self) -> Vec<&str> {
        self.models.iter().map(|m| m.name.as_str()).collect()
    }

    fn ensure_unique_models(models: &[ModelDefinition]) -> Result<()> {
        for (idx, model) in models.iter().enumerate() {
            if models[..idx].iter().any(|m| m.name == model.name) {
                return Err(NestgenError::DuplicateModel(model.name.clone()));
            }
        }
        Ok(())
    }
}
