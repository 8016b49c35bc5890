//! nestgen: NestJS CRUD module generator for Prisma schemas
//!
//! Reads a Prisma data model (schema text or DMMF JSON), classifies each
//! field of the requested models, and renders a complete NestJS module per
//! model: entity, repository contract, use cases, Prisma persistence layer,
//! HTTP controller and validated request DTOs.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use nestgen::prelude::*;
//!
//! fn main() -> nestgen::Result<()> {
//!     let config = GeneratorConfig::load(None)?;
//!     let schema = Schema::load(&config.schema_path)?;
//!
//!     let runner = Runner::new(&schema, &config)?;
//!     let report = runner.run(&GenerationRequest::new(["Account", "Webhook"]))?;
//!
//!     println!("{} files created", report.count(FileOutcome::Created));
//!     Ok(())
//! }
//! ```
//!
//! # Output Layout
//!
//! Each model lands in `<output_root>/<plural>/` with `core/` (entity,
//! mapper, repository, use cases) and `infra/` (Prisma mapper and repository,
//! controller, DTOs) subtrees.

// Lint configuration is handled at the workspace level in Cargo.toml

pub mod config;
pub mod error;
pub mod observability;
pub mod scaffold;
pub mod schema;

pub use error::{NestgenError, Result};

pub mod prelude {
    //! Convenience re-exports for common types
    //!
    //! ```rust
    //! use nestgen::prelude::*;
    //! ```

    pub use crate::config::GeneratorConfig;
    pub use crate::error::{NestgenError, Result};
    pub use crate::observability::ObservabilityConfig;
    pub use crate::scaffold::{
        FileOutcome, GeneratedFile, GenerationRequest, RunReport, Runner, ScaffoldGenerator,
        TemplateRegistry,
    };
    pub use crate::schema::{FieldDescriptor, FieldKind, ModelDefinition, Schema};
}
