//! NestJS module scaffolding
//!
//! Classifies model fields, renders the fourteen module files from embedded
//! templates and writes them below the configured output root.

pub mod classifier;
pub mod generator;
pub mod helpers;
pub mod runner;
pub mod templates;
pub mod writer;

pub use classifier::{FieldClassifier, FieldContext, TsType, Validator};
pub use generator::{GeneratedFile, ModelContext, ScaffoldGenerator};
pub use helpers::TemplateHelpers;
pub use runner::{FileOutcome, FileReport, GenerationRequest, ModelReport, RunReport, Runner};
pub use templates::{TemplateKind, TemplateRegistry};
pub use writer::{write_file, WriteOutcome};
