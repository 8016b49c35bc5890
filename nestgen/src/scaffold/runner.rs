//! Generation runner
//!
//! Drives one invocation: for every requested model name, look the model up,
//! render its module and either report the planned paths (dry run) or hand
//! each file to the writer.
//!
//! ```no_run
//! use nestgen::config::GeneratorConfig;
//! use nestgen::scaffold::{GenerationRequest, Runner};
//! use nestgen::schema::Schema;
//!
//! # fn example() -> nestgen::Result<()> {
//! let config = GeneratorConfig::default();
//! let schema = Schema::load(&config.schema_path)?;
//! let runner = Runner::new(&schema, &config)?;
//!
//! let report = runner.run(&GenerationRequest::new(["Account"]).dry_run(true))?;
//! for model in &report.models {
//!     for file in &model.files {
//!         println!("{}", file.path.display());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use super::generator::ScaffoldGenerator;
use super::templates::{TemplateKind, TemplateRegistry};
use super::writer::{write_file, WriteOutcome};
use crate::config::GeneratorConfig;
use crate::error::{NestgenError, Result};
use crate::schema::Schema;
use std::fmt;
use std::path::PathBuf;

/// Parameters of one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    models: Vec<String>,
    project_root: PathBuf,
    dry_run: bool,
    force: bool,
}

impl GenerationRequest {
    /// Request generation for `models`, deduplicated in first-seen order
    #[must_use]
    pub fn new<I, S>(models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in models {
            let name = name.into();
            if !unique.contains(&name) {
                unique.push(name);
            }
        }

        Self {
            models: unique,
            project_root: PathBuf::from("."),
            dry_run: false,
            force: false,
        }
    }

    /// Directory the output root is resolved against
    #[must_use]
    pub fn project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = root.into();
        self
    }

    /// Report paths without writing
    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Overwrite existing files
    #[must_use]
    pub const fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Requested model names
    #[must_use]
    pub fn models(&self) -> &[String] {
        &self.models
    }
}

/// Per-file result of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileOutcome {
    /// Dry run; nothing written
    Planned,
    /// Newly written
    Created,
    /// Replaced an existing file
    Overwritten,
    /// Existing file kept
    Skipped,
}

impl From<WriteOutcome> for FileOutcome {
    fn from(outcome: WriteOutcome) -> Self {
        match outcome {
            WriteOutcome::Created => Self::Created,
            WriteOutcome::Overwritten => Self::Overwritten,
            WriteOutcome::Skipped => Self::Skipped,
        }
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Planned => "planned",
            Self::Created => "created",
            Self::Overwritten => "overwritten",
            Self::Skipped => "skipped",
        })
    }
}

/// One output file and what happened to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Path relative to the project root
    pub path: PathBuf,
    /// Template that produced it
    pub kind: TemplateKind,
    /// Human-readable description
    pub description: String,
    /// Outcome
    pub outcome: FileOutcome,
}

/// Files produced for one model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelReport {
    /// Model name
    pub model: String,
    /// Module directory name
    pub module_name: String,
    /// Generated files in template order
    pub files: Vec<FileReport>,
}

/// Result of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Models that were generated, in request order
    pub models: Vec<ModelReport>,
    /// Requested names with no matching model
    pub missing: Vec<String>,
}

impl RunReport {
    /// Number of files with the given outcome
    #[must_use]
    pub fn count(&self, outcome: FileOutcome) -> usize {
        self.models
            .iter()
            .flat_map(|m| &m.files)
            .filter(|f| f.outcome == outcome)
            .count()
    }

    /// Total number of files across all models
    #[must_use]
    pub fn total_files(&self) -> usize {
        self.models.iter().map(|m| m.files.len()).sum()
    }
}

/// Runs generation against a loaded schema
#[derive(Debug)]
pub struct Runner<'a> {
    schema: &'a Schema,
    config: &'a GeneratorConfig,
    templates: TemplateRegistry,
}

impl<'a> Runner<'a> {
    /// Create a runner, compiling the templates
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded template fails to compile.
    pub fn new(schema: &'a Schema, config: &'a GeneratorConfig) -> Result<Self> {
        Ok(Self {
            schema,
            config,
            templates: TemplateRegistry::new()?,
        })
    }

    /// Generate every requested model
    ///
    /// Unknown model names are logged and recorded in
    /// [`RunReport::missing`]; they do not fail the run.
    ///
    /// # Errors
    ///
    /// Returns [`NestgenError::NoModelsSelected`] for an empty request, and
    /// propagates rendering and write failures.
    pub fn run(&self, request: &GenerationRequest) -> Result<RunReport> {
        if request.models.is_empty() {
            return Err(NestgenError::NoModelsSelected);
        }

        let generator = ScaffoldGenerator::new(&self.templates, self.config);
        let mut report = RunReport::default();

        for name in &request.models {
            let Some(model) = self.schema.model(name) else {
                tracing::warn!(model = %name, "model not found in schema, skipping");
                report.missing.push(name.clone());
                continue;
            };

            let files = generator.generate(model)?;
            let mut reports = Vec::with_capacity(files.len());

            for file in files {
                let outcome = if request.dry_run {
                    FileOutcome::Planned
                } else {
                    let target = request.project_root.join(&file.path);
                    write_file(&target, &file.content, request.force)?.into()
                };

                reports.push(FileReport {
                    path: file.path,
                    kind: file.kind,
                    description: file.description,
                    outcome,
                });
            }

            let module_name = generator.context(model).module_name;
            tracing::info!(model = %name, module = %module_name, files = reports.len(), "model generated");

            report.models.push(ModelReport {
                model: name.clone(),
                module_name,
                files: reports,
            });
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SCHEMA: &str = r"
model Account {
  id        String   @id @default(uuid())
  email     String   @unique
  createdAt DateTime @default(now())
}

model Webhook {
  id  String @id
  url String
}
";

    fn schema() -> Schema {
        Schema::parse_prisma(SCHEMA).unwrap()
    }

    #[test]
    fn test_request_deduplicates_in_order() {
        let request = GenerationRequest::new(["Webhook", "Account", "Webhook"]);
        assert_eq!(request.models(), ["Webhook", "Account"]);
    }

    #[test]
    fn test_empty_request_is_rejected() {
        let schema = schema();
        let config = GeneratorConfig::default();
        let runner = Runner::new(&schema, &config).unwrap();

        let result = runner.run(&GenerationRequest::new(Vec::<String>::new()));
        assert!(matches!(result, Err(NestgenError::NoModelsSelected)));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let schema = schema();
        let config = GeneratorConfig::default();
        let runner = Runner::new(&schema, &config).unwrap();

        let report = runner
            .run(&GenerationRequest::new(["Account"]).project_root(dir.path()).dry_run(true))
            .unwrap();

        assert_eq!(report.total_files(), 14);
        assert_eq!(report.count(FileOutcome::Planned), 14);
        assert!(!dir.path().join("src").exists());
    }

    #[test]
    fn test_unknown_models_are_reported_missing() {
        let dir = TempDir::new().unwrap();
        let schema = schema();
        let config = GeneratorConfig::default();
        let runner = Runner::new(&schema, &config).unwrap();

        let report = runner
            .run(&GenerationRequest::new(["Ghost", "Webhook"]).project_root(dir.path()))
            .unwrap();

        assert_eq!(report.missing, vec!["Ghost"]);
        assert_eq!(report.models.len(), 1);
        assert_eq!(report.models[0].module_name, "webhooks");
        assert_eq!(report.count(FileOutcome::Created), 14);
    }

    #[test]
    fn test_second_run_skips_unless_forced() {
        let dir = TempDir::new().unwrap();
        let schema = schema();
        let config = GeneratorConfig::default();
        let runner = Runner::new(&schema, &config).unwrap();
        let request = GenerationRequest::new(["Account"]).project_root(dir.path());

        runner.run(&request).unwrap();
        let again = runner.run(&request).unwrap();
        assert_eq!(again.count(FileOutcome::Skipped), 14);

        let forced = runner.run(&request.clone().force(true)).unwrap();
        assert_eq!(forced.count(FileOutcome::Overwritten), 14);
    }
}
