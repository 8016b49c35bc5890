//! Generate NestJS modules for selected models
//!
//! # Example
//!
//! ```bash
//! nestgen Account Webhook --dry-run
//! nestgen --models Account,Webhook --force
//! nestgen --interactive
//! ```

use super::load_schema;
use anyhow::{Context, Result};
use console::{style, Emoji};
use nestgen::config::GeneratorConfig;
use nestgen::scaffold::{FileOutcome, GenerationRequest, RunReport, Runner};
use nestgen::NestgenError;
use nestgen_cli_lib::{prompt_models, resolve_schema_path};
use std::path::PathBuf;

static CREATED: Emoji<'_, '_> = Emoji("✓ ", "+ ");
static OVERWRITTEN: Emoji<'_, '_> = Emoji("↻ ", "~ ");
static SKIPPED: Emoji<'_, '_> = Emoji("• ", "= ");
static PLANNED: Emoji<'_, '_> = Emoji("→ ", "> ");
static WARNING: Emoji<'_, '_> = Emoji("⚠ ", "! ");

pub struct GenerateCommand {
    config: GeneratorConfig,
    root: PathBuf,
    names: Vec<String>,
    interactive: bool,
    dry_run: bool,
    force: bool,
}

impl GenerateCommand {
    #[must_use]
    pub const fn new(config: GeneratorConfig, root: PathBuf, names: Vec<String>) -> Self {
        Self {
            config,
            root,
            names,
            interactive: false,
            dry_run: false,
            force: false,
        }
    }

    #[must_use]
    pub const fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    #[must_use]
    pub const fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn execute(&self) -> Result<()> {
        let schema_path = resolve_schema_path(&self.root, &self.config.schema_path);
        let schema = load_schema(&schema_path)?;

        let mut names = self.names.clone();
        if self.interactive {
            let picked = prompt_models(&schema.model_names())?;
            for name in picked {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        if names.is_empty() {
            return Err(NestgenError::NoModelsSelected.into());
        }
        tracing::debug!(models = ?names, dry_run = self.dry_run, force = self.force, "models selected");

        let runner = Runner::new(&schema, &self.config).context("Failed to compile templates")?;
        let request = GenerationRequest::new(names)
            .project_root(self.root.clone())
            .dry_run(self.dry_run)
            .force(self.force);

        let report = runner.run(&request).context("Failed to generate modules")?;
        self.print_report(&report);

        Ok(())
    }

    fn print_report(&self, report: &RunReport) {
        for name in &report.missing {
            println!(
                "{}{} {}",
                WARNING,
                style("Model not found, skipped:").yellow().bold(),
                style(name).yellow()
            );
        }

        for model in &report.models {
            println!(
                "\n{} {} {}",
                style(if self.dry_run { "Would generate" } else { "Generated" }).cyan().bold(),
                style(&model.model).green().bold(),
                style(format!("({})", model.module_name)).dim()
            );

            for file in &model.files {
                let marker = match file.outcome {
                    FileOutcome::Planned => style(PLANNED).cyan(),
                    FileOutcome::Created => style(CREATED).green(),
                    FileOutcome::Overwritten => style(OVERWRITTEN).yellow(),
                    FileOutcome::Skipped => style(SKIPPED).dim(),
                };

                if self.dry_run {
                    println!("  {marker}{}", file.path.display());
                } else {
                    println!(
                        "  {marker}{} {}",
                        style(file.path.display()).dim(),
                        style(format!("[{}]", file.outcome)).dim()
                    );
                }
            }
        }

        if report.models.is_empty() {
            return;
        }

        println!();
        if self.dry_run {
            println!(
                "{} {} files planned, nothing written",
                style("Dry run:").cyan().bold(),
                report.count(FileOutcome::Planned)
            );
        } else {
            println!(
                "{} {} created, {} overwritten, {} skipped",
                style("Done:").green().bold(),
                report.count(FileOutcome::Created),
                report.count(FileOutcome::Overwritten),
                report.count(FileOutcome::Skipped)
            );
            if report.count(FileOutcome::Skipped) > 0 {
                println!("  {}", style("Use --force to overwrite existing files").dim());
            }
        }
    }
}
