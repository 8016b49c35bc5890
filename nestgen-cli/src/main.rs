//! nestgen CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use commands::{GenerateCommand, ListCommand};
use nestgen::config::GeneratorConfig;
use nestgen::observability::{self, ObservabilityConfig};
use nestgen_cli_lib::{merge_model_names, Overrides};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nestgen")]
#[command(version)]
#[command(about = "Generate NestJS CRUD modules from a Prisma schema", long_about = None)]
struct Cli {
    /// Model names to generate (e.g., `Account Webhook`)
    models: Vec<String>,

    /// Comma-separated model names, merged with the positional ones
    #[arg(short = 'm', long = "models", value_name = "A,B,C")]
    model_list: Option<String>,

    /// Schema file (`.prisma` text or `.json` DMMF)
    #[arg(short, long, value_name = "PATH")]
    schema: Option<PathBuf>,

    /// Pick models from a multi-select prompt
    #[arg(short, long)]
    interactive: bool,

    /// List models in the schema and exit
    #[arg(short, long)]
    list: bool,

    /// Print the files that would be generated without writing them
    #[arg(short, long)]
    dry_run: bool,

    /// Overwrite files that already exist
    #[arg(short, long)]
    force: bool,

    /// Output root, relative to the project root
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Project root
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Configuration file (defaults to `nestgen.toml` in the project root when present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    log_json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = ObservabilityConfig::new(cli.verbose);
    observability::init(&if cli.log_json { logging.with_json() } else { logging });

    let config = GeneratorConfig::load_for_project(&cli.root, cli.config.as_deref())
        .context("Failed to load configuration")?;
    let config = Overrides {
        schema_path: cli.schema,
        output_root: cli.output,
    }
    .apply(config);

    if cli.list {
        ListCommand::new(config, cli.root).execute()?;
        return Ok(());
    }

    let names = merge_model_names(&cli.models, cli.model_list.as_deref());
    let cmd = GenerateCommand::new(config, cli.root, names)
        .interactive(cli.interactive)
        .dry_run(cli.dry_run)
        .force(cli.force);
    cmd.execute()?;

    Ok(())
}
