//! CLI argument parsing for yamato-jobs.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Implementations live in the `commands` module.

use crate::logging::LogLevel;
use crate::naming::JobCategory;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// yamato-jobs: generate cross-referenced Yamato CI job documents.
///
/// Jobs are split across `.yamato/_editor.yml`, `.yamato/_packages.yml` and
/// `.yamato/_templates.yml`. A job depends on a job in another file through a
/// `{file}#{job id}` reference computed from the same descriptors.
#[derive(Parser, Debug)]
#[command(name = "yamato-jobs")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Diagnostic log level (overridden by RUST_LOG).
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate every job document from a metafile.
    ///
    /// Writes the documents below --root, or prints them with --dry-run.
    Generate(GenerateArgs),

    /// Print the dependency reference for one job.
    ///
    /// Keys follow the category's key order, e.g.
    /// `ref template-test universal win 2022.3`.
    Ref(RefArgs),

    /// List the dependency reference of every job a metafile generates.
    List(ListArgs),
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Descriptor metafile (editors, platforms, packages, templates).
    #[arg(long)]
    pub metafile: PathBuf,

    /// Generator config with endpoints and default agents.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Repository root the `.yamato/` documents are written under.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Print documents to stdout instead of writing them.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `ref` command.
#[derive(Parser, Debug)]
pub struct RefArgs {
    /// Job category.
    #[arg(value_enum)]
    pub category: JobCategory,

    /// Key fields of the job.
    #[arg(required = true)]
    pub keys: Vec<String>,
}

/// Arguments for the `list` command.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Descriptor metafile (editors, platforms, packages, templates).
    #[arg(long)]
    pub metafile: PathBuf,

    /// Generator config with endpoints and default agents.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print a JSON array instead of one reference per line.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
