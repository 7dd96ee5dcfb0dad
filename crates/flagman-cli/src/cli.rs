use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Deserialize;

/// Manifest path used when `--manifest` is not given.
pub const DEFAULT_MANIFEST: &str = "flags.json";

#[derive(Parser)]
#[command(
    name = "flagman",
    about = "Feature flag manifest tooling",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to a flagman.toml config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Tree,
    Flat,
    Json,
    Yaml,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two feature flag manifests
    Compare(CompareArgs),
}

#[derive(Args)]
pub struct CompareArgs {
    /// The manifest to compare from
    #[arg(short, long, default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,
    /// The manifest to compare against
    #[arg(short, long)]
    pub against: PathBuf,
    /// Field pattern to ignore (repeatable): `description`, `flags.*.description`, `metadata.*`
    #[arg(short, long)]
    pub ignore: Vec<String>,
    /// Output format (default: tree)
    #[arg(short, long)]
    pub output: Option<OutputFormat>,
}
