use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "EasyAF3Config Developers",
    version,
    about = "EasyAF3Config CLI - Build and validate AlphaFold3 job-configuration documents.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a FASTA file of protein sequences into an AlphaFold3 JSON job.
    #[command(name = "fa2json")]
    Fa2Json(Fa2JsonArgs),
    /// Parse and validate an existing AlphaFold3 JSON job.
    Validate(ValidateArgs),
}

/// Arguments for the `fa2json` subcommand.
#[derive(Args, Debug)]
pub struct Fa2JsonArgs {
    /// Path to the input FASTA file.
    #[arg(long, required = true, value_name = "PATH")]
    pub fasta: PathBuf,

    /// Path for the output JSON file.
    #[arg(long, required = true, value_name = "PATH")]
    pub json: PathBuf,

    /// Job name. Defaults to the FASTA file name without its extension.
    #[arg(long, value_name = "NAME")]
    pub job_name: Option<String>,

    /// Model seeds to use, in order (default: 5311).
    #[arg(long, value_name = "INT", num_args(1..))]
    pub model_seeds: Option<Vec<i64>>,

    /// Model dialect (default: alphafold3).
    #[arg(long, value_name = "NAME")]
    pub dialect: Option<String>,

    /// Configuration version, 1 or 2 (default: 1).
    #[arg(long, value_name = "INT")]
    pub version: Option<i64>,

    /// Path to a TOML file providing job defaults.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S job.model-seeds=1,2,3
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the JSON job document to check.
    #[arg(long, required = true, value_name = "PATH")]
    pub json: PathBuf,
}
