//! Command-line argument definitions

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{
    completions::CompletionsArgs, import::ImportArgs, limits::LimitsArgs, log_test::LogTestArgs,
    remove::RemoveArgs, show::ShowArgs, swap::SwapCommands, validate::ValidateArgs,
};

#[derive(Parser, Debug)]
#[command(
    name = "elb",
    version,
    about = "Engine Logbook - track an engine's part tree, hours and life limits",
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(clap::Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub format: OutputFormat,

    /// Log engine operations to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable output for a terminal
    #[default]
    Auto,
    /// YAML document
    Yaml,
    /// JSON document
    Json,
    /// Flat table
    Table,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show an engine's component tree
    Show(ShowArgs),

    /// Log a test run: add its hours to the engine and every part
    LogTest(LogTestArgs),

    /// List parts at or near their life limit
    Limits(LimitsArgs),

    /// Swap a part or a whole assembly
    #[command(subcommand)]
    Swap(SwapCommands),

    /// Remove a part or assembly group from the engine
    Remove(RemoveArgs),

    /// Reconcile the engine against a build report (CSV)
    Import(ImportArgs),

    /// Check a document for negative or non-numeric hours and limits
    Validate(ValidateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
