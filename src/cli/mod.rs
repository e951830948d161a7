//! CLI module - argument parsing and command dispatch

pub mod args;
pub mod commands;
pub mod helpers;
pub mod output;

pub use args::{Cli, Commands, GlobalOpts, OutputFormat};

use miette::Result;

/// Dispatch a parsed command line
pub fn run(cli: Cli) -> Result<()> {
    let global = cli.global;
    match cli.command {
        Commands::Show(args) => commands::show::run(args, &global),
        Commands::LogTest(args) => commands::log_test::run(args, &global),
        Commands::Limits(args) => commands::limits::run(args, &global),
        Commands::Swap(cmd) => commands::swap::run(cmd, &global),
        Commands::Remove(args) => commands::remove::run(args, &global),
        Commands::Import(args) => commands::import::run(args, &global),
        Commands::Validate(args) => commands::validate::run(args),
        Commands::Completions(args) => commands::completions::run(args),
    }
}
