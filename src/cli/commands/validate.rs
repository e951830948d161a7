//! `elb validate` command - Check an engine document for malformed values

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::helpers::load_engine;
use crate::core::tree::count_nodes;
use crate::core::validate::validate_forest;

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Engine document (.yaml or .json)
    pub file: PathBuf,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let engine = load_engine(&args.file)?;
    validate_forest(&engine.components)?;

    if engine.total_hours < 0.0 {
        return Err(miette::miette!(
            "{} has negative total hours: {}",
            engine.name,
            engine.total_hours
        ));
    }

    println!(
        "{} {} is valid ({} part(s))",
        style("✓").green(),
        args.file.display(),
        count_nodes(&engine.components)
    );
    Ok(())
}
