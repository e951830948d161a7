//! `elb swap` command - Swap a part or a whole assembly

use clap::Subcommand;
use console::style;
use miette::{bail, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::cli::helpers::{load_engine, print_archived, save_engine};
use crate::cli::output::print_structured;
use crate::cli::GlobalOpts;
use crate::core::document;
use crate::core::hours::HourPolicy;
use crate::core::swap::{swap_assembly, swap_component, SwapOutcome};
use crate::core::validate::validate_forest;
use crate::core::Config;
use crate::entities::component::Component;
use crate::entities::engine::Engine;
use crate::entities::inventory::InventoryItem;
use crate::entities::swap_record::SwapRecord;

#[derive(Subcommand, Debug)]
pub enum SwapCommands {
    /// Replace one part with a part from inventory
    Part(SwapPartArgs),

    /// Replace a whole assembly group with a new subtree
    Assembly(SwapAssemblyArgs),
}

#[derive(clap::Args, Debug)]
pub struct SwapPartArgs {
    /// Engine document (.yaml or .json)
    pub file: PathBuf,

    /// Id of the part to take out (first match)
    pub target: String,

    /// Description of the incoming part
    #[arg(long)]
    pub description: String,

    /// Part number of the incoming part
    #[arg(long, default_value = "")]
    pub part_number: String,

    /// Serial number of the incoming part
    #[arg(long)]
    pub serial_number: String,

    /// Hours the incoming part carries from inventory
    #[arg(long, default_value_t = 0.0)]
    pub hours: f64,

    /// Life limit of the incoming part (0 = not tracked)
    #[arg(long, default_value_t = 0.0)]
    pub life_limit: f64,

    /// Hours policy for the incoming part (sync-to-engine, preserve-carried)
    #[arg(long)]
    pub policy: Option<HourPolicy>,

    /// Show the result without saving it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(clap::Args, Debug)]
pub struct SwapAssemblyArgs {
    /// Engine document (.yaml or .json)
    pub file: PathBuf,

    /// Name of the assembly group to take out
    pub group: String,

    /// Document holding the replacement subtree (.yaml or .json)
    #[arg(long)]
    pub from: PathBuf,

    /// Hours policy for the incoming subtree (sync-to-engine, preserve-carried)
    #[arg(long)]
    pub policy: Option<HourPolicy>,

    /// Show the result without saving it
    #[arg(long)]
    pub dry_run: bool,
}

/// What a swap reports back, without the full forest
#[derive(Serialize)]
struct SwapReport<'a> {
    archived: &'a [InventoryItem],
    records: &'a [SwapRecord],
}

pub fn run(cmd: SwapCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        SwapCommands::Part(args) => run_part(args, global),
        SwapCommands::Assembly(args) => run_assembly(args, global),
    }
}

fn run_part(args: SwapPartArgs, global: &GlobalOpts) -> Result<()> {
    if args.hours < 0.0 || args.life_limit < 0.0 {
        bail!("Hours and life limit must not be negative");
    }

    let policy = args.policy.unwrap_or_else(|| Config::load().hour_policy());
    let mut engine = load_engine(&args.file)?;
    let item = InventoryItem {
        description: args.description,
        part_number: args.part_number,
        serial_number: args.serial_number,
        current_hours: args.hours,
        life_limit: args.life_limit,
    };

    let outcome = swap_component(&engine, &args.target, &item, policy);
    if outcome.is_noop() {
        bail!("No part with id '{}' on {}", args.target, engine.name);
    }

    engine.components = outcome.components.clone();
    finish(&args.file, &engine, &outcome, args.dry_run, global)
}

fn run_assembly(args: SwapAssemblyArgs, global: &GlobalOpts) -> Result<()> {
    let policy = args.policy.unwrap_or_else(|| Config::load().hour_policy());
    let mut engine = load_engine(&args.file)?;
    let replacement: Component = document::load(&args.from)?;
    validate_forest(std::slice::from_ref(&replacement))?;

    if replacement.description != args.group {
        println!(
            "{} replacement is named '{}', not '{}'",
            style("!").yellow(),
            replacement.description,
            args.group
        );
    }

    let outcome = swap_assembly(&engine, &args.group, &replacement, policy);
    engine.components = outcome.components.clone();
    finish(&args.file, &engine, &outcome, args.dry_run, global)
}

fn finish(
    file: &Path,
    engine: &Engine,
    outcome: &SwapOutcome,
    dry_run: bool,
    global: &GlobalOpts,
) -> Result<()> {
    if !dry_run {
        save_engine(file, engine)?;
    }

    let report = SwapReport {
        archived: &outcome.archived,
        records: &outcome.records,
    };
    if print_structured(&report, global.format)? {
        return Ok(());
    }

    for record in &outcome.records {
        println!(
            "{} {}{}",
            style("✓").green(),
            record.summary(),
            if dry_run { " [dry run]" } else { "" }
        );
    }
    print_archived(&outcome.archived);
    Ok(())
}
