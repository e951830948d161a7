//! `elb remove` command - Take a part or assembly group off an engine

use console::style;
use miette::{bail, Result};
use std::path::PathBuf;

use crate::cli::helpers::{load_engine, print_archived, save_engine};
use crate::cli::output::print_structured;
use crate::cli::GlobalOpts;
use crate::core::editor::{remove_by_id, remove_group};
use crate::core::tree::{find_all_by_id, find_group_roots, flatten};
use crate::entities::component::Component;
use crate::entities::inventory::InventoryItem;
use crate::entities::swap_record::SwapRecord;

#[derive(clap::Args, Debug)]
pub struct RemoveArgs {
    /// Engine document (.yaml or .json)
    pub file: PathBuf,

    /// Part id, or assembly name with --group
    pub target: String,

    /// Treat the target as an assembly group name
    #[arg(long, short = 'g')]
    pub group: bool,

    /// Show the result without saving it
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: RemoveArgs, global: &GlobalOpts) -> Result<()> {
    let mut engine = load_engine(&args.file)?;

    // topmost matches only; a reused id or name inside a match comes along with it
    let (roots, components) = if args.group {
        (
            find_group_roots(&engine.components, &args.target),
            remove_group(&engine.components, &args.target),
        )
    } else {
        (
            find_all_by_id(&engine.components, &args.target),
            remove_by_id(&engine.components, &args.target),
        )
    };

    if roots.is_empty() {
        bail!("Nothing named '{}' on {}", args.target, engine.name);
    }

    let records: Vec<SwapRecord> = roots
        .iter()
        .map(|c| SwapRecord::removal(c, engine.total_hours))
        .collect();
    let removed = flatten_all(&roots);
    let archived: Vec<InventoryItem> = removed.into_iter().map(InventoryItem::from).collect();

    engine.components = components;
    if !args.dry_run {
        save_engine(&args.file, &engine)?;
    }

    if print_structured(&archived, global.format)? {
        return Ok(());
    }
    for record in &records {
        println!(
            "{} {}{}",
            style("✓").green(),
            record.summary(),
            if args.dry_run { " [dry run]" } else { "" }
        );
    }
    print_archived(&archived);
    Ok(())
}

fn flatten_all<'a>(roots: &[&'a Component]) -> Vec<&'a Component> {
    roots
        .iter()
        .flat_map(|root| flatten(std::slice::from_ref(*root)))
        .collect()
}
