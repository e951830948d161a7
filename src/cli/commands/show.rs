//! `elb show` command - Display an engine's component tree

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::helpers::{format_hours, load_engine};
use crate::cli::output::{effective_format, print_structured, render_flat_table, render_tree};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::tree::{count_nodes, find_all_in_group};

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Engine document (.yaml or .json)
    pub file: PathBuf,

    /// Only show this assembly group
    #[arg(long, short = 'g')]
    pub group: Option<String>,

    /// Show a flat table instead of a tree
    #[arg(long)]
    pub flat: bool,
}

pub fn run(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let engine = load_engine(&args.file)?;

    let components = match &args.group {
        Some(group) => {
            // group roots only; their subtrees come along
            let members = find_all_in_group(&engine.components, group);
            let roots: Vec<_> = members
                .into_iter()
                .filter(|c| &c.description == group)
                .cloned()
                .collect();
            if roots.is_empty() {
                println!("No assembly named '{}' on {}", group, engine.name);
                return Ok(());
            }
            roots
        }
        None => engine.components.clone(),
    };

    let format = effective_format(global.format, args.flat);
    if print_structured(&components, format)? {
        return Ok(());
    }

    println!(
        "{} {}  {} h, {} cycles, {} part(s)",
        style("Engine").bold(),
        style(&engine.name).cyan(),
        format_hours(engine.total_hours),
        engine.total_cycles,
        count_nodes(&components)
    );
    if components.is_empty() {
        println!("No components installed.");
        return Ok(());
    }

    match format {
        OutputFormat::Table => println!("{}", render_flat_table(&components)),
        _ => println!("{}", render_tree(&components)),
    }
    Ok(())
}
