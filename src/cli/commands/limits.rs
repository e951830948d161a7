//! `elb limits` command - Parts at or near their life limit

use console::style;
use miette::{bail, Result};
use std::path::PathBuf;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::helpers::{format_hours, load_engine, truncate_str};
use crate::cli::output::print_structured;
use crate::cli::GlobalOpts;
use crate::core::life_limit::{evaluate, format_summary, sort_by_urgency, LifeStatus};
use crate::core::Config;

#[derive(clap::Args, Debug)]
pub struct LimitsArgs {
    /// Engine document (.yaml or .json)
    pub file: PathBuf,

    /// Warning margin in hours (default from config, else 50)
    #[arg(long, short = 't')]
    pub threshold: Option<f64>,

    /// Only show critical parts
    #[arg(long)]
    pub critical: bool,
}

#[derive(Tabled)]
struct AlertRow {
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "SERIAL #")]
    serial_number: String,
    #[tabled(rename = "DESCRIPTION")]
    description: String,
    #[tabled(rename = "HOURS")]
    hours: String,
    #[tabled(rename = "LIMIT")]
    life_limit: String,
    #[tabled(rename = "REMAINING")]
    remaining: String,
}

pub fn run(args: LimitsArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let threshold = args.threshold.unwrap_or_else(|| config.warning_threshold());
    if !threshold.is_finite() || threshold < 0.0 {
        bail!("Warning threshold must be zero or more hours, got {}", threshold);
    }

    let engine = load_engine(&args.file)?;
    let mut alerts = evaluate(&engine.components, threshold);
    if args.critical {
        alerts.retain(|a| a.status == LifeStatus::Critical);
    }
    sort_by_urgency(&mut alerts);

    if print_structured(&alerts, global.format)? {
        return Ok(());
    }

    if alerts.is_empty() {
        println!("{}", format_summary(&alerts));
        return Ok(());
    }

    let rows: Vec<AlertRow> = alerts
        .iter()
        .map(|a| AlertRow {
            status: match a.status {
                LifeStatus::Critical => style("CRITICAL").red().bold().to_string(),
                LifeStatus::Warning => style("WARNING").yellow().to_string(),
            },
            serial_number: a.component.serial_number.clone(),
            description: truncate_str(&a.component.description, 30),
            hours: format_hours(a.component.current_hours),
            life_limit: format_hours(a.component.life_limit),
            remaining: format_hours(a.remaining),
        })
        .collect();

    println!("{}", Table::new(rows).with(Style::sharp()));
    println!();
    println!("{}", format_summary(&alerts));
    Ok(())
}
