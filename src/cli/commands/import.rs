//! `elb import` command - Reconcile an engine with a build report
//!
//! The report is a CSV export of the build-report spreadsheet, one row per
//! part. The engine's component tree is replaced by the one described in the
//! report and the differences are printed as swap history.

use console::style;
use miette::{miette, IntoDiagnostic, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::cli::helpers::{load_engine, save_engine};
use crate::cli::output::print_structured;
use crate::cli::GlobalOpts;
use crate::core::import::import_build_report;
use crate::core::reconcile::PartUpdate;
use crate::core::validate::validate_forest;
use crate::entities::build_report::BuildReportRow;
use crate::entities::swap_record::SwapRecord;

#[derive(clap::Args, Debug)]
pub struct ImportArgs {
    /// Engine document (.yaml or .json)
    pub file: PathBuf,

    /// Build report exported as CSV
    pub report: PathBuf,

    /// Show the differences without saving
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Serialize)]
struct ImportReport<'a> {
    updated: &'a [PartUpdate],
    records: &'a [SwapRecord],
}

/// Read build report rows from a CSV file with a header line
pub fn read_report(path: &Path) -> Result<Vec<BuildReportRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .into_diagnostic()?;

    let mut rows = Vec::new();
    for (i, result) in reader.deserialize().enumerate() {
        let row: BuildReportRow =
            result.map_err(|e| miette!("{}: row {}: {}", path.display(), i + 2, e))?;
        rows.push(row);
    }
    debug!(path = %path.display(), rows = rows.len(), "read build report");
    Ok(rows)
}

pub fn run(args: ImportArgs, global: &GlobalOpts) -> Result<()> {
    let mut engine = load_engine(&args.file)?;
    let rows = read_report(&args.report)?;
    if rows.is_empty() {
        return Err(miette!("{} has no part rows", args.report.display()));
    }

    let import = import_build_report(&engine, &rows);
    validate_forest(&import.components)?;

    engine.components = import.components.clone();
    if !args.dry_run {
        save_engine(&args.file, &engine)?;
    }

    let report = ImportReport {
        updated: &import.updated,
        records: &import.records,
    };
    if print_structured(&report, global.format)? {
        return Ok(());
    }

    if import.records.is_empty() && import.updated.is_empty() {
        println!("{} Build report matches {}", style("✓").green(), engine.name);
        return Ok(());
    }

    for record in &import.records {
        println!("{} {}", style("•").cyan(), record.summary());
    }
    for update in &import.updated {
        println!(
            "{} updated {}: {} {} -> {} {}",
            style("•").yellow(),
            update.after.serial_number,
            update.before.description,
            update.before.part_number,
            update.after.description,
            update.after.part_number
        );
    }
    println!(
        "{} {} change(s) from {}{}",
        style("✓").green(),
        import.records.len() + import.updated.len(),
        args.report.display(),
        if args.dry_run { " [dry run]" } else { "" }
    );
    Ok(())
}
