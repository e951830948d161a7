//! Output formatting utilities

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::helpers::format_hours;
use crate::cli::OutputFormat;
use crate::core::document::{render, DocumentFormat};
use crate::core::tree::flatten;
use crate::entities::component::Component;

/// Determine the effective output format based on context
pub fn effective_format(format: OutputFormat, is_list: bool) -> OutputFormat {
    match format {
        OutputFormat::Auto => {
            if is_list {
                OutputFormat::Table
            } else {
                OutputFormat::Auto
            }
        }
        other => other,
    }
}

/// Print a value as YAML or JSON; returns false for the human formats
pub fn print_structured<T: Serialize>(value: &T, format: OutputFormat) -> Result<bool> {
    let doc_format = match format {
        OutputFormat::Yaml => DocumentFormat::Yaml,
        OutputFormat::Json => DocumentFormat::Json,
        OutputFormat::Auto | OutputFormat::Table => return Ok(false),
    };
    print!("{}", render(value, doc_format).into_diagnostic()?);
    Ok(true)
}

/// Render a forest as an indented tree
///
/// ```text
/// Core  C-1  SN-1  120.0 h
/// ├── Compressor  CP-1  SN-2  120.0 h
/// │   └── Stage 1  ST1-1  SN-3  120.0 / 500.0 h
/// └── Shaft  SH-1  SN-5  120.0 h
/// ```
pub fn render_tree(tree: &[Component]) -> String {
    let mut lines = Vec::new();
    for node in tree {
        lines.push(node_label(node));
        render_children(&node.children, "", &mut lines);
    }
    lines.join("\n")
}

fn render_children(children: &[Component], prefix: &str, lines: &mut Vec<String>) {
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let branch = if last { "└── " } else { "├── " };
        lines.push(format!("{}{}{}", prefix, branch, node_label(child)));
        let next = format!("{}{}", prefix, if last { "    " } else { "│   " });
        render_children(&child.children, &next, lines);
    }
}

fn node_label(node: &Component) -> String {
    let hours = if node.has_life_limit() {
        format!(
            "{} / {} h",
            format_hours(node.current_hours),
            format_hours(node.life_limit)
        )
    } else {
        format!("{} h", format_hours(node.current_hours))
    };
    format!(
        "{}  {}  {}  {}",
        style(&node.description).bold(),
        style(&node.part_number).dim(),
        style(&node.serial_number).cyan(),
        hours
    )
}

#[derive(Tabled)]
struct PartRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "DESCRIPTION")]
    description: String,
    #[tabled(rename = "PART #")]
    part_number: String,
    #[tabled(rename = "SERIAL #")]
    serial_number: String,
    #[tabled(rename = "HOURS")]
    hours: String,
    #[tabled(rename = "LIFE LIMIT")]
    life_limit: String,
}

/// Render every node as one table row, pre-order
pub fn render_flat_table(tree: &[Component]) -> String {
    let rows: Vec<PartRow> = flatten(tree)
        .into_iter()
        .map(|c| PartRow {
            id: c.id.to_string(),
            description: c.description.clone(),
            part_number: c.part_number.clone(),
            serial_number: c.serial_number.clone(),
            hours: format_hours(c.current_hours),
            life_limit: if c.has_life_limit() {
                format_hours(c.life_limit)
            } else {
                "-".to_string()
            },
        })
        .collect();
    Table::new(rows).with(Style::sharp()).to_string()
}
