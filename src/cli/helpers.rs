//! Shared helper functions for CLI commands

use console::style;
use miette::Result;
use std::path::Path;

use crate::core::document;
use crate::entities::engine::Engine;
use crate::entities::inventory::InventoryItem;

/// Format an hour value with one decimal place
pub fn format_hours(hours: f64) -> String {
    format!("{:.1}", hours)
}

/// Truncate a string to max_len, adding "..." if truncated
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Load an engine document
pub fn load_engine(path: &Path) -> Result<Engine> {
    Ok(document::load(path)?)
}

/// Replace the engine document with the new state
pub fn save_engine(path: &Path, engine: &Engine) -> Result<()> {
    Ok(document::save(path, engine)?)
}

/// Print the parts that left the engine for the inventory subsystem
pub fn print_archived(archived: &[InventoryItem]) {
    if archived.is_empty() {
        return;
    }
    println!("{} part(s) returned to inventory:", archived.len());
    for item in archived {
        println!(
            "   {} {} ({} h)",
            style(&item.serial_number).cyan(),
            truncate_str(&item.description, 40),
            format_hours(item.current_hours)
        );
    }
}
