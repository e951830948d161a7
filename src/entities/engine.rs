//! Engine entity type - aggregate root holding the BOM forest and run totals

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::hours::apply_hours;
use crate::entities::component::Component;

/// An engine and its full bill of materials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Engine {
    /// Engine designation
    pub name: String,

    /// Engine serial number
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "serialNumber")]
    pub serial_number: Option<String>,

    /// Total operating hours logged against this engine
    #[serde(default, alias = "totalHours")]
    pub total_hours: f64,

    /// Total start/stop cycles logged against this engine
    #[serde(default, alias = "totalCycles")]
    pub total_cycles: u32,

    /// Top-level components
    #[serde(default)]
    pub components: Vec<Component>,
}

impl Engine {
    /// Create an empty engine with no hours logged
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            serial_number: None,
            total_hours: 0.0,
            total_cycles: 0,
            components: Vec::new(),
        }
    }

    /// Record one test run: bump the totals and age every installed part
    ///
    /// Callers are expected to pass a positive duration.
    pub fn log_test_run(&mut self, duration_hours: f64) {
        self.total_hours += duration_hours;
        self.total_cycles += 1;
        self.components = apply_hours(&self.components, duration_hours);
        debug!(
            engine = %self.name,
            duration_hours,
            total_hours = self.total_hours,
            total_cycles = self.total_cycles,
            "logged test run"
        );
    }
}
