//! Build report row - one line of an imported engine build report

use serde::{Deserialize, Serialize};

/// A flat row from a parsed build report
///
/// Rows that name an assembly belong under that assembly; rows without one are
/// top-level parts. Header names follow the exported spreadsheet layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildReportRow {
    #[serde(default, alias = "Assembly Name", deserialize_with = "empty_as_none")]
    pub assembly_name: Option<String>,

    #[serde(default, alias = "Assembly P/N", deserialize_with = "empty_as_none")]
    pub assembly_part_number: Option<String>,

    #[serde(default, alias = "Assembly S/N", deserialize_with = "empty_as_none")]
    pub assembly_serial_number: Option<String>,

    #[serde(alias = "Part Name")]
    pub part_name: String,

    #[serde(default, alias = "P/N")]
    pub part_number: String,

    #[serde(default, alias = "S/N")]
    pub serial_number: String,

    #[serde(default, alias = "Hours", deserialize_with = "empty_as_zero")]
    pub hours: f64,

    #[serde(default, alias = "Life Limit", deserialize_with = "empty_as_zero")]
    pub life_limit: f64,
}

/// Blank spreadsheet cells arrive as empty strings
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

fn empty_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

impl BuildReportRow {
    /// A top-level part row with no assembly
    pub fn part(
        part_name: impl Into<String>,
        part_number: impl Into<String>,
        serial_number: impl Into<String>,
    ) -> Self {
        Self {
            assembly_name: None,
            assembly_part_number: None,
            assembly_serial_number: None,
            part_name: part_name.into(),
            part_number: part_number.into(),
            serial_number: serial_number.into(),
            hours: 0.0,
            life_limit: 0.0,
        }
    }

    pub fn in_assembly(
        mut self,
        name: impl Into<String>,
        part_number: impl Into<String>,
        serial_number: impl Into<String>,
    ) -> Self {
        self.assembly_name = Some(name.into());
        self.assembly_part_number = Some(part_number.into());
        self.assembly_serial_number = Some(serial_number.into());
        self
    }

    pub fn with_hours(mut self, hours: f64) -> Self {
        self.hours = hours;
        self
    }

    pub fn with_life_limit(mut self, life_limit: f64) -> Self {
        self.life_limit = life_limit;
        self
    }
}
