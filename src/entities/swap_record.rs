//! Swap history records - audit entries for parts entering or leaving an engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::component::Component;

/// Kind of swap event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapKind {
    /// One part came out and a matching part went in
    Replacement,
    /// A part went in with no matching removal
    Installation,
    /// A part came out with no matching installation
    Removal,
}

impl std::fmt::Display for SwapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwapKind::Replacement => write!(f, "replacement"),
            SwapKind::Installation => write!(f, "installation"),
            SwapKind::Removal => write!(f, "removal"),
        }
    }
}

/// Identifying snapshot of a part at the moment of the swap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartRef {
    pub description: String,
    pub part_number: String,
    pub serial_number: String,
    pub hours: f64,
}

impl From<&Component> for PartRef {
    fn from(cmp: &Component) -> Self {
        Self {
            description: cmp.description.clone(),
            part_number: cmp.part_number.clone(),
            serial_number: cmp.serial_number.clone(),
            hours: cmp.current_hours,
        }
    }
}

/// One entry in an engine's swap history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapRecord {
    pub kind: SwapKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removed: Option<PartRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installed: Option<PartRef>,

    /// Engine total hours when the swap happened
    pub engine_hours: f64,

    pub recorded_at: DateTime<Utc>,
}

impl SwapRecord {
    pub fn replacement(removed: &Component, installed: &Component, engine_hours: f64) -> Self {
        Self {
            kind: SwapKind::Replacement,
            removed: Some(removed.into()),
            installed: Some(installed.into()),
            engine_hours,
            recorded_at: Utc::now(),
        }
    }

    pub fn installation(installed: &Component, engine_hours: f64) -> Self {
        Self {
            kind: SwapKind::Installation,
            removed: None,
            installed: Some(installed.into()),
            engine_hours,
            recorded_at: Utc::now(),
        }
    }

    pub fn removal(removed: &Component, engine_hours: f64) -> Self {
        Self {
            kind: SwapKind::Removal,
            removed: Some(removed.into()),
            installed: None,
            engine_hours,
            recorded_at: Utc::now(),
        }
    }

    /// One-line description for logs and terminal output
    pub fn summary(&self) -> String {
        let sn = |p: &Option<PartRef>| {
            p.as_ref()
                .map(|p| format!("{} ({})", p.description, p.serial_number))
                .unwrap_or_default()
        };
        match self.kind {
            SwapKind::Replacement => {
                format!("replaced {} with {}", sn(&self.removed), sn(&self.installed))
            }
            SwapKind::Installation => format!("installed {}", sn(&self.installed)),
            SwapKind::Removal => format!("removed {}", sn(&self.removed)),
        }
    }
}
