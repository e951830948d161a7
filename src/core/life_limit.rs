//! Life-limit evaluation
//!
//! Classifies tracked parts against their certified life limit. Parts with no
//! limit (0) are never evaluated, and parts with more than the warning margin
//! left are not reported at all.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entities::component::Component;

/// Default warning margin in hours
pub const DEFAULT_WARNING_THRESHOLD_HOURS: f64 = 50.0;

/// How close a part is to its life limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifeStatus {
    /// Limit reached or exceeded
    Critical,
    /// Within the warning margin of the limit
    Warning,
}

impl std::fmt::Display for LifeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LifeStatus::Critical => write!(f, "critical"),
            LifeStatus::Warning => write!(f, "warning"),
        }
    }
}

/// A part at or near its life limit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifeLimitAlert<'a> {
    pub component: &'a Component,
    /// Hours left before the limit; zero or negative when critical
    pub remaining: f64,
    pub status: LifeStatus,
}

/// Scan the forest in pre-order and report parts at or near their limit
///
/// The result keeps traversal order. Use [`sort_by_urgency`] for most-urgent
/// first.
pub fn evaluate(tree: &[Component], warning_threshold_hours: f64) -> Vec<LifeLimitAlert<'_>> {
    let mut alerts = Vec::new();
    walk(tree, warning_threshold_hours, &mut alerts);
    debug!(
        alerts = alerts.len(),
        warning_threshold_hours, "evaluated life limits"
    );
    alerts
}

fn walk<'a>(tree: &'a [Component], threshold: f64, out: &mut Vec<LifeLimitAlert<'a>>) {
    for node in tree {
        if let Some(remaining) = node.remaining_life() {
            let status = if remaining <= 0.0 {
                Some(LifeStatus::Critical)
            } else if remaining <= threshold {
                Some(LifeStatus::Warning)
            } else {
                None
            };
            if let Some(status) = status {
                out.push(LifeLimitAlert {
                    component: node,
                    remaining,
                    status,
                });
            }
        }
        walk(&node.children, threshold, out);
    }
}

/// Sort alerts by ascending remaining hours; ties keep traversal order
pub fn sort_by_urgency(alerts: &mut [LifeLimitAlert<'_>]) {
    alerts.sort_by(|a, b| a.remaining.total_cmp(&b.remaining));
}

/// Render alerts as a short human-readable summary
///
/// Anything not critical is listed as a warning.
pub fn format_summary(alerts: &[LifeLimitAlert<'_>]) -> String {
    if alerts.is_empty() {
        return "All tracked parts are within their life limits.".to_string();
    }

    let (critical, warning): (Vec<_>, Vec<_>) = alerts
        .iter()
        .partition(|a| a.status == LifeStatus::Critical);

    let mut lines = Vec::new();
    if !critical.is_empty() {
        lines.push(format!(
            "{} part(s) at or past life limit: {}",
            critical.len(),
            serials(&critical)
        ));
    }
    if !warning.is_empty() {
        lines.push(format!(
            "{} part(s) approaching life limit: {}",
            warning.len(),
            serials(&warning)
        ));
    }
    lines.join("\n")
}

fn serials(alerts: &[&LifeLimitAlert<'_>]) -> String {
    alerts
        .iter()
        .map(|a| a.component.serial_number.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
