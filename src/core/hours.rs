//! Operating-hour propagation
//!
//! `apply_hours` is additive and runs once per logged test over the whole
//! engine. The two set operations are absolute and only used when a part or
//! sub-assembly is swapped in; they are kept as separate functions so an
//! additive call can never be mistaken for an absolute one.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::entities::component::Component;

/// Which hours a freshly installed part starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum HourPolicy {
    /// Adopt the engine's current total hours
    #[default]
    SyncToEngine,
    /// Keep the hours the part carried out of inventory
    PreserveCarried,
}

impl std::fmt::Display for HourPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HourPolicy::SyncToEngine => write!(f, "sync-to-engine"),
            HourPolicy::PreserveCarried => write!(f, "preserve-carried"),
        }
    }
}

impl std::str::FromStr for HourPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "sync-to-engine" | "sync" => Ok(HourPolicy::SyncToEngine),
            "preserve-carried" | "preserve" => Ok(HourPolicy::PreserveCarried),
            _ => Err(format!(
                "Invalid hour policy: {}. Use 'sync-to-engine' or 'preserve-carried'",
                s
            )),
        }
    }
}

impl HourPolicy {
    /// Set the hours of a freshly installed subtree according to this policy
    pub fn install(
        &self,
        tree: &[Component],
        engine_total_hours: f64,
        carried_hours: f64,
    ) -> Vec<Component> {
        match self {
            HourPolicy::SyncToEngine => sync_to_engine_hours(tree, engine_total_hours),
            HourPolicy::PreserveCarried => preserve_carried_hours(tree, carried_hours),
        }
    }
}

/// Add `delta_hours` to every node in the forest
///
/// No node is skipped. Callers should only pass positive durations; the value
/// is applied as given.
pub fn apply_hours(tree: &[Component], delta_hours: f64) -> Vec<Component> {
    trace!(delta_hours, "applying hours to forest");
    map_hours(tree, &|hours| hours + delta_hours)
}

/// Set every node in the subtree to the engine's current total hours
pub fn sync_to_engine_hours(tree: &[Component], engine_total_hours: f64) -> Vec<Component> {
    trace!(engine_total_hours, "syncing subtree to engine hours");
    map_hours(tree, &|_| engine_total_hours)
}

/// Set every node in the subtree to the hours carried over from inventory
pub fn preserve_carried_hours(tree: &[Component], carried_hours: f64) -> Vec<Component> {
    trace!(carried_hours, "restoring carried hours on subtree");
    map_hours(tree, &|_| carried_hours)
}

fn map_hours(tree: &[Component], f: &dyn Fn(f64) -> f64) -> Vec<Component> {
    tree.iter()
        .map(|node| Component {
            current_hours: f(node.current_hours),
            children: map_hours(&node.children, f),
            ..node.clone_shallow()
        })
        .collect()
}
