//! Build-report reconciliation
//!
//! Compares the engine's current flattened part list against a freshly
//! imported one, keyed by serial number. Hours are expected to move between
//! reports and never on their own make a part count as updated.
//!
//! The three lists on [`Reconciliation`] are plain public vectors. The swap
//! history writer consumes entries out of `added` while pairing them with
//! removals, so they are deliberately left open to mutation.

use std::collections::{HashMap, VecDeque};

use serde::Serialize;
use tracing::debug;

use crate::entities::component::Component;
use crate::entities::swap_record::SwapRecord;

/// A part present in both lists whose identifying attributes changed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartUpdate {
    pub before: Component,
    pub after: Component,
}

/// Three-way classification of an imported part list
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Reconciliation {
    /// In the new list only
    pub added: Vec<Component>,
    /// In the old list only
    pub removed: Vec<Component>,
    /// In both, with differing non-hour attributes
    pub updated: Vec<PartUpdate>,
}

impl Reconciliation {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.updated.is_empty()
    }
}

/// Classify parts between the current and incoming flattened lists
///
/// Both inputs are flat lists (see [`crate::core::tree::flatten`]); children
/// are ignored and only the listed nodes are compared. When a serial number
/// repeats in the current list, only its first occurrence takes part.
///
/// Parts without a serial number are matched on part number and description
/// instead, one for one in list order, so identical unserialized parts on both
/// sides cancel out.
pub fn reconcile(current: &[&Component], incoming: &[&Component]) -> Reconciliation {
    let mut slots: Vec<Option<&Component>> = Vec::with_capacity(current.len());
    let mut by_serial: HashMap<&str, usize> = HashMap::new();
    let mut unserialized: HashMap<(&str, &str), VecDeque<usize>> = HashMap::new();
    for node in current {
        let serial = node.serial_number.trim();
        if serial.is_empty() {
            unserialized
                .entry(unserialized_key(node))
                .or_default()
                .push_back(slots.len());
            slots.push(Some(*node));
        } else if !by_serial.contains_key(serial) {
            by_serial.insert(serial, slots.len());
            slots.push(Some(*node));
        }
    }

    let mut result = Reconciliation::default();
    for node in incoming {
        let serial = node.serial_number.trim();
        let slot = if serial.is_empty() {
            unserialized
                .get_mut(&unserialized_key(node))
                .and_then(|queue| queue.pop_front())
        } else {
            by_serial.remove(serial)
        };
        match slot {
            Some(slot) => {
                if let Some(old) = slots[slot].take() {
                    if !old.same_attributes(node) {
                        result.updated.push(PartUpdate {
                            before: old.clone_shallow(),
                            after: node.clone_shallow(),
                        });
                    }
                }
            }
            None => result.added.push(node.clone_shallow()),
        }
    }

    result.removed = slots.into_iter().flatten().map(|c| c.clone_shallow()).collect();

    debug!(
        added = result.added.len(),
        removed = result.removed.len(),
        updated = result.updated.len(),
        "reconciled build report"
    );
    result
}

fn unserialized_key(node: &Component) -> (&str, &str) {
    (node.part_number.as_str(), node.description.as_str())
}

/// Turn added/removed parts into swap history records
///
/// Each removed part is paired with the first added part sharing its part
/// number or description; that added part is consumed so it is not reported
/// twice. Unpaired parts become plain removals or installations. Both `added`
/// and `removed` are drained; `updated` is left as is.
pub fn pair_swaps(reconciliation: &mut Reconciliation, engine_hours: f64) -> Vec<SwapRecord> {
    let mut records = Vec::new();

    for removed in std::mem::take(&mut reconciliation.removed) {
        let partner = reconciliation
            .added
            .iter()
            .position(|added| is_counterpart(&removed, added));

        match partner {
            Some(pos) => {
                let installed = reconciliation.added.remove(pos);
                records.push(SwapRecord::replacement(&removed, &installed, engine_hours));
            }
            None => records.push(SwapRecord::removal(&removed, engine_hours)),
        }
    }

    for installed in std::mem::take(&mut reconciliation.added) {
        records.push(SwapRecord::installation(&installed, engine_hours));
    }

    records
}

fn is_counterpart(removed: &Component, added: &Component) -> bool {
    (!removed.part_number.is_empty() && removed.part_number == added.part_number)
        || (!removed.description.is_empty() && removed.description == added.description)
}
