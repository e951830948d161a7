//! Part and sub-assembly swaps
//!
//! A swap combines the tree editor with the hour policy: the outgoing parts
//! are archived to inventory with the hours they carried, the incoming part or
//! subtree is installed with hours set by the chosen [`HourPolicy`], and a swap
//! record is produced for the engine's history.

use serde::Serialize;
use tracing::{debug, info};

use crate::core::editor::{replace, replace_group};
use crate::core::hours::HourPolicy;
use crate::core::identity::NodeId;
use crate::core::tree::{find_all_in_group, find_by_id, flatten};
use crate::entities::component::Component;
use crate::entities::engine::Engine;
use crate::entities::inventory::InventoryItem;
use crate::entities::swap_record::SwapRecord;

/// Result of a swap: the new forest plus what left the engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwapOutcome {
    /// The engine's new top-level components
    pub components: Vec<Component>,
    /// Parts that left the engine, ready for the inventory subsystem
    pub archived: Vec<InventoryItem>,
    /// History entries describing the swap
    pub records: Vec<SwapRecord>,
}

impl SwapOutcome {
    fn unchanged(engine: &Engine) -> Self {
        Self {
            components: engine.components.clone(),
            archived: Vec::new(),
            records: Vec::new(),
        }
    }

    /// True when nothing was swapped
    pub fn is_noop(&self) -> bool {
        self.records.is_empty()
    }
}

/// Swap a single part for an inventory item
///
/// The first node with `target_id` is replaced by a leaf built from `item`. If
/// the outgoing node had children they leave the engine with it and are
/// archived too. An unknown id leaves the engine unchanged.
pub fn swap_component(
    engine: &Engine,
    target_id: &str,
    item: &InventoryItem,
    policy: HourPolicy,
) -> SwapOutcome {
    let Some(outgoing) = find_by_id(&engine.components, target_id) else {
        debug!(target_id, "swap target not found");
        return SwapOutcome::unchanged(engine);
    };

    let incoming = Component::from_inventory(item, NodeId::generate(), policy, engine.total_hours);
    let archived = flatten(std::slice::from_ref(outgoing))
        .into_iter()
        .map(InventoryItem::from)
        .collect();
    let record = SwapRecord::replacement(outgoing, &incoming, engine.total_hours);
    info!(engine = %engine.name, %policy, "{}", record.summary());

    SwapOutcome {
        components: replace(&engine.components, target_id, &incoming),
        archived,
        records: vec![record],
    }
}

/// Swap a whole assembly group for a replacement subtree
///
/// Everything in the group leaves the engine and is archived. The replacement
/// takes the place of the first group root in pre-order, at whatever depth it
/// sat, and any later roots of the same name are dropped. It is appended at the
/// top level when the group is absent. Every node in the replacement gets the
/// hours given by `policy`; under [`HourPolicy::PreserveCarried`] that is the
/// replacement root's own hours.
pub fn swap_assembly(
    engine: &Engine,
    group: &str,
    replacement: &Component,
    policy: HourPolicy,
) -> SwapOutcome {
    let outgoing = find_all_in_group(&engine.components, group);
    let archived: Vec<InventoryItem> = outgoing.iter().map(|c| InventoryItem::from(*c)).collect();

    let installed = policy
        .install(
            std::slice::from_ref(replacement),
            engine.total_hours,
            replacement.current_hours,
        )
        .into_iter()
        .next()
        .unwrap_or_else(|| replacement.clone());

    let record = match outgoing.iter().find(|c| c.description == group) {
        Some(old_root) => SwapRecord::replacement(old_root, &installed, engine.total_hours),
        None => SwapRecord::installation(&installed, engine.total_hours),
    };

    let components = if outgoing.is_empty() {
        let mut components = engine.components.clone();
        components.push(installed);
        components
    } else {
        replace_group(&engine.components, group, &installed)
    };

    info!(
        engine = %engine.name,
        group,
        archived = archived.len(),
        %policy,
        "{}",
        record.summary()
    );

    SwapOutcome {
        components,
        archived,
        records: vec![record],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tree::{count_nodes, fixtures::sample_forest};
    use crate::entities::swap_record::SwapKind;

    fn engine() -> Engine {
        crate::logging::init_test();
        let mut engine = Engine::new("GTE-7");
        engine.components = sample_forest();
        engine.log_test_run(100.0);
        engine
    }

    fn spare() -> InventoryItem {
        InventoryItem {
            description: "Blade".to_string(),
            part_number: "B-2".to_string(),
            serial_number: "SN-NEW-BLADE".to_string(),
            current_hours: 15.0,
            life_limit: 300.0,
        }
    }

    #[test]
    fn test_swap_component_sync_policy() {
        let engine = engine();
        let outcome = swap_component(&engine, "7", &spare(), HourPolicy::SyncToEngine);

        let installed = outcome.components[1]
            .children
            .iter()
            .find(|c| c.serial_number == "SN-NEW-BLADE")
            .unwrap();
        assert_eq!(installed.current_hours, 100.0);
        assert_eq!(outcome.archived.len(), 1);
        assert_eq!(outcome.archived[0].serial_number, "SN-7");
        assert_eq!(outcome.archived[0].current_hours, 100.0);
        assert_eq!(outcome.records[0].kind, SwapKind::Replacement);
        assert_eq!(count_nodes(&outcome.components), 9);
    }

    #[test]
    fn test_swap_component_preserve_policy() {
        let engine = engine();
        let outcome = swap_component(&engine, "7", &spare(), HourPolicy::PreserveCarried);
        let installed = &outcome.components[1].children[0];
        assert_eq!(installed.serial_number, "SN-NEW-BLADE");
        assert_eq!(installed.current_hours, 15.0);
    }

    #[test]
    fn test_swap_component_archives_children() {
        let engine = engine();
        let outcome = swap_component(&engine, "2", &spare(), HourPolicy::SyncToEngine);
        let archived: Vec<_> = outcome
            .archived
            .iter()
            .map(|i| i.serial_number.as_str())
            .collect();
        assert_eq!(archived, vec!["SN-2", "SN-3", "SN-4"]);
        assert_eq!(count_nodes(&outcome.components), 7);
    }

    #[test]
    fn test_swap_component_unknown_target_is_noop() {
        let engine = engine();
        let outcome = swap_component(&engine, "404", &spare(), HourPolicy::SyncToEngine);
        assert!(outcome.is_noop());
        assert!(outcome.archived.is_empty());
        assert_eq!(outcome.components, engine.components);
    }

    #[test]
    fn test_swap_assembly_keeps_position_and_syncs_hours() {
        let engine = engine();
        let replacement = Component::new("t2", "Turbine", "T-2", "SN-T2")
            .with_hours(40.0)
            .with_children(vec![
                Component::new("b2", "Blade", "B-2", "SN-B2").with_life_limit(300.0),
                Component::new("d2", "Disk", "D-2", "SN-D2"),
            ]);

        let outcome = swap_assembly(&engine, "Turbine", &replacement, HourPolicy::SyncToEngine);

        assert_eq!(outcome.components[1].serial_number, "SN-T2");
        assert!(flatten(&outcome.components[1..2])
            .iter()
            .all(|c| c.current_hours == 100.0));
        let archived: Vec<_> = outcome
            .archived
            .iter()
            .map(|i| i.serial_number.as_str())
            .collect();
        assert_eq!(archived, vec!["SN-6", "SN-7", "SN-8"]);
        assert_eq!(outcome.records[0].kind, SwapKind::Replacement);
        assert_eq!(
            outcome.records[0].removed.as_ref().unwrap().serial_number,
            "SN-6"
        );
    }

    #[test]
    fn test_swap_assembly_preserve_uses_root_hours() {
        let engine = engine();
        let replacement = Component::new("t2", "Turbine", "T-2", "SN-T2")
            .with_hours(40.0)
            .with_children(vec![Component::new("b2", "Blade", "B-2", "SN-B2").with_hours(3.0)]);
        let outcome =
            swap_assembly(&engine, "Turbine", &replacement, HourPolicy::PreserveCarried);
        assert!(flatten(&outcome.components[1..2])
            .iter()
            .all(|c| c.current_hours == 40.0));
    }

    #[test]
    fn test_swap_assembly_new_group_is_installation() {
        let engine = engine();
        let replacement = Component::new("ab", "Afterburner", "AB-1", "SN-AB");
        let outcome = swap_assembly(&engine, "Afterburner", &replacement, HourPolicy::SyncToEngine);
        assert!(outcome.archived.is_empty());
        assert_eq!(outcome.records[0].kind, SwapKind::Installation);
        assert_eq!(outcome.components.last().unwrap().serial_number, "SN-AB");
        assert_eq!(count_nodes(&outcome.components), 10);
    }

    #[test]
    fn test_swap_assembly_nested_group_stays_under_parent() {
        let engine = engine();
        let replacement = Component::new("c2", "Compressor", "CP-2", "SN-NEW")
            .with_children(vec![Component::new("s2", "Stage 1", "ST1-2", "SN-S2")]);
        let outcome =
            swap_assembly(&engine, "Compressor", &replacement, HourPolicy::SyncToEngine);

        let core: Vec<_> = outcome.components[0]
            .children
            .iter()
            .map(|c| c.serial_number.as_str())
            .collect();
        assert_eq!(core, vec!["SN-NEW", "SN-5"]);
        let roots: Vec<_> = outcome
            .components
            .iter()
            .map(|c| c.serial_number.as_str())
            .collect();
        assert_eq!(roots, vec!["SN-1", "SN-6", "SN-9"]);
        assert_eq!(outcome.archived.len(), 3);
        assert_eq!(outcome.components[0].children[0].current_hours, 100.0);
        assert_eq!(count_nodes(&outcome.components), 8);
    }
}
