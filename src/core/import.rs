//! Build-report import
//!
//! Turns flat build-report rows into a component forest and reconciles it with
//! the engine's current one. Parsing the report file itself is the caller's
//! job.

use serde::Serialize;
use tracing::info;

use crate::core::identity::NodeId;
use crate::core::reconcile::{pair_swaps, reconcile, PartUpdate};
use crate::core::tree::flatten;
use crate::entities::build_report::BuildReportRow;
use crate::entities::component::Component;
use crate::entities::engine::Engine;
use crate::entities::swap_record::SwapRecord;

/// Build a forest from report rows
///
/// Rows sharing an assembly (same name and serial number) are gathered under
/// one assembly node, created where that assembly first appears and taking its
/// hours from that first row. Rows without an assembly become top-level parts.
/// Every node gets a freshly generated id.
pub fn build_forest(rows: &[BuildReportRow]) -> Vec<Component> {
    let mut forest: Vec<Component> = Vec::new();
    let mut assemblies: Vec<((String, String), usize)> = Vec::new();

    for row in rows {
        let part = Component::new(
            NodeId::generate(),
            row.part_name.clone(),
            row.part_number.clone(),
            row.serial_number.clone(),
        )
        .with_hours(row.hours)
        .with_life_limit(row.life_limit);

        let Some(name) = row.assembly_name.clone() else {
            forest.push(part);
            continue;
        };

        let key = (name, row.assembly_serial_number.clone().unwrap_or_default());
        let index = match assemblies.iter().find(|(k, _)| *k == key) {
            Some((_, index)) => *index,
            None => {
                let assembly = Component::new(
                    NodeId::generate(),
                    key.0.clone(),
                    row.assembly_part_number.clone().unwrap_or_default(),
                    key.1.clone(),
                )
                .with_hours(row.hours);
                forest.push(assembly);
                assemblies.push((key, forest.len() - 1));
                forest.len() - 1
            }
        };
        forest[index].children.push(part);
    }

    forest
}

/// Outcome of importing a build report against an engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildReportImport {
    /// The forest built from the report, to replace the engine's
    pub components: Vec<Component>,
    /// Parts whose identifying attributes changed
    pub updated: Vec<PartUpdate>,
    /// Replacement, installation and removal records
    pub records: Vec<SwapRecord>,
}

/// Reconcile a build report with the engine and derive swap history
pub fn import_build_report(engine: &Engine, rows: &[BuildReportRow]) -> BuildReportImport {
    let components = build_forest(rows);
    let mut reconciliation = reconcile(&flatten(&engine.components), &flatten(&components));
    let records = pair_swaps(&mut reconciliation, engine.total_hours);

    info!(
        engine = %engine.name,
        rows = rows.len(),
        updated = reconciliation.updated.len(),
        records = records.len(),
        "imported build report"
    );

    BuildReportImport {
        components,
        updated: reconciliation.updated,
        records,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tree::{count_nodes, find_all_in_group};
    use crate::entities::swap_record::SwapKind;

    fn rows() -> Vec<BuildReportRow> {
        vec![
            BuildReportRow::part("Blade", "B-1", "SN-B1")
                .in_assembly("Turbine", "T-1", "SN-T")
                .with_hours(120.0)
                .with_life_limit(400.0),
            BuildReportRow::part("Starter", "ST-1", "SN-ST").with_hours(20.0),
            BuildReportRow::part("Disk", "D-1", "SN-D1")
                .in_assembly("Turbine", "T-1", "SN-T")
                .with_hours(120.0),
        ]
    }

    #[test]
    fn test_build_forest_groups_by_assembly() {
        let forest = build_forest(&rows());
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].description, "Turbine");
        assert_eq!(forest[0].serial_number, "SN-T");
        assert_eq!(forest[0].current_hours, 120.0);
        assert_eq!(forest[0].children.len(), 2);
        assert_eq!(forest[1].description, "Starter");
        assert_eq!(count_nodes(&forest), 4);
        assert_eq!(find_all_in_group(&forest, "Turbine").len(), 3);
    }

    #[test]
    fn test_build_forest_empty() {
        assert!(build_forest(&[]).is_empty());
    }

    #[test]
    fn test_import_pairs_replacements() {
        let mut engine = Engine::new("GTE-3");
        engine.total_hours = 300.0;
        engine.components = vec![
            Component::new("t", "Turbine", "T-1", "SN-T").with_children(vec![
                Component::new("b", "Blade", "B-1", "SN-OLD-BLADE"),
                Component::new("d", "Disk", "D-1", "SN-D1"),
            ]),
            Component::new("s", "Starter", "ST-0", "SN-ST"),
            Component::new("g", "Gearbox", "G-1", "SN-G"),
        ];
        let mut rows = rows();
        rows[0].serial_number = "SN-NEW-BLADE".to_string();

        let import = import_build_report(&engine, &rows);

        assert_eq!(import.updated.len(), 1);
        assert_eq!(import.updated[0].after.part_number, "ST-1");

        let kinds: Vec<_> = import.records.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![SwapKind::Replacement, SwapKind::Removal]);
        assert_eq!(
            import.records[0].removed.as_ref().unwrap().serial_number,
            "SN-OLD-BLADE"
        );
        assert_eq!(
            import.records[1].removed.as_ref().unwrap().serial_number,
            "SN-G"
        );
        assert!(import.records.iter().all(|r| r.engine_hours == 300.0));
    }
}
