//! Core module - the BOM tree engine and its supporting services

pub mod config;
pub mod document;
pub mod editor;
pub mod hours;
pub mod identity;
pub mod import;
pub mod life_limit;
pub mod reconcile;
pub mod swap;
pub mod tree;
pub mod validate;

pub use config::Config;
pub use document::{DocumentError, DocumentFormat};
pub use editor::{remove_by_id, remove_group, replace, replace_group};
pub use hours::{apply_hours, preserve_carried_hours, sync_to_engine_hours, HourPolicy};
pub use identity::NodeId;
pub use import::{build_forest, import_build_report, BuildReportImport};
pub use life_limit::{
    evaluate, format_summary, sort_by_urgency, LifeLimitAlert, LifeStatus,
    DEFAULT_WARNING_THRESHOLD_HOURS,
};
pub use reconcile::{pair_swaps, reconcile, PartUpdate, Reconciliation};
pub use swap::{swap_assembly, swap_component, SwapOutcome};
pub use tree::{
    assembly_groups, count_nodes, find_all_by_id, find_all_in_group, find_by_id, find_by_serial,
    find_group_roots, flatten,
};
pub use validate::{validate_forest, TreeError};
