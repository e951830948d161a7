//! Entity type definitions

pub mod build_report;
pub mod component;
pub mod engine;
pub mod inventory;
pub mod swap_record;

pub use build_report::BuildReportRow;
pub use component::Component;
pub use engine::Engine;
pub use inventory::InventoryItem;
pub use swap_record::{PartRef, SwapKind, SwapRecord};
