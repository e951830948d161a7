//! ELB: Engine Logbook
//!
//! The bill-of-materials tree engine behind an engine-maintenance logbook:
//! hour propagation, life-limit alerts, part and assembly swaps, and build
//! report reconciliation over an engine's component forest. The tree
//! operations are pure functions from a borrowed forest to a new one; the
//! `cli` module is a thin host that owns loading and saving.

pub mod cli;
pub mod core;
pub mod entities;
pub mod logging;
pub mod yaml;
