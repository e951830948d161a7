//! CLI command implementations

pub mod completions;
pub mod import;
pub mod limits;
pub mod remove;
pub mod show;
pub mod swap;
pub mod validate;
