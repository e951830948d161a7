//! Precondition checks on a component forest
//!
//! The tree operations trust their input and never repair it. Hosts that want
//! to reject bad data before it reaches the engine call [`validate_forest`].
//! A failure here is a caller bug, which is why it is an error type of its own
//! and not an empty result like a failed lookup.

use miette::Diagnostic;
use thiserror::Error;

use crate::entities::component::Component;

/// Malformed forest data
#[derive(Debug, Error, Diagnostic, PartialEq)]
pub enum TreeError {
    #[error("component `{id}` ({serial_number}) has negative hours: {hours}")]
    #[diagnostic(code(tree::negative_hours))]
    NegativeHours {
        id: String,
        serial_number: String,
        hours: f64,
    },

    #[error("component `{id}` ({serial_number}) has a negative life limit: {life_limit}")]
    #[diagnostic(
        code(tree::negative_life_limit),
        help("Use 0 for parts whose life limit is not tracked.")
    )]
    NegativeLifeLimit {
        id: String,
        serial_number: String,
        life_limit: f64,
    },

    #[error("component `{id}` ({serial_number}) has a non-numeric {field}")]
    #[diagnostic(code(tree::non_finite))]
    NonFinite {
        id: String,
        serial_number: String,
        field: &'static str,
    },
}

/// Check every node for negative or non-finite hours and life limits
///
/// Stops at the first offending node in pre-order.
pub fn validate_forest(tree: &[Component]) -> Result<(), TreeError> {
    for node in tree {
        validate_node(node)?;
        validate_forest(&node.children)?;
    }
    Ok(())
}

fn validate_node(node: &Component) -> Result<(), TreeError> {
    let id = || node.id.to_string();
    let sn = || node.serial_number.clone();

    if !node.current_hours.is_finite() {
        return Err(TreeError::NonFinite {
            id: id(),
            serial_number: sn(),
            field: "hours",
        });
    }
    if !node.life_limit.is_finite() {
        return Err(TreeError::NonFinite {
            id: id(),
            serial_number: sn(),
            field: "life limit",
        });
    }
    if node.current_hours < 0.0 {
        return Err(TreeError::NegativeHours {
            id: id(),
            serial_number: sn(),
            hours: node.current_hours,
        });
    }
    if node.life_limit < 0.0 {
        return Err(TreeError::NegativeLifeLimit {
            id: id(),
            serial_number: sn(),
            life_limit: node.life_limit,
        });
    }
    Ok(())
}
