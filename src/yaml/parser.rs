//! YAML document parsing
//!
//! Engine documents and replacement subtrees are read whole. A blank document
//! is reported on its own rather than as whatever serde_yml makes of it.

use serde::de::DeserializeOwned;
use tracing::trace;

use crate::yaml::diagnostics::{YamlError, YamlSyntaxError};

/// Parse a YAML document into a typed value
///
/// `filename` is only used to label diagnostics.
pub fn parse_yaml<T: DeserializeOwned + 'static>(content: &str, filename: &str) -> Result<T, YamlError> {
    if content.trim().is_empty() {
        return Err(YamlError::Empty {
            filename: filename.to_string(),
        });
    }

    trace!(filename, bytes = content.len(), "parsing yaml");
    serde_yml::from_str(content)
        .map_err(|e| YamlSyntaxError::from_serde_error(&e, content, filename).into())
}
