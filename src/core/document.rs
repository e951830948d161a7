//! Engine document storage
//!
//! An engine is stored as one YAML or JSON document, picked by file
//! extension. Saves replace the whole document: the new content is written to
//! a sibling temp file and renamed over the old one.

use miette::Diagnostic;
use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::yaml::{parse_yaml, YamlError};

#[derive(Debug, Error, Diagnostic)]
pub enum DocumentError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Yaml(#[from] YamlError),

    #[error("invalid JSON in {path}: {source}")]
    #[diagnostic(code(document::json))]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("could not serialize document: {0}")]
    #[diagnostic(code(document::serialize))]
    Serialize(String),

    #[error("unsupported document format: {0}")]
    #[diagnostic(
        code(document::format),
        help("Use a .yaml, .yml or .json file.")
    )]
    UnsupportedFormat(String),

    #[error("IO error on {path}: {source}")]
    #[diagnostic(code(document::io))]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// On-disk format of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Ok(DocumentFormat::Yaml),
            Some("json") => Ok(DocumentFormat::Json),
            _ => Err(DocumentError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

fn io_error(path: &Path, source: std::io::Error) -> DocumentError {
    DocumentError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Read a document, choosing the parser by extension
pub fn load<T: DeserializeOwned + 'static>(path: &Path) -> Result<T, DocumentError> {
    let format = DocumentFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    debug!(path = %path.display(), ?format, "loading document");

    match format {
        DocumentFormat::Yaml => Ok(parse_yaml(&content, &path.display().to_string())?),
        DocumentFormat::Json => serde_json::from_str(&content).map_err(|source| DocumentError::Json {
            path: path.display().to_string(),
            source,
        }),
    }
}

/// Render a value in the given format
pub fn render<T: Serialize>(value: &T, format: DocumentFormat) -> Result<String, DocumentError> {
    match format {
        DocumentFormat::Yaml => {
            serde_yml::to_string(value).map_err(|e| DocumentError::Serialize(e.to_string()))
        }
        DocumentFormat::Json => serde_json::to_string_pretty(value)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| DocumentError::Serialize(e.to_string())),
    }
}

/// Replace the whole document at `path` with `value`
pub fn save<T: Serialize>(path: &Path, value: &T) -> Result<(), DocumentError> {
    let format = DocumentFormat::from_path(path)?;
    let content = render(value, format)?;

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    std::fs::write(&tmp_path, content).map_err(|e| io_error(&tmp_path, e))?;
    std::fs::rename(&tmp_path, path).map_err(|e| io_error(path, e))?;
    debug!(path = %path.display(), ?format, "saved document");
    Ok(())
}
