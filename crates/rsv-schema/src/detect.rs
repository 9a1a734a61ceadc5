//! Schema encoding detection.
//!
//! Resolution order: known extension first, then a sniff of the leading
//! non-whitespace content. Detection runs before any parser is selected and
//! never reads past the first meaningful token.

use crate::error::{Result, SchemaError};
use std::fmt;
use std::path::Path;

/// Concrete schema encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Xml,
    Json,
}

impl fmt::Display for SchemaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaFormat::Xml => write!(f, "xml"),
            SchemaFormat::Json => write!(f, "json"),
        }
    }
}

/// Detect the encoding of a schema file.
///
/// `.json` maps to JSON; `.xml` and extension-less paths map to XML. Any
/// other extension falls back to content sniffing: `<` opens a tag or
/// processing instruction, `{`/`[` opens a JSON value. Fails with
/// [`SchemaError::UnknownFormat`] when neither heuristic matches and with
/// [`SchemaError::Read`] when the file cannot be opened for sniffing.
pub fn detect_format(path: &Path) -> Result<SchemaFormat> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());

    match extension.as_deref() {
        Some("json") => return Ok(SchemaFormat::Json),
        Some("xml") | None => return Ok(SchemaFormat::Xml),
        Some(_) => {}
    }

    sniff_content(path)
}

/// Classify by the first non-whitespace character of the file.
fn sniff_content(path: &Path) -> Result<SchemaFormat> {
    let text = std::fs::read_to_string(path).map_err(|source| SchemaError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match text.trim_start().chars().next() {
        Some('<') => Ok(SchemaFormat::Xml),
        Some('{') | Some('[') => Ok(SchemaFormat::Json),
        _ => Err(SchemaError::UnknownFormat {
            path: path.to_path_buf(),
        }),
    }
}
