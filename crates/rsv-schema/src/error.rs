//! Error types for schema loading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors raised while locating, detecting, or parsing a schema file.
///
/// All variants abort the run before any validation happens; a repository
/// that fails validation is reported through findings, never through these.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Schema file missing or unreadable.
    #[error("cannot read schema file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Neither the extension nor the leading content identifies an encoding.
    #[error("cannot detect schema format for {path}")]
    UnknownFormat { path: PathBuf },

    /// Schema file is readable but malformed for its encoding.
    #[error("invalid schema {path}: {source}")]
    Invalid { path: PathBuf, source: ParseError },
}

impl SchemaError {
    /// True for errors caused by tool configuration (missing/undetectable
    /// file) rather than schema content. Both classes share an exit code;
    /// the distinction only shapes the error message.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SchemaError::Read { .. } | SchemaError::UnknownFormat { .. }
        )
    }
}

/// Errors raised while parsing schema content in either encoding.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("malformed XML: {0}")]
    Xml(String),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document root is not in the {0} namespace")]
    WrongNamespace(String),

    #[error("missing required element: {0}")]
    MissingElement(String),

    #[error(transparent)]
    Status(#[from] rsv_common::status::UnknownStatus),

    #[error("unexpected end of document")]
    UnexpectedEof,
}
