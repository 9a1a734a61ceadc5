//! JSON schema loader.
//!
//! The JSON encoding matches the canonical model directly, wrapped in a
//! top-level `structure` object. serde enforces the loader contract: every
//! node carries a `name`, absent optional keys stay unset, and a shape or
//! syntax error rejects the whole document.

use crate::error::ParseError;
use crate::model::{DirectorySpec, FileSpec, Metadata, StructureTree};
use serde::Deserialize;

/// Wire shape of a JSON schema document.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SchemaDocument {
    #[serde(default)]
    metadata: Option<Metadata>,

    #[serde(default)]
    structure: Structure,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Structure {
    #[serde(default)]
    root_files: Vec<FileSpec>,

    #[serde(default)]
    directories: Vec<DirectorySpec>,
}

/// Parse a JSON schema document into the canonical tree.
pub fn parse_str(text: &str) -> Result<StructureTree, ParseError> {
    let document: SchemaDocument = serde_json::from_str(text)?;

    Ok(StructureTree {
        metadata: document.metadata,
        root_files: document.structure.root_files,
        directories: document.structure.directories,
    })
}
