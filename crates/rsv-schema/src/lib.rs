//! Schema loading for the repository structure validator.
//!
//! A structure schema describes the expected layout of a repository: which
//! files and directories must, should, may, or must not exist. The same
//! logical schema can be written in two encodings:
//!
//! - XML: a namespaced document with `root-files`/`directories` collections
//! - JSON: an object with `structure.rootFiles`/`structure.directories`
//!
//! Both loaders converge on one canonical [`StructureTree`]; the validator
//! never learns which encoding produced the tree it received.
//!
//! # Example
//!
//! ```no_run
//! use rsv_schema::{load_schema, SchemaFormat};
//! use std::path::Path;
//!
//! let tree = load_schema(Path::new("default-repository.xml"), None).unwrap();
//! println!("{} root files", tree.root_files.len());
//! ```

pub mod detect;
pub mod error;
pub mod json;
pub mod model;
pub mod xml;

pub use detect::{detect_format, SchemaFormat};
pub use error::{ParseError, Result, SchemaError};
pub use model::{DirectorySpec, FileSpec, Metadata, StructureTree};

use std::path::Path;
use tracing::debug;

/// Load a structure schema from disk into the canonical tree.
///
/// When `format` is `None` the encoding is auto-detected from the file
/// extension and, failing that, from the leading content (see
/// [`detect_format`]). The returned tree is complete: a malformed schema
/// never yields a partially built tree.
pub fn load_schema(path: &Path, format: Option<SchemaFormat>) -> Result<StructureTree> {
    let format = match format {
        Some(format) => format,
        None => detect_format(path)?,
    };

    let text = std::fs::read_to_string(path).map_err(|source| SchemaError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed = match format {
        SchemaFormat::Xml => xml::parse_str(&text),
        SchemaFormat::Json => json::parse_str(&text),
    };

    let tree = parsed.map_err(|source| SchemaError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        schema = %path.display(),
        format = %format,
        root_files = tree.root_files.len(),
        directories = tree.directories.len(),
        "Schema loaded"
    );

    Ok(tree)
}
