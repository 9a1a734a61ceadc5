//! Canonical structure tree, independent of schema encoding.
//!
//! These types match the JSON encoding directly (camelCase keys, absent
//! keys deserialize to `None`/empty); the XML loader builds the same shapes
//! by hand. Descriptive fields are carried for reporting only and never
//! affect pass/fail logic.

use rsv_common::RequirementStatus;
use serde::{Deserialize, Serialize};

/// Expected file entry in a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSpec {
    /// Expected file name, relative to the owning directory.
    pub name: String,

    #[serde(default)]
    pub requirement_status: RequirementStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// File-extension hint; an attribute in the XML encoding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

/// Expected directory entry in a schema, possibly nested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorySpec {
    pub name: String,

    /// Explicit location relative to the repository root. When absent the
    /// directory resolves to its name under the parent's location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default)]
    pub requirement_status: RequirementStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<FileSpec>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subdirectories: Vec<DirectorySpec>,
}

/// Free-form descriptive block at the top of a schema. Not validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

/// Canonical in-memory representation of an expected repository layout.
///
/// Built once per run by either loader and read-only thereafter. Trees
/// built from equivalent XML and JSON schemas compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureTree {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub root_files: Vec<FileSpec>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directories: Vec<DirectorySpec>,
}

impl StructureTree {
    /// Total number of nodes (files plus directories) in the tree.
    pub fn node_count(&self) -> usize {
        fn count_dir(dir: &DirectorySpec) -> usize {
            1 + dir.files.len()
                + dir
                    .subdirectories
                    .iter()
                    .map(count_dir)
                    .sum::<usize>()
        }

        self.root_files.len() + self.directories.iter().map(count_dir).sum::<usize>()
    }
}
