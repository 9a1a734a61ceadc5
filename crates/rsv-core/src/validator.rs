//! Lockstep walk of a structure tree against a real filesystem.
//!
//! The validator visits root files in schema order, then each top-level
//! directory depth-first (files before subdirectories). Every node costs at
//! most one metadata lookup; names are probed literally, never matched
//! against directory listings. The walk is deterministic: unchanged inputs
//! produce an identical finding list on every run.
//!
//! Findings are the only output. Nothing here fails: a probe error counts
//! as absence, and nameless nodes are rejected by the schema loaders long
//! before this module sees a tree.

use rsv_common::{Finding, RequirementStatus};
use rsv_schema::{DirectorySpec, FileSpec, StructureTree};
use std::path::{Path, PathBuf};
use tracing::trace;

/// Validate a repository layout against a structure tree.
///
/// `repo_root` is the directory the schema's paths are resolved against.
/// The returned findings preserve schema node order.
pub fn validate(tree: &StructureTree, repo_root: &Path) -> Vec<Finding> {
    let mut findings = Vec::new();

    for file in &tree.root_files {
        check_file(file, repo_root, Path::new(""), &mut findings);
    }
    for directory in &tree.directories {
        check_directory(directory, repo_root, Path::new(""), &mut findings);
    }

    findings
}

fn check_file(spec: &FileSpec, repo_root: &Path, parent: &Path, findings: &mut Vec<Finding>) {
    let relative = parent.join(&spec.name);
    let exists = is_file(&repo_root.join(&relative));
    let path = display_path(&relative);

    trace!(path = %path, status = %spec.requirement_status, exists, "Probed file");

    match (spec.requirement_status, exists) {
        (RequirementStatus::Required, false) => findings.push(Finding::error(
            format!("Required file missing: {}", spec.name),
            path,
            spec.requirement_status,
        )),
        (RequirementStatus::Suggested, false) => findings.push(Finding::warning(
            format!("Suggested file missing: {}", spec.name),
            path,
            spec.requirement_status,
        )),
        (RequirementStatus::NotAllowed, true) => findings.push(Finding::error(
            format!(
                "Not-allowed file present: {} (should not be committed)",
                spec.name
            ),
            path,
            spec.requirement_status,
        )),
        (RequirementStatus::Optional, false) | (RequirementStatus::NotAllowed, false) => {}
        (RequirementStatus::Required, true)
        | (RequirementStatus::Suggested, true)
        | (RequirementStatus::Optional, true) => findings.push(Finding::info(
            format!("File present: {}", spec.name),
            path,
            spec.requirement_status,
        )),
    }
}

fn check_directory(
    spec: &DirectorySpec,
    repo_root: &Path,
    parent: &Path,
    findings: &mut Vec<Finding>,
) {
    // An explicit path is anchored at the repository root; otherwise the
    // directory lives under its parent's resolved location.
    let relative = match &spec.path {
        Some(path) => PathBuf::from(path),
        None => parent.join(&spec.name),
    };
    let exists = is_dir(&repo_root.join(&relative));
    let path = display_path(&relative);

    trace!(path = %path, status = %spec.requirement_status, exists, "Probed directory");

    match (spec.requirement_status, exists) {
        // Flagged at directory level: report and prune the subtree so a
        // missing directory does not cascade into per-child findings.
        (RequirementStatus::Required, false) => {
            findings.push(Finding::error(
                format!("Required directory missing: {}", spec.name),
                path,
                spec.requirement_status,
            ));
            return;
        }
        (RequirementStatus::Suggested, false) => {
            findings.push(Finding::warning(
                format!("Suggested directory missing: {}", spec.name),
                path,
                spec.requirement_status,
            ));
            return;
        }
        (RequirementStatus::NotAllowed, true) => {
            findings.push(Finding::error(
                format!(
                    "Not-allowed directory present: {} (should not be committed)",
                    spec.name
                ),
                path,
                spec.requirement_status,
            ));
            return;
        }
        // Absent without being flagged: no parent, no children to check.
        (RequirementStatus::Optional, false) | (RequirementStatus::NotAllowed, false) => return,
        (RequirementStatus::Required, true)
        | (RequirementStatus::Suggested, true)
        | (RequirementStatus::Optional, true) => findings.push(Finding::info(
            format!("Directory present: {}", spec.name),
            path,
            spec.requirement_status,
        )),
    }

    for file in &spec.files {
        check_file(file, repo_root, &relative, findings);
    }
    for subdirectory in &spec.subdirectories {
        check_directory(subdirectory, repo_root, &relative, findings);
    }
}

/// True when the path exists and is a regular file. A wrong-kind entry or a
/// probe error counts as absent.
fn is_file(path: &Path) -> bool {
    std::fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// True when the path exists and is a directory. A wrong-kind entry or a
/// probe error counts as absent.
fn is_dir(path: &Path) -> bool {
    std::fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

fn display_path(relative: &Path) -> String {
    relative.display().to_string()
}
