//! Repository structure validator common types.
//!
//! This crate provides the vocabulary shared across rsv crates:
//! - Requirement statuses attached to schema nodes
//! - Finding severities and the Finding value itself
//! - Output format specifications for the CLI

pub mod finding;
pub mod output;
pub mod status;

pub use finding::{Finding, Severity};
pub use output::OutputFormat;
pub use status::RequirementStatus;
