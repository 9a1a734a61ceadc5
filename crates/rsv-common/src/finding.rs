//! Findings produced by a validation run.
//!
//! A Finding is an immutable value: it is appended to the run's result list
//! by the validator and never mutated afterwards. Validation failures are
//! findings, not errors; the reporter derives the exit code from them.

use crate::status::RequirementStatus;
use serde::{Deserialize, Serialize};

/// Severity of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Required item missing or not-allowed item present.
    Error,

    /// Suggested item missing.
    Warning,

    /// Expected item confirmed present.
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// One reported discrepancy or confirmation between expected and actual
/// repository layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,

    /// Human-readable description, e.g. "Required file missing: LICENSE".
    pub message: String,

    /// Repository-relative path of the node that produced this finding.
    pub path: String,

    /// Requirement status of the schema node that produced this finding.
    pub requirement_status: RequirementStatus,
}

impl Finding {
    pub fn error(
        message: impl Into<String>,
        path: impl Into<String>,
        status: RequirementStatus,
    ) -> Self {
        Self::new(Severity::Error, message, path, status)
    }

    pub fn warning(
        message: impl Into<String>,
        path: impl Into<String>,
        status: RequirementStatus,
    ) -> Self {
        Self::new(Severity::Warning, message, path, status)
    }

    pub fn info(
        message: impl Into<String>,
        path: impl Into<String>,
        status: RequirementStatus,
    ) -> Self {
        Self::new(Severity::Info, message, path, status)
    }

    fn new(
        severity: Severity,
        message: impl Into<String>,
        path: impl Into<String>,
        status: RequirementStatus,
    ) -> Self {
        Finding {
            severity,
            message: message.into(),
            path: path.into(),
            requirement_status: status,
        }
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}
