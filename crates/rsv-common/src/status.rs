//! Requirement statuses attached to schema nodes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Requirement level a schema attaches to a file or directory.
///
/// The validator's policy table is an exhaustive match over this enum;
/// adding a variant is a breaking change to the schema contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequirementStatus {
    /// Must exist; absence is an error.
    #[default]
    Required,

    /// Should exist; absence is a warning.
    Suggested,

    /// May exist; never produces an error or warning.
    Optional,

    /// Must not exist; presence is an error.
    NotAllowed,
}

/// Error for unrecognized requirement status tokens in a schema.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown requirement status {0:?}")]
pub struct UnknownStatus(pub String);

impl RequirementStatus {
    /// Wire representation, as it appears in both schema encodings.
    pub fn as_str(self) -> &'static str {
        match self {
            RequirementStatus::Required => "required",
            RequirementStatus::Suggested => "suggested",
            RequirementStatus::Optional => "optional",
            RequirementStatus::NotAllowed => "not-allowed",
        }
    }
}

impl std::str::FromStr for RequirementStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "required" => Ok(RequirementStatus::Required),
            "suggested" => Ok(RequirementStatus::Suggested),
            "optional" => Ok(RequirementStatus::Optional),
            "not-allowed" => Ok(RequirementStatus::NotAllowed),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for RequirementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
