//! Exit codes for the rsv-core CLI.
//!
//! Exit codes communicate run outcome without requiring output parsing.
//! A repository that fails validation is a successful run of the tool with
//! a non-zero result; only code 3 means the tool could not run as
//! configured.

/// Exit codes for rsv-core operations.
///
/// These codes are a stable contract for automation. Changes require
/// a major version bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// All checks passed; no errors and no warnings
    Clean = 0,

    /// Required items missing or not-allowed items present
    ValidationErrors = 1,

    /// Only warnings (suggested items missing)
    ValidationWarnings = 2,

    /// Schema missing, unreadable, undetectable, or malformed
    ConfigError = 3,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if this exit code indicates a fully clean run.
    pub fn is_success(self) -> bool {
        matches!(self, ExitCode::Clean)
    }

    /// Check if this exit code reflects a validation outcome (codes 0-2).
    /// These communicate repository state, not tool failure.
    pub fn is_validation_outcome(self) -> bool {
        (self as i32) < 3
    }

    /// Get the code name as a string constant (for JSON output).
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Clean => "OK_CLEAN",
            ExitCode::ValidationErrors => "ERR_VALIDATION",
            ExitCode::ValidationWarnings => "WARN_VALIDATION",
            ExitCode::ConfigError => "ERR_CONFIG",
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code_name(), self.as_i32())
    }
}
