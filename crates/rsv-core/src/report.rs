//! Reporting over a finished finding list.
//!
//! The reporter is a pure projection: it groups findings by severity,
//! renders them for humans or machines, and derives the process exit code.
//! It performs no validation of its own.

use crate::exit_codes::ExitCode;
use rsv_common::{Finding, Severity};

/// Schema version for the JSON report envelope.
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Aggregated view over one validation run's findings.
#[derive(Debug, Clone)]
pub struct Report {
    pub findings: Vec<Finding>,
}

impl Report {
    pub fn new(findings: Vec<Finding>) -> Self {
        Report { findings }
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.by_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.by_severity(Severity::Warning)
    }

    pub fn infos(&self) -> impl Iterator<Item = &Finding> {
        self.by_severity(Severity::Info)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn info_count(&self) -> usize {
        self.infos().count()
    }

    fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(move |finding| finding.severity == severity)
    }

    /// Derive the process exit code: errors dominate warnings.
    pub fn exit_code(&self) -> ExitCode {
        if self.error_count() > 0 {
            ExitCode::ValidationErrors
        } else if self.warning_count() > 0 {
            ExitCode::ValidationWarnings
        } else {
            ExitCode::Clean
        }
    }

    /// Human-readable report: errors first, then warnings, then the info
    /// tally. Per-item info detail only when `show_info` is set.
    pub fn render_text(&self, show_info: bool) -> String {
        let mut out = String::new();
        let rule = "=".repeat(60);

        out.push_str(&rule);
        out.push_str("\nVALIDATION RESULTS\n");
        out.push_str(&rule);
        out.push('\n');

        if self.error_count() > 0 {
            out.push_str(&format!("\nERRORS ({}):\n", self.error_count()));
            for finding in self.errors() {
                out.push_str(&format!("  {finding}\n"));
            }
        }

        if self.warning_count() > 0 {
            out.push_str(&format!("\nWARNINGS ({}):\n", self.warning_count()));
            for finding in self.warnings() {
                out.push_str(&format!("  {finding}\n"));
            }
        }

        if self.info_count() > 0 {
            if show_info {
                out.push_str(&format!("\nPRESENT ({}):\n", self.info_count()));
                for finding in self.infos() {
                    out.push_str(&format!("  {finding}\n"));
                }
            } else {
                out.push_str(&format!(
                    "\nOK: {} items validated successfully\n",
                    self.info_count()
                ));
            }
        }

        out.push('\n');
        out.push_str(&self.summary_line());
        out.push('\n');
        out
    }

    /// One-line tally for quick status checks.
    pub fn summary_line(&self) -> String {
        format!(
            "Summary: {} errors, {} warnings, {} info",
            self.error_count(),
            self.warning_count(),
            self.info_count()
        )
    }

    /// Summary counts as a JSON object (part of the machine envelope).
    pub fn summary_json(&self) -> serde_json::Value {
        serde_json::json!({
            "errors": self.error_count(),
            "warnings": self.warning_count(),
            "info": self.info_count(),
        })
    }
}
