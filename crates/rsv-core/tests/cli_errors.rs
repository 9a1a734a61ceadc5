//! CLI error handling tests for rsv-core.
//!
//! These tests verify that invalid arguments fail with usage errors and
//! that configuration failures (missing, undetectable, or malformed
//! schemas) exit with the dedicated configuration code.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// Get a Command for the rsv-core binary.
fn rsv() -> Command {
    Command::cargo_bin("rsv-core").expect("rsv-core binary should exist")
}

fn schema_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("temp schema file");
    file.write_all(content.as_bytes()).expect("write schema");
    file
}

// ============================================================================
// Invalid Argument Tests
// ============================================================================

mod invalid_arguments {
    use super::*;

    #[test]
    fn unknown_flag_fails() {
        rsv()
            .arg("--nonexistent-flag")
            .assert()
            .failure()
            .stderr(predicate::str::contains("error"));
    }

    #[test]
    fn unknown_subcommand_fails() {
        rsv()
            .arg("nonexistent-command")
            .assert()
            .failure()
            .stderr(predicate::str::contains("error"));
    }

    #[test]
    fn invalid_format_value_fails() {
        rsv()
            .args(["--format", "yaml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("error"));
    }

    #[test]
    fn invalid_output_value_fails() {
        rsv()
            .args(["--output", "csv"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("error"));
    }

    #[test]
    fn missing_required_value_fails() {
        rsv()
            .args(["--schema"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("error"));
    }
}

// ============================================================================
// Configuration Error Tests (exit code 3)
// ============================================================================

mod configuration_errors {
    use super::*;

    #[test]
    fn missing_schema_file_exits_with_config_code() {
        rsv()
            .args(["--schema", "/nonexistent/schema.xml", "validate"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Error loading schema"));
    }

    #[test]
    fn undetectable_format_exits_with_config_code() {
        let file = schema_file(".txt", "plain text, neither markup nor object\n");
        rsv()
            .args(["--schema"])
            .arg(file.path())
            .arg("validate")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("cannot detect schema format"));
    }

    #[test]
    fn malformed_xml_exits_with_config_code() {
        let file = schema_file(".xml", "<repository-structure><unclosed>");
        rsv()
            .args(["--schema"])
            .arg(file.path())
            .arg("validate")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("invalid schema"));
    }

    #[test]
    fn malformed_json_exits_with_config_code() {
        let file = schema_file(".json", "{\"structure\": ");
        rsv()
            .args(["--schema"])
            .arg(file.path())
            .arg("validate")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("invalid schema"));
    }

    #[test]
    fn xml_outside_schema_namespace_exits_with_config_code() {
        let file = schema_file(".xml", "<repository-structure><structure/></repository-structure>");
        rsv()
            .args(["--schema"])
            .arg(file.path())
            .arg("validate")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("namespace"));
    }

    #[test]
    fn inspect_shares_the_config_code() {
        rsv()
            .args(["--schema", "/nonexistent/schema.json", "inspect"])
            .assert()
            .code(3);
    }

    #[test]
    fn config_error_reports_before_any_validation() {
        // No findings are printed when the schema cannot be loaded.
        let file = schema_file(".json", "not valid json at all");
        rsv()
            .args(["--schema"])
            .arg(file.path())
            .args(["--output", "json", "validate"])
            .assert()
            .code(3)
            .stdout(predicate::str::is_empty());
    }
}
