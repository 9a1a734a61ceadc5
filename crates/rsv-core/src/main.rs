//! Repository Structure Validator - CLI entry point
//!
//! Validates a repository's file and directory layout against a declarative
//! schema (XML or JSON), reporting discrepancies with graded severity:
//! - required items missing and not-allowed items present are errors
//! - suggested items missing are warnings
//! - confirmed items are informational
//!
//! Exit codes: 0 clean, 1 errors, 2 warnings only, 3 configuration error.

use clap::{Args, Parser, Subcommand, ValueEnum};
use rsv_common::OutputFormat;
use rsv_core::exit_codes::ExitCode;
use rsv_core::logging::{generate_run_id, init_logging};
use rsv_core::report::{Report, REPORT_SCHEMA_VERSION};
use rsv_core::validator::validate;
use rsv_schema::{load_schema, SchemaError, SchemaFormat, StructureTree};
use std::path::PathBuf;

/// Repository Structure Validator - schema-driven layout checks
#[derive(Parser)]
#[command(name = "rsv-core")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Path to the structure schema (XML or JSON)
    #[arg(
        long,
        global = true,
        env = "RSV_SCHEMA",
        default_value = "scripts/definitions/default-repository.xml"
    )]
    schema: PathBuf,

    /// Schema encoding
    #[arg(long, global = true, value_enum, default_value = "auto")]
    format: FormatArg,

    /// Path to the repository to validate
    #[arg(long, global = true, default_value = ".")]
    repo_path: PathBuf,

    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value = "text")]
    output: OutputFormat,

    /// List every confirmed item in text output
    #[arg(long, global = true)]
    show_info: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Schema encoding selector for `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Xml,
    Json,
    /// Detect from extension, then leading content
    Auto,
}

impl FormatArg {
    fn resolve(self) -> Option<SchemaFormat> {
        match self {
            FormatArg::Xml => Some(SchemaFormat::Xml),
            FormatArg::Json => Some(SchemaFormat::Json),
            FormatArg::Auto => None,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the repository layout against the schema (default)
    Validate,

    /// Load the schema and print the canonical tree as JSON
    Inspect,

    /// Print version information
    Version,
}

// ============================================================================
// Main entry point
// ============================================================================

fn main() {
    let cli = Cli::parse();
    init_logging(cli.global.verbose, cli.global.quiet);

    let exit_code = match cli.command {
        None | Some(Commands::Validate) => run_validate(&cli.global),
        Some(Commands::Inspect) => run_inspect(&cli.global),
        Some(Commands::Version) => {
            println!("rsv-core {}", env!("CARGO_PKG_VERSION"));
            ExitCode::Clean
        }
    };

    std::process::exit(exit_code.as_i32());
}

// ============================================================================
// Command implementations
// ============================================================================

fn run_validate(global: &GlobalOpts) -> ExitCode {
    let run_id = generate_run_id();
    tracing::info!(
        run_id = %run_id,
        schema = %global.schema.display(),
        repo = %global.repo_path.display(),
        "Starting validation run"
    );

    let tree = match load_tree(global) {
        Ok(tree) => tree,
        Err(code) => return code,
    };

    let findings = validate(&tree, &global.repo_path);
    let report = Report::new(findings);

    tracing::info!(
        run_id = %run_id,
        errors = report.error_count(),
        warnings = report.warning_count(),
        info = report.info_count(),
        "Validation finished"
    );

    match global.output {
        OutputFormat::Text => {
            println!("Validating repository: {}", global.repo_path.display());
            println!("Against schema: {}", global.schema.display());
            print!("{}", report.render_text(global.show_info));
        }
        OutputFormat::Json => {
            let envelope = serde_json::json!({
                "schema_version": REPORT_SCHEMA_VERSION,
                "run_id": run_id,
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "schema": global.schema.display().to_string(),
                "repository": global.repo_path.display().to_string(),
                "summary": report.summary_json(),
                "findings": report.findings,
            });
            println!("{}", serde_json::to_string_pretty(&envelope).unwrap());
        }
        OutputFormat::Summary => {
            println!("{}", report.summary_line());
        }
        OutputFormat::Exitcode => {} // Silent
    }

    report.exit_code()
}

fn run_inspect(global: &GlobalOpts) -> ExitCode {
    let tree = match load_tree(global) {
        Ok(tree) => tree,
        Err(code) => return code,
    };

    println!("{}", serde_json::to_string_pretty(&tree).unwrap());
    ExitCode::Clean
}

/// Load the schema, mapping any failure onto the configuration exit code.
fn load_tree(global: &GlobalOpts) -> Result<StructureTree, ExitCode> {
    load_schema(&global.schema, global.format.resolve()).map_err(|err| {
        report_schema_error(&err);
        ExitCode::ConfigError
    })
}

fn report_schema_error(err: &SchemaError) {
    if err.is_configuration() {
        tracing::error!(error = %err, "Tool configuration error");
    } else {
        tracing::error!(error = %err, "Schema rejected");
    }
    eprintln!("Error loading schema: {err}");
}
