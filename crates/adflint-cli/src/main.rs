//! adflint - static validation of Azure Data Factory parameter passing.
//!
//! Point the `adflint` command at the root of an ADF source tree (the
//! directory holding the `pipeline/` and `trigger/` subdirectories). It
//! loads every resource file, resolves each `ExecutePipeline` activity and
//! trigger binding against the pipelines it found, and prints a report of
//! required parameters that are not supplied and supplied parameters that
//! merely repeat their declared defaults.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use adflint_core::validate_factory;

#[derive(Parser)]
#[command(name = "adflint")]
#[command(author = "adflint maintainers")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Validate parameter passing between Data Factory pipelines and triggers",
    long_about = None
)]
struct Cli {
    /// Root of the ADF folder hierarchy (default: current directory)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Exit non-zero when validation issues are found
    #[arg(long)]
    strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    adflint_core::init_tracing(cli.json, cli.verbose);

    cmd_check(&cli.root, cli.strict)
}

/// Load the tree, run every check, and print the report.
///
/// The report always goes to stdout, findings or not. In strict mode a
/// report with findings also fails the process, so CI jobs can gate on
/// the exit code.
fn cmd_check(root: &Path, strict: bool) -> Result<()> {
    debug!("Validating ADF tree at {:?}", root);

    let report = validate_factory(root);
    print!("{}", report.render());

    if strict && report.has_issues() {
        anyhow::bail!("validation issues found")
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn factory_with_unresolved_reference() -> TempDir {
        let root = TempDir::new().unwrap();
        let pipelines = root.path().join("pipeline");
        fs::create_dir(&pipelines).unwrap();
        fs::write(
            pipelines.join("parent.json"),
            r#"{
                "name": "parent",
                "type": "Microsoft.DataFactory/factories/pipelines",
                "properties": {
                    "activities": [
                        {
                            "name": "run",
                            "type": "ExecutePipeline",
                            "typeProperties": { "pipeline": { "referenceName": "ghost" } }
                        }
                    ]
                }
            }"#,
        )
        .unwrap();
        root
    }

    #[test]
    fn test_check_succeeds_on_clean_tree() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("pipeline")).unwrap();
        fs::create_dir(root.path().join("trigger")).unwrap();

        assert!(cmd_check(root.path(), true).is_ok());
    }

    #[test]
    fn test_default_mode_reports_without_failing() {
        let root = factory_with_unresolved_reference();

        assert!(cmd_check(root.path(), false).is_ok());
    }

    #[test]
    fn test_strict_mode_fails_on_findings() {
        let root = factory_with_unresolved_reference();

        let err = cmd_check(root.path(), true).unwrap_err();
        assert!(format!("{err:#}").contains("validation issues found"));
    }

    #[test]
    fn test_cli_defaults_to_current_directory() {
        let cli = Cli::parse_from(["adflint"]);
        assert_eq!(cli.root, PathBuf::from("."));
        assert!(!cli.strict);
        assert!(!cli.verbose);
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_accepts_root_and_strict() {
        let cli = Cli::parse_from(["adflint", "--strict", "/srv/adf"]);
        assert_eq!(cli.root, PathBuf::from("/srv/adf"));
        assert!(cli.strict);
    }
}
