use std::fs;
use std::path::Path;

use clap::Parser;
use tempfile::TempDir;
use yaml_guard::cli::Cli;
use yaml_guard::{Diagnostic, EXIT_FAILURE, EXIT_SUCCESS, Rule, ScanReport};

use crate::{format_output, handle_parse_error, load_config, write_output};

fn failing_report() -> ScanReport {
    ScanReport::new(
        Path::new("compose.yml"),
        1,
        vec![Diagnostic::new(1, Rule::ColonSpacing)],
    )
}

#[test]
fn load_config_no_config_returns_defaults() {
    let loaded = load_config(None, true).unwrap();
    assert!(loaded.source.is_none());
    assert_eq!(loaded.config.rules.enabled_rules(), Rule::ALL.to_vec());
}

#[test]
fn load_config_with_nonexistent_path_returns_error() {
    let result = load_config(Some(Path::new("nonexistent.toml")), false);
    assert!(matches!(
        result.unwrap_err(),
        yaml_guard::YamlGuardError::Config(_)
    ));
}

#[test]
fn load_config_reads_explicit_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[rules]\ntabs = false\n").unwrap();

    let loaded = load_config(Some(&path), false).unwrap();

    assert!(!loaded.config.rules.tabs);
    assert_eq!(loaded.source, Some(path));
}

#[test]
fn format_output_text() {
    let output = format_output(
        yaml_guard::output::OutputFormat::Text,
        &failing_report(),
        yaml_guard::output::ColorMode::Never,
    )
    .unwrap();
    assert_eq!(
        output,
        "YAML syntax issues found:\n  Line 1: Missing space after colon\n"
    );
}

#[test]
fn format_output_json_and_sarif_are_json() {
    for format in [
        yaml_guard::output::OutputFormat::Json,
        yaml_guard::output::OutputFormat::Sarif,
    ] {
        let output =
            format_output(format, &failing_report(), yaml_guard::output::ColorMode::Never)
                .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(parsed.is_object());
    }
}

#[test]
fn write_output_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.txt");

    write_output(Some(&path), "hello\n", false).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
}

#[test]
fn write_output_to_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("report.txt");

    assert!(write_output(Some(&path), "hello\n", false).is_err());
}

#[test]
fn write_output_quiet_to_stdout_succeeds() {
    assert!(write_output(None, "hidden\n", true).is_ok());
}

#[test]
fn parse_error_for_missing_argument_exits_failure() {
    let err = Cli::try_parse_from(["yaml-guard"]).unwrap_err();
    assert_eq!(handle_parse_error(&err), EXIT_FAILURE);
}

#[test]
fn parse_error_for_version_exits_success() {
    let err = Cli::try_parse_from(["yaml-guard", "--version"]).unwrap_err();
    assert_eq!(handle_parse_error(&err), EXIT_SUCCESS);
}
