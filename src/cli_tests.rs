use clap::CommandFactory;

use super::*;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn usage_names_the_binary() {
    assert_eq!(USAGE, "Usage: yaml-guard <file.yml>");
}

#[test]
fn parses_single_file_with_defaults() {
    let cli = Cli::try_parse_from(["yaml-guard", "docker-compose.yml"]).unwrap();

    assert_eq!(cli.file, PathBuf::from("docker-compose.yml"));
    assert_eq!(cli.verbose, 0);
    assert!(!cli.quiet);
    assert!(matches!(cli.color, ColorChoice::Auto));
    assert!(cli.config.is_none());
    assert!(!cli.no_config);
    assert_eq!(cli.format, OutputFormat::Text);
    assert!(cli.output.is_none());
}

#[test]
fn parses_all_options() {
    let cli = Cli::try_parse_from([
        "yaml-guard",
        "compose.yml",
        "-vv",
        "--quiet",
        "--color",
        "never",
        "--config",
        "custom.toml",
        "--format",
        "sarif",
        "--output",
        "report.sarif",
    ])
    .unwrap();

    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
    assert!(matches!(cli.color, ColorChoice::Never));
    assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    assert_eq!(cli.format, OutputFormat::Sarif);
    assert_eq!(cli.output, Some(PathBuf::from("report.sarif")));
}

#[test]
fn missing_file_is_arity_error() {
    let err = Cli::try_parse_from(["yaml-guard"]).unwrap_err();
    assert!(is_arity_error(err.kind()));
}

#[test]
fn extra_positional_is_arity_error() {
    let err = Cli::try_parse_from(["yaml-guard", "a.yml", "b.yml"]).unwrap_err();
    assert!(is_arity_error(err.kind()));
}

#[test]
fn invalid_format_is_not_arity_error() {
    let err = Cli::try_parse_from(["yaml-guard", "a.yml", "--format", "xml"]).unwrap_err();
    assert!(!is_arity_error(err.kind()));
}

#[test]
fn config_and_no_config_conflict() {
    let err = Cli::try_parse_from(["yaml-guard", "a.yml", "--config", "c.toml", "--no-config"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
}

#[test]
fn color_choice_maps_to_color_mode() {
    assert_eq!(ColorMode::from(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(ColorMode::from(ColorChoice::Always), ColorMode::Always);
    assert_eq!(ColorMode::from(ColorChoice::Never), ColorMode::Never);
}

#[test]
fn hyphen_prefixed_file_is_taken_as_path() {
    let cli = Cli::try_parse_from(["yaml-guard", "-compose.yml"]).unwrap();
    assert_eq!(cli.file, PathBuf::from("-compose.yml"));
    assert_eq!(cli.verbose, 0);
}

#[test]
fn hyphen_prefixed_file_after_flags_is_taken_as_path() {
    let cli = Cli::try_parse_from(["yaml-guard", "-v", "-compose.yml"]).unwrap();
    assert_eq!(cli.file, PathBuf::from("-compose.yml"));
    assert_eq!(cli.verbose, 1);
}

#[test]
fn known_flag_alone_is_still_missing_file() {
    let err = Cli::try_parse_from(["yaml-guard", "-v"]).unwrap_err();
    assert!(is_arity_error(err.kind()));
}
