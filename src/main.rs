use std::fmt::Display;
use std::fs;
use std::path::Path;

use clap::Parser;
use clap::error::ErrorKind;

use yaml_guard::cli::{Cli, USAGE, is_arity_error};
use yaml_guard::config::{ConfigLoader, FileConfigLoader, LoadResult};
use yaml_guard::output::{
    ColorMode, JsonFormatter, OutputFormat, OutputFormatter, SarifFormatter, TextFormatter,
};
use yaml_guard::scanner::read_source;
use yaml_guard::{
    EXIT_CONFIG_ERROR, EXIT_FAILURE, EXIT_SUCCESS, LineScanner, ScanReport, YamlGuardError,
};

fn main() {
    let exit_code = match Cli::try_parse() {
        Ok(cli) => run(&cli),
        Err(err) => handle_parse_error(&err),
    };

    std::process::exit(exit_code);
}

fn handle_parse_error(err: &clap::Error) -> i32 {
    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        let _ = err.print();
        return EXIT_SUCCESS;
    }

    if !is_arity_error(err.kind()) {
        eprint!("{err}");
    }
    println!("{USAGE}");
    EXIT_FAILURE
}

fn run(cli: &Cli) -> i32 {
    match run_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_impl(cli: &Cli) -> yaml_guard::Result<i32> {
    // 1. Read the file; an unreadable file is reported before any config problem
    let content = match read_source(&cli.file) {
        Ok(content) => content,
        Err(e @ YamlGuardError::FileRead { .. }) => {
            println!("{e}");
            return Ok(EXIT_FAILURE);
        }
        Err(e) => return Err(e),
    };

    // 2. Load configuration
    let loaded = load_config(cli.config.as_deref(), cli.no_config)?;
    match &loaded.source {
        Some(path) => log(cli, 1, format_args!("Using configuration: {}", path.display())),
        None => log(cli, 1, "Using default configuration"),
    }

    // 3. Scan the file
    let scanner = LineScanner::new(&loaded.config.rules.enabled_rules());
    let rule_ids: Vec<_> = scanner.rules().iter().map(ToString::to_string).collect();
    log(cli, 2, format_args!("Enabled rules: {}", rule_ids.join(", ")));

    let report = scanner.scan_source(&cli.file, &content);
    log(
        cli,
        1,
        format_args!(
            "Scanned {} line(s) in {}: {} issue(s)",
            report.lines_scanned,
            report.path.display(),
            report.diagnostics.len()
        ),
    );

    // 4. Format and write the report
    let output = format_output(cli.format, &report, cli.color.into())?;
    write_output(cli.output.as_deref(), &output, cli.quiet)?;

    Ok(report.verdict().exit_code())
}

/// Progress logging on stderr, shown from the given `-v` level up.
fn log(cli: &Cli, level: u8, message: impl Display) {
    if cli.verbose >= level && !cli.quiet {
        eprintln!("{message}");
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> yaml_guard::Result<LoadResult> {
    if no_config {
        return Ok(LoadResult::defaults());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn format_output(
    format: OutputFormat,
    report: &ScanReport,
    color_mode: ColorMode,
) -> yaml_guard::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color_mode).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
        OutputFormat::Sarif => SarifFormatter.format(report),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> yaml_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
