pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod scanner;

use std::io::Write;
use std::path::Path;

pub use checker::{Diagnostic, Rule, Verdict};
pub use error::{Result, YamlGuardError};
pub use scanner::{LineScanner, ScanReport};

use output::{ColorMode, OutputFormatter, TextFormatter};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Check `path` with every rule enabled and print the plain-text report to
/// stdout.
///
/// Read failures are printed as `Error reading file: ...` and yield
/// `Verdict::Fail`; they are never returned to the caller.
#[must_use]
pub fn validate(path: &Path) -> Verdict {
    let stdout = std::io::stdout();
    validate_to(&LineScanner::default(), path, &mut stdout.lock())
}

/// Like [`validate`], but with a chosen scanner and writer.
///
/// A report that cannot be rendered or written counts as `Verdict::Fail`.
pub fn validate_to<W: Write>(scanner: &LineScanner, path: &Path, out: &mut W) -> Verdict {
    let report = match scanner.scan_file(path) {
        Ok(report) => report,
        Err(e) => {
            // Fails either way; a broken writer leaves nothing else to report to.
            let _ = writeln!(out, "{e}");
            return Verdict::Fail;
        }
    };

    match write_text_report(&report, out) {
        Ok(()) => report.verdict(),
        Err(_) => Verdict::Fail,
    }
}

fn write_text_report<W: Write>(report: &ScanReport, out: &mut W) -> Result<()> {
    let text = TextFormatter::new(ColorMode::Never).format(report)?;
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
