mod lines;
mod types;

pub use lines::RawLines;
pub use types::ScanReport;

use std::path::Path;

use crate::checker::{Diagnostic, Line, Rule};
use crate::error::{Result, YamlGuardError};

/// Single pass over a file's lines, running every enabled rule on each
/// non-exempt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineScanner {
    rules: Vec<Rule>,
}

impl Default for LineScanner {
    fn default() -> Self {
        Self {
            rules: Rule::ALL.to_vec(),
        }
    }
}

impl LineScanner {
    /// Build a scanner running only `enabled` rules.
    ///
    /// Rules always run in `Rule::ALL` order regardless of the order given.
    #[must_use]
    pub fn new(enabled: &[Rule]) -> Self {
        Self {
            rules: Rule::ALL
                .into_iter()
                .filter(|rule| enabled.contains(rule))
                .collect(),
        }
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Scan in-memory text.
    #[must_use]
    pub fn scan(&self, source: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for (index, raw) in RawLines::new(source).enumerate() {
            self.check_line(&Line::new(index + 1, raw), &mut diagnostics);
        }
        diagnostics
    }

    /// Scan text already read from `path`.
    #[must_use]
    pub fn scan_source(&self, path: &Path, content: &str) -> ScanReport {
        let lines_scanned = RawLines::new(content).count();
        ScanReport::new(path, lines_scanned, self.scan(content))
    }

    /// Read `path` fully and scan it.
    ///
    /// # Errors
    /// Returns `YamlGuardError::FileRead` if the file cannot be read or is not
    /// valid UTF-8. No checks run in that case.
    pub fn scan_file(&self, path: &Path) -> Result<ScanReport> {
        let content = read_source(path)?;
        Ok(self.scan_source(path, &content))
    }

    fn check_line(&self, line: &Line<'_>, diagnostics: &mut Vec<Diagnostic>) {
        if line.is_exempt() {
            return;
        }

        diagnostics.extend(
            self.rules
                .iter()
                .filter(|rule| rule.violates(line))
                .map(|rule| Diagnostic::new(line.number, *rule)),
        );
    }
}

/// Read the file to validate.
///
/// # Errors
/// Returns `YamlGuardError::FileRead` if the file cannot be read or is not
/// valid UTF-8.
pub fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| YamlGuardError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
