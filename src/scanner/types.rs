use std::path::{Path, PathBuf};

use crate::checker::{Diagnostic, Verdict};

/// Everything learned from scanning one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub path: PathBuf,
    /// Total lines read, including blank and comment lines.
    pub lines_scanned: usize,
    /// Diagnostics in detection order.
    pub diagnostics: Vec<Diagnostic>,
}

impl ScanReport {
    #[must_use]
    pub fn new(path: &Path, lines_scanned: usize, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            path: path.to_path_buf(),
            lines_scanned,
            diagnostics,
        }
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        Verdict::from_diagnostics(&self.diagnostics)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
