use serde::Serialize;

use crate::checker::{Diagnostic, Rule, Verdict};
use crate::error::Result;
use crate::scanner::ScanReport;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    path: String,
    verdict: Verdict,
    summary: Summary,
    diagnostics: Vec<JsonDiagnostic>,
}

#[derive(Serialize)]
struct Summary {
    lines_scanned: usize,
    diagnostics: usize,
}

#[derive(Serialize)]
struct JsonDiagnostic {
    line: usize,
    rule: Rule,
    message: &'static str,
}

impl From<&Diagnostic> for JsonDiagnostic {
    fn from(diagnostic: &Diagnostic) -> Self {
        Self {
            line: diagnostic.line(),
            rule: diagnostic.rule(),
            message: diagnostic.message(),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &ScanReport) -> Result<String> {
        let output = JsonOutput {
            path: report.path.display().to_string(),
            verdict: report.verdict(),
            summary: Summary {
                lines_scanned: report.lines_scanned,
                diagnostics: report.diagnostics.len(),
            },
            diagnostics: report.diagnostics.iter().map(JsonDiagnostic::from).collect(),
        };

        let json = serde_json::to_string_pretty(&output)?;
        Ok(format!("{json}\n"))
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
