use std::fmt::Write;

use crate::error::Result;
use crate::scanner::ScanReport;

use super::OutputFormatter;

const ISSUES_HEADER: &str = "YAML syntax issues found:";
const VALID_MESSAGE: &str = "Basic YAML syntax appears valid";

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RESET: &str = "\x1b[0m";
}

/// Plain-text report: a confirmation line, or a header followed by one
/// indented line per diagnostic.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &ScanReport) -> Result<String> {
        let mut output = String::new();

        if report.is_valid() {
            let _ = writeln!(output, "{}", self.paint(VALID_MESSAGE, ansi::GREEN));
            return Ok(output);
        }

        let _ = writeln!(output, "{}", self.paint(ISSUES_HEADER, ansi::RED));
        for diagnostic in &report.diagnostics {
            let _ = writeln!(output, "  {diagnostic}");
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
