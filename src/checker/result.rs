use std::fmt;

use serde::Serialize;

use super::Rule;

/// A syntax concern found on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    line: usize,
    rule: Rule,
}

impl Diagnostic {
    #[must_use]
    pub const fn new(line: usize, rule: Rule) -> Self {
        Self { line, rule }
    }

    /// 1-based line number.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub const fn rule(&self) -> Rule {
        self.rule
    }

    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.rule.message()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message())
    }
}

/// Overall outcome of validating a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    #[must_use]
    pub const fn from_diagnostics(diagnostics: &[Diagnostic]) -> Self {
        if diagnostics.is_empty() {
            Self::Pass
        } else {
            Self::Fail
        }
    }

    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }

    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Pass => crate::EXIT_SUCCESS,
            Self::Fail => crate::EXIT_FAILURE,
        }
    }
}
