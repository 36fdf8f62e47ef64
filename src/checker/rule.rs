use std::fmt;

use serde::Serialize;

use super::heuristics::{Line, has_tab, has_unmatched_quotes, missing_space_after_colon};

/// One of the line heuristics.
///
/// Variants are declared in the order checks run on a line, which is also the
/// order diagnostics for the same line are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    Tabs,
    ColonSpacing,
    QuoteParity,
}

impl Rule {
    pub const ALL: [Self; 3] = [Self::Tabs, Self::ColonSpacing, Self::QuoteParity];

    /// Stable identifier used in configuration and machine-readable output.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Tabs => "tabs",
            Self::ColonSpacing => "colon-spacing",
            Self::QuoteParity => "quote-parity",
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Tabs => "Contains tabs (use spaces in YAML)",
            Self::ColonSpacing => "Missing space after colon",
            Self::QuoteParity => "Unmatched quotes",
        }
    }

    /// Returns `true` when `line` breaks this rule. Tabs are looked for in the
    /// raw line, everything else in the trimmed one.
    #[must_use]
    pub fn violates(self, line: &Line<'_>) -> bool {
        match self {
            Self::Tabs => has_tab(line.raw),
            Self::ColonSpacing => missing_space_after_colon(line.trimmed),
            Self::QuoteParity => has_unmatched_quotes(line.trimmed),
        }
    }

    /// Longer explanation for SARIF rule descriptors.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Tabs => "YAML indentation must use spaces; tab characters are not allowed.",
            Self::ColonSpacing => {
                "A mapping key must be followed by a colon and a space, as in `key: value`."
            }
            Self::QuoteParity => {
                "The line contains an odd number of quote characters, so a quoted string is likely unterminated."
            }
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
