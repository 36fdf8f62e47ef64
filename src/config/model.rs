use serde::{Deserialize, Serialize};

use crate::checker::Rule;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Contents of `.yaml-guard.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Config schema version. Omitted means the current version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub rules: RulesConfig,
}

/// Per-rule switches under `[rules]`. Every rule is on unless turned off.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    #[serde(default = "default_true")]
    pub tabs: bool,

    #[serde(default = "default_true")]
    pub colon_spacing: bool,

    #[serde(default = "default_true")]
    pub quote_parity: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            tabs: true,
            colon_spacing: true,
            quote_parity: true,
        }
    }
}

impl RulesConfig {
    #[must_use]
    pub const fn is_enabled(&self, rule: Rule) -> bool {
        match rule {
            Rule::Tabs => self.tabs,
            Rule::ColonSpacing => self.colon_spacing,
            Rule::QuoteParity => self.quote_parity,
        }
    }

    /// Enabled rules, in check order.
    #[must_use]
    pub fn enabled_rules(&self) -> Vec<Rule> {
        Rule::ALL
            .into_iter()
            .filter(|rule| self.is_enabled(*rule))
            .collect()
    }
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
