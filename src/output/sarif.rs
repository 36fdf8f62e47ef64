use serde::Serialize;

use crate::checker::{Diagnostic, Rule};
use crate::error::Result;
use crate::scanner::ScanReport;

use super::OutputFormatter;

/// SARIF 2.1.0 output formatter for GitHub Code Scanning and other CI/CD tools.
pub struct SarifFormatter;

const SARIF_SCHEMA: &str = "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";
const SARIF_VERSION: &str = "2.1.0";
const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");
const RULE_ID_PREFIX: &str = "yaml-guard/";

#[derive(Serialize)]
struct SarifLog {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: Vec<Run>,
}

#[derive(Serialize)]
struct Run {
    tool: Tool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
struct Tool {
    driver: ToolDriver,
}

#[derive(Serialize)]
struct ToolDriver {
    name: &'static str,
    version: &'static str,
    rules: Vec<ReportingDescriptor>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportingDescriptor {
    id: String,
    short_description: MultiformatMessageString,
    full_description: MultiformatMessageString,
    default_configuration: ReportingConfiguration,
}

#[derive(Serialize)]
struct ReportingConfiguration {
    level: &'static str,
}

#[derive(Serialize)]
struct MultiformatMessageString {
    text: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    rule_id: String,
    rule_index: usize,
    level: &'static str,
    message: Message,
    locations: Vec<Location>,
}

#[derive(Serialize)]
struct Message {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Location {
    physical_location: PhysicalLocation,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PhysicalLocation {
    artifact_location: ArtifactLocation,
    region: Region,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ArtifactLocation {
    uri: String,
    uri_base_id: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Region {
    start_line: usize,
}

fn rule_id(rule: Rule) -> String {
    format!("{RULE_ID_PREFIX}{}", rule.id())
}

fn rule_index(rule: Rule) -> usize {
    Rule::ALL
        .iter()
        .position(|candidate| *candidate == rule)
        .unwrap_or_default()
}

impl SarifFormatter {
    fn build_rules() -> Vec<ReportingDescriptor> {
        Rule::ALL
            .into_iter()
            .map(|rule| ReportingDescriptor {
                id: rule_id(rule),
                short_description: MultiformatMessageString {
                    text: rule.message(),
                },
                full_description: MultiformatMessageString {
                    text: rule.description(),
                },
                default_configuration: ReportingConfiguration { level: "error" },
            })
            .collect()
    }

    fn convert_diagnostic(diagnostic: &Diagnostic, uri: &str) -> SarifResult {
        SarifResult {
            rule_id: rule_id(diagnostic.rule()),
            rule_index: rule_index(diagnostic.rule()),
            level: "error",
            message: Message {
                text: diagnostic.message().to_string(),
            },
            locations: vec![Location {
                physical_location: PhysicalLocation {
                    artifact_location: ArtifactLocation {
                        uri: uri.to_string(),
                        uri_base_id: "%SRCROOT%",
                    },
                    region: Region {
                        start_line: diagnostic.line(),
                    },
                },
            }],
        }
    }
}

impl OutputFormatter for SarifFormatter {
    fn format(&self, report: &ScanReport) -> Result<String> {
        // SARIF URIs always use forward slashes
        let uri = report.path.display().to_string().replace('\\', "/");

        let log = SarifLog {
            schema: SARIF_SCHEMA,
            version: SARIF_VERSION,
            runs: vec![Run {
                tool: Tool {
                    driver: ToolDriver {
                        name: TOOL_NAME,
                        version: TOOL_VERSION,
                        rules: Self::build_rules(),
                    },
                },
                results: report
                    .diagnostics
                    .iter()
                    .map(|d| Self::convert_diagnostic(d, &uri))
                    .collect(),
            }],
        };

        let json = serde_json::to_string_pretty(&log)?;
        Ok(format!("{json}\n"))
    }
}

#[cfg(test)]
#[path = "sarif_tests.rs"]
mod tests;
