use std::path::Path;

use super::*;

fn parse(report: &ScanReport) -> serde_json::Value {
    let output = SarifFormatter.format(report).unwrap();
    serde_json::from_str(&output).unwrap()
}

fn failing_report() -> ScanReport {
    ScanReport::new(
        Path::new("deploy/docker-compose.yml"),
        4,
        vec![
            Diagnostic::new(2, Rule::ColonSpacing),
            Diagnostic::new(4, Rule::QuoteParity),
        ],
    )
}

#[test]
fn sarif_has_schema_and_version() {
    let parsed = parse(&failing_report());

    assert_eq!(
        parsed["$schema"],
        "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json"
    );
    assert_eq!(parsed["version"], "2.1.0");
}

#[test]
fn sarif_driver_lists_every_rule() {
    let parsed = parse(&failing_report());
    let driver = &parsed["runs"][0]["tool"]["driver"];

    assert_eq!(driver["name"], "yaml-guard");
    let rules = driver["rules"].as_array().unwrap();
    assert_eq!(rules.len(), 3);
    assert_eq!(rules[0]["id"], "yaml-guard/tabs");
    assert_eq!(rules[1]["id"], "yaml-guard/colon-spacing");
    assert_eq!(rules[2]["id"], "yaml-guard/quote-parity");
    assert_eq!(rules[2]["shortDescription"]["text"], "Unmatched quotes");
}

#[test]
fn sarif_results_carry_line_regions() {
    let parsed = parse(&failing_report());
    let results = parsed["runs"][0]["results"].as_array().unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["ruleId"], "yaml-guard/colon-spacing");
    assert_eq!(results[0]["ruleIndex"], 1);
    assert_eq!(results[0]["level"], "error");
    assert_eq!(results[0]["message"]["text"], "Missing space after colon");

    let location = &results[1]["locations"][0]["physicalLocation"];
    assert_eq!(location["artifactLocation"]["uri"], "deploy/docker-compose.yml");
    assert_eq!(location["region"]["startLine"], 4);
}

#[test]
fn clean_report_has_no_results() {
    let report = ScanReport::new(Path::new("compose.yml"), 1, vec![]);
    let parsed = parse(&report);
    assert!(parsed["runs"][0]["results"].as_array().unwrap().is_empty());
}
