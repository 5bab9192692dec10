//! End-to-end: parse an export document and run the analysis behind the
//! `analyze` command.

use ddi_core::run_analysis;
use ddi_ingest::parse_case_records;
use ddi_model::{AnalysisRequest, RorEstimate, TransactionMode};

fn event(drugs: &[&str], reactions: &[&str]) -> String {
    let drug_json: Vec<String> = drugs
        .iter()
        .map(|d| format!(r#"{{"medicinalproduct": "{d}"}}"#))
        .collect();
    let reaction_json: Vec<String> = reactions
        .iter()
        .map(|r| format!(r#"{{"reactionmeddrapt": "{r}"}}"#))
        .collect();
    format!(
        r#"{{"patient": {{"drug": [{}], "reaction": [{}]}}}}"#,
        drug_json.join(","),
        reaction_json.join(",")
    )
}

fn export() -> String {
    let mut events = Vec::new();
    for _ in 0..4 {
        events.push(event(&["Truvada", "Vancomycin"], &["Acute kidney injury"]));
    }
    events.push(event(&["Truvada", "Vancomycin"], &["Rash"]));
    for _ in 0..3 {
        events.push(event(&["Truvada"], &["Acute kidney injury"]));
    }
    for _ in 0..5 {
        events.push(event(&["Truvada"], &["Rash"]));
    }
    for _ in 0..2 {
        events.push(event(&["Metformin"], &["Acute kidney injury"]));
    }
    for _ in 0..5 {
        events.push(event(&["Metformin"], &["Rash"]));
    }
    format!(r#"{{"results": [{}]}}"#, events.join(","))
}

#[test]
fn analyze_flow_ranks_the_co_medication() {
    let ingest = parse_case_records(&export()).expect("fixture parses");
    assert_eq!(ingest.records.len(), 20);
    assert_eq!(ingest.skipped, 0);

    let request = AnalysisRequest::new("Truvada", "Acute kidney injury", 0.2)
        .with_mode(TransactionMode::FullExposure);
    let report = run_analysis(&ingest.records, &request).expect("analysis runs");

    assert_eq!(report.record_count, 20);
    assert_eq!(report.reaction_case_count, 7);
    assert!(matches!(report.ror, RorEstimate::Finite { .. }));
    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.entries[0].drug, "VANCOMYCIN");
    assert!(report.entries[0].ddi_index > 1.0);
}

#[test]
fn analyze_flow_with_empty_export_degrades() {
    let ingest = parse_case_records(r#"{"results": []}"#).expect("empty export parses");
    let request = AnalysisRequest::new("Truvada", "Acute kidney injury", 0.01);
    let report = run_analysis(&ingest.records, &request).expect("empty input is not an error");
    assert!(report.is_insufficient_data());
    assert_eq!(report.ror, RorEstimate::NotComputable);
}
