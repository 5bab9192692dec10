//! Parse an openFDA drug-event export into case records.
//!
//! The export is the document shape returned by the openFDA
//! `/drug/event.json` endpoint: a `results` array of events, each carrying
//! `patient.drug[].medicinalproduct` and `patient.reaction[].reactionmeddrapt`.
//! A bare JSON array of events is accepted too, so pre-extracted pages can be
//! concatenated and fed in directly.
//!
//! Retrieval itself (pagination, rate limits, caching) is the record source's
//! job; this module only consumes whatever finite document it was handed.
//! Events missing the fields needed to form a record are skipped and counted,
//! never fatal.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tracing::{debug, warn};

use ddi_model::CaseRecord;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Document {
    Wrapped { results: Vec<RawEvent> },
    Bare(Vec<RawEvent>),
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    #[serde(default)]
    patient: Option<RawPatient>,
}

#[derive(Debug, Deserialize)]
struct RawPatient {
    #[serde(default)]
    drug: Vec<RawDrug>,
    #[serde(default)]
    reaction: Vec<RawReaction>,
}

#[derive(Debug, Deserialize)]
struct RawDrug {
    #[serde(default)]
    medicinalproduct: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawReaction {
    #[serde(default)]
    reactionmeddrapt: Option<String>,
}

/// Outcome of reading one export document.
#[derive(Debug, Clone)]
pub struct IngestSummary {
    pub records: Vec<CaseRecord>,
    /// Events discarded because no drug name could be extracted.
    pub skipped: usize,
}

/// Read and parse a JSON export file.
pub fn load_case_records(path: &Path) -> anyhow::Result<IngestSummary> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading records file {}", path.display()))?;
    parse_case_records(&raw).with_context(|| format!("parsing records file {}", path.display()))
}

/// Parse an export document from a JSON string.
pub fn parse_case_records(json: &str) -> anyhow::Result<IngestSummary> {
    let document: Document =
        serde_json::from_str(json).context("records document is not a recognized export shape")?;
    let events = match document {
        Document::Wrapped { results } => results,
        Document::Bare(events) => events,
    };

    let mut records = Vec::with_capacity(events.len());
    let mut skipped = 0usize;
    for event in events {
        match into_record(event) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!(skipped, kept = records.len(), "skipped malformed events");
    }
    debug!(records = records.len(), "parsed case records");
    Ok(IngestSummary { records, skipped })
}

fn into_record(event: RawEvent) -> Option<CaseRecord> {
    let patient = event.patient?;
    let drugs: Vec<String> = patient
        .drug
        .into_iter()
        .filter_map(|d| d.medicinalproduct)
        .filter(|name| !name.trim().is_empty())
        .collect();
    if drugs.is_empty() {
        return None;
    }
    let reactions: Vec<String> = patient
        .reaction
        .into_iter()
        .filter_map(|r| r.reactionmeddrapt)
        .filter(|name| !name.trim().is_empty())
        .collect();
    Some(CaseRecord::new(drugs, reactions))
}
