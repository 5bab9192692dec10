//! Analysis request/response types exchanged across the pipeline boundary.

use serde::{Deserialize, Serialize};

use crate::table::{ChiSquare, RorEstimate};

/// How case reports are turned into transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionMode {
    /// Only reports containing both the drug of interest and the target
    /// reaction produce a transaction. This is the mode the DDI index
    /// pipeline assumes.
    #[default]
    ReactionGated,
    /// Every report containing the drug of interest produces a transaction;
    /// the reaction marker is added when the reaction occurred. Used for
    /// general co-medication pattern discovery.
    FullExposure,
}

/// One query against an immutable case-record snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub drug: String,
    pub alias: Option<String>,
    pub reaction: String,
    /// Minimum support in (0, 1]; validated before any computation.
    pub min_support: f64,
    /// Minimum lift for generated rules.
    pub min_lift: f64,
    pub mode: TransactionMode,
}

impl AnalysisRequest {
    pub fn new(drug: &str, reaction: &str, min_support: f64) -> Self {
        Self {
            drug: drug.to_string(),
            alias: None,
            reaction: reaction.to_string(),
            min_support,
            min_lift: 1.0,
            mode: TransactionMode::default(),
        }
    }

    pub fn with_alias(mut self, alias: &str) -> Self {
        self.alias = Some(alias.to_string());
        self
    }

    pub fn with_mode(mut self, mode: TransactionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_min_lift(mut self, min_lift: f64) -> Self {
        self.min_lift = min_lift;
        self
    }
}

/// Where the baseline lift used for index normalization came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BaselineSource {
    /// The single-drug rule `{drug of interest} -> {reaction}` was mined.
    MinedRule { lift: f64 },
    /// No baseline rule met the threshold; a lift of 1.0 was assumed.
    /// Scores derived this way carry reduced confidence.
    AssumedUnit,
}

impl BaselineSource {
    pub fn lift(&self) -> f64 {
        match self {
            BaselineSource::MinedRule { lift } => *lift,
            BaselineSource::AssumedUnit => 1.0,
        }
    }
}

/// One ranked candidate interacting drug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DdiIndexEntry {
    pub drug: String,
    pub ddi_index: f64,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
}

/// The assembled result of one analysis query.
///
/// Degraded paths stay observable in the shape itself: zero records or an
/// unproductive mining run yield empty `entries` and zero counts rather than
/// an error, and an undefined ROR is an explicit sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Normalized (uppercase) drug-of-interest name.
    pub drug: String,
    pub reaction: String,
    pub mode: TransactionMode,
    /// Number of case records the query ran over.
    pub record_count: usize,
    /// Reports containing the drug of interest where the reaction occurred.
    pub reaction_case_count: usize,
    pub ror: RorEstimate,
    pub chi_square: Option<ChiSquare>,
    pub baseline: BaselineSource,
    /// Candidates ranked by DDI index, descending.
    pub entries: Vec<DdiIndexEntry>,
}

impl AnalysisReport {
    /// True when the query produced no rankable signal at all.
    pub fn is_insufficient_data(&self) -> bool {
        self.entries.is_empty() && self.reaction_case_count == 0
    }
}
