//! Mined artifacts: frequent itemsets and association rules.

use serde::{Deserialize, Serialize};

use crate::item::ItemSet;
use crate::support::Support;

/// An itemset whose support met the mining threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequentItemSet {
    pub items: ItemSet,
    pub support: Support,
}

/// An association rule `antecedent -> consequent`.
///
/// Invariants: antecedent and consequent are non-empty and disjoint;
/// `support` is the support of their union; `lift` equals
/// `confidence / support(consequent)` exactly as computed from the mined
/// supports (no transaction re-scan).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub antecedent: ItemSet,
    pub consequent: ItemSet,
    pub support: Support,
    pub confidence: f64,
    pub lift: f64,
}
