//! Case reports and the drug-of-interest query.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One adverse-event case report.
///
/// Drug and reaction names are folded to uppercase at construction so that
/// source-data case variance cannot fragment identical names into distinct
/// items. Empty sets are tolerated; such a record simply contributes nothing
/// downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    drugs: BTreeSet<String>,
    reactions: BTreeSet<String>,
}

impl CaseRecord {
    pub fn new<D, R>(drugs: D, reactions: R) -> Self
    where
        D: IntoIterator,
        D::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        Self {
            drugs: drugs.into_iter().map(|d| fold_name(d.as_ref())).collect(),
            reactions: reactions
                .into_iter()
                .map(|r| fold_name(r.as_ref()))
                .collect(),
        }
    }

    pub fn drugs(&self) -> &BTreeSet<String> {
        &self.drugs
    }

    pub fn reactions(&self) -> &BTreeSet<String> {
        &self.reactions
    }

    pub fn has_drug(&self, name: &str) -> bool {
        self.drugs.contains(&fold_name(name))
    }

    /// Boolean presence: multiple mentions of the same reaction in the source
    /// report collapse to one membership test.
    pub fn has_reaction(&self, name: &str) -> bool {
        self.reactions.contains(&fold_name(name))
    }
}

/// Canonical form for drug and reaction names: trimmed, uppercase.
pub fn fold_name(name: &str) -> String {
    name.trim().to_uppercase()
}

/// The drug under analysis: a primary name plus an optional generic/brand
/// alias treated as equivalent. A record containing either name counts once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrugQuery {
    primary: String,
    alias: Option<String>,
}

impl DrugQuery {
    pub fn new(primary: &str, alias: Option<&str>) -> Self {
        Self {
            primary: fold_name(primary),
            alias: alias.map(fold_name),
        }
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// Membership-based presence test against an already-folded drug name.
    pub fn matches(&self, folded_name: &str) -> bool {
        self.primary == folded_name || self.alias.as_deref() == Some(folded_name)
    }

    pub fn present_in(&self, record: &CaseRecord) -> bool {
        record.drugs().iter().any(|d| self.matches(d))
    }
}
