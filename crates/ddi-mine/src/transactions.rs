//! Turn case reports into market-basket transactions.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use ddi_model::{CaseRecord, DrugQuery, Item, ItemSet, Transaction, TransactionMode, fold_name};

/// The transactions built for one query, plus the co-medication universe
/// observed while building them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionSet {
    pub mode: TransactionMode,
    pub transactions: Vec<Transaction>,
    /// Every drug seen co-occurring with the drug of interest in a
    /// qualifying report. Candidates outside this set are never scored.
    pub interactors: BTreeSet<String>,
    /// Reports containing the drug of interest where the reaction occurred.
    pub reaction_cases: usize,
}

/// Build transactions for one (drug, reaction) query.
///
/// Reports without the drug of interest, or with an empty drug set, are
/// skipped silently. The drug of interest (whether matched by primary or
/// alias name) is represented by the reserved marker item, so a report
/// listing both brand and generic contributes a single marker.
pub fn build_transactions(
    records: &[CaseRecord],
    drug: &DrugQuery,
    reaction: &str,
    mode: TransactionMode,
) -> TransactionSet {
    let reaction = fold_name(reaction);
    let mut transactions = Vec::new();
    let mut interactors = BTreeSet::new();
    let mut reaction_cases = 0usize;

    for record in records {
        if record.drugs().is_empty() || !drug.present_in(record) {
            continue;
        }
        let has_reaction = record.has_reaction(&reaction);
        if has_reaction {
            reaction_cases += 1;
        }
        let include = match mode {
            TransactionMode::ReactionGated => has_reaction,
            TransactionMode::FullExposure => true,
        };
        if !include {
            continue;
        }

        let mut items = ItemSet::singleton(Item::DrugOfInterest);
        for name in record.drugs() {
            if !drug.matches(name) {
                interactors.insert(name.clone());
                items.insert(Item::Drug(name.clone()));
            }
        }
        if has_reaction {
            items.insert(Item::Reaction);
        }
        transactions.push(Transaction(items));
    }

    debug!(
        transactions = transactions.len(),
        interactors = interactors.len(),
        reaction_cases,
        ?mode,
        "built transactions"
    );

    TransactionSet {
        mode,
        transactions,
        interactors,
        reaction_cases,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<CaseRecord> {
        vec![
            CaseRecord::new(["Truvada", "Vancomycin"], ["Acute kidney injury"]),
            CaseRecord::new(["TRUVADA", "Aspirin"], ["Rash"]),
            CaseRecord::new(["truvada"], ["Acute Kidney Injury"]),
            CaseRecord::new(["Metformin"], ["Acute kidney injury"]),
            CaseRecord::new(Vec::<String>::new(), ["Rash"]),
        ]
    }

    #[test]
    fn reaction_gated_keeps_only_drug_and_reaction_reports() {
        let query = DrugQuery::new("Truvada", None);
        let set = build_transactions(
            &records(),
            &query,
            "acute kidney injury",
            TransactionMode::ReactionGated,
        );

        assert_eq!(set.transactions.len(), 2);
        assert_eq!(set.reaction_cases, 2);
        // The aspirin report had the drug but not the reaction; metformin had
        // the reaction but not the drug. Only vancomycin co-occurred in a
        // qualifying report.
        assert_eq!(
            set.interactors,
            BTreeSet::from(["VANCOMYCIN".to_string()])
        );
        for tx in &set.transactions {
            assert!(tx.items().contains(&Item::DrugOfInterest));
            assert!(tx.items().contains(&Item::Reaction));
        }
    }

    #[test]
    fn full_exposure_keeps_every_drug_report() {
        let query = DrugQuery::new("Truvada", None);
        let set = build_transactions(
            &records(),
            &query,
            "acute kidney injury",
            TransactionMode::FullExposure,
        );

        assert_eq!(set.transactions.len(), 3);
        assert_eq!(set.reaction_cases, 2);
        assert!(set.interactors.contains("ASPIRIN"));
        assert!(set.interactors.contains("VANCOMYCIN"));

        let with_marker = set
            .transactions
            .iter()
            .filter(|tx| tx.items().contains(&Item::Reaction))
            .count();
        assert_eq!(with_marker, 2);
    }

    #[test]
    fn alias_and_primary_collapse_to_one_marker() {
        let query = DrugQuery::new("Truvada", Some("emtricitabine"));
        let records = vec![CaseRecord::new(
            ["TRUVADA", "EMTRICITABINE", "VANCOMYCIN"],
            ["ACUTE KIDNEY INJURY"],
        )];
        let set = build_transactions(
            &records,
            &query,
            "ACUTE KIDNEY INJURY",
            TransactionMode::ReactionGated,
        );

        assert_eq!(set.transactions.len(), 1);
        let items = set.transactions[0].items();
        // Marker + vancomycin + reaction; neither query name appears as a
        // plain drug item.
        assert_eq!(items.len(), 3);
        assert!(!items.contains(&Item::Drug("TRUVADA".to_string())));
        assert!(!items.contains(&Item::Drug("EMTRICITABINE".to_string())));
        assert_eq!(set.interactors, BTreeSet::from(["VANCOMYCIN".to_string()]));
    }

    #[test]
    fn no_qualifying_reports_yields_empty_set() {
        let query = DrugQuery::new("Warfarin", None);
        let set = build_transactions(
            &records(),
            &query,
            "acute kidney injury",
            TransactionMode::ReactionGated,
        );
        assert!(set.transactions.is_empty());
        assert!(set.interactors.is_empty());
        assert_eq!(set.reaction_cases, 0);
    }
}
