//! The analysis pipeline for one (drug, reaction, min-support) query.

use anyhow::Result;
use tracing::info;

use ddi_mine::{build_transactions, filter_ddi_rules, generate_rules, mine_frequent_itemsets};
use ddi_model::{
    AnalysisReport, AnalysisRequest, CaseRecord, DdiError, DrugQuery, MinSupport, fold_name,
};
use ddi_stats::{build_table, chi_square, reporting_odds_ratio};

use crate::index::normalize_index;

/// Run the full pipeline over an immutable record snapshot.
///
/// Pure over its inputs: no shared state survives the call, so concurrent
/// queries only need their own snapshot. Parameter validation happens before
/// any computation; everything after that degrades to a well-shaped report
/// rather than an error. An empty record collection (for instance after an
/// upstream retrieval failure) yields the insufficient-data shape.
pub fn run_analysis(records: &[CaseRecord], request: &AnalysisRequest) -> Result<AnalysisReport> {
    let min_support = MinSupport::new(request.min_support)?;
    if request.drug.trim().is_empty() {
        return Err(DdiError::EmptyDrugName.into());
    }
    if request.reaction.trim().is_empty() {
        return Err(DdiError::EmptyReactionName.into());
    }

    let drug = DrugQuery::new(&request.drug, request.alias.as_deref());
    let reaction = fold_name(&request.reaction);
    info!(
        drug = %drug.primary(),
        reaction = %reaction,
        records = records.len(),
        min_support = min_support.raw(),
        "running DDI analysis"
    );

    let transaction_set = build_transactions(records, &drug, &reaction, request.mode);
    let itemsets = mine_frequent_itemsets(&transaction_set.transactions, min_support);
    info!(
        transactions = transaction_set.transactions.len(),
        frequent_itemsets = itemsets.len(),
        "mining finished"
    );
    let rules = filter_ddi_rules(
        generate_rules(&itemsets, request.min_lift),
        &transaction_set.interactors,
    );

    // Disproportionality runs over the complete collection, independent of
    // the mining threshold.
    let table = build_table(records, &drug, &reaction);
    let ror = reporting_odds_ratio(&table);
    let chi = chi_square(&table);

    let index = normalize_index(&rules);
    info!(candidates = index.entries.len(), ror = ?ror, "analysis complete");

    Ok(AnalysisReport {
        drug: drug.primary().to_string(),
        reaction,
        mode: transaction_set.mode,
        record_count: records.len(),
        reaction_case_count: transaction_set.reaction_cases,
        ror,
        chi_square: chi,
        baseline: index.baseline,
        entries: index.entries,
    })
}
