//! Level-wise (Apriori) frequent-itemset mining.
//!
//! Candidates at level k are built only from frequent (k-1)-itemsets and are
//! pruned unless every immediate subset is itself frequent. The pruning
//! invariant is load-bearing: combined with the exact rational support
//! comparison it guarantees that itemsets sitting exactly on the threshold
//! are classified identically at every level.

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use ddi_model::{FrequentItemSet, Item, ItemSet, MinSupport, Support, Transaction};

/// Mine every itemset whose support meets `min_support`.
///
/// An empty transaction slice, or a threshold nothing reaches, returns an
/// empty vec. Callers treat that as "insufficient data".
pub fn mine_frequent_itemsets(
    transactions: &[Transaction],
    min_support: MinSupport,
) -> Vec<FrequentItemSet> {
    let total = transactions.len() as u64;
    if total == 0 {
        return Vec::new();
    }

    let mut result = Vec::new();

    // Level 1: count individual items.
    let mut item_counts: BTreeMap<Item, u64> = BTreeMap::new();
    for tx in transactions {
        for item in tx.items().iter() {
            *item_counts.entry(item.clone()).or_insert(0) += 1;
        }
    }
    let mut level: Vec<(Vec<Item>, u64)> = item_counts
        .into_iter()
        .filter(|(_, count)| Support::new(*count, total).meets(min_support))
        .map(|(item, count)| (vec![item], count))
        .collect();

    let mut size = 1usize;
    while !level.is_empty() {
        debug!(size, frequent = level.len(), "frequent itemsets at level");
        for (items, count) in &level {
            result.push(FrequentItemSet {
                items: items.iter().cloned().collect(),
                support: Support::new(*count, total),
            });
        }

        let candidates = generate_candidates(&level);
        size += 1;
        level = candidates
            .into_iter()
            .filter_map(|candidate| {
                let probe: ItemSet = candidate.iter().cloned().collect();
                let count = transactions
                    .iter()
                    .filter(|tx| tx.contains_all(&probe))
                    .count() as u64;
                Support::new(count, total)
                    .meets(min_support)
                    .then_some((candidate, count))
            })
            .collect();
    }

    result
}

/// Join frequent k-itemsets sharing a (k-1)-prefix, then prune candidates
/// with any infrequent immediate subset.
fn generate_candidates(level: &[(Vec<Item>, u64)]) -> Vec<Vec<Item>> {
    let frequent: HashSet<&[Item]> = level.iter().map(|(items, _)| items.as_slice()).collect();
    let mut candidates = Vec::new();

    for (i, (left, _)) in level.iter().enumerate() {
        for (right, _) in &level[i + 1..] {
            let k = left.len();
            if left[..k - 1] != right[..k - 1] {
                continue;
            }
            // Items within a level are sorted, so the join keeps order.
            let mut candidate = left.clone();
            candidate.push(right[k - 1].clone());
            if all_subsets_frequent(&candidate, &frequent) {
                candidates.push(candidate);
            }
        }
    }
    candidates
}

fn all_subsets_frequent(candidate: &[Item], frequent: &HashSet<&[Item]>) -> bool {
    let mut subset = Vec::with_capacity(candidate.len() - 1);
    for skip in 0..candidate.len() {
        subset.clear();
        subset.extend(
            candidate
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, item)| item.clone()),
        );
        if !frequent.contains(subset.as_slice()) {
            return false;
        }
    }
    true
}
