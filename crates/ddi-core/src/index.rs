//! DDI index normalization over the filtered rule set.

use std::collections::BTreeMap;

use tracing::debug;

use ddi_model::{BaselineSource, DdiIndexEntry, Item, Rule};

/// The normalized, ranked candidate list plus the baseline it was scored
/// against.
#[derive(Debug, Clone)]
pub struct NormalizedIndex {
    pub baseline: BaselineSource,
    pub entries: Vec<DdiIndexEntry>,
}

/// Score each candidate as `lift({interest, candidate} -> reaction)` divided
/// by the baseline `lift({interest} -> reaction)`.
///
/// Candidates with no mined pair rule are omitted outright: "insufficient
/// support to evaluate" must stay distinguishable from "evaluated and found
/// neutral" (index near 1). When the baseline rule itself was not mined, a
/// unit lift is assumed and flagged via [`BaselineSource::AssumedUnit`].
pub fn normalize_index(rules: &[Rule]) -> NormalizedIndex {
    let baseline = rules
        .iter()
        .find(|rule| rule.antecedent.sole_item() == Some(&Item::DrugOfInterest))
        .map_or(BaselineSource::AssumedUnit, |rule| {
            BaselineSource::MinedRule { lift: rule.lift }
        });
    let baseline_lift = baseline.lift();

    // Dedupe per candidate, keeping the highest-support pair rule.
    let mut best: BTreeMap<&str, &Rule> = BTreeMap::new();
    for rule in rules {
        let Some(candidate) = pair_candidate(rule) else {
            continue;
        };
        best.entry(candidate)
            .and_modify(|kept| {
                if rule.support.count > kept.support.count {
                    *kept = rule;
                }
            })
            .or_insert(rule);
    }

    let mut entries: Vec<DdiIndexEntry> = best
        .into_iter()
        .map(|(candidate, rule)| DdiIndexEntry {
            drug: candidate.to_string(),
            ddi_index: rule.lift / baseline_lift,
            support: rule.support.value(),
            confidence: rule.confidence,
            lift: rule.lift,
        })
        .collect();

    // Descending by score; name breaks ties so repeated runs rank
    // identically.
    entries.sort_by(|x, y| {
        y.ddi_index
            .total_cmp(&x.ddi_index)
            .then_with(|| x.drug.cmp(&y.drug))
    });

    debug!(candidates = entries.len(), ?baseline, "normalized DDI index");
    NormalizedIndex { baseline, entries }
}

/// The candidate name when the rule has the shape
/// `{drug of interest, candidate} -> reaction`.
fn pair_candidate(rule: &Rule) -> Option<&str> {
    if rule.antecedent.len() != 2 || !rule.antecedent.contains(&Item::DrugOfInterest) {
        return None;
    }
    rule.antecedent.iter().find_map(|item| match item {
        Item::Drug(name) => Some(name.as_str()),
        _ => None,
    })
}
