//! Association-rule generation from mined itemsets.
//!
//! Confidence and lift come entirely from the supports the miner already
//! computed; the transaction set is never re-scanned. Apriori guarantees that
//! every subset of a frequent itemset was itself mined, so the lookups below
//! always resolve for well-formed input.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use ddi_model::{FrequentItemSet, Item, ItemSet, Rule, Support};

/// Generate all rules `antecedent -> consequent` over the frequent itemsets
/// with both sides non-empty and disjoint, keeping those with
/// `lift >= min_lift`.
///
/// Rules whose antecedent or consequent support is numerically undefined are
/// dropped rather than dividing by zero.
pub fn generate_rules(itemsets: &[FrequentItemSet], min_lift: f64) -> Vec<Rule> {
    let supports: HashMap<&ItemSet, Support> = itemsets
        .iter()
        .map(|f| (&f.items, f.support))
        .collect();

    let mut rules = Vec::new();
    for frequent in itemsets {
        let items: Vec<Item> = frequent.items.iter().cloned().collect();
        if items.len() < 2 {
            continue;
        }
        // Every non-empty proper subset as antecedent; complement as
        // consequent. Itemsets here are small (bounded by basket size), so
        // the bitmask walk is fine.
        for mask in 1..(1u64 << items.len()) - 1 {
            let mut antecedent = ItemSet::new();
            let mut consequent = ItemSet::new();
            for (i, item) in items.iter().enumerate() {
                if mask & (1u64 << i) != 0 {
                    antecedent.insert(item.clone());
                } else {
                    consequent.insert(item.clone());
                }
            }
            let Some(rule) = make_rule(antecedent, consequent, frequent.support, &supports) else {
                continue;
            };
            if rule.lift >= min_lift {
                rules.push(rule);
            }
        }
    }
    debug!(rules = rules.len(), min_lift, "generated rules");
    rules
}

fn make_rule(
    antecedent: ItemSet,
    consequent: ItemSet,
    union_support: Support,
    supports: &HashMap<&ItemSet, Support>,
) -> Option<Rule> {
    let antecedent_support = supports.get(&antecedent)?;
    let consequent_support = supports.get(&consequent)?;
    if antecedent_support.count == 0 || consequent_support.count == 0 {
        return None;
    }
    let confidence = union_support.value() / antecedent_support.value();
    let lift = confidence / consequent_support.value();
    Some(Rule {
        antecedent,
        consequent,
        support: union_support,
        confidence,
        lift,
    })
}

/// Keep only rules usable by the DDI index: the consequent is exactly the
/// reaction marker, and the antecedent draws solely from the drug-of-interest
/// marker and the observed interactor universe. This drops coincidental
/// third-party combinations that share basket support with the query drug.
pub fn filter_ddi_rules(rules: Vec<Rule>, interactors: &BTreeSet<String>) -> Vec<Rule> {
    rules
        .into_iter()
        .filter(|rule| {
            rule.consequent.sole_item() == Some(&Item::Reaction)
                && rule.antecedent.iter().all(|item| match item {
                    Item::DrugOfInterest => true,
                    Item::Drug(name) => interactors.contains(name),
                    Item::Reaction => false,
                })
        })
        .collect()
}
