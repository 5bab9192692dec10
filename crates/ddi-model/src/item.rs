//! Interned items and ordered itemsets for frequent-pattern mining.
//!
//! Items are strongly typed: co-medication drugs are regular `Drug` items
//! while the drug of interest and the target reaction are reserved marker
//! variants. Keeping the markers out of the string namespace removes the
//! case-sensitivity and membership-test bugs a stringly-typed basket invites.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A symbolic item inside a transaction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Item {
    /// A co-medication, folded to uppercase.
    Drug(String),
    /// Reserved marker for the drug under analysis (primary or alias).
    DrugOfInterest,
    /// Reserved marker for "the target reaction was reported".
    Reaction,
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Drug(name) => f.write_str(name),
            Item::DrugOfInterest => f.write_str("<DRUG OF INTEREST>"),
            Item::Reaction => f.write_str("<REACTION>"),
        }
    }
}

/// An ordered set of items. Membership is set semantics: inserting a
/// duplicate is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemSet(BTreeSet<Item>);

impl ItemSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn singleton(item: Item) -> Self {
        Self(BTreeSet::from([item]))
    }

    pub fn insert(&mut self, item: Item) {
        self.0.insert(item);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.0.contains(item)
    }

    pub fn is_subset_of(&self, other: &ItemSet) -> bool {
        self.0.is_subset(&other.0)
    }

    pub fn is_disjoint_from(&self, other: &ItemSet) -> bool {
        self.0.is_disjoint(&other.0)
    }

    pub fn union(&self, other: &ItemSet) -> ItemSet {
        Self(self.0.union(&other.0).cloned().collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.0.iter()
    }

    /// The single item, when the set has exactly one.
    pub fn sole_item(&self) -> Option<&Item> {
        if self.0.len() == 1 {
            self.0.iter().next()
        } else {
            None
        }
    }
}

impl FromIterator<Item> for ItemSet {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ItemSet {
    type Item = Item;
    type IntoIter = std::collections::btree_set::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for ItemSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "}}")
    }
}

/// One market basket derived from a single case report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction(pub ItemSet);

impl Transaction {
    pub fn contains_all(&self, items: &ItemSet) -> bool {
        items.is_subset_of(&self.0)
    }

    pub fn items(&self) -> &ItemSet {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drug(name: &str) -> Item {
        Item::Drug(name.to_string())
    }

    #[test]
    fn duplicate_insert_is_set_semantics() {
        let mut set = ItemSet::new();
        set.insert(drug("A"));
        set.insert(drug("A"));
        set.insert(Item::Reaction);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn subset_and_disjoint() {
        let small: ItemSet = [drug("A")].into_iter().collect();
        let large: ItemSet = [drug("A"), drug("B"), Item::Reaction].into_iter().collect();
        let other: ItemSet = [drug("C")].into_iter().collect();

        assert!(small.is_subset_of(&large));
        assert!(!large.is_subset_of(&small));
        assert!(small.is_disjoint_from(&other));
        assert!(!small.is_disjoint_from(&large));
    }

    #[test]
    fn markers_are_distinct_from_drug_names() {
        let set: ItemSet = [drug("REACTION"), Item::Reaction].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Item::Reaction));
        assert!(set.contains(&drug("REACTION")));
    }

    #[test]
    fn transaction_membership() {
        let tx = Transaction(
            [drug("A"), drug("B"), Item::DrugOfInterest]
                .into_iter()
                .collect(),
        );
        let probe: ItemSet = [drug("A"), Item::DrugOfInterest].into_iter().collect();
        assert!(tx.contains_all(&probe));
        let missing: ItemSet = [drug("A"), Item::Reaction].into_iter().collect();
        assert!(!tx.contains_all(&missing));
    }
}
