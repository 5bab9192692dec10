pub mod apriori;
pub mod rules;
pub mod transactions;

pub use apriori::mine_frequent_itemsets;
pub use rules::{filter_ddi_rules, generate_rules};
pub use transactions::{TransactionSet, build_transactions};
