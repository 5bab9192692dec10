pub mod chi;
pub mod contingency;
pub mod ror;

pub use chi::chi_square;
pub use contingency::build_table;
pub use ror::reporting_odds_ratio;
