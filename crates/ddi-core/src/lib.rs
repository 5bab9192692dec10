pub mod analysis;
pub mod index;

pub use analysis::run_analysis;
pub use index::{NormalizedIndex, normalize_index};
