pub mod export;

pub use export::{IngestSummary, load_case_records, parse_case_records};
