pub mod error;
pub mod item;
pub mod record;
pub mod report;
pub mod rule;
pub mod support;
pub mod table;

pub use error::{DdiError, Result};
pub use item::{Item, ItemSet, Transaction};
pub use record::{CaseRecord, DrugQuery, fold_name};
pub use report::{
    AnalysisReport, AnalysisRequest, BaselineSource, DdiIndexEntry, TransactionMode,
};
pub use rule::{FrequentItemSet, Rule};
pub use support::{MinSupport, Support};
pub use table::{ChiSquare, ContingencyTable, RorEstimate};
