//! 2x2 contingency table and disproportionality estimates.

use serde::{Deserialize, Serialize};

/// Counts over the full case-record collection for one (drug, reaction)
/// query:
///
/// - `a`: drug present, reaction present
/// - `b`: drug present, reaction absent
/// - `c`: drug absent, reaction present
/// - `d`: drug absent, reaction absent
///
/// Every record is classified into exactly one cell, so the four counts sum
/// to the number of records considered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContingencyTable {
    pub a: u64,
    pub b: u64,
    pub c: u64,
    pub d: u64,
}

impl ContingencyTable {
    pub fn total(&self) -> u64 {
        self.a + self.b + self.c + self.d
    }
}

/// Reporting Odds Ratio outcome.
///
/// The undefined cases are explicit variants rather than silent numeric
/// coercions: a zero denominator with a positive numerator is `Infinite`,
/// and a table where both `b` and `c` are zero is `NotComputable`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RorEstimate {
    Finite {
        ror: f64,
        ci_low: f64,
        ci_high: f64,
    },
    Infinite,
    NotComputable,
}

impl RorEstimate {
    pub fn is_computable(&self) -> bool {
        !matches!(self, RorEstimate::NotComputable)
    }
}

/// Chi-square statistic over the same table, reported alongside the ROR and
/// never substituted for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChiSquare {
    pub statistic: f64,
    pub p_value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_partition_the_record_set() {
        let table = ContingencyTable {
            a: 10,
            b: 90,
            c: 5,
            d: 895,
        };
        assert_eq!(table.total(), 1000);
    }

    #[test]
    fn ror_sentinels_serialize_distinctly() {
        let finite = serde_json::to_string(&RorEstimate::Finite {
            ror: 19.89,
            ci_low: 10.1,
            ci_high: 39.2,
        })
        .unwrap();
        let infinite = serde_json::to_string(&RorEstimate::Infinite).unwrap();
        let missing = serde_json::to_string(&RorEstimate::NotComputable).unwrap();
        assert!(finite.contains("finite"));
        assert!(infinite.contains("infinite"));
        assert!(missing.contains("not_computable"));
    }
}
