//! Reporting Odds Ratio with 95% confidence interval.

use ddi_model::{ContingencyTable, RorEstimate};

/// Compute `ROR = (a*d) / (b*c)` with the explicit zero-denominator policy:
///
/// - both `b` and `c` zero: `NotComputable` (no denominator exists at all);
/// - exactly one of `b`, `c` zero with the numerator positive: `Infinite`;
/// - otherwise a finite estimate with a 95% CI on the log scale, using a 0.5
///   continuity correction for the interval when any cell is zero.
pub fn reporting_odds_ratio(table: &ContingencyTable) -> RorEstimate {
    let (a, b, c, d) = (table.a, table.b, table.c, table.d);
    if b == 0 && c == 0 {
        return RorEstimate::NotComputable;
    }
    if b == 0 || c == 0 {
        return if a > 0 && d > 0 {
            RorEstimate::Infinite
        } else {
            // Numerator and denominator both vanish: 0/0.
            RorEstimate::NotComputable
        };
    }

    let ror = (a as f64 * d as f64) / (b as f64 * c as f64);
    let (ca, cb, cc, cd) = continuity_correct(a as f64, b as f64, c as f64, d as f64);
    let log_ror = (ca * cd / (cb * cc)).ln();
    let se = (1.0 / ca + 1.0 / cb + 1.0 / cc + 1.0 / cd).sqrt();
    RorEstimate::Finite {
        ror,
        ci_low: (log_ror - 1.96 * se).exp(),
        ci_high: (log_ror + 1.96 * se).exp(),
    }
}

fn continuity_correct(a: f64, b: f64, c: f64, d: f64) -> (f64, f64, f64, f64) {
    if [a, b, c, d].iter().any(|&x| x == 0.0) {
        (a + 0.5, b + 0.5, c + 0.5, d + 0.5)
    } else {
        (a, b, c, d)
    }
}
