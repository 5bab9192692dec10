//! Chi-square test of independence for the 2x2 table.

use ddi_model::{ChiSquare, ContingencyTable};

/// Chi-square statistic with Yates continuity correction (1 degree of
/// freedom) and its p-value.
///
/// Returns `None` when any marginal total is zero; the test is undefined on
/// such tables. The statistic accompanies the ROR in reports and never
/// replaces it.
pub fn chi_square(table: &ContingencyTable) -> Option<ChiSquare> {
    let (a, b, c, d) = (
        table.a as f64,
        table.b as f64,
        table.c as f64,
        table.d as f64,
    );
    let n = a + b + c + d;
    let margins = [(a + b), (c + d), (a + c), (b + d)];
    if n == 0.0 || margins.iter().any(|&m| m == 0.0) {
        return None;
    }

    let diff = (a * d - b * c).abs();
    let corrected = (diff - n / 2.0).max(0.0);
    let statistic = n * corrected * corrected / margins.iter().product::<f64>();
    Some(ChiSquare {
        statistic,
        p_value: p_value_1df(statistic),
    })
}

/// Upper-tail p-value for a chi-square variate with 1 df:
/// `P(X >= x) = erfc(sqrt(x / 2))`.
fn p_value_1df(statistic: f64) -> f64 {
    erfc((statistic / 2.0).sqrt())
}

/// Complementary error function, Abramowitz & Stegun 7.1.26 (max error
/// about 1.5e-7, ample for reporting).
fn erfc(x: f64) -> f64 {
    let t = 1.0 / (1.0 + 0.327_591_1 * x.abs());
    let poly = t
        * (0.254_829_592
            + t * (-0.284_496_736
                + t * (1.421_413_741 + t * (-1.453_152_027 + t * 1.061_405_429))));
    let result = poly * (-x * x).exp();
    if x >= 0.0 { result } else { 2.0 - result }
}
