//! Exact-rational support values and the validated minimum-support threshold.

use serde::{Deserialize, Serialize};

use crate::error::{DdiError, Result};

/// Fixed-point scale used for threshold comparisons (nanounits).
const SCALE: u64 = 1_000_000_000;

/// Support of an itemset as the exact rational `count / total`.
///
/// The float view is derived on demand; threshold comparisons never go
/// through floating point, so itemsets sitting exactly on the boundary are
/// classified the same way at every level of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Support {
    pub count: u64,
    pub total: u64,
}

impl Support {
    pub fn new(count: u64, total: u64) -> Self {
        Self { count, total }
    }

    pub fn value(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.count as f64 / self.total as f64
        }
    }

    /// Exact `count/total >= threshold` via integer cross-multiplication.
    pub fn meets(&self, threshold: MinSupport) -> bool {
        if self.total == 0 {
            return false;
        }
        u128::from(self.count) * u128::from(SCALE)
            >= u128::from(threshold.fixed) * u128::from(self.total)
    }
}

/// Minimum-support threshold, validated to lie in (0, 1].
///
/// Stored both as the raw value and as a fixed-point integer so that
/// [`Support::meets`] is exact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinSupport {
    raw: f64,
    fixed: u64,
}

impl MinSupport {
    pub fn new(raw: f64) -> Result<Self> {
        if !raw.is_finite() || raw <= 0.0 || raw > 1.0 {
            return Err(DdiError::InvalidMinSupport(raw));
        }
        let fixed = (raw * SCALE as f64).round() as u64;
        // Rounding must not push a valid threshold to zero.
        let fixed = fixed.max(1);
        Ok(Self { raw, fixed })
    }

    pub fn raw(&self) -> f64 {
        self.raw
    }
}
