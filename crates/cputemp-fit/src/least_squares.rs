//! Global least-squares line
//!
//! Closed-form solution of the normal equations for `y = c0 + c1 x`:
//!
//! ```text
//! c1 = (k Σxy − Σx Σy) / (k Σx² − (Σx)²)
//! c0 = (Σy − c1 Σx) / k
//! ```
//!
//! The denominator is compared against exactly `0.0`. Near-zero values are
//! accepted as they are.

use crate::kernel::NormalSums;
use crate::traits::{ColumnFitter, ColumnFitterProperties};
use crate::types::RegressionCoefficients;
use cputemp_core::{Error, Result};
use tracing::debug;

/// Single best-fit line over a whole column
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastSquares;

impl LeastSquares {
    pub fn new() -> Self {
        Self
    }

    /// Solve from precomputed sums
    pub fn solve(sums: &NormalSums) -> Result<RegressionCoefficients> {
        let denominator = sums.denominator();
        if denominator == 0.0 {
            return Err(Error::DegenerateRegression { rows: sums.count });
        }

        let k = sums.count as f64;
        let slope = sums.slope_numerator() / denominator;
        let y_intercept = (sums.sum_y - slope * sums.sum_x) / k;
        Ok(RegressionCoefficients::new(y_intercept, slope))
    }
}

impl ColumnFitterProperties for LeastSquares {
    fn algorithm_name(&self) -> &'static str {
        "least-squares"
    }
}

impl ColumnFitter for LeastSquares {
    type Output = RegressionCoefficients;

    fn fit_sorted(&self, pairs: &[(i64, f64)]) -> Result<RegressionCoefficients> {
        self.check_rows(pairs.len())?;
        let sums = NormalSums::from_pairs(pairs);
        let coefficients = Self::solve(&sums)?;
        debug!(
            rows = sums.count,
            c0 = coefficients.y_intercept,
            c1 = coefficients.slope,
            "least-squares fit complete"
        );
        Ok(coefficients)
    }
}
