//! Piecewise-linear interpolation
//!
//! Every consecutive pair of time-sorted samples is joined by the unique line
//! through both points, so each segment reproduces its two samples exactly.

use crate::traits::{ColumnFitter, ColumnFitterProperties};
use crate::types::Segment;
use cputemp_core::{Error, Result};
use tracing::debug;

/// Joins consecutive samples with exact line segments
#[derive(Debug, Clone, Copy, Default)]
pub struct PiecewiseLinear;

impl PiecewiseLinear {
    pub fn new() -> Self {
        Self
    }
}

impl ColumnFitterProperties for PiecewiseLinear {
    fn algorithm_name(&self) -> &'static str {
        "interpolation"
    }
}

impl ColumnFitter for PiecewiseLinear {
    type Output = Vec<Segment>;

    fn fit_sorted(&self, pairs: &[(i64, f64)]) -> Result<Vec<Segment>> {
        self.check_rows(pairs.len())?;

        let segments = pairs
            .windows(2)
            .enumerate()
            .map(|(index, window)| {
                let (x_k, y_k) = window[0];
                let (x_k1, y_k1) = window[1];
                if x_k1 == x_k {
                    return Err(Error::DegenerateSegment { index, time: x_k });
                }

                // Widen so extreme timestamps cannot overflow the difference
                let run = (i128::from(x_k1) - i128::from(x_k)) as f64;
                let slope = (y_k1 - y_k) / run;
                let y_intercept = y_k - slope * x_k as f64;
                Ok(Segment::new(x_k, x_k1, slope, y_intercept))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(segments = segments.len(), "piecewise fit complete");
        Ok(segments)
    }
}
