//! Types produced by the fitters

use cputemp_core::Core;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One exact line between two consecutive time-sorted samples
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Time of the left sample
    pub x_start: i64,
    /// Time of the right sample
    pub x_end: i64,
    pub slope: f64,
    pub y_intercept: f64,
}

impl Segment {
    pub fn new(x_start: i64, x_end: i64, slope: f64, y_intercept: f64) -> Self {
        Self {
            x_start,
            x_end,
            slope,
            y_intercept,
        }
    }

    /// Value of the line at `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        self.y_intercept + self.slope * x
    }

    /// Whether `x` lies in the closed interval covered by this segment
    pub fn contains(&self, x: i64) -> bool {
        self.x_start <= x && x <= self.x_end
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] y = {:.4} + {:.4} x",
            self.x_start, self.x_end, self.y_intercept, self.slope
        )
    }
}

/// Coefficients of the global least-squares line `y = c0 + c1 x`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionCoefficients {
    /// c0
    pub y_intercept: f64,
    /// c1
    pub slope: f64,
}

impl RegressionCoefficients {
    pub fn new(y_intercept: f64, slope: f64) -> Self {
        Self { y_intercept, slope }
    }

    /// Value of the line at `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        self.y_intercept + self.slope * x
    }

    /// `[c0, c1]`
    pub fn to_array(self) -> [f64; 2] {
        [self.y_intercept, self.slope]
    }
}

/// Both fits for one value column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnFit {
    pub core: Core,
    pub segments: Vec<Segment>,
    pub least_squares: RegressionCoefficients,
}

impl ColumnFit {
    /// Smallest `x_start` and largest `x_end` over all segments
    pub fn span(&self) -> (i64, i64) {
        let start = self.segments.iter().map(|s| s.x_start).min();
        let end = self.segments.iter().map(|s| s.x_end).max();
        (start.unwrap_or_default(), end.unwrap_or_default())
    }

    /// Segment covering `x`, if any. At a shared endpoint the earlier segment wins.
    pub fn segment_at(&self, x: i64) -> Option<&Segment> {
        self.segments.iter().find(|s| s.contains(x))
    }
}
