//! Shared computational pieces for the fitters

use cputemp_core::{Error, Result};

/// Zip a time column with a value column and stable-sort by time
pub fn sorted_pairs(times: &[i64], values: &[f64]) -> Result<Vec<(i64, f64)>> {
    if times.len() != values.len() {
        return Err(Error::size_mismatch(times.len(), values.len(), "column pairing"));
    }
    let mut pairs: Vec<(i64, f64)> = times.iter().copied().zip(values.iter().copied()).collect();
    pairs.sort_by_key(|&(t, _)| t);
    Ok(pairs)
}

/// Running sums for the normal equations of `y = c0 + c1 x`
///
/// Accumulated in `f64`, in the order the pairs are pushed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NormalSums {
    pub count: usize,
    pub sum_x: f64,
    pub sum_y: f64,
    pub sum_xx: f64,
    pub sum_xy: f64,
}

impl NormalSums {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[(i64, f64)]) -> Self {
        pairs.iter().fold(Self::new(), |mut sums, &(x, y)| {
            sums.push(x as f64, y);
            sums
        })
    }

    pub fn push(&mut self, x: f64, y: f64) {
        self.count += 1;
        self.sum_x += x;
        self.sum_y += y;
        self.sum_xx += x * x;
        self.sum_xy += x * y;
    }

    /// `k·Σx² − (Σx)²`; zero exactly when every x is identical (or k < 2)
    pub fn denominator(&self) -> f64 {
        let k = self.count as f64;
        k * self.sum_xx - self.sum_x * self.sum_x
    }

    /// `k·Σxy − Σx·Σy`
    pub fn slope_numerator(&self) -> f64 {
        let k = self.count as f64;
        k * self.sum_xy - self.sum_x * self.sum_y
    }
}
