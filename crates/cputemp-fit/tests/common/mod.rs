//! Common test utilities for cputemp-fit tests

#![allow(dead_code)]

use cputemp_core::SensorTable;
use rand::prelude::*;

/// Build a table where every core carries the same values
pub fn uniform_table(times: &[i64], values: &[f64]) -> SensorTable {
    SensorTable::from_columns(
        times.to_vec(),
        std::array::from_fn(|_| values.to_vec()),
    )
    .unwrap()
}

/// Noisy linear temperature trace sampled every `step` seconds
pub fn noisy_trace(len: usize, step: i64, slope: f64, intercept: f64, seed: u64) -> (Vec<i64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let times: Vec<i64> = (0..len as i64).map(|i| i * step).collect();
    let values = times
        .iter()
        .map(|&t| intercept + slope * t as f64 + rng.gen_range(-2.0..2.0))
        .collect();
    (times, values)
}

/// Apply one random permutation to both columns
pub fn shuffle_rows(times: &[i64], values: &[f64], seed: u64) -> (Vec<i64>, Vec<f64>) {
    let mut rows: Vec<(i64, f64)> = times.iter().copied().zip(values.iter().copied()).collect();
    rows.shuffle(&mut StdRng::seed_from_u64(seed));
    rows.into_iter().unzip()
}
