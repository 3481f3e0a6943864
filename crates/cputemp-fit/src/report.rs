//! Fitting every value column of a table

use crate::kernel::sorted_pairs;
use crate::least_squares::LeastSquares;
use crate::piecewise::PiecewiseLinear;
use crate::traits::{ColumnFitter, ColumnFitterProperties};
use crate::types::ColumnFit;
use cputemp_core::{Core, Result, SensorTable};
use tracing::{debug, instrument};

/// Run both fitters over one core
///
/// The pairs are sorted once and shared by the two fitters.
#[instrument(skip_all, fields(core = %core, rows = table.len()))]
pub fn fit_column(table: &SensorTable, core: Core) -> Result<ColumnFit> {
    let piecewise = PiecewiseLinear::new();
    let least_squares = LeastSquares::new();
    piecewise.check_rows(table.len())?;

    let pairs = sorted_pairs(table.times(), table.column(core))?;
    let segments = piecewise.fit_sorted(&pairs)?;
    let coefficients = least_squares.fit_sorted(&pairs)?;

    debug!(
        segments = segments.len(),
        slope = coefficients.slope,
        "column fitted"
    );
    Ok(ColumnFit {
        core,
        segments,
        least_squares: coefficients,
    })
}

/// Fit every core. Each core succeeds or fails on its own.
#[cfg(not(feature = "parallel"))]
pub fn fit_table(table: &SensorTable) -> Vec<(Core, Result<ColumnFit>)> {
    Core::ALL
        .iter()
        .map(|&core| (core, fit_column(table, core)))
        .collect()
}

/// Fit every core on the rayon pool. Each core succeeds or fails on its own.
#[cfg(feature = "parallel")]
pub fn fit_table(table: &SensorTable) -> Vec<(Core, Result<ColumnFit>)> {
    use rayon::prelude::*;

    Core::ALL
        .par_iter()
        .map(|&core| (core, fit_column(table, core)))
        .collect()
}
