//! Core traits for column fitting
//!
//! Fitters receive a time column and one value column, never a whole table,
//! so the same fitter runs unchanged over every core.

use crate::kernel::sorted_pairs;
use cputemp_core::{Core, Error, Result, SensorTable};

/// Properties of a fitter that don't depend on the data
pub trait ColumnFitterProperties {
    /// Get the name of the fitting algorithm
    fn algorithm_name(&self) -> &'static str;

    /// Get the minimum number of rows required for a fit
    fn minimum_rows(&self) -> usize {
        2
    }

    /// Fail with `InsufficientData` below `minimum_rows`
    fn check_rows(&self, rows: usize) -> Result<()> {
        let expected = self.minimum_rows();
        if rows < expected {
            return Err(Error::InsufficientData {
                expected,
                actual: rows,
            });
        }
        Ok(())
    }
}

/// Fits a model over `(time, value)` pairs
pub trait ColumnFitter: ColumnFitterProperties {
    type Output;

    /// Fit pairs already sorted by ascending time
    ///
    /// Ties must keep their original relative order.
    fn fit_sorted(&self, pairs: &[(i64, f64)]) -> Result<Self::Output>;

    /// Fit columns in any order; a stable copy sorted by time is made first
    fn fit(&self, times: &[i64], values: &[f64]) -> Result<Self::Output> {
        self.check_rows(times.len())?;
        let pairs = sorted_pairs(times, values)?;
        self.fit_sorted(&pairs)
    }

    /// Fit one value column of a table
    fn fit_column(&self, table: &SensorTable, core: Core) -> Result<Self::Output> {
        self.fit(table.times(), table.column(core))
    }
}
