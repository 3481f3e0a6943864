//! Per-core CPU temperature fitting
//!
//! Re-exports the workspace crates:
//!
//! - [`core`]: raw log parsing and the sensor table
//! - [`fit`]: piecewise-linear and least-squares fitters
//!
//! ```rust
//! use cputemp::prelude::*;
//! use std::io::Cursor;
//!
//! let log = "0 0 0 0\n10 10 10 10\n0 0 0 0\n";
//! let config = ParserConfig::default().with_step(10).with_strip_units(false);
//! let table = SensorTable::from_reader(Cursor::new(log), &config).unwrap();
//!
//! let fit = fit_column(&table, Core::Core0).unwrap();
//! assert_eq!(fit.segments[1].y_intercept, 20.0);
//! ```

pub use cputemp_core as core;
pub use cputemp_fit as fit;

/// Prelude module for convenient imports
pub mod prelude {
    pub use cputemp_core::{Core, Error, ParserConfig, Result, Sample, SensorTable, TimeSource};
    pub use cputemp_fit::{
        fit_column, fit_table, ColumnFit, ColumnFitter, LeastSquares, PiecewiseLinear,
        RegressionCoefficients, Segment,
    };
}
