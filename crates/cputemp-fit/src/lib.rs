//! Linear models over per-core temperature columns
//!
//! Two fitters share one interface:
//!
//! - **PiecewiseLinear**: one exact segment per consecutive pair of
//!   time-sorted samples
//! - **LeastSquares**: one global line minimising the squared vertical error
//!
//! Both sort their own copy of the `(time, value)` pairs, so tables can be
//! passed in input order.
//!
//! # Usage
//!
//! ```rust
//! use cputemp_fit::{ColumnFitter, LeastSquares, PiecewiseLinear};
//!
//! let times = [0, 10, 20];
//! let values = [0.0, 10.0, 0.0];
//!
//! let segments = PiecewiseLinear::new().fit(&times, &values).unwrap();
//! assert_eq!(segments.len(), 2);
//! assert_eq!(segments[1].slope, -1.0);
//!
//! let line = LeastSquares::new().fit(&times, &values).unwrap();
//! assert_eq!(line.slope, 0.0);
//! ```

pub mod kernel;
pub mod least_squares;
pub mod piecewise;
pub mod report;
pub mod traits;
pub mod types;

pub use kernel::{sorted_pairs, NormalSums};
pub use least_squares::LeastSquares;
pub use piecewise::PiecewiseLinear;
pub use report::{fit_column, fit_table};
pub use traits::{ColumnFitter, ColumnFitterProperties};
pub use types::{ColumnFit, RegressionCoefficients, Segment};
