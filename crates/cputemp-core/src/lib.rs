//! Core types for per-core CPU temperature logs
//!
//! This crate turns a raw sensor log into an immutable, column-oriented
//! [`SensorTable`]: one integer `time` column and one `f64` column per core.
//!
//! # Example
//!
//! ```rust
//! use cputemp_core::{Core, ParserConfig, SensorTable};
//! use std::io::Cursor;
//!
//! let log = "+61.0°C +63.0°C +50.0°C +58.0°C\n+80.0°C +81.0°C +82.0°C +83.0°C\n";
//! let table = SensorTable::from_reader(Cursor::new(log), &ParserConfig::default()).unwrap();
//!
//! assert_eq!(table.times(), &[0, 30]);
//! assert_eq!(table.column(Core::Core1), &[63.0, 81.0]);
//! ```

pub mod config;
pub mod error;
pub mod parse;
pub mod table;
pub mod types;

pub use config::{ParserConfig, TimeSource, CORE_COUNT, DEFAULT_STEP_SECONDS};
pub use error::{Error, Result};
pub use parse::{parse_line, SampleReader};
pub use table::SensorTable;
pub use types::{Core, Sample};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
