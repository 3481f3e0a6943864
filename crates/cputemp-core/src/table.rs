//! Column-oriented sample table
//!
//! Rows are kept in input order. Nothing here sorts; consumers that need
//! time order sort their own copy.

use crate::config::{ParserConfig, CORE_COUNT};
use crate::error::{Error, Result};
use crate::parse::SampleReader;
use crate::types::{Core, Sample};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, instrument};

/// Immutable table of timestamps and per-core readings
#[derive(Debug, Clone, PartialEq)]
pub struct SensorTable {
    time: Vec<i64>,
    cores: [Vec<f64>; CORE_COUNT],
}

impl SensorTable {
    /// Collect samples into a table. The first error is returned as-is.
    pub fn from_samples<I>(samples: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<Sample>>,
    {
        let samples = samples.into_iter();
        let (lower, _) = samples.size_hint();
        let mut time = Vec::with_capacity(lower);
        let mut cores: [Vec<f64>; CORE_COUNT] =
            std::array::from_fn(|_| Vec::with_capacity(lower));

        for sample in samples {
            let sample = sample?;
            time.push(sample.time);
            for (column, value) in cores.iter_mut().zip(sample.cores) {
                column.push(value);
            }
        }

        if time.is_empty() {
            return Err(Error::EmptyInput);
        }

        debug!(rows = time.len(), "built sensor table");
        Ok(Self { time, cores })
    }

    /// Parse a whole source into a table
    pub fn from_reader<R: BufRead>(reader: R, config: &ParserConfig) -> Result<Self> {
        Self::from_samples(SampleReader::new(reader, *config))
    }

    /// Open and parse a sensor log. A missing or unreadable file is `Error::Io`.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>, config: &ParserConfig) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file), config)
    }

    /// Build directly from columns. All columns must share one length of at least 1.
    pub fn from_columns(time: Vec<i64>, cores: [Vec<f64>; CORE_COUNT]) -> Result<Self> {
        if time.is_empty() {
            return Err(Error::EmptyInput);
        }
        for (core, column) in Core::ALL.iter().zip(&cores) {
            if column.len() != time.len() {
                return Err(Error::size_mismatch(time.len(), column.len(), core.name()));
            }
        }
        Ok(Self { time, cores })
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Never true for a table built through the constructors
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// The `time` column in input order
    pub fn times(&self) -> &[i64] {
        &self.time
    }

    /// One value column in input order
    pub fn column(&self, core: Core) -> &[f64] {
        &self.cores[core.index()]
    }

    /// Look a column up by name (`time` is not a value column)
    pub fn column_by_name(&self, name: &str) -> Result<&[f64]> {
        let core: Core = name.parse()?;
        Ok(self.column(core))
    }

    /// Value columns paired with their identifiers
    pub fn columns(&self) -> impl Iterator<Item = (Core, &[f64])> + '_ {
        Core::ALL.into_iter().map(move |core| (core, self.column(core)))
    }

    /// Row `i` as a sample
    pub fn row(&self, i: usize) -> Option<Sample> {
        let time = *self.time.get(i)?;
        Some(Sample::new(time, std::array::from_fn(|c| self.cores[c][i])))
    }

    pub fn rows(&self) -> impl Iterator<Item = Sample> + '_ {
        (0..self.len()).filter_map(move |i| self.row(i))
    }

    /// Smallest and largest timestamp
    pub fn time_span(&self) -> (i64, i64) {
        let min = self.time.iter().copied().min().unwrap_or_default();
        let max = self.time.iter().copied().max().unwrap_or_default();
        (min, max)
    }
}
