//! Raw sensor log parsing
//!
//! A log holds one record per line, fields separated by whitespace. Readings
//! may be decorated the way `sensors` prints them (`+61.0°C`); with unit
//! stripping enabled a leading `+` and one recognised unit suffix are removed,
//! and tokens that are exactly a unit are treated as separators. Anything else
//! must parse as a number.
//!
//! Timestamps come either from the record position (`TimeSource::Stepped`) or
//! from a leading field (`TimeSource::Leading`). Either way a record decodes
//! to exactly one integer timestamp plus one reading per core.

use crate::config::{ParserConfig, TimeSource, CORE_COUNT};
use crate::error::{Error, Result};
use crate::types::Sample;
use std::io::BufRead;
use tracing::{debug, trace};

/// Unit suffixes removed when stripping is enabled
const UNIT_SUFFIXES: [&str; 4] = ["°C", "°F", "C", "F"];

/// Lazily decodes samples from a buffered source
///
/// Yields at most one error; iteration ends after it.
pub struct SampleReader<R> {
    lines: std::io::Lines<R>,
    config: ParserConfig,
    index: usize,
    finished: bool,
}

impl<R: BufRead> SampleReader<R> {
    pub fn new(reader: R, config: ParserConfig) -> Self {
        Self {
            lines: reader.lines(),
            config,
            index: 0,
            finished: false,
        }
    }

    /// Number of records decoded so far
    pub fn records_read(&self) -> usize {
        self.index
    }
}

impl<R: BufRead> Iterator for SampleReader<R> {
    type Item = Result<Sample>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let line = match self.lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                self.finished = true;
                return Some(Err(Error::Io(e)));
            }
            None => {
                self.finished = true;
                debug!(records = self.index, "reached end of sensor log");
                return None;
            }
        };

        let result = parse_line(&line, self.index, &self.config);
        match &result {
            Ok(sample) => {
                trace!(time = sample.time, "decoded record");
                self.index += 1;
            }
            Err(_) => self.finished = true,
        }
        Some(result)
    }
}

/// Parse one record. `index` is the 0-based record position.
pub fn parse_line(line: &str, index: usize, config: &ParserConfig) -> Result<Sample> {
    let line_no = index + 1;
    let fields = numeric_tokens(line, config.strip_units)
        .map(|token| parse_field(token, line_no))
        .collect::<Result<Vec<f64>>>()?;

    let expected = config.time_source.fields_per_line();
    if fields.len() != expected {
        return Err(Error::parse(
            line_no,
            format!("expected {expected} numeric fields, found {}", fields.len()),
        ));
    }

    let (time, readings) = match config.time_source {
        TimeSource::Stepped { step } => {
            let time = i64::try_from(index)
                .ok()
                .and_then(|i| i.checked_mul(step))
                .ok_or_else(|| Error::parse(line_no, "timestamp overflows i64"))?;
            (time, &fields[..])
        }
        TimeSource::Leading => (leading_time(fields[0], line_no)?, &fields[1..]),
    };

    let mut cores = [0.0; CORE_COUNT];
    cores.copy_from_slice(readings);
    Ok(Sample::new(time, cores))
}

fn numeric_tokens(line: &str, strip_units: bool) -> impl Iterator<Item = &str> {
    line.split_whitespace().filter_map(move |token| {
        if !strip_units {
            return Some(token);
        }
        let token = token.strip_prefix('+').unwrap_or(token);
        // Bare unit tokens such as `°C` are separators
        if UNIT_SUFFIXES.contains(&token) {
            return None;
        }
        let stripped = UNIT_SUFFIXES
            .iter()
            .find_map(|unit| token.strip_suffix(*unit))
            .unwrap_or(token);
        Some(stripped)
    })
}

/// Truncate a leading timestamp toward zero; values outside `i64` are rejected
fn leading_time(value: f64, line_no: usize) -> Result<i64> {
    let truncated = value.trunc();
    // i64::MIN is exactly -2^63 and i64::MAX rounds up to 2^63
    if !(i64::MIN as f64..i64::MAX as f64).contains(&truncated) {
        return Err(Error::parse(
            line_no,
            format!("timestamp out of range: {value}"),
        ));
    }
    Ok(truncated as i64)
}

fn parse_field(token: &str, line_no: usize) -> Result<f64> {
    let value: f64 = token
        .parse()
        .map_err(|_| Error::parse(line_no, format!("not a number: {token:?}")))?;
    if !value.is_finite() {
        return Err(Error::parse(line_no, format!("non-finite value: {token:?}")));
    }
    Ok(value)
}
