//! Configuration types for the raw sensor log reader

use serde::{Deserialize, Serialize};

/// Seconds between consecutive readings in a stepped log
pub const DEFAULT_STEP_SECONDS: i64 = 30;

/// Number of per-core readings carried by every record
pub const CORE_COUNT: usize = 4;

/// Where a record's timestamp comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSource {
    /// Lines carry readings only; time is `record_index * step`
    Stepped { step: i64 },

    /// The first field of every line is the timestamp
    Leading,
}

impl Default for TimeSource {
    fn default() -> Self {
        Self::Stepped {
            step: DEFAULT_STEP_SECONDS,
        }
    }
}

impl TimeSource {
    /// Number of whitespace-separated fields a line must hold
    pub fn fields_per_line(&self) -> usize {
        match self {
            Self::Stepped { .. } => CORE_COUNT,
            Self::Leading => CORE_COUNT + 1,
        }
    }
}

/// Parser settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// How timestamps are assigned
    pub time_source: TimeSource,

    /// Strip `lm-sensors` decorations such as `+61.0°C` before parsing
    pub strip_units: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            time_source: TimeSource::default(),
            strip_units: true,
        }
    }
}

impl ParserConfig {
    pub fn with_time_source(mut self, time_source: TimeSource) -> Self {
        self.time_source = time_source;
        self
    }

    pub fn with_step(self, step: i64) -> Self {
        self.with_time_source(TimeSource::Stepped { step })
    }

    pub fn with_strip_units(mut self, strip_units: bool) -> Self {
        self.strip_units = strip_units;
        self
    }
}
