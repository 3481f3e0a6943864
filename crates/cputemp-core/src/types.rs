//! Sample and column identifiers

use crate::config::CORE_COUNT;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One value column of the sensor table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Core {
    #[serde(rename = "core_0")]
    Core0,
    #[serde(rename = "core_1")]
    Core1,
    #[serde(rename = "core_2")]
    Core2,
    #[serde(rename = "core_3")]
    Core3,
}

impl Core {
    /// All value columns in table order
    pub const ALL: [Core; CORE_COUNT] = [Core::Core0, Core::Core1, Core::Core2, Core::Core3];

    /// Position of this core within a record
    pub fn index(self) -> usize {
        match self {
            Core::Core0 => 0,
            Core::Core1 => 1,
            Core::Core2 => 2,
            Core::Core3 => 3,
        }
    }

    /// Column name, e.g. `core_2`
    pub fn name(self) -> &'static str {
        match self {
            Core::Core0 => "core_0",
            Core::Core1 => "core_1",
            Core::Core2 => "core_2",
            Core::Core3 => "core_3",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Core {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Core {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Core::ALL
            .into_iter()
            .find(|core| core.name() == s)
            .ok_or_else(|| Error::InvalidInput(format!("unknown column: {s}")))
    }
}

/// A single record: timestamp plus one reading per core
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: i64,
    pub cores: [f64; CORE_COUNT],
}

impl Sample {
    pub fn new(time: i64, cores: [f64; CORE_COUNT]) -> Self {
        Self { time, cores }
    }

    /// Reading for one core
    pub fn value(&self, core: Core) -> f64 {
        self.cores[core.index()]
    }
}
