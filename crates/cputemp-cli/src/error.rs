//! Error types for the cputemp binary

use cputemp_core::Core;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    /// Input absent or unreadable
    #[error("File not found - {}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: cputemp_core::Error,
    },

    /// Input readable but malformed or empty
    #[error("Malformed input {}: {source}", path.display())]
    InputMalformed {
        path: PathBuf,
        #[source]
        source: cputemp_core::Error,
    },

    /// One value column could not be fitted
    #[error("Cannot fit {core} of {}: {source}", path.display())]
    Column {
        path: PathBuf,
        core: Core,
        #[source]
        source: cputemp_core::Error,
    },

    /// Rendering or writing a report failed
    #[error("{0:#}")]
    Output(#[from] anyhow::Error),
}

pub type CliResult<T> = std::result::Result<T, CliError>;

impl CliError {
    /// Classify a table load failure by whether the file could be read at all
    pub fn from_load(path: PathBuf, source: cputemp_core::Error) -> Self {
        if source.is_io() {
            Self::InputUnreadable { path, source }
        } else {
            Self::InputMalformed { path, source }
        }
    }

    /// Process exit code for this failure class
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Output(_) => 1,
            Self::InputUnreadable { .. } => 2,
            Self::InputMalformed { .. } | Self::Column { .. } => 3,
        }
    }

    /// Ranking used when several inputs fail; the highest wins
    pub fn severity(&self) -> u8 {
        match self {
            Self::InputMalformed { .. } | Self::Column { .. } => 1,
            Self::InputUnreadable { .. } => 2,
            Self::Output(_) => 3,
        }
    }
}
