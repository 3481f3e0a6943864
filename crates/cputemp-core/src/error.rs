//! Error types for temperature log ingestion and fitting
//!
//! Provides a unified error type for all cputemp crates.

use thiserror::Error;

/// Core error type for parsing and fitting operations
#[derive(Error, Debug)]
pub enum Error {
    /// A record could not be decoded into a timestamp plus one reading per core
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The source yielded no records at all
    #[error("Empty input: no samples were read")]
    EmptyInput,

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Two consecutive time-sorted samples share a timestamp
    #[error("Degenerate segment {index}: duplicate timestamp {time}")]
    DegenerateSegment { index: usize, time: i64 },

    /// Every timestamp in the column is identical
    #[error("Degenerate regression: zero time variance across {rows} samples")]
    DegenerateRegression { rows: usize },

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create a parse error for a 1-based line number
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// True when the source itself could not be read
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// True when the source was readable but its content is malformed or degenerate
    pub fn is_data(&self) -> bool {
        !self.is_io()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::parse(3, "expected 4 readings, found 2");
        assert_eq!(
            err.to_string(),
            "Parse error on line 3: expected 4 readings, found 2"
        );

        let err = Error::EmptyInput;
        assert_eq!(err.to_string(), "Empty input: no samples were read");

        let err = Error::InsufficientData { expected: 2, actual: 1 };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 2 samples, got 1"
        );

        let err = Error::DegenerateSegment { index: 4, time: 120 };
        assert_eq!(
            err.to_string(),
            "Degenerate segment 4: duplicate timestamp 120"
        );

        let err = Error::DegenerateRegression { rows: 5 };
        assert_eq!(
            err.to_string(),
            "Degenerate regression: zero time variance across 5 samples"
        );
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::size_mismatch(10, 5, "piecewise fit");
        match err {
            Error::InvalidInput(msg) => {
                assert_eq!(msg, "Size mismatch in piecewise fit: expected 10, got 5");
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_error_classification() {
        let io = Error::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(io.is_io());
        assert!(!io.is_data());

        assert!(Error::EmptyInput.is_data());
        assert!(Error::DegenerateRegression { rows: 3 }.is_data());
        assert!(Error::parse(1, "bad").is_data());
    }
}
