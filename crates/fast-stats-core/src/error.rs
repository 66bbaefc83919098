//! Error types for descriptive statistics
//!
//! Provides a unified error type for all fast-stats crates.

use thiserror::Error;

/// Core error type for fast-stats operations
#[derive(Error, Debug)]
pub enum Error {
    /// Dataset or variable shape is unusable (empty, or ragged under a packed layout)
    #[error("Shape error: {0}")]
    Shape(String),

    /// Unrecognized precision or layout token
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Requested vector width or instruction set is not present in this build
    #[error("Unsupported configuration: {0}")]
    UnsupportedConfiguration(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Memory allocation error
    #[error("Memory error: {0}")]
    Memory(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a dataset without variables
    pub fn empty_dataset() -> Self {
        Self::Shape("dataset contains no variables".to_string())
    }

    /// Create an error for a variable without samples
    pub fn empty_variable(index: usize) -> Self {
        Self::Shape(format!("variable {index} contains no samples"))
    }

    /// Create an error for unequal variable lengths under a packed layout
    pub fn length_mismatch(index: usize, expected: usize, actual: usize) -> Self {
        Self::Shape(format!(
            "variable {index} has {actual} samples, expected {expected} (packed layouts require equal lengths)"
        ))
    }

    /// Create an error for a vector width the running binary cannot execute
    pub fn unsupported_width(bits: usize) -> Self {
        Self::UnsupportedConfiguration(format!(
            "{bits}-bit vector instructions are not available in this build"
        ))
    }

    /// Create an error for an unrecognized configuration token
    pub fn unknown_token(kind: &str, token: &str) -> Self {
        Self::Configuration(format!("unrecognized {kind} '{token}'"))
    }

    /// Create an error for finalizing statistics over zero samples
    pub fn no_samples(context: &str) -> Self {
        Self::InvalidInput(format!("{context}: cannot compute statistics of zero samples"))
    }
}
