//! Error handling for the gradgen layout core
//!
//! All failures are validation failures detected before or during geometry
//! construction; the core performs no I/O of its own, so there are no
//! transient or retryable errors. The export path adds I/O and JSON variants
//! for writing the backend hand-off.

use thiserror::Error;

/// Result type alias for gradgen operations
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Error types for gradient-network layout generation
#[derive(Error, Debug)]
pub enum LayoutError {
    /// The requested stage range is empty or inverted
    #[error("invalid input range: output_num ({output_num}) must exceed input_num ({input_num})")]
    InvalidInputRange { input_num: usize, output_num: usize },

    /// A geometry parameter is out of its valid domain
    #[error("invalid geometry parameter {name}: {message} (value: {value})")]
    InvalidGeometryParameters {
        name: &'static str,
        value: f64,
        message: String,
    },

    /// A constructed primitive is degenerate (collinear arc, open profile)
    #[error("degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// File I/O errors while writing a hand-off document
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// JSON serialization errors in the hand-off path
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl LayoutError {
    /// Create an invalid-range error
    pub fn invalid_range(input_num: usize, output_num: usize) -> Self {
        Self::InvalidInputRange {
            input_num,
            output_num,
        }
    }

    /// Create an invalid-parameter error naming the offending parameter
    pub fn invalid_parameter(
        name: &'static str,
        value: f64,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidGeometryParameters {
            name,
            value,
            message: message.into(),
        }
    }

    /// Create a degenerate-geometry error
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }
}

/// Reject a non-positive dimension, naming the parameter.
pub(crate) fn require_positive(name: &'static str, value: f64) -> LayoutResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(LayoutError::invalid_parameter(
            name,
            value,
            "must be positive and finite",
        ))
    }
}

/// Reject a negative or non-finite dimension, naming the parameter.
pub(crate) fn require_non_negative(name: &'static str, value: f64) -> LayoutResult<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(LayoutError::invalid_parameter(
            name,
            value,
            "must be non-negative and finite",
        ))
    }
}
