//! Error types for Sineplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for Sineplot operations.
pub type Result<T> = std::result::Result<T, SinePlotError>;

/// Errors that can occur in Sineplot.
#[derive(Debug, Error)]
pub enum SinePlotError {
    /// A sampled sequence needs at least one element.
    #[error("Invalid sample count: {count} (must be at least 1)")]
    InvalidSampleCount {
        /// Requested number of samples.
        count: usize,
    },

    /// Interval endpoints must be finite.
    #[error("Interval bound is not finite: [{start}, {end}]")]
    NonFiniteBound {
        /// Interval start.
        start: f64,
        /// Interval end.
        end: f64,
    },

    /// X and Y sequences of a line series differ in length.
    #[error("Series length mismatch: x has {x} values, y has {y}")]
    LengthMismatch {
        /// Length of the X sequence.
        x: usize,
        /// Length of the Y sequence.
        y: usize,
    },

    /// A line series was registered without any points.
    #[error("Cannot plot an empty series")]
    EmptySeries,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl SinePlotError {
    /// Create an InvalidSampleCount error.
    pub fn invalid_sample_count(count: usize) -> Self {
        Self::InvalidSampleCount { count }
    }

    /// Create a LengthMismatch error.
    pub fn length_mismatch(x: usize, y: usize) -> Self {
        Self::LengthMismatch { x, y }
    }

    /// Create a Terminal error.
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}
