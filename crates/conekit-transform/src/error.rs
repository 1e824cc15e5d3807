//! Error types for backtransformation configuration.
//!
//! All of these are raised at setup, before any line is processed; the
//! per-line pipeline itself never fails (unparsable content passes
//! through verbatim).

use thiserror::Error;

/// Errors that can occur while validating a transform configuration.
#[derive(Error, Debug)]
pub enum TransformError {
    /// The cone type string is not a supported orientation.
    #[error("Unknown cone type '{0}' (expected 'outward' or 'inward')")]
    UnknownConeType(String),

    /// The angle mode string is not a supported strategy.
    #[error("Unknown angle mode '{0}' (expected 'radial', 'tangential' or 'mixed')")]
    UnknownAngleMode(String),

    /// The cone half-angle must lie in `[0, 90)` degrees.
    #[error("Cone angle {0} degrees out of range (valid: 0 <= angle < 90)")]
    InvalidConeAngle(f64),

    /// The maximum segment length must be positive and finite.
    #[error("Invalid maximum segment length {0} (must be positive)")]
    InvalidSegmentLength(f64),

    /// A translate parameter is not a finite number.
    #[error("Translate parameter '{name}' is not a finite number: {value}")]
    InvalidTranslateParameter { name: &'static str, value: f64 },
}

/// Result type alias for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;
