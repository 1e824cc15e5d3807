//! Error types for the G-code text layer.

use std::io;
use thiserror::Error;

/// Errors that can occur while reading or writing G-code files.
#[derive(Error, Debug)]
pub enum GcodeError {
    /// The input file could not be read.
    #[error("Failed to read G-code file '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The output file could not be written.
    #[error("Failed to write G-code file '{path}': {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Result type alias for core G-code operations.
pub type Result<T> = std::result::Result<T, GcodeError>;
