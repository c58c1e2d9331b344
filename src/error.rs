//! Error types for resolution calculations.

use std::path::PathBuf;

/// Errors that can occur while computing a resolution.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A computed side fell below the pixel floor or is not a usable number.
    #[error("dimension of {value} is invalid (must be a finite value of at least 64 pixels)")]
    InvalidDimension { value: f64 },

    #[error("couldn't find aspect ratio in string `{0}`")]
    InvalidFormat(String),

    /// A ratio component of zero would divide by zero.
    #[error("ratio components must be positive, got {width}:{height}")]
    InvalidRatio { width: u32, height: u32 },

    #[error("{input} must be between {min} and {max}, got {value}")]
    OutOfRange {
        input: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("ratio catalog I/O error at '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
