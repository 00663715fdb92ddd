//! Defines the error type returned by this crate.
use polars::prelude::PolarsError;
use thiserror::Error;

use std::io;


/// Errors produced while reading samples,
/// growing a tree, or querying it.
#[derive(Debug, Error)]
pub enum RTreeError {
    /// Malformed shapes or parameters.
    /// E.g., the number of rows and labels differ,
    /// the sample is empty,
    /// or `leaf_size` is zero.
    #[error("invalid input: {0}")]
    InvalidInput(String),


    /// I/O error while reading a file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),


    /// Error reported by `polars` while reading or converting a frame.
    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),


    /// Error while serializing a report.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}


impl RTreeError {
    #[inline]
    pub(crate) fn invalid<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput(message.into())
    }
}


/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, RTreeError>;
