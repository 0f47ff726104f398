//! # Error Types
//!
//! This module defines error types used throughout the code128b library.
//!
//! Encoding never fails: unsupported characters are replaced by a space.
//! Errors only come from the rendering backend and the surrounding CLI layer.

use thiserror::Error;

/// Main error type for code128b operations
#[derive(Debug, Error)]
pub enum Code128Error {
    /// Font or raster backend could not be set up
    #[error("Rendering backend error: {0}")]
    Backend(String),

    /// Image encoding or saving error
    #[error("Image error: {0}")]
    Image(String),

    /// Color text that is neither a hex code nor a known name
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
