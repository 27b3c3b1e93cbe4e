//! Error types for the poster studio.
//!
//! Rendering itself never fails; these errors surface only at the loading,
//! configuration, export and collaborator boundaries.

use thiserror::Error;

/// Result type for poster studio operations.
pub type PosterResult<T> = Result<T, PosterError>;

/// Errors raised at the poster studio boundaries.
#[derive(Debug, Error)]
pub enum PosterError {
    /// Configuration or content file could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Filesystem access failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image bytes could not be decoded.
    #[error("Image decode failed: {0}")]
    Decode(String),

    /// Remote image could not be fetched.
    #[error("Image fetch failed: {0}")]
    Fetch(String),

    /// Raster export encoding failed.
    #[error("Export encoding failed: {0}")]
    Encode(String),

    /// Color string was not a CSS hex color.
    #[error("Invalid color: {0}")]
    Color(String),

    /// Font data could not be loaded.
    #[error("Font error: {0}")]
    Font(String),

    /// An external collaborator (ad feed, export log) reported a failure.
    #[error("Collaborator error: {0}")]
    Collaborator(String),
}

impl From<serde_json::Error> for PosterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<image::ImageError> for PosterError {
    fn from(err: image::ImageError) -> Self {
        Self::Decode(err.to_string())
    }
}
