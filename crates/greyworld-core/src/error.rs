//! Error types for the greyworld library.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for greyworld operations.
pub type Result<T> = std::result::Result<T, CorrectError>;

/// Errors produced by the correction pipeline and its I/O collaborators.
#[derive(Error, Debug)]
pub enum CorrectError {
    /// Image file could not be read or decoded.
    #[error("failed to load image from {path}: {reason}")]
    ImageLoad { path: PathBuf, reason: String },

    /// File extension not handled by any decoder.
    #[error("unsupported file format: {extension:?}")]
    UnsupportedFormat { extension: String },

    /// Buffer length inconsistent with the declared dimensions.
    #[error("invalid image shape: {width}x{height} RGB needs {expected} samples, got {actual}")]
    InvalidShape {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Gamma must be finite and positive.
    #[error("invalid gamma {value}: must be finite and > 0")]
    InvalidGamma { value: f32 },

    /// The estimated illuminant has zero norm (no signal in the image).
    #[error("degenerate illuminant: estimate has zero norm")]
    DegenerateIlluminant,

    /// Corrected image could not be written.
    #[error("failed to save image to {path}: {reason}")]
    ImageSave { path: PathBuf, reason: String },
}

impl CorrectError {
    /// Create an `ImageLoad` error with path context.
    pub(crate) fn load(path: &Path, reason: impl Into<String>) -> Self {
        Self::ImageLoad {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Create an `ImageSave` error with path context.
    pub(crate) fn save(path: &Path, reason: impl Into<String>) -> Self {
        Self::ImageSave {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}
