//! Core data types for the correction pipeline.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_GAMMA;
use crate::error::{CorrectError, Result};

/// An 8-bit image with interleaved RGB samples.
///
/// Channel order is RGB throughout the pipeline. The buffer holds exactly
/// `width * height * 3` samples; construction fails otherwise, so every
/// `ImageBuffer` downstream code sees is well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl ImageBuffer {
    /// Create a buffer from interleaved RGB samples.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(CorrectError::InvalidShape {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels (width * height).
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Interleaved RGB samples.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer, returning the interleaved samples.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

/// Input accepted by the corrector: a file on disk or a decoded buffer.
///
/// Resolved once at pipeline entry; everything downstream sees only
/// `ImageBuffer`.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Path to a PNG, JPEG, or TIFF file.
    Path(PathBuf),
    /// Already-decoded image data.
    Buffer(ImageBuffer),
}

impl From<ImageBuffer> for ImageSource {
    fn from(buffer: ImageBuffer) -> Self {
        Self::Buffer(buffer)
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for ImageSource {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<&str> for ImageSource {
    fn from(path: &str) -> Self {
        Self::Path(PathBuf::from(path))
    }
}

/// Options for one correction call.
#[derive(Debug, Clone, Copy)]
pub struct CorrectOptions {
    /// Display gamma undone before estimation and re-applied after
    /// correction. Must be finite and > 0.
    pub gamma: f32,

    /// Print intermediate statistics to stderr.
    pub debug: bool,
}

impl Default for CorrectOptions {
    fn default() -> Self {
        Self {
            gamma: DEFAULT_GAMMA,
            debug: false,
        }
    }
}

/// Illuminant estimate produced by the Minkowski-norm estimator.
///
/// All vectors are in RGB channel order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IlluminantEstimate {
    /// Per-channel Minkowski means over the linearized image.
    pub raw: [f32; 3],

    /// `raw` rescaled to unit Euclidean norm.
    pub normalized: [f32; 3],

    /// Per-channel correction gains applied to the linear image.
    pub gains: [f32; 3],
}
