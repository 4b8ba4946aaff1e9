//! Illuminant correction pipeline
//!
//! Straight-line pipeline: gamma linearization, Minkowski-norm illuminant
//! estimation, normalization, per-channel inverse correction, re-encoding
//! to 8-bit display range.
//!
//! This module is organized into submodules:
//! - `linearize`: display-to-linear and linear-to-display conversion
//! - `illuminant`: the Shades-of-Grey estimator and gain application
//! - `parallel`: threshold-dispatched rayon helpers

mod illuminant;
mod linearize;
mod parallel;


// Re-export public items from submodules
pub use illuminant::apply_gains;
pub use linearize::{encode_display, linearize};

pub(crate) use parallel::{parallel_fold_chunks, parallel_for_each_chunk_mut};

use crate::decoders;
use crate::error::{CorrectError, Result};
use crate::models::{CorrectOptions, IlluminantEstimate, ImageBuffer, ImageSource};

/// Minimum number of pixels to trigger parallel processing
pub(crate) const PARALLEL_THRESHOLD: usize = 30_000;

/// Correct an image so it appears captured under a neutral illuminant.
///
/// `source` is either a file path (PNG/JPEG/TIFF) or an in-memory buffer.
/// The corrected image is returned in memory with the input's dimensions;
/// nothing is written to disk.
///
/// # Errors
///
/// Returns `CorrectError` if:
/// - The path cannot be read or decoded (`ImageLoad`, `UnsupportedFormat`)
/// - `options.gamma` is not finite and positive (`InvalidGamma`)
/// - The illuminant estimate has zero norm (`DegenerateIlluminant`)
pub fn correct<S: Into<ImageSource>>(source: S, options: &CorrectOptions) -> Result<ImageBuffer> {
    validate_gamma(options.gamma)?;
    let image = resolve_source(source.into())?;

    let mut linear = linearize(image.data(), options.gamma);
    if options.debug {
        let (min, max, mean) = compute_stats(&linear);
        eprintln!(
            "[DEBUG] linearized - min: {:.6}, max: {:.6}, mean: {:.6}",
            min, max, mean
        );
    }

    let estimate = illuminant::estimate(&linear)?;
    if options.debug {
        eprintln!(
            "[DEBUG] illuminant (RGB): [{:.6}, {:.6}, {:.6}], gains: [{:.6}, {:.6}, {:.6}]",
            estimate.normalized[0],
            estimate.normalized[1],
            estimate.normalized[2],
            estimate.gains[0],
            estimate.gains[1],
            estimate.gains[2]
        );
    }

    apply_gains(&mut linear, estimate.gains);
    let data = encode_display(&linear, options.gamma);

    ImageBuffer::new(image.width(), image.height(), data)
}

/// Estimate the illuminant of an image without applying the correction.
///
/// Runs the same load, linearization, and estimation steps as [`correct`]
/// and returns the estimate instead of a corrected image.
pub fn estimate_illuminant<S: Into<ImageSource>>(
    source: S,
    options: &CorrectOptions,
) -> Result<IlluminantEstimate> {
    validate_gamma(options.gamma)?;
    let image = resolve_source(source.into())?;
    let linear = linearize(image.data(), options.gamma);
    illuminant::estimate(&linear)
}

/// Resolve the input to a decoded buffer.
fn resolve_source(source: ImageSource) -> Result<ImageBuffer> {
    match source {
        ImageSource::Path(path) => decoders::decode_image(path),
        ImageSource::Buffer(image) => Ok(image),
    }
}

/// Reject non-finite or non-positive gamma before any pixel work.
fn validate_gamma(gamma: f32) -> Result<()> {
    if !gamma.is_finite() || gamma <= 0.0 {
        return Err(CorrectError::InvalidGamma { value: gamma });
    }
    Ok(())
}

/// Compute min, max, and mean statistics for debug output
pub fn compute_stats(data: &[f32]) -> (f32, f32, f32) {
    if data.is_empty() {
        return (0.0, 0.0, 0.0);
    }

    let mut min = f32::MAX;
    let mut max = f32::MIN;
    let mut sum = 0.0;

    for &value in data {
        min = min.min(value);
        max = max.max(value);
        sum += value;
    }

    let mean = sum / data.len() as f32;
    (min, max, mean)
}
