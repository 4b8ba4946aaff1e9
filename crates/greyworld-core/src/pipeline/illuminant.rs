//! Minkowski-norm illuminant estimation and per-channel correction
//!
//! Shades-of-Grey estimator: the per-channel Minkowski mean (p = 3) of the
//! linearized image is taken as the color of the scene illuminant. The
//! correction divides each channel by its normalized illuminant component
//! relative to the equal-energy reference, so a balanced illuminant leaves
//! the image untouched.

use crate::config::MINKOWSKI_P;
use crate::error::{CorrectError, Result};
use crate::models::IlluminantEstimate;

use super::{parallel_fold_chunks, parallel_for_each_chunk_mut};

/// Estimate the illuminant of a linearized RGB image.
///
/// Per channel: `e_c = ((1/N) * sum(v_c^p))^(1/p)` with p = 3 — the
/// mean-power formulation, normalized by pixel count. Accumulation is in
/// f64 with partials combined in chunk order, so the result does not depend
/// on thread scheduling.
///
/// # Errors
///
/// Returns `DegenerateIlluminant` when the estimate has zero norm (an
/// all-black or empty image); the correction would otherwise divide by zero.
pub fn estimate(linear: &[f32]) -> Result<IlluminantEstimate> {
    let num_pixels = linear.len() / 3;
    if num_pixels == 0 {
        return Err(CorrectError::DegenerateIlluminant);
    }

    let (r_sum, g_sum, b_sum) = parallel_fold_chunks(
        linear,
        3,
        || (0.0f64, 0.0f64, 0.0f64),
        |acc, pixel| {
            (
                acc.0 + (pixel[0] as f64).powi(MINKOWSKI_P),
                acc.1 + (pixel[1] as f64).powi(MINKOWSKI_P),
                acc.2 + (pixel[2] as f64).powi(MINKOWSKI_P),
            )
        },
        |a, b| (a.0 + b.0, a.1 + b.1, a.2 + b.2),
    );

    let n = num_pixels as f64;
    let root = 1.0 / MINKOWSKI_P as f64;
    let raw = [
        (r_sum / n).powf(root),
        (g_sum / n).powf(root),
        (b_sum / n).powf(root),
    ];

    let norm = (raw[0] * raw[0] + raw[1] * raw[1] + raw[2] * raw[2]).sqrt();
    if norm == 0.0 {
        return Err(CorrectError::DegenerateIlluminant);
    }

    let normalized = [raw[0] / norm, raw[1] / norm, raw[2] / norm];

    // Gains target the equal-energy illuminant (1/sqrt(3) per channel), so a
    // balanced estimate yields unit gains. A zero component means the channel
    // carries no signal anywhere; it passes through unchanged.
    let sqrt3 = 3.0f64.sqrt();
    let gain = |component: f64| -> f64 {
        if component > 0.0 {
            1.0 / (sqrt3 * component)
        } else {
            1.0
        }
    };
    let gains = [gain(normalized[0]), gain(normalized[1]), gain(normalized[2])];

    Ok(IlluminantEstimate {
        raw: raw.map(|v| v as f32),
        normalized: normalized.map(|v| v as f32),
        gains: gains.map(|v| v as f32),
    })
}

/// Multiply each channel of a linear RGB image by its correction gain.
pub fn apply_gains(data: &mut [f32], gains: [f32; 3]) {
    parallel_for_each_chunk_mut(data, 3, |pixel| {
        pixel[0] *= gains[0];
        pixel[1] *= gains[1];
        pixel[2] *= gains[2];
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_balanced_input_has_unit_gains() {
        // Equal channels at every pixel: the estimate is balanced and the
        // correction must be a no-op.
        let linear = vec![0.2, 0.2, 0.2, 0.7, 0.7, 0.7];
        let est = estimate(&linear).unwrap();

        for c in 0..3 {
            assert!(
                (est.gains[c] - 1.0).abs() < 1e-6,
                "gain[{}] = {}",
                c,
                est.gains[c]
            );
        }

        // Normalized vector has unit Euclidean norm
        let norm_sq: f32 = est.normalized.iter().map(|v| v * v).sum();
        assert!((norm_sq - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_estimate_mean_power_formulation() {
        // Single pixel (0.5, 1.0, 0.0): e = ((v^3)/1)^(1/3) = v per channel.
        let linear = vec![0.5, 1.0, 0.0];
        let est = estimate(&linear).unwrap();

        assert!((est.raw[0] - 0.5).abs() < 1e-6);
        assert!((est.raw[1] - 1.0).abs() < 1e-6);
        assert!((est.raw[2] - 0.0).abs() < 1e-6);

        // Two pixels with red 1.0 and 0.0: mean-power gives (1/2)^(1/3),
        // not the raw-sum 1.0.
        let linear = vec![1.0, 0.5, 0.5, 0.0, 0.5, 0.5];
        let est = estimate(&linear).unwrap();
        let expected = 0.5f64.powf(1.0 / 3.0) as f32;
        assert!(
            (est.raw[0] - expected).abs() < 1e-6,
            "raw[0] = {}, expected {}",
            est.raw[0],
            expected
        );
    }

    #[test]
    fn test_estimate_all_black_is_degenerate() {
        let linear = vec![0.0; 30];
        let result = estimate(&linear);
        assert!(matches!(result, Err(CorrectError::DegenerateIlluminant)));
    }

    #[test]
    fn test_estimate_empty_is_degenerate() {
        let result = estimate(&[]);
        assert!(matches!(result, Err(CorrectError::DegenerateIlluminant)));
    }

    #[test]
    fn test_estimate_zero_channel_passes_through() {
        // Red channel has no signal anywhere: its gain must stay 1.0.
        let linear = vec![0.0, 0.6, 0.3, 0.0, 0.4, 0.5];
        let est = estimate(&linear).unwrap();

        assert_eq!(est.raw[0], 0.0);
        assert_eq!(est.normalized[0], 0.0);
        assert!((est.gains[0] - 1.0).abs() < 1e-7);
        assert!(est.gains[1] > 0.0);
        assert!(est.gains[2] > 0.0);
    }

    #[test]
    fn test_estimate_never_produces_nan() {
        let linear = vec![0.0, 0.5, 0.0, 0.0, 0.25, 0.0];
        let est = estimate(&linear).unwrap();
        for c in 0..3 {
            assert!(est.raw[c].is_finite());
            assert!(est.normalized[c].is_finite());
            assert!(est.gains[c].is_finite());
        }
    }

    #[test]
    fn test_apply_gains_per_channel() {
        let mut data = vec![0.5, 0.5, 0.5, 0.1, 0.2, 0.3];
        apply_gains(&mut data, [2.0, 1.0, 0.5]);

        assert!((data[0] - 1.0).abs() < 1e-6);
        assert!((data[1] - 0.5).abs() < 1e-6);
        assert!((data[2] - 0.25).abs() < 1e-6);
        assert!((data[3] - 0.2).abs() < 1e-6);
        assert!((data[4] - 0.2).abs() < 1e-6);
        assert!((data[5] - 0.15).abs() < 1e-6);
    }
}
