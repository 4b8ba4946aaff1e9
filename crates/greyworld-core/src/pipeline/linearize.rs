//! Display-to-linear and linear-to-display conversion

use rayon::prelude::*;

use super::PARALLEL_THRESHOLD;

/// Convert display-encoded 8-bit samples to linear light.
///
/// Each sample `s` maps to `(s / 255)^gamma` in [0, 1]. A 256-entry lookup
/// table covers every possible input sample, so the per-sample work is a
/// single indexed read.
pub fn linearize(data: &[u8], gamma: f32) -> Vec<f32> {
    let mut table = [0.0f32; 256];
    for (i, entry) in table.iter_mut().enumerate() {
        *entry = (i as f32 / 255.0).powf(gamma);
    }

    if data.len() / 3 >= PARALLEL_THRESHOLD {
        data.par_iter().map(|&s| table[s as usize]).collect()
    } else {
        data.iter().map(|&s| table[s as usize]).collect()
    }
}

/// Convert linear samples back to display-encoded 8-bit values.
///
/// Applies forward gamma (`v^(1/gamma)`), scales to [0, 255], rounds, and
/// clamps. Correction gains can push linear values above 1.0; those clip
/// to 255 here.
pub fn encode_display(data: &[f32], gamma: f32) -> Vec<u8> {
    let inv_gamma = 1.0 / gamma;
    let encode = |v: f32| -> u8 {
        let display = v.max(0.0).powf(inv_gamma) * 255.0;
        display.round().clamp(0.0, 255.0) as u8
    };

    if data.len() / 3 >= PARALLEL_THRESHOLD {
        data.par_iter().map(|&v| encode(v)).collect()
    } else {
        data.iter().map(|&v| encode(v)).collect()
    }
}
