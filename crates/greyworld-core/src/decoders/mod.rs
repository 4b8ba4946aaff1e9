//! Image decoders for various formats
//!
//! PNG, JPEG, and TIFF input, normalized to interleaved 8-bit RGB.

mod jpeg;
mod png;
mod tiff;

#[cfg(test)]
mod tests;

use std::path::Path;

use crate::error::{CorrectError, Result};
use crate::models::ImageBuffer;

/// Decode an image from a file path.
///
/// Dispatches on the lowercased file extension. All decoders produce
/// interleaved 8-bit RGB: grayscale sources are replicated across channels,
/// alpha is dropped, and 16-bit samples are scaled to 8-bit.
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<ImageBuffer> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| CorrectError::UnsupportedFormat {
            extension: String::new(),
        })?;

    let image = match extension.as_str() {
        "png" => png::decode_png(path)?,
        "jpg" | "jpeg" => jpeg::decode_jpeg(path)?,
        "tif" | "tiff" => tiff::decode_tiff(path)?,
        _ => return Err(CorrectError::UnsupportedFormat { extension }),
    };

    crate::verbose_println!(
        "[greyworld] Decoded {}: {}x{}",
        path.display(),
        image.width(),
        image.height()
    );

    Ok(image)
}

/// Replicate single-channel samples to interleaved RGB.
pub(crate) fn expand_gray8(gray: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(gray.len() * 3);
    for &value in gray {
        rgb.push(value);
        rgb.push(value);
        rgb.push(value);
    }
    rgb
}

/// Scale a 16-bit sample to 8-bit with rounding. 65535 maps to 255 exactly.
pub(crate) fn scale_16_to_8(value: u16) -> u8 {
    ((value as u32 * 255 + 32767) / 65535) as u8
}
