//! PNG image decoder

use std::path::Path;

use super::{expand_gray8, scale_16_to_8};
use crate::error::{CorrectError, Result};
use crate::models::ImageBuffer;

/// Decode a PNG file
pub(crate) fn decode_png(path: &Path) -> Result<ImageBuffer> {
    use std::fs::File;
    use std::io::BufReader;

    let file = File::open(path)
        .map_err(|e| CorrectError::load(path, format!("failed to open PNG file: {}", e)))?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .map_err(|e| CorrectError::load(path, format!("failed to read PNG info: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    // Allocate buffer for image data
    let buffer_size = reader
        .output_buffer_size()
        .ok_or_else(|| CorrectError::load(path, "failed to determine PNG buffer size"))?;
    let mut buf = vec![0u8; buffer_size];
    let frame_info = reader
        .next_frame(&mut buf)
        .map_err(|e| CorrectError::load(path, format!("failed to read PNG frame: {}", e)))?;

    // Get the actual bytes used
    let bytes = &buf[..frame_info.buffer_size()];

    // Convert to interleaved 8-bit RGB
    let data = match (color_type, bit_depth) {
        (png::ColorType::Grayscale, png::BitDepth::Eight) => expand_gray8(bytes),
        (png::ColorType::Grayscale, png::BitDepth::Sixteen) => expand_gray16(bytes),
        (png::ColorType::Rgb, png::BitDepth::Eight) => bytes.to_vec(),
        (png::ColorType::Rgb, png::BitDepth::Sixteen) => narrow_rgb16(bytes),
        (png::ColorType::Rgba, png::BitDepth::Eight) => drop_alpha8(bytes),
        (png::ColorType::Rgba, png::BitDepth::Sixteen) => narrow_rgba16(bytes),
        _ => {
            return Err(CorrectError::load(
                path,
                format!(
                    "unsupported PNG format: {:?} with bit depth {:?}",
                    color_type, bit_depth
                ),
            ));
        }
    };

    ImageBuffer::new(width, height, data)
}

/// Expand 16-bit grayscale to 8-bit RGB. PNG 16-bit is big-endian.
fn expand_gray16(bytes: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(bytes.len() / 2 * 3);
    for chunk in bytes.chunks_exact(2) {
        let value = scale_16_to_8(u16::from_be_bytes([chunk[0], chunk[1]]));
        rgb.push(value);
        rgb.push(value);
        rgb.push(value);
    }
    rgb
}

/// Narrow 16-bit RGB to 8-bit
fn narrow_rgb16(bytes: &[u8]) -> Vec<u8> {
    bytes
        .chunks_exact(2)
        .map(|chunk| scale_16_to_8(u16::from_be_bytes([chunk[0], chunk[1]])))
        .collect()
}

/// Drop alpha from 8-bit RGBA
fn drop_alpha8(bytes: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(bytes.len() / 4 * 3);
    for rgba in bytes.chunks_exact(4) {
        rgb.push(rgba[0]);
        rgb.push(rgba[1]);
        rgb.push(rgba[2]);
    }
    rgb
}

/// Narrow 16-bit RGBA to 8-bit RGB, dropping alpha
fn narrow_rgba16(bytes: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(bytes.len() / 8 * 3);
    for rgba in bytes.chunks_exact(8) {
        rgb.push(scale_16_to_8(u16::from_be_bytes([rgba[0], rgba[1]])));
        rgb.push(scale_16_to_8(u16::from_be_bytes([rgba[2], rgba[3]])));
        rgb.push(scale_16_to_8(u16::from_be_bytes([rgba[4], rgba[5]])));
        // Alpha at rgba[6], rgba[7] is dropped
    }
    rgb
}
