//! TIFF image decoder

use std::path::Path;

use super::{expand_gray8, scale_16_to_8};
use crate::error::{CorrectError, Result};
use crate::models::ImageBuffer;

/// Decode a TIFF file
pub(crate) fn decode_tiff(path: &Path) -> Result<ImageBuffer> {
    use std::fs::File;
    use std::io::BufReader;

    let file = File::open(path)
        .map_err(|e| CorrectError::load(path, format!("failed to open TIFF file: {}", e)))?;
    let mut decoder = tiff::decoder::Decoder::new(BufReader::new(file))
        .map_err(|e| CorrectError::load(path, format!("failed to create TIFF decoder: {}", e)))?;

    let (width, height) = decoder
        .dimensions()
        .map_err(|e| CorrectError::load(path, format!("failed to get TIFF dimensions: {}", e)))?;
    let color_type = decoder
        .colortype()
        .map_err(|e| CorrectError::load(path, format!("failed to get TIFF color type: {}", e)))?;
    let image_data = decoder
        .read_image()
        .map_err(|e| CorrectError::load(path, format!("failed to read TIFF image data: {}", e)))?;

    let channels = match color_type {
        tiff::ColorType::Gray(_) => 1,
        tiff::ColorType::RGB(_) => 3,
        tiff::ColorType::RGBA(_) => 4,
        other => {
            return Err(CorrectError::load(
                path,
                format!("unsupported TIFF color type: {:?}", other),
            ));
        }
    };

    let data = match image_data {
        tiff::decoder::DecodingResult::U8(buf) => interleave_to_rgb8(&buf, channels),
        tiff::decoder::DecodingResult::U16(buf) => {
            let narrowed: Vec<u8> = buf.iter().map(|&v| scale_16_to_8(v)).collect();
            interleave_to_rgb8(&narrowed, channels)
        }
        _ => {
            return Err(CorrectError::load(
                path,
                "unsupported TIFF sample format (expected 8- or 16-bit unsigned)",
            ));
        }
    };

    ImageBuffer::new(width, height, data)
}

/// Normalize a channel layout to interleaved RGB.
fn interleave_to_rgb8(samples: &[u8], channels: usize) -> Vec<u8> {
    match channels {
        1 => expand_gray8(samples),
        3 => samples.to_vec(),
        // RGBA (or wider): keep the first three channels of each pixel
        _ => samples
            .chunks_exact(channels)
            .flat_map(|pixel| [pixel[0], pixel[1], pixel[2]])
            .collect(),
    }
}
