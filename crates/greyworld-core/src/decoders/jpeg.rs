//! JPEG image decoder

use std::path::Path;

use super::expand_gray8;
use crate::error::{CorrectError, Result};
use crate::models::ImageBuffer;

/// Decode a JPEG file
pub(crate) fn decode_jpeg(path: &Path) -> Result<ImageBuffer> {
    use std::fs::File;
    use std::io::BufReader;

    use jpeg_decoder::PixelFormat;

    let file = File::open(path)
        .map_err(|e| CorrectError::load(path, format!("failed to open JPEG file: {}", e)))?;
    let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(file));

    let pixels = decoder
        .decode()
        .map_err(|e| CorrectError::load(path, format!("failed to decode JPEG: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| CorrectError::load(path, "missing JPEG metadata after decode"))?;

    let width = info.width as u32;
    let height = info.height as u32;

    let data = match info.pixel_format {
        PixelFormat::RGB24 => pixels,
        PixelFormat::L8 => expand_gray8(&pixels),
        other => {
            return Err(CorrectError::load(
                path,
                format!("unsupported JPEG pixel format: {:?}", other),
            ));
        }
    };

    ImageBuffer::new(width, height, data)
}
