//! Image exporters
//!
//! Write corrected images to disk. Persistence is the caller's step; the
//! pipeline itself never writes anything.

use std::path::Path;

use crate::error::{CorrectError, Result};
use crate::models::ImageBuffer;

/// Export an image as an 8-bit RGB PNG.
pub fn export_png8<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> Result<()> {
    use std::fs::File;
    use std::io::BufWriter;

    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| CorrectError::save(path, format!("failed to create PNG file: {}", e)))?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| CorrectError::save(path, format!("failed to write PNG header: {}", e)))?;
    png_writer
        .write_image_data(image.data())
        .map_err(|e| CorrectError::save(path, format!("failed to write PNG data: {}", e)))?;

    crate::verbose_println!("[greyworld] Saved {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_export_png8_writes_file() {
        let image = ImageBuffer::new(5, 4, vec![100u8; 60]).unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.png");

        let result = export_png8(&image, &path);

        assert!(result.is_ok(), "PNG export should succeed: {:?}", result);
        assert!(path.exists(), "PNG file should exist");
        let metadata = fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0, "PNG file should not be empty");
    }

    #[test]
    fn test_export_png8_invalid_path() {
        let image = ImageBuffer::new(2, 2, vec![0u8; 12]).unwrap();
        let result = export_png8(&image, "/nonexistent/directory/out.png");

        assert!(matches!(result, Err(CorrectError::ImageSave { .. })));
    }
}
