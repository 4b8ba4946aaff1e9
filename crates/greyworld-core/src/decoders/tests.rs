//! Tests for image decoders

use tempfile::tempdir;

use super::*;
use crate::exporters::export_png8;

fn gradient_image(width: u32, height: u32) -> ImageBuffer {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            data.push((x * 17 % 256) as u8);
            data.push((y * 31 % 256) as u8);
            data.push(((x + y) * 13 % 256) as u8);
        }
    }
    ImageBuffer::new(width, height, data).unwrap()
}

#[test]
fn test_decode_png_round_trip() {
    let image = gradient_image(12, 9);
    let dir = tempdir().unwrap();
    let path = dir.path().join("gradient.png");

    export_png8(&image, &path).unwrap();
    let decoded = decode_image(&path).unwrap();

    assert_eq!(decoded.width(), image.width());
    assert_eq!(decoded.height(), image.height());
    assert_eq!(decoded.data(), image.data(), "PNG decode must be lossless");
}

#[test]
fn test_decode_missing_file() {
    let result = decode_image("no_such_file.png");
    assert!(matches!(result, Err(CorrectError::ImageLoad { .. })));
}

#[test]
fn test_decode_unsupported_extension() {
    let result = decode_image("image.bmp");
    match result {
        Err(CorrectError::UnsupportedFormat { extension }) => {
            assert_eq!(extension, "bmp");
        }
        other => panic!("Expected UnsupportedFormat, got {:?}", other),
    }
}

#[test]
fn test_decode_no_extension() {
    let result = decode_image("image");
    assert!(matches!(
        result,
        Err(CorrectError::UnsupportedFormat { .. })
    ));
}

#[test]
fn test_decode_undecodable_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("not_really.png");
    std::fs::write(&path, b"this is not a PNG").unwrap();

    let result = decode_image(&path);
    assert!(matches!(result, Err(CorrectError::ImageLoad { .. })));
}

#[test]
fn test_expand_gray8_replicates_channels() {
    let rgb = expand_gray8(&[0, 128, 255]);
    assert_eq!(rgb, vec![0, 0, 0, 128, 128, 128, 255, 255, 255]);
}

#[test]
fn test_scale_16_to_8_endpoints() {
    assert_eq!(scale_16_to_8(0), 0);
    assert_eq!(scale_16_to_8(65535), 255);
    // 8-bit value v widened to 16-bit as v * 257 comes back unchanged
    assert_eq!(scale_16_to_8(128 * 257), 128);
    assert_eq!(scale_16_to_8(257), 1);
}
