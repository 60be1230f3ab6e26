//! JPEG encoding for export.
//!
//! Uses the `image` crate's baseline JPEG encoder. JPEG has no alpha channel,
//! so RGBA pixels are composited onto black first, the same result a browser
//! canvas gives when exporting a transparent image as JPEG.
//!
//! A requested quality snaps up to a rung of [`QUALITY_RUNGS`] and the
//! smallest encode from that rung upward is kept (see `ladder`).

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::bitmap::{Bitmap, CHANNELS};
use crate::error::RetouchError;

use super::ladder;

/// Encoder qualities tried for a request. A request runs from the lowest
/// rung at or above its quality up to 100.
pub(crate) const QUALITY_RUNGS: [u8; 12] = [1, 10, 20, 30, 40, 50, 60, 70, 80, 90, 95, 100];

/// Encode an RGBA bitmap to JPEG bytes.
///
/// # Arguments
///
/// * `bitmap` - Source bitmap
/// * `quality` - JPEG quality (1-100, where 100 is highest quality)
///
/// # Quality Guidelines
///
/// * 90-100: High quality, suitable for archival or further editing
/// * 80-90: Good quality, recommended for most uses
/// * 60-80: Medium quality, acceptable for web/social media
/// * Below 60: Low quality, visible artifacts
pub(crate) fn encode_jpeg(bitmap: &Bitmap, quality: u8) -> Result<Vec<u8>, RetouchError> {
    let rgb = flatten_onto_black(bitmap.pixels());
    let start = ladder::rung_index(&QUALITY_RUNGS, quality.clamp(1, 100));

    ladder::smallest_over("JPEG", &QUALITY_RUNGS[start..], |rung| {
        write_jpeg(&rgb, bitmap.width(), bitmap.height(), rung)
    })
}

/// One baseline JPEG encode of packed RGB at a single encoder quality.
fn write_jpeg(rgb: &[u8], width: u32, height: u32, quality: u8) -> Result<Vec<u8>, RetouchError> {
    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);

    encoder
        .write_image(rgb, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| RetouchError::EncodingFailed {
            format: "JPEG",
            message: e.to_string(),
        })?;

    Ok(buffer.into_inner())
}

/// Drop alpha by compositing each pixel over black.
fn flatten_onto_black(rgba: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba.len() / CHANNELS * 3);
    for px in rgba.chunks_exact(CHANNELS) {
        let alpha = px[3] as u16;
        if alpha == 255 {
            rgb.extend_from_slice(&px[..3]);
        } else {
            for &c in &px[..3] {
                rgb.push(((c as u16 * alpha + 127) / 255) as u8);
            }
        }
    }
    rgb
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Encoding always produces valid JPEG markers.
        #[test]
        fn prop_valid_input_produces_valid_jpeg(
            (width, height) in (1u32..=50, 1u32..=50),
            quality in 1u8..=100,
        ) {
            let bitmap = Bitmap::filled(width, height, [128, 128, 128, 255]).unwrap();
            let jpeg_bytes = encode_jpeg(&bitmap, quality).unwrap();

            prop_assert_eq!(&jpeg_bytes[0..2], &[0xFF, 0xD8], "Should have SOI marker");
            let len = jpeg_bytes.len();
            prop_assert!(len >= 4, "JPEG should have at least 4 bytes");
            prop_assert_eq!(&jpeg_bytes[len - 2..], &[0xFF, 0xD9], "Should have EOI marker");
        }

        /// Property: Same input always produces same output (deterministic).
        #[test]
        fn prop_deterministic_output(
            (width, height) in (1u32..=20, 1u32..=20),
            quality in 1u8..=100,
        ) {
            let bitmap = Bitmap::filled(width, height, [100, 150, 200, 255]).unwrap();
            let first = encode_jpeg(&bitmap, quality).unwrap();
            let second = encode_jpeg(&bitmap, quality).unwrap();
            prop_assert_eq!(first, second, "Same input should produce same output");
        }
    }
}
