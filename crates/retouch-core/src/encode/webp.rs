//! WebP encoding with a quality factor.
//!
//! The `image` crate's WebP encoder is lossless only. Below quality 100 the
//! RGB channels keep only their top few bits, so the lossless stream gets
//! smaller as quality drops. Alpha is never quantized. Every bit depth from
//! the requested one up to 8 is encoded and the smallest stream is kept, so
//! a higher quality never yields a smaller file.

use std::io::Cursor;

use image::codecs::webp::WebPEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::bitmap::{Bitmap, CHANNELS};
use crate::error::RetouchError;

use super::ladder;

/// Bits per RGB channel at quality 100 (no quantization).
const FULL_BITS: u8 = 8;

/// Encode an RGBA bitmap to WebP bytes at the given quality (1-100).
pub(crate) fn encode_webp(bitmap: &Bitmap, quality: u8) -> Result<Vec<u8>, RetouchError> {
    let rungs: Vec<u8> = (bits_for_quality(quality)..=FULL_BITS).collect();

    ladder::smallest_over("WebP", &rungs, |bits| {
        let mut pixels = bitmap.pixels().to_vec();
        quantize_rgb(&mut pixels, bits);
        write_lossless(&pixels, bitmap.width(), bitmap.height())
    })
}

/// Significant bits kept per RGB channel: 1 at quality 1, 8 only at 100.
pub(crate) fn bits_for_quality(quality: u8) -> u8 {
    let quality = quality.clamp(1, 100) as u16;
    1 + ((quality - 1) * 7 / 99) as u8
}

fn write_lossless(rgba: &[u8], width: u32, height: u32) -> Result<Vec<u8>, RetouchError> {
    let mut buffer = Cursor::new(Vec::new());
    let encoder = WebPEncoder::new_lossless(&mut buffer);

    encoder
        .write_image(rgba, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| RetouchError::EncodingFailed {
            format: "WebP",
            message: e.to_string(),
        })?;

    Ok(buffer.into_inner())
}

/// Keep the top `bits` of each RGB channel, spread back over 0-255.
fn quantize_rgb(data: &mut [u8], bits: u8) {
    if bits >= FULL_BITS {
        return;
    }
    let table = level_table(bits);
    for pixel in data.chunks_exact_mut(CHANNELS) {
        for channel in pixel.iter_mut().take(3) {
            *channel = table[*channel as usize];
        }
    }
}

/// Map every input value to the nearest of `2^bits` evenly spaced levels.
fn level_table(bits: u8) -> [u8; 256] {
    let shift = FULL_BITS - bits;
    let top = (1u32 << bits) - 1;
    let mut table = [0u8; 256];
    for (value, slot) in table.iter_mut().enumerate() {
        let level = value as u32 >> shift;
        *slot = ((level * 255 + top / 2) / top) as u8;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> Bitmap {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 5 + y * 3) % 256) as u8);
                pixels.push(((x * 7 + y * 11) % 256) as u8);
                pixels.push(((x * 13 + y * 17) % 256) as u8);
                pixels.push(255);
            }
        }
        Bitmap::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_encode_webp_container() {
        let bytes = encode_webp(&gradient(16, 16), 80).unwrap();
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WEBP");
    }

    #[test]
    fn test_bits_for_quality_endpoints() {
        assert_eq!(bits_for_quality(1), 1);
        assert_eq!(bits_for_quality(50), 4);
        assert_eq!(bits_for_quality(99), 7);
        assert_eq!(bits_for_quality(100), 8);
        // Out of range clamps
        assert_eq!(bits_for_quality(0), 1);
        assert_eq!(bits_for_quality(255), 8);
    }

    #[test]
    fn test_bits_for_quality_non_decreasing() {
        let mut previous = 0;
        for q in 1..=100u8 {
            let bits = bits_for_quality(q);
            assert!(bits >= previous, "bits dropped at quality {}", q);
            previous = bits;
        }
    }

    #[test]
    fn test_quantize_one_bit_is_binary() {
        let mut data = vec![10, 127, 128, 77, 250, 0, 255, 200];
        quantize_rgb(&mut data, 1);
        assert_eq!(data, vec![0, 0, 255, 77, 255, 0, 255, 200]);
    }

    #[test]
    fn test_level_table_keeps_extremes() {
        for bits in 1..FULL_BITS {
            let table = level_table(bits);
            assert_eq!(table[0], 0);
            assert_eq!(table[255], 255);
            assert!(table.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_level_table_distinct_values() {
        let mut levels = level_table(3).to_vec();
        levels.dedup();
        assert_eq!(levels, vec![0, 36, 73, 109, 146, 182, 219, 255]);
    }

    #[test]
    fn test_quality_100_is_lossless() {
        let bitmap = gradient(12, 9);
        let bytes = encode_webp(&bitmap, 100).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().into_rgba8();
        assert_eq!(decoded.as_raw(), bitmap.pixels());
    }

    #[test]
    fn test_alpha_survives_quantization() {
        let mut data = vec![100, 100, 100, 33];
        quantize_rgb(&mut data, 2);
        assert_eq!(data[3], 33);
    }
}
