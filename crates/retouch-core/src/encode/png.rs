//! Lossless PNG encoding.
//!
//! Output size depends only on pixel content: compression level and filter
//! are fixed, so there is no quality knob.

use std::io::Cursor;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};

use crate::bitmap::Bitmap;
use crate::error::RetouchError;

/// Encode an RGBA bitmap to PNG bytes, preserving alpha.
pub(crate) fn encode_png(bitmap: &Bitmap) -> Result<Vec<u8>, RetouchError> {
    let mut buffer = Cursor::new(Vec::new());
    let encoder =
        PngEncoder::new_with_quality(&mut buffer, CompressionType::Best, FilterType::Adaptive);

    encoder
        .write_image(
            bitmap.pixels(),
            bitmap.width(),
            bitmap.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| RetouchError::EncodingFailed {
            format: "PNG",
            message: e.to_string(),
        })?;

    Ok(buffer.into_inner())
}
