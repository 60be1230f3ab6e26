//! Decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{ImageError, ImageReader};

use super::{DecodeError, Orientation};
use crate::bitmap::Bitmap;
use crate::transform::{apply_rotation, flip_horizontal, flip_vertical, QuarterTurn};

/// Decode JPEG, PNG or WebP bytes into an upright RGBA bitmap.
///
/// The EXIF orientation tag, when present, is baked into the pixels so the
/// result matches what a browser displays.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not a supported image.
/// Returns `DecodeError::CorruptedFile` if the image data is damaged.
pub fn decode_image(bytes: &[u8]) -> Result<Bitmap, DecodeError> {
    let orientation = extract_orientation(bytes);
    let bitmap = decode_image_no_orientation(bytes)?;
    Ok(apply_orientation(bitmap, orientation))
}

/// Like [`decode_image`], after checking the caller's media type.
///
/// Only `image/*` types pass, so a PDF picked in a file dialog is rejected
/// before any decoding work.
pub fn decode_with_media_type(bytes: &[u8], media_type: &str) -> Result<Bitmap, DecodeError> {
    if !is_image_media_type(media_type) {
        return Err(DecodeError::UnsupportedMediaType(media_type.to_string()));
    }
    decode_image(bytes)
}

/// Decode without applying EXIF orientation.
pub fn decode_image_no_orientation(bytes: &[u8]) -> Result<Bitmap, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader.decode().map_err(|e| match e {
        ImageError::Unsupported(_) => DecodeError::InvalidFormat,
        other => DecodeError::CorruptedFile(other.to_string()),
    })?;

    Ok(Bitmap::from_rgba_image(img.into_rgba8())?)
}

/// Whether a MIME type names an image, e.g. `image/png`.
pub fn is_image_media_type(media_type: &str) -> bool {
    let media_type = media_type.trim().to_ascii_lowercase();
    match media_type.strip_prefix("image/") {
        Some(subtype) => !subtype.is_empty(),
        None => false,
    }
}

/// Extract the EXIF orientation (for external use).
///
/// Returns `Orientation::Normal` when there is no EXIF block or no tag.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    extract_orientation(bytes)
}

fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    let Ok(exif) = Reader::new().read_from_container(&mut cursor) else {
        return Orientation::Normal;
    };

    exif.get_field(Tag::Orientation, In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .map(Orientation::from)
        .unwrap_or_default()
}

/// Bake an orientation using the engine's own permutations.
fn apply_orientation(bitmap: Bitmap, orientation: Orientation) -> Bitmap {
    if orientation == Orientation::Normal {
        return bitmap;
    }

    let state = orientation.to_transform_state();
    let turn = QuarterTurn::from_degrees(state.rotation).unwrap_or(QuarterTurn::None);
    let mut upright = if turn == QuarterTurn::None {
        bitmap
    } else {
        apply_rotation(&bitmap, turn)
    };

    if state.flip_horizontal {
        flip_horizontal(&mut upright);
    }
    if state.flip_vertical {
        flip_vertical(&mut upright);
    }

    tracing::debug!(
        "applied EXIF orientation {:?}: {}x{}",
        orientation,
        upright.width(),
        upright.height()
    );
    upright
}
