//! Core types for image decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::BitmapError;
use crate::state::TransformState;

/// Error types for image decoding operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The bytes are not in a format the decoder recognizes.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The caller's media type is not an image type.
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// Decoded dimensions do not form a usable bitmap.
    #[error("Decoded image is not a valid bitmap: {0}")]
    InvalidBitmap(#[from] BitmapError),
}

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    #[default]
    Normal = 1,
    FlipHorizontal = 2,
    Rotate180 = 3,
    FlipVertical = 4,
    /// Rotate 90 CW, then mirror horizontally.
    Transpose = 5,
    Rotate90CW = 6,
    /// Rotate 270 CW, then mirror horizontally.
    Transverse = 7,
    Rotate270CW = 8,
}

impl Orientation {
    /// Returns true if upright display swaps width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            Orientation::Transpose
                | Orientation::Rotate90CW
                | Orientation::Transverse
                | Orientation::Rotate270CW
        )
    }

    /// The geometric edit that makes this orientation upright.
    ///
    /// Rotation runs before mirroring, so this maps directly onto the
    /// engine's own order of operations. Tonal values stay at identity.
    pub fn to_transform_state(self) -> TransformState {
        let (rotation, flip_horizontal, flip_vertical) = match self {
            Orientation::Normal => (0, false, false),
            Orientation::FlipHorizontal => (0, true, false),
            Orientation::Rotate180 => (180, false, false),
            Orientation::FlipVertical => (0, false, true),
            Orientation::Transpose => (90, true, false),
            Orientation::Rotate90CW => (90, false, false),
            Orientation::Transverse => (270, true, false),
            Orientation::Rotate270CW => (270, false, false),
        };
        TransformState {
            rotation,
            flip_horizontal,
            flip_vertical,
            ..TransformState::default()
        }
    }
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}
