//! Quarter-turn rotation.
//!
//! A rotation by a multiple of 90 degrees is a fixed permutation of pixels,
//! not an angular resample, so no interpolation is involved and the result
//! is exact.
//!
//! # Mapping
//!
//! For a `w x h` source and clockwise rotation, each destination pixel reads:
//! ```text
//!  90:  dst(x, y) = src(y,         h - 1 - x)   output is h x w
//! 180:  dst(x, y) = src(w - 1 - x, h - 1 - y)   output is w x h
//! 270:  dst(x, y) = src(w - 1 - y, x        )   output is h x w
//! ```

use serde::{Deserialize, Serialize};

use crate::bitmap::{Bitmap, CHANNELS};
use crate::error::RetouchError;
use crate::state::normalize_degrees;

/// A clockwise rotation by a multiple of 90 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuarterTurn {
    /// No rotation.
    #[default]
    None,
    /// 90 degrees clockwise.
    Cw90,
    /// 180 degrees.
    Half,
    /// 270 degrees clockwise (90 counter-clockwise).
    Cw270,
}

impl QuarterTurn {
    /// Convert degrees to a quarter turn, normalizing via modulo 360.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedRotation` with the normalized value if it is not a
    /// multiple of 90.
    pub fn from_degrees(degrees: i32) -> Result<Self, RetouchError> {
        match normalize_degrees(degrees) {
            0 => Ok(QuarterTurn::None),
            90 => Ok(QuarterTurn::Cw90),
            180 => Ok(QuarterTurn::Half),
            270 => Ok(QuarterTurn::Cw270),
            other => Err(RetouchError::UnsupportedRotation(other)),
        }
    }

    /// The rotation in degrees (0, 90, 180 or 270).
    pub fn degrees(self) -> i32 {
        match self {
            QuarterTurn::None => 0,
            QuarterTurn::Cw90 => 90,
            QuarterTurn::Half => 180,
            QuarterTurn::Cw270 => 270,
        }
    }

    /// Returns true if the output canvas has width and height swapped.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, QuarterTurn::Cw90 | QuarterTurn::Cw270)
    }

    /// Dimensions of the canvas after this rotation.
    pub fn rotated_dimensions(self, width: u32, height: u32) -> (u32, u32) {
        if self.swaps_dimensions() {
            (height, width)
        } else {
            (width, height)
        }
    }
}

/// Rotate a bitmap clockwise by a quarter turn.
///
/// The output canvas is allocated at the rotated dimensions before any pixel
/// is written; for 90 and 270 degrees width and height are swapped.
///
/// # Example
///
/// ```ignore
/// use retouch_core::transform::{apply_rotation, QuarterTurn};
///
/// let rotated = apply_rotation(&bitmap, QuarterTurn::Cw90);
/// assert_eq!(rotated.width(), bitmap.height());
/// ```
pub fn apply_rotation(bitmap: &Bitmap, turn: QuarterTurn) -> Bitmap {
    let (src_w, src_h) = (bitmap.width() as usize, bitmap.height() as usize);
    let src = bitmap.pixels();

    match turn {
        QuarterTurn::None => bitmap.clone(),
        QuarterTurn::Half => {
            // Reversing pixel order is a point reflection through the center
            let mut output = Vec::with_capacity(src.len());
            for px in src.chunks_exact(CHANNELS).rev() {
                output.extend_from_slice(px);
            }
            Bitmap::from_raw_parts(bitmap.width(), bitmap.height(), output)
        }
        QuarterTurn::Cw90 | QuarterTurn::Cw270 => {
            let (dst_w, dst_h) = turn.rotated_dimensions(bitmap.width(), bitmap.height());
            let mut output = vec![0u8; src.len()];

            for dst_y in 0..dst_h as usize {
                for dst_x in 0..dst_w as usize {
                    let (src_x, src_y) = if turn == QuarterTurn::Cw90 {
                        (dst_y, src_h - 1 - dst_x)
                    } else {
                        (src_w - 1 - dst_y, dst_x)
                    };

                    let src_idx = (src_y * src_w + src_x) * CHANNELS;
                    let dst_idx = (dst_y * dst_w as usize + dst_x) * CHANNELS;
                    output[dst_idx..dst_idx + CHANNELS]
                        .copy_from_slice(&src[src_idx..src_idx + CHANNELS]);
                }
            }

            Bitmap::from_raw_parts(dst_w, dst_h, output)
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
