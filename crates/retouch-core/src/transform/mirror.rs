//! In-place mirroring along the displayed axes.

use crate::bitmap::{Bitmap, CHANNELS};

/// Reverse column order in every row.
pub fn flip_horizontal(bitmap: &mut Bitmap) {
    let width = bitmap.width() as usize;
    let stride = bitmap.stride();

    for row in bitmap.pixels_mut().chunks_exact_mut(stride) {
        for x in 0..width / 2 {
            let left = x * CHANNELS;
            let right = (width - 1 - x) * CHANNELS;
            let (head, tail) = row.split_at_mut(right);
            head[left..left + CHANNELS].swap_with_slice(&mut tail[..CHANNELS]);
        }
    }
}

/// Reverse row order.
pub fn flip_vertical(bitmap: &mut Bitmap) {
    let height = bitmap.height() as usize;
    let stride = bitmap.stride();
    let pixels = bitmap.pixels_mut();

    for y in 0..height / 2 {
        let bottom = (height - 1 - y) * stride;
        let (head, tail) = pixels.split_at_mut(bottom);
        head[y * stride..(y + 1) * stride].swap_with_slice(&mut tail[..stride]);
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
