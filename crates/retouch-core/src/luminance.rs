//! Luma weighting using ITU-R BT.601 coefficients.
//!
//! These are the weights the saturation filter blends toward when it
//! desaturates a pixel.

/// ITU-R BT.601 coefficient for the red channel.
pub const LUMA_R: f32 = 0.299;

/// ITU-R BT.601 coefficient for the green channel.
pub const LUMA_G: f32 = 0.587;

/// ITU-R BT.601 coefficient for the blue channel.
pub const LUMA_B: f32 = 0.114;

/// Luma-weighted gray value of an RGB triple on the 0-255 scale.
#[inline]
pub fn luma(r: f32, g: f32, b: f32) -> f32 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}
