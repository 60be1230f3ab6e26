//! Tonal adjustment algorithms
//!
//! Applies brightness, contrast and saturation to RGBA pixel data in a single
//! pass. Alpha is never touched.
//!
//! ## Adjustment Order
//! 1. Brightness
//! 2. Contrast
//! 3. Saturation
//!
//! Every stage clamps to [0, 255] before handing its result to the next, so
//! the order is part of the output contract. Rounding to u8 happens once, at
//! the end.

use crate::bitmap::CHANNELS;
use crate::luminance::luma;
use crate::state::{TransformState, TONAL_IDENTITY};

/// Per-pixel multipliers derived from the percentage sliders.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ToneFactors {
    brightness: f32,
    contrast: f32,
    saturation: f32,
}

impl ToneFactors {
    fn from_state(state: &TransformState) -> Self {
        Self {
            brightness: state.brightness / TONAL_IDENTITY,
            contrast: state.contrast / TONAL_IDENTITY,
            saturation: state.saturation / TONAL_IDENTITY,
        }
    }
}

/// Apply the tonal part of a `TransformState` to RGBA pixels in place.
///
/// # Arguments
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `state` - Edit state; only brightness, contrast and saturation are read
///
/// # Example
/// ```ignore
/// use retouch_core::{adjustments::apply_tonal_adjustments, TransformState};
///
/// let mut pixels = vec![100, 100, 100, 255];
/// let mut state = TransformState::default();
/// state.set_brightness(150.0).unwrap();
///
/// apply_tonal_adjustments(&mut pixels, &state);
/// assert_eq!(pixels, vec![150, 150, 150, 255]);
/// ```
pub fn apply_tonal_adjustments(pixels: &mut [u8], state: &TransformState) {
    // Early exit if no adjustments
    if state.is_tonal_identity() {
        return;
    }

    let factors = ToneFactors::from_state(state);

    for chunk in pixels.chunks_exact_mut(CHANNELS) {
        let mut r = chunk[0] as f32;
        let mut g = chunk[1] as f32;
        let mut b = chunk[2] as f32;

        (r, g, b) = apply_brightness(r, g, b, factors.brightness);
        (r, g, b) = apply_contrast(r, g, b, factors.contrast);
        (r, g, b) = apply_saturation(r, g, b, factors.saturation);

        chunk[0] = to_u8(r);
        chunk[1] = to_u8(g);
        chunk[2] = to_u8(b);
    }
}

#[inline]
fn clamp_channel(v: f32) -> f32 {
    v.clamp(0.0, 255.0)
}

#[inline]
fn to_u8(v: f32) -> u8 {
    clamp_channel(v).round() as u8
}

/// Apply brightness.
///
/// Formula: `output = input * factor`
#[inline]
fn apply_brightness(r: f32, g: f32, b: f32, factor: f32) -> (f32, f32, f32) {
    if factor == 1.0 {
        return (r, g, b);
    }
    (
        clamp_channel(r * factor),
        clamp_channel(g * factor),
        clamp_channel(b * factor),
    )
}

/// Apply contrast around the 128 midpoint.
///
/// Formula: `output = 128 + (input - 128) * factor`
#[inline]
fn apply_contrast(r: f32, g: f32, b: f32, factor: f32) -> (f32, f32, f32) {
    if factor == 1.0 {
        return (r, g, b);
    }
    let midpoint = 128.0;
    (
        clamp_channel(midpoint + (r - midpoint) * factor),
        clamp_channel(midpoint + (g - midpoint) * factor),
        clamp_channel(midpoint + (b - midpoint) * factor),
    )
}

/// Apply saturation by blending each channel with the pixel's luma.
///
/// - 0 = full grayscale
/// - 1 = unchanged
/// - above 1 = oversaturated
#[inline]
fn apply_saturation(r: f32, g: f32, b: f32, factor: f32) -> (f32, f32, f32) {
    if factor == 1.0 {
        return (r, g, b);
    }
    let gray = luma(r, g, b);
    (
        clamp_channel(gray + (r - gray) * factor),
        clamp_channel(gray + (g - gray) * factor),
        clamp_channel(gray + (b - gray) * factor),
    )
}


// ============================================================================
// Property-Based Tests
// ============================================================================
