//! The render pipeline: rotate, mirror, then tone.
//!
//! `render` is a pure function of (source, state). Callers re-run it from the
//! original source on every parameter change instead of patching a previously
//! rendered bitmap, so rounding never compounds across edits.

use crate::adjustments::apply_tonal_adjustments;
use crate::bitmap::Bitmap;
use crate::encode::{encode, EncodeRequest, EncodeResult};
use crate::error::RetouchError;
use crate::state::TransformState;
use crate::transform::{apply_rotation, flip_horizontal, flip_vertical, QuarterTurn};

/// Render a source bitmap with the given edit state.
///
/// # Errors
///
/// - `InvalidBitmap` if the source violates its size invariant
/// - `UnsupportedRotation` if the state's rotation is not a quarter turn
/// - `InvalidParameter` if a tonal value is outside [0, 200]
pub fn render(source: &Bitmap, state: &TransformState) -> Result<Bitmap, RetouchError> {
    source.validate()?;
    state.validate()?;

    let turn = QuarterTurn::from_degrees(state.rotation)?;

    // Allocates the output canvas at the rotated dimensions
    let mut output = apply_rotation(source, turn);

    if state.flip_horizontal {
        flip_horizontal(&mut output);
    }
    if state.flip_vertical {
        flip_vertical(&mut output);
    }

    apply_tonal_adjustments(output.pixels_mut(), state);

    tracing::debug!(
        "rendered {}x{} -> {}x{} (rotation {}, flip h={} v={})",
        source.width(),
        source.height(),
        output.width(),
        output.height(),
        turn.degrees(),
        state.flip_horizontal,
        state.flip_vertical
    );

    Ok(output)
}

/// Render and encode in one call.
pub fn process(
    source: &Bitmap,
    state: &TransformState,
    request: &EncodeRequest,
) -> Result<EncodeResult, RetouchError> {
    let rendered = render(source, state)?;
    encode(&rendered, request)
}
