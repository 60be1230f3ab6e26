//! WASM bindings for the edit state and the render pipeline.
//!
//! The editor keeps one `JsTransformState` per open image and calls
//! [`render`] with the untouched source after every slider change.

use retouch_core::{pipeline, TonalPreset, TransformState};
use wasm_bindgen::prelude::*;

use crate::error::to_js_error;
use crate::types::JsBitmap;

/// Edit state wrapper for JavaScript
#[wasm_bindgen]
pub struct JsTransformState {
    inner: TransformState,
}

impl Default for JsTransformState {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl JsTransformState {
    /// Create an identity edit state
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: TransformState::new(),
        }
    }

    /// Build a state from a plain JS object such as
    /// `{ rotation: 90, flipHorizontal: true, brightness: 120 }`.
    ///
    /// Missing fields take identity values. Throws on a rotation that is
    /// not a quarter turn or a tonal value outside [0, 200].
    pub fn from_object(value: JsValue) -> Result<JsTransformState, JsValue> {
        let inner: TransformState = serde_wasm_bindgen::from_value(value).map_err(to_js_error)?;
        inner.validate().map_err(to_js_error)?;
        Ok(Self { inner })
    }

    /// Serialize to a plain JS object with camelCase fields
    pub fn to_object(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(to_js_error)
    }

    /// Get rotation in degrees (0, 90, 180 or 270)
    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> i32 {
        self.inner.rotation
    }

    #[wasm_bindgen(getter)]
    pub fn flip_horizontal(&self) -> bool {
        self.inner.flip_horizontal
    }

    #[wasm_bindgen(setter)]
    pub fn set_flip_horizontal(&mut self, value: bool) {
        self.inner.flip_horizontal = value;
    }

    #[wasm_bindgen(getter)]
    pub fn flip_vertical(&self) -> bool {
        self.inner.flip_vertical
    }

    #[wasm_bindgen(setter)]
    pub fn set_flip_vertical(&mut self, value: bool) {
        self.inner.flip_vertical = value;
    }

    #[wasm_bindgen(getter)]
    pub fn brightness(&self) -> f32 {
        self.inner.brightness
    }

    #[wasm_bindgen(getter)]
    pub fn contrast(&self) -> f32 {
        self.inner.contrast
    }

    #[wasm_bindgen(getter)]
    pub fn saturation(&self) -> f32 {
        self.inner.saturation
    }

    /// Set the rotation, normalized into [0, 360). Throws unless a quarter turn.
    pub fn set_rotation(&mut self, degrees: i32) -> Result<(), JsValue> {
        self.inner.set_rotation(degrees).map_err(to_js_error)
    }

    /// Rotate 90 degrees clockwise
    pub fn rotate_right(&mut self) {
        self.inner.rotate_right();
    }

    /// Rotate 90 degrees counter-clockwise
    pub fn rotate_left(&mut self) {
        self.inner.rotate_left();
    }

    pub fn toggle_flip_horizontal(&mut self) {
        self.inner.toggle_flip_horizontal();
    }

    pub fn toggle_flip_vertical(&mut self) {
        self.inner.toggle_flip_vertical();
    }

    /// Set brightness percentage, clamped to [0, 200]. Throws on NaN.
    pub fn set_brightness(&mut self, value: f32) -> Result<(), JsValue> {
        self.inner.set_brightness(value).map_err(to_js_error)
    }

    /// Set contrast percentage, clamped to [0, 200]. Throws on NaN.
    pub fn set_contrast(&mut self, value: f32) -> Result<(), JsValue> {
        self.inner.set_contrast(value).map_err(to_js_error)
    }

    /// Set saturation percentage, clamped to [0, 200]. Throws on NaN.
    pub fn set_saturation(&mut self, value: f32) -> Result<(), JsValue> {
        self.inner.set_saturation(value).map_err(to_js_error)
    }

    /// Apply a named preset (`"enhance"`, `"grayscale"`, `"vivid"` or
    /// `"soft"`), replacing all three tonal values. Throws on an unknown name.
    pub fn apply_preset(&mut self, name: &str) -> Result<(), JsValue> {
        let preset: TonalPreset = name.parse().map_err(to_js_error)?;
        self.inner.apply_preset(preset);
        Ok(())
    }

    /// Reset every edit
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Check if rendering would return the source unchanged
    pub fn is_identity(&self) -> bool {
        self.inner.is_identity()
    }
}

impl JsTransformState {
    pub(crate) fn as_state(&self) -> &TransformState {
        &self.inner
    }
}

/// Render a source bitmap with the given edit state.
///
/// Always pass the original decoded source, not a previous render.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const state = new JsTransformState();
/// state.rotate_right();
/// state.set_saturation(0);
/// const preview = render(source, state);
/// ```
#[wasm_bindgen]
pub fn render(image: &JsBitmap, state: &JsTransformState) -> Result<JsBitmap, JsValue> {
    pipeline::render(image.as_bitmap(), state.as_state())
        .map(JsBitmap::from_bitmap)
        .map_err(to_js_error)
}
