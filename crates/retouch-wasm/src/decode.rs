//! Image decoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const source = decode_file(bytes, file.type);
//! ```

use retouch_core::decode;
use wasm_bindgen::prelude::*;

use crate::error::to_js_error;
use crate::types::JsBitmap;

/// Decode JPEG, PNG or WebP bytes into an upright RGBA bitmap.
///
/// EXIF orientation is applied.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsBitmap, JsValue> {
    decode::decode_image(bytes)
        .map(JsBitmap::from_bitmap)
        .map_err(to_js_error)
}

/// Decode a picked file, rejecting non-image media types (`File.type`).
#[wasm_bindgen]
pub fn decode_file(bytes: &[u8], media_type: &str) -> Result<JsBitmap, JsValue> {
    decode::decode_with_media_type(bytes, media_type)
        .map(JsBitmap::from_bitmap)
        .map_err(to_js_error)
}

/// EXIF orientation value (1-8); 1 when absent.
#[wasm_bindgen]
pub fn get_orientation(bytes: &[u8]) -> u8 {
    decode::get_orientation(bytes) as u8
}

/// Whether the file picker's media type is an image.
#[wasm_bindgen]
pub fn is_image_media_type(media_type: &str) -> bool {
    decode::is_image_media_type(media_type)
}
