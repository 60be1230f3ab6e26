//! Image encoding WASM bindings.
//!
//! This module exposes the retouch-core encoder to JavaScript so the editor
//! and compressor can produce JPEG, PNG or WebP downloads.
//!
//! # Functions
//!
//! - [`encode_image`] - Encode a bitmap with a format tag and quality
//! - [`encode_pixels`] - Encode raw RGBA pixel data
//! - [`process_image`] - Render an edit state and encode the result
//!
//! # Example
//!
//! ```typescript
//! import { encode_image } from '@retouch/wasm';
//!
//! const result = encode_image(bitmap, 'webp', 75);
//! const blob = new Blob([result.bytes()], { type: result.mime_type });
//! ```

use retouch_core::{encode, pipeline, Bitmap, EncodeRequest, EncodeResult};
use wasm_bindgen::prelude::*;

use crate::error::to_js_error;
use crate::transform::JsTransformState;
use crate::types::JsBitmap;

/// Encoded output wrapper for JavaScript.
#[wasm_bindgen]
pub struct JsEncodeResult {
    inner: EncodeResult,
}

#[wasm_bindgen]
impl JsEncodeResult {
    /// Encoded size in bytes
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.len()
    }

    /// Lowercase format tag: "jpeg", "png" or "webp"
    #[wasm_bindgen(getter)]
    pub fn format(&self) -> String {
        self.inner.format().tag().to_string()
    }

    /// MIME type for a `Blob` or data URL
    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.inner.mime_type().to_string()
    }

    /// File extension for the download name
    #[wasm_bindgen(getter)]
    pub fn extension(&self) -> String {
        self.inner.format().extension().to_string()
    }

    /// Returns the encoded bytes as Uint8Array (copied).
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.bytes().to_vec()
    }

    /// Fraction saved relative to `original_size` bytes (negative if larger).
    pub fn compression_ratio(&self, original_size: f64) -> f64 {
        self.inner.compression_ratio(original_size.max(0.0) as u64)
    }
}

impl JsEncodeResult {
    pub(crate) fn from_result(inner: EncodeResult) -> Self {
        Self { inner }
    }
}

/// Encode a bitmap.
///
/// # Arguments
///
/// * `image` - The bitmap to encode (usually the output of `render`)
/// * `format` - "jpeg" (or "jpg"), "png" or "webp"; MIME types also accepted
/// * `quality` - 1-100 for JPEG and WebP, ignored for PNG
///
/// # Errors
///
/// Throws on an unknown format tag, a lossy quality outside 1-100, or a
/// codec failure.
#[wasm_bindgen]
pub fn encode_image(image: &JsBitmap, format: &str, quality: u8) -> Result<JsEncodeResult, JsValue> {
    let request = EncodeRequest::from_tag(format, quality).map_err(to_js_error)?;
    encode(image.as_bitmap(), &request)
        .map(JsEncodeResult::from_result)
        .map_err(to_js_error)
}

/// Encode raw RGBA pixel data, e.g. straight from `ImageData.data`.
#[wasm_bindgen]
pub fn encode_pixels(
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    format: &str,
    quality: u8,
) -> Result<JsEncodeResult, JsValue> {
    let bitmap = Bitmap::new(width, height, pixels).map_err(to_js_error)?;
    let request = EncodeRequest::from_tag(format, quality).map_err(to_js_error)?;
    encode(&bitmap, &request)
        .map(JsEncodeResult::from_result)
        .map_err(to_js_error)
}

/// Render the edit state onto the source and encode the result.
///
/// # Example
///
/// ```typescript
/// const result = process_image(source, state, 'png', 100);
/// link.download = edited_file_name(file.name, result.format);
/// link.href = URL.createObjectURL(new Blob([result.bytes()], { type: result.mime_type }));
/// ```
#[wasm_bindgen]
pub fn process_image(
    image: &JsBitmap,
    state: &JsTransformState,
    format: &str,
    quality: u8,
) -> Result<JsEncodeResult, JsValue> {
    let request = EncodeRequest::from_tag(format, quality).map_err(to_js_error)?;
    pipeline::process(image.as_bitmap(), state.as_state(), &request)
        .map(JsEncodeResult::from_result)
        .map_err(to_js_error)
}
