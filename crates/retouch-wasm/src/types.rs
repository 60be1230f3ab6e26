//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core Retouch
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use retouch_core::Bitmap;
use wasm_bindgen::prelude::*;

use crate::error::to_js_error;

/// An RGBA bitmap wrapper for JavaScript.
///
/// The layout matches a canvas `ImageData`: 4 bytes per pixel, row-major,
/// origin top-left, so `new ImageData(new Uint8ClampedArray(bitmap.pixels()),
/// bitmap.width)` displays it directly.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`.
///
/// The `free()` method can be called to explicitly release WASM memory, but this is
/// optional as wasm-bindgen's finalizer will handle cleanup automatically.
#[wasm_bindgen]
pub struct JsBitmap {
    inner: Bitmap,
}

#[wasm_bindgen]
impl JsBitmap {
    /// Wrap RGBA pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    ///
    /// Throws if the buffer length is not `width * height * 4` or a
    /// dimension is zero.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsBitmap, JsValue> {
        Bitmap::new(width, height, pixels)
            .map(Self::from_bitmap)
            .map_err(to_js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.byte_size()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels().to_vec()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsBitmap {
    pub(crate) fn from_bitmap(inner: Bitmap) -> Self {
        Self { inner }
    }

    pub(crate) fn as_bitmap(&self) -> &Bitmap {
        &self.inner
    }
}
