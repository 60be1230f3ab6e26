//! Retouch WASM - WebAssembly bindings for Retouch
//!
//! This crate provides WASM bindings to expose the retouch-core functionality
//! to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for RGBA bitmaps
//! - `transform` - Edit state and the render pipeline
//! - `decode` - Decoding picked files (EXIF orientation honoured)
//! - `encode` - JPEG / PNG / WebP export
//! - `estimate` - Compression size estimator
//! - `report` - Size formatting, savings and download names
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_file, render, encode_image, JsTransformState } from '@retouch/wasm';
//!
//! await init();
//!
//! const source = decode_file(new Uint8Array(await file.arrayBuffer()), file.type);
//! const state = new JsTransformState();
//! state.rotate_right();
//! const preview = render(source, state);
//! const download = encode_image(preview, 'jpeg', 90);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod error;
mod estimate;
mod report;
mod transform;
mod types;

// Re-export public types
pub use decode::{decode_file, decode_image, get_orientation, is_image_media_type};
pub use encode::{encode_image, encode_pixels, process_image, JsEncodeResult};
pub use estimate::{estimate_compressed_size, estimate_compressed_size_with};
pub use report::{
    compressed_file_name, compression_level_label, edited_file_name, format_bytes,
    quality_label, savings_percent,
};
pub use transform::{render, JsTransformState};
pub use types::JsBitmap;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Nothing to set up: core logging goes through `tracing` and is dropped
    // unless the host installs a subscriber.
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
