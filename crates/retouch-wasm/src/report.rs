//! Display helpers for sizes, savings and download names.

use retouch_core::{report, OutputFormat};
use wasm_bindgen::prelude::*;

use crate::error::to_js_error;
use crate::estimate::byte_count;

/// Format a byte count, e.g. `format_bytes(1536, 2) === "1.5 KB"`.
#[wasm_bindgen]
pub fn format_bytes(bytes: f64, decimals: u32) -> Result<String, JsValue> {
    let bytes = byte_count(bytes).map_err(to_js_error)?;
    Ok(report::format_bytes(bytes, decimals as usize))
}

/// Savings as `"66.7%"`, or `undefined` while either size is unknown.
#[wasm_bindgen]
pub fn savings_percent(original_size: f64, compressed_size: f64) -> Option<String> {
    let original = byte_count(original_size).ok()?;
    let compressed = byte_count(compressed_size).ok()?;
    report::savings_percent(original, compressed)
}

#[wasm_bindgen]
pub fn quality_label(quality: u8) -> String {
    report::quality_label(quality).to_string()
}

#[wasm_bindgen]
pub fn compression_level_label(level: u8) -> String {
    report::compression_level_label(level).to_string()
}

/// `compressed_<stem>.<ext>` for the compressor's download link.
#[wasm_bindgen]
pub fn compressed_file_name(original_name: &str, format: &str) -> Result<String, JsValue> {
    let format: OutputFormat = format.parse().map_err(to_js_error)?;
    Ok(report::compressed_file_name(original_name, format))
}

/// `edited_<stem>.<ext>` for the editor's download link.
#[wasm_bindgen]
pub fn edited_file_name(original_name: &str, format: &str) -> Result<String, JsValue> {
    let format: OutputFormat = format.parse().map_err(to_js_error)?;
    Ok(report::edited_file_name(original_name, format))
}
