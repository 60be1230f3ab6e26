//! Size-ratio estimator bindings for the compressor preview.

use retouch_core::{CompressionSettings, RetouchError};
use wasm_bindgen::prelude::*;

use crate::error::to_js_error;

/// Estimate a compressed size from a settings object.
///
/// `settings` is a plain object such as
/// `{ quality: 70, removeImages: true, removeMetadata: true }`; missing fields
/// take the compressor defaults (quality 70, metadata stripped).
///
/// # Example (TypeScript)
///
/// ```typescript
/// const estimated = estimate_compressed_size(file.size, { quality: 70, removeImages: true });
/// ```
#[wasm_bindgen]
pub fn estimate_compressed_size(original_size: f64, settings: JsValue) -> Result<f64, JsValue> {
    let settings: CompressionSettings =
        serde_wasm_bindgen::from_value(settings).map_err(to_js_error)?;
    let original = byte_count(original_size).map_err(to_js_error)?;
    settings
        .estimate(original)
        .map(|size| size as f64)
        .map_err(to_js_error)
}

/// Estimate a compressed size from individual slider and checkbox values.
#[wasm_bindgen]
pub fn estimate_compressed_size_with(
    original_size: f64,
    quality: u8,
    remove_images: bool,
    remove_annotations: bool,
    remove_metadata: bool,
) -> Result<f64, JsValue> {
    let original = byte_count(original_size).map_err(to_js_error)?;
    let settings = CompressionSettings {
        quality,
        remove_images,
        remove_annotations,
        remove_metadata,
        custom_factors: Vec::new(),
    };
    settings
        .estimate(original)
        .map(|size| size as f64)
        .map_err(to_js_error)
}

/// JS numbers arrive as f64; sizes must be finite and non-negative.
pub(crate) fn byte_count(value: f64) -> Result<u64, RetouchError> {
    if !value.is_finite() || value < 0.0 {
        return Err(RetouchError::InvalidParameter {
            name: "original size",
            value: value.to_string(),
        });
    }
    Ok(value.floor() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_with_flags() {
        let estimated = estimate_compressed_size_with(1_000_000.0, 70, true, false, true)
            .ok()
            .unwrap();
        assert_eq!(estimated, 332_500.0);
    }

    #[test]
    fn test_byte_count() {
        assert_eq!(byte_count(1024.0), Ok(1024));
        assert_eq!(byte_count(10.9), Ok(10));
        assert!(byte_count(-1.0).is_err());
        assert!(byte_count(f64::NAN).is_err());
        assert!(byte_count(f64::INFINITY).is_err());
    }
}
