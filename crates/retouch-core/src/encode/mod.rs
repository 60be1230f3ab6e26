//! Image encoding pipeline for Retouch.
//!
//! This module provides functionality for:
//! - Encoding bitmaps to JPEG, PNG or WebP
//! - Reporting output size for compression-ratio display
//!
//! # Quality
//!
//! For the lossy formats (JPEG, WebP) a higher quality factor never produces
//! a smaller file for the same bitmap. Each format has a ladder of encoder
//! settings; a request encodes every rung from its own upward and keeps the
//! smallest result. PNG ignores the quality factor.
//!
//! # Examples
//!
//! ```ignore
//! use retouch_core::encode::{encode, EncodeRequest, OutputFormat};
//!
//! let result = encode(&bitmap, &EncodeRequest::new(OutputFormat::Jpeg, 90))?;
//! println!("Encoded {} bytes", result.len());
//! ```

mod format;
mod jpeg;
mod ladder;
mod png;
mod webp;

use serde::{Deserialize, Serialize};

use crate::bitmap::Bitmap;
use crate::error::RetouchError;

pub use format::OutputFormat;

/// Quality used when the caller does not pick one.
pub const DEFAULT_QUALITY: u8 = 80;

/// Target format and quality for one encode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeRequest {
    pub format: OutputFormat,
    /// Quality factor (1-100). Only meaningful for lossy formats.
    pub quality: u8,
}

impl Default for EncodeRequest {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            quality: DEFAULT_QUALITY,
        }
    }
}

impl EncodeRequest {
    pub fn new(format: OutputFormat, quality: u8) -> Self {
        Self { format, quality }
    }

    /// Build a request from a UI format tag such as `"webp"`.
    pub fn from_tag(tag: &str, quality: u8) -> Result<Self, RetouchError> {
        Ok(Self::new(tag.parse()?, quality))
    }

    /// Check the quality range for lossy formats.
    ///
    /// Lossless formats ignore quality entirely, so any value passes.
    pub fn validate(&self) -> Result<(), RetouchError> {
        if self.format.is_lossy() && !(1..=100).contains(&self.quality) {
            return Err(RetouchError::invalid_parameter("quality", self.quality));
        }
        Ok(())
    }
}

/// Encoded bytes plus their format. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeResult {
    bytes: Vec<u8>,
    format: OutputFormat,
}

impl EncodeResult {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the result, handing the buffer to the caller.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Byte length of the encoded output.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Fraction of the original size saved: `1 - compressed / original`.
    ///
    /// Negative when the output is larger than the original. Returns 0.0 for
    /// an original size of zero.
    pub fn compression_ratio(&self, original_size: u64) -> f64 {
        if original_size == 0 {
            return 0.0;
        }
        1.0 - self.bytes.len() as f64 / original_size as f64
    }
}

/// Encode a finished bitmap.
///
/// # Errors
///
/// - `InvalidBitmap` if the bitmap fails its size invariant (checked first)
/// - `InvalidParameter` for a lossy quality outside 1-100
/// - `EncodingFailed` if the codec rejects the image
pub fn encode(bitmap: &Bitmap, request: &EncodeRequest) -> Result<EncodeResult, RetouchError> {
    bitmap.validate()?;
    request.validate()?;

    let bytes = match request.format {
        OutputFormat::Jpeg => jpeg::encode_jpeg(bitmap, request.quality)?,
        OutputFormat::Png => png::encode_png(bitmap)?,
        OutputFormat::WebP => webp::encode_webp(bitmap, request.quality)?,
    };

    tracing::debug!(
        "encoded {}x{} as {} (quality {}): {} bytes",
        bitmap.width(),
        bitmap.height(),
        request.format,
        request.quality,
        bytes.len()
    );

    Ok(EncodeResult {
        bytes,
        format: request.format,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> Bitmap {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width) as u8);
                pixels.push(((y * 255) / height) as u8);
                pixels.push(((x + y) * 127 / (width + height)) as u8);
                pixels.push(255);
            }
        }
        Bitmap::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_encode_each_format() {
        let bitmap = gradient(32, 32);
        for format in [OutputFormat::Jpeg, OutputFormat::Png, OutputFormat::WebP] {
            let result = encode(&bitmap, &EncodeRequest::new(format, 75)).unwrap();
            assert_eq!(result.format(), format);
            assert!(!result.is_empty());
            assert_eq!(result.len(), result.bytes().len());
        }
    }

    #[test]
    fn test_png_ignores_quality() {
        let bitmap = gradient(32, 32);
        let low = encode(&bitmap, &EncodeRequest::new(OutputFormat::Png, 1)).unwrap();
        let high = encode(&bitmap, &EncodeRequest::new(OutputFormat::Png, 100)).unwrap();
        assert_eq!(low, high);
    }

    #[test]
    fn test_png_accepts_out_of_range_quality() {
        let bitmap = gradient(8, 8);
        assert!(encode(&bitmap, &EncodeRequest::new(OutputFormat::Png, 0)).is_ok());
        assert!(encode(&bitmap, &EncodeRequest::new(OutputFormat::Png, 255)).is_ok());
    }

    #[test]
    fn test_lossy_rejects_out_of_range_quality() {
        let bitmap = gradient(8, 8);
        for format in [OutputFormat::Jpeg, OutputFormat::WebP] {
            for quality in [0u8, 101, 255] {
                let result = encode(&bitmap, &EncodeRequest::new(format, quality));
                assert!(matches!(
                    result,
                    Err(RetouchError::InvalidParameter {
                        name: "quality",
                        ..
                    })
                ));
            }
        }
    }

    /// Deterministic xorshift noise; the worst case for entropy coding.
    fn noise(width: u32, height: u32) -> Bitmap {
        let mut state = 0x2545_f491_u32;
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            for _ in 0..3 {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                pixels.push((state >> 24) as u8);
            }
            pixels.push(255);
        }
        Bitmap::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_every_quality_step_is_non_decreasing() {
        for bitmap in [gradient(24, 24), noise(24, 24)] {
            for format in [OutputFormat::Jpeg, OutputFormat::WebP] {
                let mut previous = 0;
                for quality in 1..=100u8 {
                    let size = encode(&bitmap, &EncodeRequest::new(format, quality))
                        .unwrap()
                        .len();
                    assert!(
                        size >= previous,
                        "{}: q{}={} < q{}={}",
                        format,
                        quality,
                        size,
                        quality - 1,
                        previous
                    );
                    previous = size;
                }
            }
        }
    }

    #[test]
    fn test_quality_90_not_smaller_than_40() {
        let bitmap = gradient(64, 64);
        for format in [OutputFormat::Jpeg, OutputFormat::WebP] {
            let low = encode(&bitmap, &EncodeRequest::new(format, 40)).unwrap();
            let high = encode(&bitmap, &EncodeRequest::new(format, 90)).unwrap();
            assert!(
                high.len() >= low.len(),
                "{}: q90={} q40={}",
                format,
                high.len(),
                low.len()
            );
        }
    }

    #[test]
    fn test_from_tag() {
        let request = EncodeRequest::from_tag("webp", 60).unwrap();
        assert_eq!(request, EncodeRequest::new(OutputFormat::WebP, 60));

        assert_eq!(
            EncodeRequest::from_tag("tiff", 60),
            Err(RetouchError::UnsupportedFormat("tiff".to_string()))
        );
    }

    #[test]
    fn test_default_request() {
        let request = EncodeRequest::default();
        assert_eq!(request.format, OutputFormat::Jpeg);
        assert_eq!(request.quality, 80);
    }

    #[test]
    fn test_deserialize_request() {
        let request: EncodeRequest = serde_json::from_str(r#"{"format": "png"}"#).unwrap();
        assert_eq!(request, EncodeRequest::new(OutputFormat::Png, 80));
    }

    #[test]
    fn test_compression_ratio() {
        let result = EncodeResult {
            bytes: vec![0u8; 250],
            format: OutputFormat::Jpeg,
        };
        assert!((result.compression_ratio(1000) - 0.75).abs() < 1e-12);
        assert!((result.compression_ratio(125) + 1.0).abs() < 1e-12);
        assert_eq!(result.compression_ratio(0), 0.0);
        assert_eq!(result.mime_type(), "image/jpeg");
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
