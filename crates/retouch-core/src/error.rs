//! Error types shared by the transform engine, encoder and estimator.

use thiserror::Error;

/// Ways a pixel buffer can violate the RGBA bitmap size invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitmapError {
    /// Width or height is zero
    #[error("dimensions {width}x{height} must be non-zero")]
    ZeroDimensions { width: u32, height: u32 },

    /// The pixel buffer holds no data at all
    #[error("pixel buffer is empty")]
    EmptyBuffer,

    /// Pixel data length doesn't match the dimensions
    #[error("expected {expected} bytes (width * height * 4), got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// width * height * 4 does not fit in memory addressing
    #[error("dimensions {width}x{height} exceed the addressable buffer size")]
    TooLarge { width: u32, height: u32 },
}

/// Errors surfaced by the render and encode pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RetouchError {
    /// Malformed or zero-sized pixel buffer
    #[error("Invalid bitmap: {0}")]
    InvalidBitmap(#[from] BitmapError),

    /// Rotation that is not a multiple of 90 after normalization
    #[error("Unsupported rotation: {0} degrees is not a multiple of 90")]
    UnsupportedRotation(i32),

    /// Unknown encode target tag
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Parameter outside its accepted range
    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: String },

    /// The underlying codec rejected the image
    #[error("{format} encoding failed: {message}")]
    EncodingFailed {
        format: &'static str,
        message: String,
    },
}

impl RetouchError {
    pub(crate) fn invalid_parameter(name: &'static str, value: impl ToString) -> Self {
        RetouchError::InvalidParameter {
            name,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitmap_error_display() {
        let err = RetouchError::from(BitmapError::LengthMismatch {
            expected: 16,
            actual: 12,
        });
        assert_eq!(
            err.to_string(),
            "Invalid bitmap: expected 16 bytes (width * height * 4), got 12"
        );
    }

    #[test]
    fn test_rotation_error_display() {
        let err = RetouchError::UnsupportedRotation(45);
        assert_eq!(
            err.to_string(),
            "Unsupported rotation: 45 degrees is not a multiple of 90"
        );
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = RetouchError::invalid_parameter("quality", 0);
        assert_eq!(err.to_string(), "Invalid parameter quality: 0");
    }
}
