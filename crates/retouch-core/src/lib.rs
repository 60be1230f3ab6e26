//! Retouch Core - Raster image pipeline
//!
//! This crate provides the core functionality behind the Retouch image
//! editor and compressor: an RGBA bitmap type, a transform engine
//! (quarter-turn rotation, mirroring, brightness/contrast/saturation), an
//! encoder for JPEG, PNG and WebP, and a size-ratio estimator for
//! compression settings.
//!
//! Everything is synchronous and free of shared state, so it runs the same
//! natively and inside a WASM worker.
//!
//! ```ignore
//! use retouch_core::{process, Bitmap, EncodeRequest, OutputFormat, TransformState};
//!
//! let mut state = TransformState::new();
//! state.rotate_right();
//! state.set_brightness(120.0)?;
//!
//! let result = process(&bitmap, &state, &EncodeRequest::new(OutputFormat::WebP, 75))?;
//! ```

pub mod adjustments;
pub mod bitmap;
pub mod decode;
pub mod encode;
pub mod error;
pub mod estimate;
pub mod luminance;
pub mod pipeline;
pub mod report;
pub mod state;
pub mod transform;

pub use bitmap::Bitmap;
pub use decode::{decode_image, DecodeError, Orientation};
pub use encode::{encode, EncodeRequest, EncodeResult, OutputFormat};
pub use error::{BitmapError, RetouchError};
pub use estimate::{estimate_size, CompressionSettings, ReductionFactor};
pub use pipeline::{process, render};
pub use state::{TonalPreset, TransformState};
pub use transform::QuarterTurn;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_public_types_are_send_sync() {
        assert_send_sync::<Bitmap>();
        assert_send_sync::<TransformState>();
        assert_send_sync::<EncodeRequest>();
        assert_send_sync::<EncodeResult>();
        assert_send_sync::<CompressionSettings>();
        assert_send_sync::<RetouchError>();
    }

    #[test]
    fn test_reexports_compose() {
        let bitmap = Bitmap::filled(4, 2, [10, 20, 30, 255]).unwrap();
        let mut state = TransformState::new();
        state.rotate_right();

        let rendered = render(&bitmap, &state).unwrap();
        assert_eq!(rendered.dimensions(), (2, 4));

        let result = process(&bitmap, &state, &EncodeRequest::new(OutputFormat::Png, 80)).unwrap();
        let decoded = decode_image(result.bytes()).unwrap();
        assert_eq!(decoded, rendered);
    }
}
