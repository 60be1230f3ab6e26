//! Image decoding for Retouch.
//!
//! Turns user-supplied JPEG, PNG or WebP bytes into the RGBA [`Bitmap`]
//! the transform engine works on. EXIF orientation is honoured the same way
//! a browser `<img>` element does, using the engine's own rotate and mirror
//! permutations.
//!
//! # Examples
//!
//! ```ignore
//! use retouch_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.jpg")?;
//! let bitmap = decode_image(&bytes)?;
//! println!("Decoded {}x{} image", bitmap.width(), bitmap.height());
//! ```
//!
//! [`Bitmap`]: crate::bitmap::Bitmap

mod reader;
mod types;

pub use reader::{
    decode_image, decode_image_no_orientation, decode_with_media_type, get_orientation,
    is_image_media_type,
};
pub use types::{DecodeError, Orientation};
