//! Owned RGBA bitmap with an enforced size invariant.

use crate::error::BitmapError;

/// Bytes per pixel in the RGBA8 layout.
pub const CHANNELS: usize = 4;

/// A decoded raster image with RGBA pixel data.
///
/// The buffer length is always `width * height * 4` and both dimensions are
/// non-zero. Fields are private so the invariant holds after every mutation;
/// `pixels_mut` hands out a slice, which cannot change the length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

/// Compute `width * height * 4`, rejecting zero or overflowing dimensions.
pub fn expected_len(width: u32, height: u32) -> Result<usize, BitmapError> {
    if width == 0 || height == 0 {
        return Err(BitmapError::ZeroDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or(BitmapError::TooLarge { width, height })
}

impl Bitmap {
    /// Create a bitmap from dimensions and RGBA pixel data (row-major).
    ///
    /// # Errors
    ///
    /// Returns a `BitmapError` if either dimension is zero, the buffer is
    /// empty, or its length is not `width * height * 4`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, BitmapError> {
        if pixels.is_empty() {
            return Err(BitmapError::EmptyBuffer);
        }
        let expected = expected_len(width, height)?;
        if pixels.len() != expected {
            return Err(BitmapError::LengthMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a bitmap with every pixel set to `rgba`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, BitmapError> {
        let len = expected_len(width, height)?;
        let mut pixels = Vec::with_capacity(len);
        for _ in 0..len / CHANNELS {
            pixels.extend_from_slice(&rgba);
        }
        Self::new(width, height, pixels)
    }

    /// Build a bitmap whose dimensions were computed by this crate.
    pub(crate) fn from_raw_parts(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * CHANNELS,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a bitmap from an `image::RgbaImage`.
    pub fn from_rgba_image(img: image::RgbaImage) -> Result<Self, BitmapError> {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.into_raw())
    }

    /// Convert to an `image::RgbaImage` (copies the pixel data).
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// RGBA pixel data in row-major order.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutable access to the pixel data. The length is fixed.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Consume the bitmap, returning its pixel buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Row stride in bytes.
    pub fn stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// Get the RGBA value at (x, y), or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y as usize * self.stride() + x as usize * CHANNELS;
        let mut rgba = [0u8; 4];
        rgba.copy_from_slice(&self.pixels[idx..idx + CHANNELS]);
        Some(rgba)
    }

    /// Re-check the size invariant.
    pub fn validate(&self) -> Result<(), BitmapError> {
        if self.pixels.is_empty() {
            return Err(BitmapError::EmptyBuffer);
        }
        let expected = expected_len(self.width, self.height)?;
        if self.pixels.len() != expected {
            return Err(BitmapError::LengthMismatch {
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }
}
