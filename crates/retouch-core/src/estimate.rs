//! Size-ratio estimator for compression settings.
//!
//! An approximate model used when no real encoder is available: the
//! estimated size is the original size times the product of every active
//! reduction factor, floored to whole bytes, and never below 10% of the
//! original (rounded up, so a non-empty original never estimates to 0).
//!
//! Ratios are tracked in fixed point (parts per 10^12) rather than `f64` so
//! decimal factors multiply exactly: 1,000,000 bytes at quality 70 with
//! images and metadata stripped is exactly 332,500 bytes, not 332,499.

use serde::{Deserialize, Serialize};

use crate::error::RetouchError;

/// One in fixed point.
const RATIO_ONE: u128 = 1_000_000_000_000;

/// Basis points in a factor of 1.0.
const BASIS_POINTS_ONE: u16 = 10_000;

/// The estimate never drops below original_size * MIN_RATIO_PERCENT / 100.
pub const MIN_RATIO_PERCENT: u64 = 10;

/// An independent multiplicative reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReductionFactor {
    /// Strip embedded images (x0.5)
    StripImages,
    /// Strip annotations (x0.9)
    StripAnnotations,
    /// Strip auxiliary metadata (x0.95)
    StripMetadata,
    /// Any other factor, in basis points (10000 = x1.0)
    Custom(u16),
}

impl ReductionFactor {
    /// Factor in basis points.
    pub fn basis_points(self) -> u16 {
        match self {
            ReductionFactor::StripImages => 5_000,
            ReductionFactor::StripAnnotations => 9_000,
            ReductionFactor::StripMetadata => 9_500,
            ReductionFactor::Custom(bp) => bp,
        }
    }

    /// Factor as a float, for display.
    pub fn multiplier(self) -> f64 {
        self.basis_points() as f64 / BASIS_POINTS_ONE as f64
    }
}

/// Estimate the output size for an original size, quality and factors.
///
/// # Arguments
///
/// * `original_size` - Size of the source in bytes
/// * `quality` - Base factor in percent (1-100)
/// * `factors` - Additional reductions, each applied once
///
/// # Errors
///
/// `InvalidParameter` if quality is outside 1-100 or a custom factor exceeds
/// 10000 basis points.
pub fn estimate_size(
    original_size: u64,
    quality: u8,
    factors: &[ReductionFactor],
) -> Result<u64, RetouchError> {
    if !(1..=100).contains(&quality) {
        return Err(RetouchError::invalid_parameter("quality", quality));
    }

    let mut ratio = RATIO_ONE * quality as u128 / 100;
    for factor in factors {
        let bp = factor.basis_points();
        if bp > BASIS_POINTS_ONE {
            return Err(RetouchError::invalid_parameter("reduction factor", bp));
        }
        ratio = ratio * bp as u128 / BASIS_POINTS_ONE as u128;
    }

    // original_size (< 2^64) * ratio (<= 10^12) fits comfortably in u128
    let estimated = original_size as u128 * ratio / RATIO_ONE;
    let minimum = (original_size as u128 * MIN_RATIO_PERCENT as u128).div_ceil(100);
    Ok(estimated.max(minimum) as u64)
}

/// Settings exposed by the compressor UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompressionSettings {
    /// Compression level / quality in percent (1-100)
    pub quality: u8,
    pub remove_images: bool,
    pub remove_annotations: bool,
    pub remove_metadata: bool,
    /// Extra factors in basis points
    pub custom_factors: Vec<u16>,
}

impl Default for CompressionSettings {
    fn default() -> Self {
        Self {
            quality: 70,
            remove_images: false,
            remove_annotations: false,
            remove_metadata: true,
            custom_factors: Vec::new(),
        }
    }
}

impl CompressionSettings {
    /// The active reduction factors, in a fixed order.
    pub fn factors(&self) -> Vec<ReductionFactor> {
        let mut factors = Vec::new();
        if self.remove_images {
            factors.push(ReductionFactor::StripImages);
        }
        if self.remove_annotations {
            factors.push(ReductionFactor::StripAnnotations);
        }
        if self.remove_metadata {
            factors.push(ReductionFactor::StripMetadata);
        }
        factors.extend(self.custom_factors.iter().map(|&bp| ReductionFactor::Custom(bp)));
        factors
    }

    /// Estimate the compressed size of `original_size` bytes.
    pub fn estimate(&self, original_size: u64) -> Result<u64, RetouchError> {
        estimate_size(original_size, self.quality, &self.factors())
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
