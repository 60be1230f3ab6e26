//! Geometric transforms: quarter-turn rotation and mirroring.
//!
//! # Transform Order
//!
//! When rendering an edit, operations are applied in this order:
//! 1. Rotation (the only dimension-changing step)
//! 2. Mirroring, relative to the already-rotated canvas
//! 3. Tonal adjustments (see `adjustments`)
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees, positive = clockwise
//! - Origin is top-left corner

mod mirror;
mod rotation;

pub use mirror::{flip_horizontal, flip_vertical};
pub use rotation::{apply_rotation, QuarterTurn};
