//! Pending edit parameters for the transform engine.
//!
//! A `TransformState` describes the edits the user has dialled in; it is
//! never baked into a bitmap by itself. Rendering always starts from the
//! original source bitmap plus the full current state.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RetouchError;

/// Lowest accepted tonal percentage.
pub const TONAL_MIN: f32 = 0.0;
/// Highest accepted tonal percentage.
pub const TONAL_MAX: f32 = 200.0;
/// Tonal percentage that leaves pixels unchanged.
pub const TONAL_IDENTITY: f32 = 100.0;

/// Normalize an angle in degrees into [0, 360).
///
/// Handles negative increments: `-90` becomes `270`.
#[inline]
pub fn normalize_degrees(degrees: i32) -> i32 {
    ((degrees % 360) + 360) % 360
}

/// One-click tonal looks from the editor's preset row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TonalPreset {
    Enhance,
    Grayscale,
    Vivid,
    Soft,
}

impl TonalPreset {
    pub const ALL: [TonalPreset; 4] = [
        TonalPreset::Enhance,
        TonalPreset::Grayscale,
        TonalPreset::Vivid,
        TonalPreset::Soft,
    ];

    /// `(brightness, contrast, saturation)` in percent.
    pub fn values(self) -> (f32, f32, f32) {
        match self {
            TonalPreset::Enhance => (110.0, 120.0, 120.0),
            TonalPreset::Grayscale => (100.0, 100.0, 0.0),
            TonalPreset::Vivid => (90.0, 150.0, 120.0),
            TonalPreset::Soft => (110.0, 90.0, 90.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TonalPreset::Enhance => "enhance",
            TonalPreset::Grayscale => "grayscale",
            TonalPreset::Vivid => "vivid",
            TonalPreset::Soft => "soft",
        }
    }
}

impl FromStr for TonalPreset {
    type Err = RetouchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        TonalPreset::ALL
            .into_iter()
            .find(|preset| preset.name() == normalized)
            .ok_or_else(|| RetouchError::invalid_parameter("preset", s))
    }
}

/// Accumulated geometric and tonal edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransformState {
    /// Rotation in degrees, one of 0, 90, 180, 270 (clockwise)
    pub rotation: i32,
    /// Mirror columns after rotation
    pub flip_horizontal: bool,
    /// Mirror rows after rotation
    pub flip_vertical: bool,
    /// Brightness percentage (0 to 200, 100 = identity)
    pub brightness: f32,
    /// Contrast percentage (0 to 200, 100 = identity)
    pub contrast: f32,
    /// Saturation percentage (0 to 200, 100 = identity)
    pub saturation: f32,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            rotation: 0,
            flip_horizontal: false,
            flip_vertical: false,
            brightness: TONAL_IDENTITY,
            contrast: TONAL_IDENTITY,
            saturation: TONAL_IDENTITY,
        }
    }
}

impl TransformState {
    /// Create a new TransformState with identity values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if rendering with this state would return the source unchanged
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// Check if all tonal values are at 100%
    pub fn is_tonal_identity(&self) -> bool {
        self.brightness == TONAL_IDENTITY
            && self.contrast == TONAL_IDENTITY
            && self.saturation == TONAL_IDENTITY
    }

    /// Restore every parameter to its identity value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Rotate by an arbitrary number of degrees.
    ///
    /// The accumulated rotation is normalized into [0, 360). Fails with
    /// `UnsupportedRotation` (leaving the state untouched) when the result is
    /// not a multiple of 90.
    pub fn rotate_by(&mut self, degrees: i32) -> Result<(), RetouchError> {
        let next = normalize_degrees(self.rotation.wrapping_add(normalize_degrees(degrees)));
        if next % 90 != 0 {
            return Err(RetouchError::UnsupportedRotation(next));
        }
        self.rotation = next;
        Ok(())
    }

    /// Set the rotation directly, normalizing it first.
    pub fn set_rotation(&mut self, degrees: i32) -> Result<(), RetouchError> {
        let normalized = normalize_degrees(degrees);
        if normalized % 90 != 0 {
            return Err(RetouchError::UnsupportedRotation(normalized));
        }
        self.rotation = normalized;
        Ok(())
    }

    /// Rotate 90 degrees clockwise
    pub fn rotate_right(&mut self) {
        self.rotation = normalize_degrees(self.rotation + 90);
    }

    /// Rotate 90 degrees counter-clockwise
    pub fn rotate_left(&mut self) {
        self.rotation = normalize_degrees(self.rotation - 90);
    }

    pub fn toggle_flip_horizontal(&mut self) {
        self.flip_horizontal = !self.flip_horizontal;
    }

    pub fn toggle_flip_vertical(&mut self) {
        self.flip_vertical = !self.flip_vertical;
    }

    /// Set brightness, clamped to [0, 200].
    pub fn set_brightness(&mut self, value: f32) -> Result<(), RetouchError> {
        self.brightness = clamp_tonal("brightness", value)?;
        Ok(())
    }

    /// Set contrast, clamped to [0, 200].
    pub fn set_contrast(&mut self, value: f32) -> Result<(), RetouchError> {
        self.contrast = clamp_tonal("contrast", value)?;
        Ok(())
    }

    /// Set saturation, clamped to [0, 200].
    pub fn set_saturation(&mut self, value: f32) -> Result<(), RetouchError> {
        self.saturation = clamp_tonal("saturation", value)?;
        Ok(())
    }

    /// Replace all three tonal values with a preset's. Geometry is kept.
    pub fn apply_preset(&mut self, preset: TonalPreset) {
        let (brightness, contrast, saturation) = preset.values();
        self.brightness = brightness;
        self.contrast = contrast;
        self.saturation = saturation;
    }

    /// Check values that may have bypassed the setters (e.g. deserialized).
    ///
    /// # Errors
    ///
    /// `UnsupportedRotation` if the normalized rotation is not a multiple of
    /// 90, `InvalidParameter` if a tonal value is non-finite or outside
    /// [0, 200].
    pub fn validate(&self) -> Result<(), RetouchError> {
        let rotation = normalize_degrees(self.rotation);
        if rotation % 90 != 0 {
            return Err(RetouchError::UnsupportedRotation(rotation));
        }
        check_tonal("brightness", self.brightness)?;
        check_tonal("contrast", self.contrast)?;
        check_tonal("saturation", self.saturation)?;
        Ok(())
    }
}

fn clamp_tonal(name: &'static str, value: f32) -> Result<f32, RetouchError> {
    if !value.is_finite() {
        return Err(RetouchError::invalid_parameter(name, value));
    }
    let clamped = value.clamp(TONAL_MIN, TONAL_MAX);
    if clamped != value {
        tracing::warn!("{} {} clamped to {}", name, value, clamped);
    }
    Ok(clamped)
}

fn check_tonal(name: &'static str, value: f32) -> Result<(), RetouchError> {
    if !value.is_finite() || !(TONAL_MIN..=TONAL_MAX).contains(&value) {
        return Err(RetouchError::invalid_parameter(name, value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let state = TransformState::new();
        assert!(state.is_identity());
        assert!(state.is_tonal_identity());
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0), 0);
        assert_eq!(normalize_degrees(360), 0);
        assert_eq!(normalize_degrees(450), 90);
        assert_eq!(normalize_degrees(-90), 270);
        assert_eq!(normalize_degrees(-450), 270);
        assert_eq!(normalize_degrees(-360), 0);
    }

    #[test]
    fn test_rotate_left_wraps_negative() {
        let mut state = TransformState::new();
        state.rotate_left();
        assert_eq!(state.rotation, 270);
        state.rotate_left();
        assert_eq!(state.rotation, 180);
    }

    #[test]
    fn test_rotate_right_wraps() {
        let mut state = TransformState::new();
        for _ in 0..4 {
            state.rotate_right();
        }
        assert_eq!(state.rotation, 0);
    }

    #[test]
    fn test_rotate_by_multiple_of_90() {
        let mut state = TransformState::new();
        state.rotate_by(-630).unwrap();
        assert_eq!(state.rotation, 90);
    }

    #[test]
    fn test_rotate_by_rejects_arbitrary_angle() {
        let mut state = TransformState::new();
        state.rotation = 90;
        let result = state.rotate_by(45);
        assert_eq!(result, Err(RetouchError::UnsupportedRotation(135)));
        // State untouched on failure
        assert_eq!(state.rotation, 90);
    }

    #[test]
    fn test_set_rotation_normalizes() {
        let mut state = TransformState::new();
        state.set_rotation(-180).unwrap();
        assert_eq!(state.rotation, 180);
        assert!(state.set_rotation(30).is_err());
    }

    #[test]
    fn test_tonal_setters_clamp() {
        let mut state = TransformState::new();
        state.set_brightness(250.0).unwrap();
        state.set_contrast(-20.0).unwrap();
        state.set_saturation(150.0).unwrap();
        assert_eq!(state.brightness, 200.0);
        assert_eq!(state.contrast, 0.0);
        assert_eq!(state.saturation, 150.0);
    }

    #[test]
    fn test_tonal_setters_reject_non_finite() {
        let mut state = TransformState::new();
        assert!(matches!(
            state.set_brightness(f32::NAN),
            Err(RetouchError::InvalidParameter {
                name: "brightness",
                ..
            })
        ));
        assert!(state.set_saturation(f32::INFINITY).is_err());
        assert_eq!(state.brightness, 100.0);
    }

    #[test]
    fn test_validate_rejects_unclamped_values() {
        let mut state = TransformState::new();
        state.contrast = -5.0;
        assert!(matches!(
            state.validate(),
            Err(RetouchError::InvalidParameter {
                name: "contrast",
                ..
            })
        ));

        let mut state = TransformState::new();
        state.rotation = 45;
        assert_eq!(state.validate(), Err(RetouchError::UnsupportedRotation(45)));
    }

    #[test]
    fn test_validate_accepts_unnormalized_quarter_turns() {
        let mut state = TransformState::new();
        state.rotation = -90;
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_toggle_and_reset() {
        let mut state = TransformState::new();
        state.toggle_flip_horizontal();
        state.toggle_flip_vertical();
        state.rotate_right();
        state.set_brightness(120.0).unwrap();
        assert!(!state.is_identity());

        state.reset();
        assert!(state.is_identity());
    }

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let state: TransformState =
            serde_json::from_str(r#"{"rotation": 90, "flipHorizontal": true}"#).unwrap();
        assert_eq!(state.rotation, 90);
        assert!(state.flip_horizontal);
        assert!(!state.flip_vertical);
        assert_eq!(state.brightness, 100.0);
    }

    #[test]
    fn test_preset_values() {
        let cases = [
            (TonalPreset::Enhance, 110.0, 120.0, 120.0),
            (TonalPreset::Grayscale, 100.0, 100.0, 0.0),
            (TonalPreset::Vivid, 90.0, 150.0, 120.0),
            (TonalPreset::Soft, 110.0, 90.0, 90.0),
        ];
        for (preset, brightness, contrast, saturation) in cases {
            let mut state = TransformState::new();
            state.apply_preset(preset);
            assert_eq!(state.brightness, brightness, "{:?}", preset);
            assert_eq!(state.contrast, contrast, "{:?}", preset);
            assert_eq!(state.saturation, saturation, "{:?}", preset);
            assert!(state.validate().is_ok());
        }
    }

    #[test]
    fn test_preset_overwrites_tone_keeps_geometry() {
        let mut state = TransformState::new();
        state.rotate_right();
        state.toggle_flip_vertical();
        state.set_saturation(10.0).unwrap();
        state.set_brightness(180.0).unwrap();

        state.apply_preset(TonalPreset::Grayscale);
        assert_eq!(state.rotation, 90);
        assert!(state.flip_vertical);
        assert_eq!(state.brightness, 100.0);
        assert_eq!(state.saturation, 0.0);

        state.apply_preset(TonalPreset::Vivid);
        assert_eq!(state.saturation, 120.0);
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("vivid".parse::<TonalPreset>(), Ok(TonalPreset::Vivid));
        assert_eq!(" Soft ".parse::<TonalPreset>(), Ok(TonalPreset::Soft));
        for preset in TonalPreset::ALL {
            assert_eq!(preset.name().parse::<TonalPreset>(), Ok(preset));
        }
        assert!(matches!(
            "sepia".parse::<TonalPreset>(),
            Err(RetouchError::InvalidParameter { name: "preset", .. })
        ));
    }

    #[test]
    fn test_preset_serde_names() {
        let preset: TonalPreset = serde_json::from_str(r#""grayscale""#).unwrap();
        assert_eq!(preset, TonalPreset::Grayscale);
        assert_eq!(serde_json::to_string(&TonalPreset::Enhance).unwrap(), r#""enhance""#);
    }
}
