//! Core type definitions shared between providers and consumers.
//!
//! Serialized field names are camelCase to match the metadata field naming
//! used on the wire (`scaleX`, `rotate90`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display transform for an image: mirror first, then rotate clockwise.
///
/// `scale_x`/`scale_y` are `1` or `-1` (a mirror on that axis); `rotate90`
/// counts clockwise quarter turns in `0..=3`.
/// Deserialization rejects values outside those ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawImageTransform")]
pub struct ImageTransform {
    pub scale_x: i8,
    pub scale_y: i8,
    pub rotate90: u8,
}

/// Unchecked wire form of [`ImageTransform`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawImageTransform {
    scale_x: i8,
    scale_y: i8,
    rotate90: u8,
}

impl TryFrom<RawImageTransform> for ImageTransform {
    type Error = String;

    fn try_from(raw: RawImageTransform) -> Result<Self, Self::Error> {
        for (axis, scale) in [("scaleX", raw.scale_x), ("scaleY", raw.scale_y)] {
            if scale != 1 && scale != -1 {
                return Err(format!("{axis} must be 1 or -1, got {scale}"));
            }
        }
        if raw.rotate90 > 3 {
            return Err(format!("rotate90 must be in 0..=3, got {}", raw.rotate90));
        }
        Ok(Self {
            scale_x: raw.scale_x,
            scale_y: raw.scale_y,
            rotate90: raw.rotate90,
        })
    }
}

impl ImageTransform {
    /// The transform that leaves an image unchanged.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            scale_x: 1,
            scale_y: 1,
            rotate90: 0,
        }
    }

    /// Build a transform, normalizing scales to `±1` and rotation to `0..=3`.
    #[must_use]
    pub fn new(scale_x: i8, scale_y: i8, rotate90: u8) -> Self {
        Self {
            scale_x: if scale_x < 0 { -1 } else { 1 },
            scale_y: if scale_y < 0 { -1 } else { 1 },
            rotate90: rotate90 % 4,
        }
    }

    /// Whether applying this transform is a no-op.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

impl Default for ImageTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for ImageTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scale({}, {}) rotate({}deg)",
            self.scale_x,
            self.scale_y,
            u16::from(self.rotate90) * 90
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert!(ImageTransform::identity().is_identity());
        assert!(ImageTransform::default().is_identity());
        assert!(!ImageTransform::new(-1, 1, 0).is_identity());
    }

    #[test]
    fn test_new_normalizes() {
        let t = ImageTransform::new(-5, 3, 6);
        assert_eq!(t.scale_x, -1);
        assert_eq!(t.scale_y, 1);
        assert_eq!(t.rotate90, 2);
    }

    #[test]
    fn test_serde_camel_case() {
        let t = ImageTransform::new(-1, 1, 1);
        let json = serde_json::to_value(t).unwrap();
        assert_eq!(json, serde_json::json!({"scaleX": -1, "scaleY": 1, "rotate90": 1}));
    }

    #[test]
    fn test_deserialize_valid() {
        let t: ImageTransform =
            serde_json::from_str(r#"{"scaleX":1,"scaleY":-1,"rotate90":3}"#).unwrap();
        assert_eq!(t, ImageTransform::new(1, -1, 3));
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        let err = serde_json::from_str::<ImageTransform>(r#"{"scaleX":7,"scaleY":1,"rotate90":0}"#)
            .unwrap_err();
        assert!(err.to_string().contains("scaleX must be 1 or -1, got 7"));

        let err = serde_json::from_str::<ImageTransform>(r#"{"scaleX":1,"scaleY":0,"rotate90":0}"#)
            .unwrap_err();
        assert!(err.to_string().contains("scaleY must be 1 or -1, got 0"));

        let err = serde_json::from_str::<ImageTransform>(r#"{"scaleX":1,"scaleY":1,"rotate90":9}"#)
            .unwrap_err();
        assert!(err.to_string().contains("rotate90 must be in 0..=3, got 9"));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ImageTransform::new(1, -1, 3).to_string(),
            "scale(1, -1) rotate(270deg)"
        );
    }
}
