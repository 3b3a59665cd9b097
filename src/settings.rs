//! View configuration
//!
//! How the ray fan is shaped and projected. Persisted by the driver wherever
//! it keeps its config; this module only speaks JSON strings.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_FOV, DEFAULT_RAY_COUNT};

/// Ray fan shape and projection policy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Total angular width of the fan, radians
    pub fov: f32,
    /// Rays per frame. At least 2: the fan spacing divides by `ray_count - 1`.
    pub ray_count: u32,
    /// Report perpendicular (fish-eye corrected) distances instead of raw
    /// Euclidean ones. Off by default; projection callers opt in.
    pub fisheye_correction: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            fov: DEFAULT_FOV,
            ray_count: DEFAULT_RAY_COUNT,
            fisheye_correction: false,
        }
    }
}

impl ViewConfig {
    /// A raw-distance view. Fewer than 2 rays or a non-positive fov is a
    /// construction error the caller must not produce.
    pub fn new(fov: f32, ray_count: u32) -> Self {
        assert!(fov > 0.0, "fov must be positive");
        assert!(ray_count >= 2, "ray fan needs at least 2 rays");
        Self {
            fov,
            ray_count,
            fisheye_correction: false,
        }
    }

    /// Angular offset of ray `index` from the facing direction, spanning
    /// `[-fov/2, fov/2]` left to right
    #[inline]
    pub fn ray_offset(&self, index: u32) -> f32 {
        -self.fov / 2.0 + index as f32 * self.fov / (self.ray_count - 1) as f32
    }

    /// Parse a config from JSON, falling back to defaults when the input is
    /// malformed or describes an unusable fan
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<ViewConfig>(json) {
            Ok(config) if config.ray_count >= 2 && config.fov > 0.0 => {
                log::info!(
                    "Loaded view config: fov={:.3}, {} rays",
                    config.fov,
                    config.ray_count
                );
                config
            }
            Ok(_) => {
                log::warn!("View config describes an unusable fan, using defaults");
                Self::default()
            }
            Err(err) => {
                log::warn!("Failed to parse view config ({err}), using defaults");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_ray_offsets_span_the_fov() {
        let view = ViewConfig::new(FRAC_PI_2, 5);
        assert!((view.ray_offset(0) + FRAC_PI_2 / 2.0).abs() < 1e-6);
        assert!(view.ray_offset(2).abs() < 1e-6);
        assert!((view.ray_offset(4) - FRAC_PI_2 / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_json_round_trip() {
        let view = ViewConfig::new(1.2, 320);
        let json = view.to_json().expect("serializes");
        assert_eq!(ViewConfig::from_json(&json), view);
    }

    #[test]
    fn test_from_json_falls_back_on_garbage() {
        assert_eq!(ViewConfig::from_json("not json"), ViewConfig::default());
    }

    #[test]
    fn test_from_json_rejects_single_ray_fan() {
        let json = r#"{"fov":1.0,"ray_count":1,"fisheye_correction":false}"#;
        assert_eq!(ViewConfig::from_json(json), ViewConfig::default());
    }

    #[test]
    #[should_panic(expected = "at least 2 rays")]
    fn test_new_rejects_single_ray_fan() {
        ViewConfig::new(1.0, 1);
    }
}
