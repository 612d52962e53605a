//! Lighting configuration for 3D scenes.
//!
//! The scene root owns a list of directional lights plus a global ambient term.
//! Lit (`Phong`) materials use both; unlit (`Basic`) materials ignore them.

use crate::color::Color;
use glamx::Vec3;

/// Maximum number of lights uploaded to the GPU per frame.
pub const MAX_LIGHTS: usize = 4;

/// A directional light with parallel rays (like the sun).
///
/// Rays travel from `position` towards `target`, so only the difference of the
/// two matters; moving both by the same amount changes nothing.
///
/// # Examples
/// ```
/// # use cubescene::light::DirectionalLight;
/// # use cubescene::color::WHITE;
/// # use glamx::Vec3;
/// let key = DirectionalLight::new(WHITE, 3.0).with_position(Vec3::new(-1.0, 2.0, 4.0));
/// assert!(key.direction().z < 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionalLight {
    /// The color of the light (RGBA, each component 0.0-1.0).
    pub color: Color,
    /// The intensity multiplier for the light.
    pub intensity: f32,
    /// Where the light is placed.
    pub position: Vec3,
    /// The point the light is aimed at.
    pub target: Vec3,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            color: crate::color::WHITE,
            intensity: 3.0,
            position: Vec3::new(-1.0, 2.0, 4.0),
            target: Vec3::ZERO,
        }
    }
}

impl DirectionalLight {
    /// Creates a light at the default position, aimed at the origin.
    pub fn new(color: Color, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            ..Default::default()
        }
    }

    /// Sets the light position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Sets the point the light is aimed at.
    pub fn with_target(mut self, target: Vec3) -> Self {
        self.target = target;
        self
    }

    /// The unit direction the rays travel in.
    ///
    /// Falls back to `-Z` when position and target coincide.
    pub fn direction(&self) -> Vec3 {
        (self.target - self.position).normalize_or(Vec3::NEG_Z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn direction_points_from_position_to_target() {
        let light = DirectionalLight::default().with_position(Vec3::new(0.0, 5.0, 0.0));
        let dir = light.direction();
        assert_relative_eq!(dir.x, 0.0);
        assert_relative_eq!(dir.y, -1.0);
        assert_relative_eq!(dir.z, 0.0);
    }

    #[test]
    fn degenerate_light_falls_back_to_forward() {
        let light = DirectionalLight::default()
            .with_position(Vec3::ONE)
            .with_target(Vec3::ONE);
        assert_eq!(light.direction(), Vec3::NEG_Z);
    }
}
