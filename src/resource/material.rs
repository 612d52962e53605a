//! Appearance descriptors attached to renderables.

use crate::color::Color;

/// How a surface responds to the scene lights.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shading {
    /// Flat color, visible without any light.
    Basic,
    /// Lambert diffuse plus Blinn-Phong specular from every directional light.
    #[default]
    Phong,
}

impl Shading {
    /// The value the object shader switches on.
    #[inline]
    pub(crate) fn shader_mode(self) -> u32 {
        match self {
            Shading::Basic => 0,
            Shading::Phong => 1,
        }
    }
}

/// The appearance of one renderable: a tint and a shading model.
///
/// Each renderable owns its own copy, so recoloring one never affects another
/// even when they share a mesh.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeshMaterial {
    /// Base color.
    pub color: Color,
    /// Shading model.
    pub shading: Shading,
    /// Specular exponent, only used by [`Shading::Phong`].
    pub shininess: f32,
}

impl Default for MeshMaterial {
    fn default() -> Self {
        MeshMaterial {
            color: crate::color::WHITE,
            shading: Shading::Phong,
            shininess: 30.0,
        }
    }
}
