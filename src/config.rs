//! Setup structures for the window and the demo scene.
//!
//! Everything has a `Default` matching the stock demo, so
//! `DemoConfig::default()` reproduces it exactly.

use crate::assembler::CubeSpec;
use crate::color::{self, Color};
use crate::light::DirectionalLight;
use crate::resource::Shading;
use glamx::Vec3;

/// The possible number of samples for multisample anti-aliasing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumSamples {
    /// Multisampling disabled.
    One = 1,
    Two = 2,
    #[default]
    Four = 4,
    Eight = 8,
}

impl NumSamples {
    /// Create a `NumSamples` from a number.
    /// Returns `None` if `i` is invalid.
    pub fn from_u32(i: u32) -> Option<NumSamples> {
        match i {
            1 => Some(NumSamples::One),
            2 => Some(NumSamples::Two),
            4 => Some(NumSamples::Four),
            8 => Some(NumSamples::Eight),
            _ => None,
        }
    }

    #[inline]
    pub fn count(self) -> u32 {
        self as u32
    }
}

/// Canvas options.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanvasSetup {
    /// Title of the native window.
    pub title: String,
    /// Initial size of the native window, in logical pixels.
    pub width: u32,
    pub height: u32,
    /// Id of the `<canvas>` element to draw into on the web.
    pub canvas_id: String,
    /// Is vsync enabled?
    pub vsync: bool,
    /// Anti-aliasing. Lowered to what the device supports.
    pub samples: NumSamples,
    /// Clear color.
    pub background: Color,
}

impl Default for CanvasSetup {
    fn default() -> Self {
        CanvasSetup {
            title: "cubescene".to_string(),
            width: 800,
            height: 400,
            canvas_id: "c".to_string(),
            vsync: true,
            samples: NumSamples::Four,
            background: color::BLACK,
        }
    }
}

/// Perspective camera parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraSetup {
    /// Vertical field of view, in degrees.
    pub fov: f32,
    /// Used when `aspect_from_viewport` is false, or the viewport is empty.
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
    pub position: Vec3,
    pub target: Vec3,
    /// Derive the aspect ratio from the surface size once, at startup.
    pub aspect_from_viewport: bool,
}

impl Default for CameraSetup {
    fn default() -> Self {
        CameraSetup {
            fov: 75.0,
            aspect: 2.0,
            znear: 0.1,
            zfar: 5.0,
            position: Vec3::new(0.0, 0.0, 2.0),
            target: Vec3::ZERO,
            aspect_from_viewport: false,
        }
    }
}

/// The whole demo: canvas, camera, lighting and the row of cubes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DemoConfig {
    pub canvas: CanvasSetup,
    pub camera: CameraSetup,
    pub light: DirectionalLight,
    pub ambient: f32,
    /// Edge lengths of the shared box.
    pub cube_size: Vec3,
    pub shading: Shading,
    pub cubes: Vec<CubeSpec>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            canvas: CanvasSetup::default(),
            camera: CameraSetup::default(),
            light: DirectionalLight::default(),
            ambient: 0.0,
            cube_size: Vec3::ONE,
            shading: Shading::Phong,
            cubes: vec![
                CubeSpec::new(color::hex(0x44aa88), 0.0),
                CubeSpec::new(color::hex(0x8844aa), -2.0),
                CubeSpec::new(color::hex(0xaa8844), 2.0),
            ],
        }
    }
}
