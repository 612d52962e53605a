use crate::camera::Camera3d;
use glamx::{Mat4, Vec3};

/// A perspective camera with a fixed pose.
///
/// The aspect ratio is whatever it was last set to: the camera does not follow
/// window resizes on its own. Use [`set_viewport`](Self::set_viewport) once at
/// startup to derive it from the drawing surface.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerspectiveCamera3d {
    fov: f32,
    aspect: f32,
    znear: f32,
    zfar: f32,
    eye: Vec3,
    at: Vec3,
}

impl Default for PerspectiveCamera3d {
    /// 75° vertical field of view, 2:1 aspect, clip planes at 0.1 and 5, two
    /// units back from the origin.
    fn default() -> Self {
        PerspectiveCamera3d::new(75.0, 2.0, 0.1, 5.0).with_position(Vec3::new(0.0, 0.0, 2.0))
    }
}

impl PerspectiveCamera3d {
    /// Creates a camera at the origin looking down `-Z`.
    ///
    /// # Arguments
    /// * `fov` - Vertical field of view, in degrees
    /// * `aspect` - Width over height of the viewport
    /// * `znear`, `zfar` - Clipping plane distances
    pub fn new(fov: f32, aspect: f32, znear: f32, zfar: f32) -> PerspectiveCamera3d {
        PerspectiveCamera3d {
            fov,
            aspect,
            znear,
            zfar,
            eye: Vec3::ZERO,
            at: Vec3::NEG_Z,
        }
    }

    /// Moves the camera, keeping its viewing direction.
    pub fn with_position(mut self, eye: Vec3) -> Self {
        let dir = self.at - self.eye;
        self.eye = eye;
        self.at = eye + dir;
        self
    }

    /// Points the camera at `at`.
    pub fn look_at(mut self, at: Vec3) -> Self {
        self.at = at;
        self
    }

    /// Vertical field of view, in degrees.
    #[inline]
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Width over height of the viewport.
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Derives the aspect ratio from a viewport size. Zero-sized viewports are ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

impl Camera3d for PerspectiveCamera3d {
    fn eye(&self) -> Vec3 {
        self.eye
    }

    fn view_transform(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.at, Vec3::Y)
    }

    fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), self.aspect, self.znear, self.zfar)
    }

    fn clip_planes(&self) -> (f32, f32) {
        (self.znear, self.zfar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glamx::Vec2;

    #[test]
    fn default_camera_matches_demo_setup() {
        let cam = PerspectiveCamera3d::default();
        assert_eq!(cam.fov(), 75.0);
        assert_eq!(cam.aspect(), 2.0);
        assert_eq!(cam.clip_planes(), (0.1, 5.0));
        assert_eq!(cam.eye(), Vec3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn origin_projects_to_viewport_center() {
        let cam = PerspectiveCamera3d::default();
        let p = cam.project(Vec3::ZERO, Vec2::new(800.0, 400.0));
        assert_relative_eq!(p.x, 400.0, epsilon = 1.0e-3);
        assert_relative_eq!(p.y, 200.0, epsilon = 1.0e-3);
    }

    #[test]
    fn viewport_derives_aspect() {
        let mut cam = PerspectiveCamera3d::default();
        cam.set_viewport(300, 150);
        assert_eq!(cam.aspect(), 2.0);
        cam.set_viewport(640, 480);
        assert_relative_eq!(cam.aspect(), 4.0 / 3.0);
        cam.set_viewport(0, 480);
        assert_relative_eq!(cam.aspect(), 4.0 / 3.0);
    }

    #[test]
    fn moving_keeps_viewing_direction() {
        let cam =
            PerspectiveCamera3d::new(60.0, 1.0, 0.1, 10.0).with_position(Vec3::new(1.0, 2.0, 3.0));
        let forward = cam.view_transform().inverse().transform_vector3(Vec3::NEG_Z);
        assert_relative_eq!(forward.z, -1.0, epsilon = 1.0e-5);
    }
}
