//! Putting the stock scene together from a [`DemoConfig`].

use crate::assembler::assemble;
use crate::camera::PerspectiveCamera3d;
use crate::config::{CameraSetup, DemoConfig};
use crate::procedural;
use crate::scene::SceneRoot;
use std::rc::Rc;

/// Builds the camera described by `setup`.
///
/// With `aspect_from_viewport`, a non-empty `viewport` replaces the configured
/// aspect ratio. This only happens here: later resizes leave the camera alone.
pub fn camera(setup: &CameraSetup, viewport: Option<(u32, u32)>) -> PerspectiveCamera3d {
    let mut camera = PerspectiveCamera3d::new(setup.fov, setup.aspect, setup.znear, setup.zfar)
        .with_position(setup.position)
        .look_at(setup.target);

    if setup.aspect_from_viewport {
        if let Some((width, height)) = viewport {
            camera.set_viewport(width, height);
        }
    }

    camera
}

/// Builds the lit scene root holding one cube per configured entry.
pub fn scene(config: &DemoConfig) -> SceneRoot {
    let mut root = SceneRoot::new();
    root.add_light(config.light.clone());
    root.set_ambient(config.ambient);

    let size = config.cube_size;
    let geometry = Rc::new(procedural::cuboid(size.x, size.y, size.z));
    let ids = assemble(&mut root, &geometry, &config.cubes, config.shading);
    log::debug!("assembled {} cubes sharing {:?}", ids.len(), geometry.id());

    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera3d;
    use approx::assert_relative_eq;

    #[test]
    fn viewport_only_matters_when_asked() {
        let mut setup = CameraSetup::default();
        assert_eq!(camera(&setup, Some((300, 150))).aspect(), 2.0);
        assert_eq!(camera(&setup, Some((300, 300))).aspect(), 2.0);

        setup.aspect_from_viewport = true;
        assert_relative_eq!(camera(&setup, Some((300, 100))).aspect(), 3.0);
        assert_eq!(camera(&setup, None).aspect(), 2.0);
        assert_eq!(camera(&setup, Some((0, 100))).aspect(), 2.0);
    }

    #[test]
    fn default_camera_looks_down_negative_z() {
        let camera = camera(&CameraSetup::default(), None);
        assert_eq!(camera.eye(), glamx::Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(camera.clip_planes(), (0.1, 5.0));
    }

    #[test]
    fn default_scene_has_three_lit_cubes() {
        let root = scene(&DemoConfig::default());
        assert_eq!(root.len(), 3);
        assert_eq!(root.lights().len(), 1);
        assert_eq!(root.ambient(), 0.0);
    }
}
