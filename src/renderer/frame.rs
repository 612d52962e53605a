//! A frame described as plain data, before any GPU work.
//!
//! Building a [`Frame`] only reads the scene and the camera, so two frames
//! built from the same state compare equal. The GPU side just replays it.

use crate::camera::Camera3d;
use crate::color::Color;
use crate::light::DirectionalLight;
use crate::procedural::GeometryId;
use crate::resource::Shading;
use crate::scene::{RenderableId, SceneRoot};
use glamx::{Mat4, Vec3};

/// One indexed draw of one renderable.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCommand {
    pub renderable: RenderableId,
    pub geometry: GeometryId,
    /// Object to world.
    pub model: Mat4,
    pub color: Color,
    pub shading: Shading,
    pub shininess: f32,
}

/// Everything needed to draw the scene once from a camera.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub view: Mat4,
    pub projection: Mat4,
    pub eye: Vec3,
    pub lights: Vec<DirectionalLight>,
    pub ambient: f32,
    /// Draws in scene insertion order.
    pub draws: Vec<DrawCommand>,
}

impl Frame {
    /// Captures the current state of `root` as seen from `camera`.
    pub fn build(root: &SceneRoot, camera: &dyn Camera3d) -> Frame {
        let draws = root
            .iter()
            .map(|r| DrawCommand {
                renderable: r.id(),
                geometry: r.geometry().id(),
                model: r.transform().to_mat4(),
                color: r.material().color,
                shading: r.material().shading,
                shininess: r.material().shininess,
            })
            .collect();

        Frame {
            view: camera.view_transform(),
            projection: camera.projection(),
            eye: camera.eye(),
            lights: root.lights().to_vec(),
            ambient: root.ambient(),
            draws,
        }
    }

    /// Returns true if nothing would be drawn besides the background.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::PerspectiveCamera3d;
    use crate::procedural::unit_cuboid;
    use crate::resource::MeshMaterial;
    use crate::scene::Transform;
    use std::rc::Rc;

    fn scene() -> SceneRoot {
        let mesh = Rc::new(unit_cuboid());
        let mut root = SceneRoot::new();
        root.add_light(DirectionalLight::default());
        for x in [0.0, -2.0, 2.0] {
            root.add(
                mesh.clone(),
                MeshMaterial::default(),
                Transform::from_translation(Vec3::new(x, 0.0, 0.0)),
            );
        }
        root
    }

    #[test]
    fn building_twice_gives_the_same_frame() {
        let root = scene();
        let camera = PerspectiveCamera3d::default();
        assert_eq!(Frame::build(&root, &camera), Frame::build(&root, &camera));
    }

    #[test]
    fn draws_follow_insertion_order_and_share_geometry() {
        let root = scene();
        let frame = Frame::build(&root, &PerspectiveCamera3d::default());

        assert_eq!(frame.draws.len(), 3);
        assert_eq!(frame.lights.len(), 1);
        assert!(frame.draws.iter().all(|d| d.geometry == frame.draws[0].geometry));
        let xs: Vec<f32> = frame.draws.iter().map(|d| d.model.w_axis.x).collect();
        assert_eq!(xs, vec![0.0, -2.0, 2.0]);
    }
}
