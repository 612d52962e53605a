//! Building the row of cubes.

use crate::color::Color;
use crate::procedural::RenderMesh;
use crate::resource::{MeshMaterial, Shading};
use crate::scene::{RenderableId, SceneRoot, Transform};
use glamx::Vec3;
use std::rc::Rc;

/// One cube to add: its tint and where it sits along the X axis.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubeSpec {
    pub color: Color,
    pub offset: f32,
}

impl CubeSpec {
    pub fn new(color: Color, offset: f32) -> Self {
        CubeSpec { color, offset }
    }
}

/// Adds one renderable per entry of `specs` to `root`.
///
/// Every renderable shares `geometry` but gets its own material, tinted with
/// the entry's color, and its own transform, translated by the entry's offset.
/// Ids are returned in the order of `specs`.
pub fn assemble(
    root: &mut SceneRoot,
    geometry: &Rc<RenderMesh>,
    specs: &[CubeSpec],
    shading: Shading,
) -> Vec<RenderableId> {
    specs
        .iter()
        .map(|spec| {
            let material = MeshMaterial {
                color: spec.color,
                shading,
                ..MeshMaterial::default()
            };
            let transform = Transform::from_translation(Vec3::new(spec.offset, 0.0, 0.0));
            root.add(geometry.clone(), material, transform)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;
    use crate::procedural::unit_cuboid;

    #[test]
    fn one_renderable_per_spec() {
        let mesh = Rc::new(unit_cuboid());
        let mut root = SceneRoot::new();
        let specs = [
            CubeSpec::new(color::SEA_GREEN, 0.0),
            CubeSpec::new(color::PURPLE, -2.0),
            CubeSpec::new(color::OCHRE, 2.0),
        ];

        let ids = assemble(&mut root, &mesh, &specs, Shading::Phong);

        assert_eq!(ids.len(), 3);
        assert_eq!(root.len(), 3);
        for (id, spec) in ids.iter().zip(&specs) {
            let r = root.get(*id).unwrap();
            assert_eq!(r.transform().position, Vec3::new(spec.offset, 0.0, 0.0));
            assert_eq!(r.transform().rotation, Vec3::ZERO);
            assert_eq!(r.material().color, spec.color);
            assert!(Rc::ptr_eq(r.geometry(), &mesh));
        }
        // Three renderables plus the local handle.
        assert_eq!(Rc::strong_count(&mesh), 4);
    }

    #[test]
    fn empty_specs_add_nothing() {
        let mut root = SceneRoot::new();
        let ids = assemble(&mut root, &Rc::new(unit_cuboid()), &[], Shading::Basic);
        assert!(ids.is_empty());
        assert!(root.is_empty());
    }
}
