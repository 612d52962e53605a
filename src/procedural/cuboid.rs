use super::RenderMesh;
use glamx::Vec3;

/// Generates a box mesh centered at the origin.
///
/// # Arguments
/// * `width`, `height`, `depth` - Full extents along X, Y and Z
///
/// # Example
/// ```
/// # use cubescene::procedural::cuboid;
/// let box_mesh = cuboid(1.0, 1.0, 1.0);
/// assert_eq!(box_mesh.indices().len(), 12);
/// ```
pub fn cuboid(width: f32, height: f32, depth: f32) -> RenderMesh {
    let mut cuboid = unit_cuboid();
    cuboid.scale_by(Vec3::new(width, height, depth));

    cuboid
}

/// Generates a 1x1x1 cube mesh centered at the origin.
///
/// Every face gets its own four vertices so that normals stay flat: 24 vertices,
/// 12 triangles, counter-clockwise when seen from outside.
pub fn unit_cuboid() -> RenderMesh {
    let coords = [
        Vec3::new(-0.5, -0.5, 0.5),
        Vec3::new(-0.5, -0.5, -0.5),
        Vec3::new(0.5, -0.5, -0.5),
        Vec3::new(0.5, -0.5, 0.5),
        Vec3::new(-0.5, 0.5, 0.5),
        Vec3::new(-0.5, 0.5, -0.5),
        Vec3::new(0.5, 0.5, -0.5),
        Vec3::new(0.5, 0.5, 0.5),
    ];

    let normals = [
        Vec3::NEG_X,
        Vec3::NEG_Z,
        Vec3::X,
        Vec3::Z,
        Vec3::NEG_Y,
        Vec3::Y,
    ];

    let faces = [
        [[4, 0], [5, 0], [0, 0]],
        [[5, 0], [1, 0], [0, 0]],
        [[5, 1], [6, 1], [1, 1]],
        [[6, 1], [2, 1], [1, 1]],
        [[6, 2], [7, 2], [3, 2]],
        [[2, 2], [6, 2], [3, 2]],
        [[7, 3], [4, 3], [0, 3]],
        [[3, 3], [7, 3], [0, 3]],
        [[0, 4], [1, 4], [2, 4]],
        [[3, 4], [0, 4], [2, 4]],
        [[7, 5], [6, 5], [5, 5]],
        [[4, 5], [7, 5], [5, 5]],
    ];

    RenderMesh::from_split(&coords, &normals, &faces)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_cube_has_flat_faces() {
        let mesh = unit_cuboid();
        assert_eq!(mesh.coords().len(), 24);
        assert_eq!(mesh.indices().len() * 3, 36);
        for n in mesh.normals() {
            assert!((n.length() - 1.0).abs() < 1.0e-6);
        }
    }

    #[test]
    fn triangles_wind_counter_clockwise_from_outside() {
        let mesh = cuboid(1.0, 2.0, 3.0);
        for [a, b, c] in mesh.indices() {
            let (pa, pb, pc) = (
                mesh.coords()[*a as usize],
                mesh.coords()[*b as usize],
                mesh.coords()[*c as usize],
            );
            let face_normal = (pb - pa).cross(pc - pa);
            assert!(face_normal.dot(mesh.normals()[*a as usize]) > 0.0);
        }
    }

    #[test]
    fn extents_are_honored() {
        let mesh = cuboid(2.0, 4.0, 6.0);
        let max = mesh.coords().iter().fold(Vec3::splat(f32::MIN), |m, c| m.max(*c));
        assert_eq!(max, Vec3::new(1.0, 2.0, 3.0));
    }
}
