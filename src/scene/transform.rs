use glamx::{Mat4, Quat, Vec3};

/// Position, orientation and scale of a renderable.
///
/// Rotation is stored as Euler angles in radians, applied in X, then Y, then Z
/// order (intrinsic), so `rotation.x` and `rotation.y` can be animated
/// independently.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    /// Translation.
    pub position: Vec3,
    /// Euler angles, in radians.
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Transform::IDENTITY
    }
}

impl Transform {
    /// No translation, no rotation, unit scale.
    pub const IDENTITY: Transform = Transform {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    /// A pure translation.
    pub fn from_translation(position: Vec3) -> Self {
        Transform {
            position,
            ..Transform::IDENTITY
        }
    }

    /// The orientation as a quaternion.
    pub fn orientation(&self) -> Quat {
        Quat::from_rotation_x(self.rotation.x)
            * Quat::from_rotation_y(self.rotation.y)
            * Quat::from_rotation_z(self.rotation.z)
    }

    /// The model matrix: scale, then rotate, then translate.
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.orientation(), self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn translation_moves_the_origin() {
        let t = Transform::from_translation(Vec3::new(-2.0, 0.0, 0.0));
        assert_eq!(t.to_mat4().transform_point3(Vec3::ZERO), Vec3::new(-2.0, 0.0, 0.0));
    }

    #[test]
    fn x_rotation_is_applied_before_y() {
        let t = Transform {
            rotation: Vec3::new(FRAC_PI_2, FRAC_PI_2, 0.0),
            ..Transform::IDENTITY
        };
        // The Y rotation leaves +Y alone, then the X rotation takes it to +Z.
        let p = t.to_mat4().transform_vector3(Vec3::Y);
        assert_relative_eq!(p.x, 0.0, epsilon = 1.0e-6);
        assert_relative_eq!(p.y, 0.0, epsilon = 1.0e-6);
        assert_relative_eq!(p.z, 1.0, epsilon = 1.0e-6);
    }
}
