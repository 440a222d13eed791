//! Math utilities and types
//!
//! Provides the math types shared by the document model, the scene graph and
//! the converted engine objects.

pub use nalgebra::{
    Vector2, Vector3, Vector4,
    Matrix4,
    Quaternion,
    Unit,
};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Build a normalized rotation from `[x, y, z, w]` components.
///
/// A zero-length quaternion yields the identity rotation.
pub fn quat_from_xyzw(q: [f32; 4]) -> Quat {
    let raw = Quaternion::new(q[3], q[0], q[1], q[2]);
    if raw.norm_squared() <= f32::EPSILON {
        return Quat::identity();
    }
    Quat::new_normalize(raw)
}

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform from its three components
    pub fn from_parts(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self { position, rotation, scale }
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Convert to a transformation matrix
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Combine this transform (parent) with another (child)
    pub fn combine(&self, other: &Transform) -> Transform {
        Transform {
            position: self.position + self.rotation * (self.scale.component_mul(&other.position)),
            rotation: self.rotation * other.rotation,
            scale: self.scale.component_mul(&other.scale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_quat_from_zero_is_identity() {
        let q = quat_from_xyzw([0.0, 0.0, 0.0, 0.0]);
        assert_eq!(q, Quat::identity());
    }

    #[test]
    fn test_quat_from_xyzw_normalizes() {
        let q = quat_from_xyzw([0.0, 0.0, 0.0, 2.0]);
        assert_relative_eq!(q.w, 1.0);
    }

    #[test]
    fn test_combine_translations() {
        let parent = Transform::from_position(Vec3::new(1.0, 0.0, 0.0));
        let child = Transform::from_position(Vec3::new(0.0, 2.0, 0.0));
        let world = parent.combine(&child);
        assert_relative_eq!(world.position, Vec3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_combine_applies_parent_scale() {
        let parent = Transform::from_parts(Vec3::zeros(), Quat::identity(), Vec3::new(2.0, 2.0, 2.0));
        let child = Transform::from_position(Vec3::new(1.0, 1.0, 1.0));
        let world = parent.combine(&child);
        assert_relative_eq!(world.position, Vec3::new(2.0, 2.0, 2.0));
        assert_relative_eq!(world.scale, Vec3::new(2.0, 2.0, 2.0));
    }
}
