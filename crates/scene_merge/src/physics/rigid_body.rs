//! Rigid body description

use crate::foundation::math::Vec3;

/// How the physics runtime treats a body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    /// Never moves
    Static,
    /// Fully simulated
    Dynamic,
    /// Moved by the game, pushes dynamic bodies
    Kinematic,
    /// Detects overlaps without a collision response
    Ghost,
}

/// Collision shape of a body
#[derive(Debug, Clone, PartialEq)]
pub enum CollisionShape {
    /// Sphere with a radius
    Sphere {
        /// Radius
        radius: f32,
    },
    /// Box with half extents
    Box {
        /// Half size on each axis
        half_extents: Vec3,
    },
    /// Capsule along Y
    Capsule {
        /// Radius
        radius: f32,
        /// Height of the cylindrical part
        height: f32,
    },
    /// Triangle mesh of a mesh registered under this id
    Mesh {
        /// Mesh id
        mesh_id: String,
    },
}

/// Rigid body attached to a scene node
#[derive(Debug, Clone)]
pub struct RigidBody {
    /// Body name
    pub name: String,
    /// Simulation type
    pub body_type: BodyType,
    /// Mass in kilograms (0 for static bodies)
    pub mass: f32,
    /// Friction coefficient
    pub friction: f32,
    /// Restitution (bounciness)
    pub restitution: f32,
    /// Linear damping
    pub linear_damping: f32,
    /// Angular damping
    pub angular_damping: f32,
    /// Per-axis factor applied to linear motion
    pub linear_factor: Vec3,
    /// Per-axis factor applied to angular motion
    pub angular_factor: Vec3,
    /// Collision layers this body belongs to
    pub collision_group: u32,
    /// Collision layers this body collides with
    pub collision_mask: u32,
    /// Collision shape
    pub shape: CollisionShape,
}
