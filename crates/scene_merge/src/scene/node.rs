//! Scene nodes and the objects attached to them

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::foundation::collections::NodeKey;
use crate::foundation::math::{Quat, Transform, Vec2, Vec3, Vec4};
use crate::physics::RigidBody;
use crate::render::{Animation, ColorRGBA, Light, Material, Mesh, Skeleton};

/// Render queue a geometry is drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderBucket {
    /// Opaque geometry, front to back
    Opaque,
    /// Blended geometry, back to front
    Transparent,
    /// Drawn behind everything
    Sky,
    /// Blended after post-processing
    Translucent,
    /// Screen-space overlay
    Gui,
    /// Use the parent's bucket
    #[default]
    Inherit,
}

impl RenderBucket {
    /// Buckets in directive index order
    pub const ALL: [Self; 6] = [
        Self::Opaque,
        Self::Transparent,
        Self::Sky,
        Self::Translucent,
        Self::Gui,
        Self::Inherit,
    ];

    /// Bucket for a numeric render-bucket directive (truncated toward zero)
    pub fn from_directive(value: f32) -> Option<Self> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        // truncation is the directive encoding
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Self::ALL.get(value as usize).copied()
    }
}

/// Drawable pairing of a mesh with a material
#[derive(Debug, Clone)]
pub struct Geometry {
    /// Geometry name (the mesh id)
    pub name: String,
    /// Vertex data
    pub mesh: Arc<Mesh>,
    /// Material used to draw the mesh
    pub material: Arc<Material>,
    /// Render queue
    pub bucket: RenderBucket,
}

/// Typed value stored in a node's user data
#[derive(Debug, Clone, PartialEq)]
pub enum UserValue {
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// Float
    Float(f32),
    /// Text
    Text(String),
    /// Two component vector
    Vec2(Vec2),
    /// Three component vector
    Vec3(Vec3),
    /// Four component vector
    Vec4(Vec4),
    /// Rotation
    Quat(Quat),
    /// Color
    Color(ColorRGBA),
}

/// Node of the scene graph
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// Node name
    pub name: String,
    /// Transform relative to the parent
    pub transform: Transform,
    pub(crate) parent: Option<NodeKey>,
    pub(crate) children: Vec<NodeKey>,
    /// Drawables attached to this node
    pub geometries: Vec<Geometry>,
    /// Lights attached to this node
    pub lights: Vec<Arc<Light>>,
    /// Skeleton driving skinned geometries under this node
    pub skeleton: Option<Arc<Skeleton>>,
    /// Animation clips playable on this node
    pub animations: Vec<Arc<Animation>>,
    /// Rigid body simulated for this node
    pub rigid_body: Option<Arc<RigidBody>>,
    /// Custom parameters
    pub user_data: BTreeMap<String, UserValue>,
}

impl Node {
    /// Create a detached node
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create a detached node with a local transform
    pub fn with_transform(name: impl Into<String>, transform: Transform) -> Self {
        Self {
            name: name.into(),
            transform,
            ..Default::default()
        }
    }

    /// Parent node, `None` for the root
    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    /// Child nodes in attach order
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }
}
