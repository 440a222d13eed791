//! Records for the non-material entity categories

use serde::{Deserialize, Serialize};

use super::TransformRecord;
use crate::render::Topology;

fn one() -> f32 {
    1.0
}

fn half() -> f32 {
    0.5
}

fn white() -> [f32; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

fn unit3() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

fn first_layer() -> u32 {
    1
}

fn all_layers() -> u32 {
    u32::MAX
}

/// Decoded scene node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Stable id
    pub id: String,
    /// Display name, the id is used when absent
    #[serde(default)]
    pub name: Option<String>,
    /// Local transform
    #[serde(default)]
    pub transform: TransformRecord,
}

impl NodeRecord {
    /// Node with an identity transform
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), name: None, transform: TransformRecord::default() }
    }
}

/// Skinning arrays of a mesh
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkinRecord {
    /// Four bone indices per vertex
    pub bone_indices: Vec<[u16; 4]>,
    /// Four bone weights per vertex
    pub bone_weights: Vec<[f32; 4]>,
}

/// Decoded mesh
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshRecord {
    /// Stable id
    pub id: String,
    /// Display name
    pub name: Option<String>,
    /// Primitive topology
    pub topology: Topology,
    /// Vertex positions
    pub positions: Vec<[f32; 3]>,
    /// Vertex normals
    pub normals: Vec<[f32; 3]>,
    /// Vertex tangents
    pub tangents: Vec<[f32; 3]>,
    /// Texture coordinate sets
    pub texcoords: Vec<Vec<[f32; 2]>>,
    /// Vertex colors
    pub colors: Vec<[f32; 4]>,
    /// Index buffer
    pub indices: Vec<u32>,
    /// Optional skinning data
    pub skin: Option<SkinRecord>,
}

/// Kind of a decoded light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightKind {
    /// Point light
    Point,
    /// Spot light
    Spot,
    /// Directional light
    Directional,
    /// Ambient light
    Ambient,
}

/// Cone of a spot light, angles in radians
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpotAngle {
    /// Full intensity cone
    pub inner: f32,
    /// Falloff cone
    pub outer: f32,
}

/// Decoded light
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightRecord {
    /// Stable id
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Light kind
    pub kind: LightKind,
    /// Linear RGBA color
    #[serde(default = "white")]
    pub color: [f32; 4],
    /// Intensity multiplier
    #[serde(default = "one")]
    pub intensity: f32,
    /// Influence radius of point and spot lights
    #[serde(default)]
    pub radius: f32,
    /// Cone of spot lights
    #[serde(default)]
    pub spot_angle: Option<SpotAngle>,
    /// Whether the light casts shadows
    #[serde(default)]
    pub cast_shadow: bool,
}

/// Decoded bone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoneRecord {
    /// Bone id, unique inside its skeleton
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Bind pose relative to the parent bone
    #[serde(default)]
    pub transform: TransformRecord,
}

/// Parent/child link between two bones of a skeleton
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoneLink {
    /// Parent bone id
    pub parent: String,
    /// Child bone id
    pub child: String,
}

/// Decoded skeleton
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkeletonRecord {
    /// Stable id
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Bones in declaration order
    #[serde(default)]
    pub bones: Vec<BoneRecord>,
    /// Bone hierarchy
    #[serde(default)]
    pub bones_graph: Vec<BoneLink>,
}

/// Keyframes for one animated target
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipRecord {
    /// Bone or node id the clip drives
    pub target_id: String,
    /// Sample times in milliseconds
    pub sample_times_ms: Vec<u32>,
    /// Translation per sample (may be empty)
    pub translations: Vec<[f32; 3]>,
    /// Rotation `[x, y, z, w]` per sample (may be empty)
    pub rotations: Vec<[f32; 4]>,
    /// Scale per sample (may be empty)
    pub scales: Vec<[f32; 3]>,
}

/// Decoded keyframed animation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationRecord {
    /// Stable id
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Duration in milliseconds
    pub duration_ms: u32,
    /// Per-target keyframes
    #[serde(default)]
    pub clips: Vec<ClipRecord>,
}

/// Value of a custom parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CustomValue {
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// Float
    Float(f32),
    /// Text
    Text(String),
    /// Two component vector
    Vec2([f32; 2]),
    /// Three component vector
    Vec3([f32; 3]),
    /// Four component vector
    Vec4([f32; 4]),
    /// Rotation `[x, y, z, w]`
    Quat([f32; 4]),
    /// RGBA color
    Color([f32; 4]),
}

/// One named custom parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomParam {
    /// Parameter name
    pub name: String,
    /// Value
    pub value: CustomValue,
}

/// Decoded list of custom parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomParamList {
    /// Stable id
    pub id: String,
    /// Parameters in document order
    #[serde(default)]
    pub params: Vec<CustomParam>,
}

/// Kind of a decoded rigid body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    /// Never moves
    Static,
    /// Fully simulated
    Dynamic,
    /// Moved by the game
    Kinematic,
    /// Overlap detection only
    Ghost,
}

/// Decoded collision shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeRecord {
    /// Sphere
    Sphere {
        /// Radius
        radius: f32,
    },
    /// Box
    Box {
        /// Half size on each axis
        half_extents: [f32; 3],
    },
    /// Capsule along Y
    Capsule {
        /// Radius
        radius: f32,
        /// Height of the cylindrical part
        height: f32,
    },
    /// Triangle mesh taken from a mesh record
    Mesh {
        /// Mesh id
        mesh_id: String,
    },
}

/// Decoded rigid body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RigidBodyRecord {
    /// Stable id
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Body kind
    pub kind: BodyKind,
    /// Mass in kilograms
    #[serde(default)]
    pub mass: f32,
    /// Friction coefficient
    #[serde(default = "half")]
    pub friction: f32,
    /// Restitution
    #[serde(default)]
    pub restitution: f32,
    /// Linear damping
    #[serde(default)]
    pub linear_damping: f32,
    /// Angular damping
    #[serde(default)]
    pub angular_damping: f32,
    /// Per-axis linear factor
    #[serde(default = "unit3")]
    pub linear_factor: [f32; 3],
    /// Per-axis angular factor
    #[serde(default = "unit3")]
    pub angular_factor: [f32; 3],
    /// Collision layers the body belongs to
    #[serde(default = "first_layer")]
    pub collision_group: u32,
    /// Collision layers the body collides with
    #[serde(default = "all_layers")]
    pub collision_mask: u32,
    /// Collision shape
    pub shape: ShapeRecord,
}

/// Link between two entities by id; the kind pair decides its meaning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    /// First id
    pub ref1: String,
    /// Second id
    pub ref2: String,
    /// Optional label
    #[serde(default)]
    pub label: Option<String>,
}

impl Relation {
    /// Unlabelled relation
    pub fn new(ref1: impl Into<String>, ref2: impl Into<String>) -> Self {
        Self { ref1: ref1.into(), ref2: ref2.into(), label: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_defaults() {
        let light: LightRecord = ron::from_str("(id: \"l1\", kind: point)").unwrap();
        assert_eq!(light.color, [1.0; 4]);
        assert!((light.intensity - 1.0).abs() < f32::EPSILON);
        assert!(light.spot_angle.is_none());
    }

    #[test]
    fn test_rigid_body_defaults() {
        let body: RigidBodyRecord =
            ron::from_str("(id: \"b1\", kind: dynamic, mass: 2.0, shape: Sphere(radius: 0.5))").unwrap();
        assert_eq!(body.collision_group, 1);
        assert_eq!(body.collision_mask, u32::MAX);
        assert_eq!(body.linear_factor, [1.0; 3]);
        assert_eq!(body.shape, ShapeRecord::Sphere { radius: 0.5 });
    }

    #[test]
    fn test_custom_values_parse() {
        let list: CustomParamList = ron::from_str(
            "(id: \"c1\", params: [(name: \"hp\", value: Int(10)), (name: \"tag\", value: Text(\"boss\"))])",
        )
        .unwrap();
        assert_eq!(list.params[0].value, CustomValue::Int(10));
        assert_eq!(list.params[1].value, CustomValue::Text("boss".to_string()));
    }
}
