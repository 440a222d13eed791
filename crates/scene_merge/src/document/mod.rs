//! Decoded scene document
//!
//! The document is the input of the merge pipeline: one ordered list of
//! records per entity category, each record carrying a stable string id.
//! Records reference each other only through [`Relation`]s.
//!
//! The binary wire format is decoded elsewhere; these types are the decoded
//! form and can also be read from RON, which hosts and tests use.

mod materials;
mod primitives;
mod records;

pub use materials::{MatProperty, MaterialRecord, PropertyPayload};
pub use primitives::{PixelFormat, Texture2DInline, TextureRef, TransformRecord};
pub use records::{
    AnimationRecord, BodyKind, BoneLink, BoneRecord, ClipRecord, CustomParam, CustomParamList,
    CustomValue, LightKind, LightRecord, MeshRecord, NodeRecord, Relation, RigidBodyRecord,
    ShapeRecord, SkeletonRecord, SkinRecord, SpotAngle,
};

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading a document
#[derive(Error, Debug)]
pub enum DocumentError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
}

/// A decoded scene document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    /// Extension sections this document needs
    pub requires: Vec<String>,
    /// Scene nodes
    pub nodes: Vec<NodeRecord>,
    /// Meshes
    pub meshes: Vec<MeshRecord>,
    /// Materials
    pub materials: Vec<MaterialRecord>,
    /// Lights
    pub lights: Vec<LightRecord>,
    /// Skeletons
    pub skeletons: Vec<SkeletonRecord>,
    /// Keyframed animations
    pub animations: Vec<AnimationRecord>,
    /// Custom parameter lists
    pub custom_params: Vec<CustomParamList>,
    /// Rigid bodies
    pub physics: Vec<RigidBodyRecord>,
    /// Links between entities
    pub relations: Vec<Relation>,
}

impl Document {
    /// Parse a document from RON text
    pub fn from_ron_str(contents: &str) -> Result<Self, DocumentError> {
        ron::from_str(contents).map_err(|e| DocumentError::Parse(e.to_string()))
    }

    /// Read a RON document from disk
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    /// Number of records over all categories, relations excluded
    pub fn entity_count(&self) -> usize {
        self.nodes.len()
            + self.meshes.len()
            + self.materials.len()
            + self.lights.len()
            + self.skeletons.len()
            + self.animations.len()
            + self.custom_params.len()
            + self.physics.len()
    }
}
