//! Mesh representation for converted geometry

use std::fmt::{Debug, Formatter};

use serde::{Deserialize, Serialize};

use super::ColorRGBA;
use crate::foundation::math::{Vec2, Vec3};

/// Primitive topology of a mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Topology {
    /// Triangle list
    #[default]
    Triangles,
    /// Line list
    Lines,
    /// Point list
    Points,
}

/// Vertex and index data of one mesh
///
/// Every non-empty attribute array has one entry per position.
#[derive(Clone, Default)]
pub struct Mesh {
    /// Mesh name
    pub name: String,
    /// Primitive topology
    pub topology: Topology,
    /// Vertex positions
    pub positions: Vec<Vec3>,
    /// Vertex normals
    pub normals: Vec<Vec3>,
    /// Vertex tangents
    pub tangents: Vec<Vec3>,
    /// Texture coordinate sets
    pub texcoords: Vec<Vec<Vec2>>,
    /// Vertex colors
    pub colors: Vec<ColorRGBA>,
    /// Index buffer
    pub indices: Vec<u32>,
    /// Up to four bone indices per vertex
    pub bone_indices: Vec<[u16; 4]>,
    /// Weights matching `bone_indices`
    pub bone_weights: Vec<[f32; 4]>,
}

impl Mesh {
    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Whether the mesh carries skinning data
    pub fn is_skinned(&self) -> bool {
        !self.bone_indices.is_empty()
    }
}

impl Debug for Mesh {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ name: {:?}, topology: {:?}, ", self.name, self.topology)?;
        write!(f, "positions: [{}], ", self.positions.len())?;
        write!(f, "normals: [{}], ", self.normals.len())?;
        write!(f, "texcoords: {}, ", self.texcoords.len())?;
        write!(f, "indices: [{}] }}", self.indices.len())
    }
}
