//! Meshes merger

use std::sync::Arc;

use super::matching_len;
use crate::document::{Document, MeshRecord};
use crate::foundation::math::{Vec2, Vec3};
use crate::merge::{ContextValue, MergeError, Merger, ResolutionContext};
use crate::render::{ColorRGBA, Mesh};
use crate::scene::Scene;

/// Builds one mesh per mesh record
///
/// Vertex attributes whose length disagrees with the position count are
/// dropped, as is an index buffer referencing missing vertices.
pub struct MeshesMerger;

fn build_mesh(record: &MeshRecord) -> Mesh {
    let owner = format!("mesh '{}'", record.id);
    let count = record.positions.len();

    let mut mesh = Mesh {
        name: record.name.clone().unwrap_or_else(|| record.id.clone()),
        topology: record.topology,
        positions: record.positions.iter().map(|p| Vec3::from(*p)).collect(),
        normals: matching_len(&owner, "normals", &record.normals, count, |n| Vec3::from(*n)),
        tangents: matching_len(&owner, "tangents", &record.tangents, count, |t| Vec3::from(*t)),
        texcoords: record
            .texcoords
            .iter()
            .enumerate()
            .map(|(i, set)| matching_len(&owner, &format!("texcoord set {i}"), set, count, |uv| Vec2::from(*uv)))
            .filter(|set| !set.is_empty())
            .collect(),
        colors: matching_len(&owner, "colors", &record.colors, count, |c| ColorRGBA::from_array(*c)),
        indices: record.indices.clone(),
        ..Default::default()
    };

    if let Some(bad) = mesh.indices.iter().find(|i| **i as usize >= count) {
        log::warn!("{}: index {} out of range for {} vertices. Indices dropped.", owner, bad, count);
        mesh.indices.clear();
    }

    if let Some(skin) = &record.skin {
        mesh.bone_indices = matching_len(&owner, "bone indices", &skin.bone_indices, count, |b| *b);
        mesh.bone_weights = matching_len(&owner, "bone weights", &skin.bone_weights, count, |w| *w);
        if mesh.bone_indices.len() != mesh.bone_weights.len() {
            log::warn!("{}: incomplete skinning data. Dropped.", owner);
            mesh.bone_indices.clear();
            mesh.bone_weights.clear();
        }
    }

    mesh
}

impl Merger for MeshesMerger {
    fn name(&self) -> &'static str {
        "meshes"
    }

    fn apply(&self, doc: &Document, _scene: &mut Scene, ctx: &mut ResolutionContext) -> Result<(), MergeError> {
        for record in &doc.meshes {
            let mesh = build_mesh(record);
            log::debug!("{:?}", mesh);
            ctx.put(record.id.clone(), ContextValue::Mesh(Arc::new(mesh)));
        }
        Ok(())
    }
}
