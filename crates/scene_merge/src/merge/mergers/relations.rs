//! Relations merger
//!
//! Runs last. Links the objects other stages registered, by the kinds found
//! at the two ids of each relation (order does not matter):
//!
//! | kinds | effect |
//! |---|---|
//! | node, node | first becomes the parent of the second |
//! | material, mesh | geometries of the mesh use the material |
//! | mesh, node | geometry added to the node |
//! | light / skeleton / animation / physics / custom params, node | attached to the node |
//!
//! Material bindings are collected before any node is linked.

use std::collections::HashMap;
use std::sync::Arc;

use super::MaterialDefaults;
use crate::document::{Document, Relation};
use crate::merge::{render_bucket_key, ContextValue, MergeError, Merger, ResolutionContext};
use crate::render::Material;
use crate::scene::{Geometry, RenderBucket, Scene};

/// Material bound to a mesh, with the bucket its directive selects
struct Binding {
    material_id: String,
    material: Arc<Material>,
    bucket: RenderBucket,
}

/// Merger linking registered objects together
pub struct RelationsMerger {
    defaults: Arc<MaterialDefaults>,
}

impl RelationsMerger {
    /// Create the merger; meshes without a bound material get the default one
    pub fn new(defaults: Arc<MaterialDefaults>) -> Self {
        Self { defaults }
    }

    fn bucket_for(ctx: &ResolutionContext, material_id: &str) -> RenderBucket {
        let Ok(directive) = ctx.scalar(&render_bucket_key(material_id)) else {
            return RenderBucket::default();
        };
        RenderBucket::from_directive(directive).unwrap_or_else(|| {
            log::warn!("Material '{}' has an invalid render bucket {}", material_id, directive);
            RenderBucket::default()
        })
    }

    fn collect_bindings<'d>(doc: &'d Document, ctx: &ResolutionContext) -> HashMap<&'d str, Binding> {
        let mut bindings = HashMap::new();
        for rel in &doc.relations {
            let (mesh_id, material_id) = match (ctx.get(&rel.ref1), ctx.get(&rel.ref2)) {
                (Ok(ContextValue::Mesh(_)), Ok(ContextValue::Material(_))) => (&rel.ref1, &rel.ref2),
                (Ok(ContextValue::Material(_)), Ok(ContextValue::Mesh(_))) => (&rel.ref2, &rel.ref1),
                _ => continue,
            };
            let Ok(material) = ctx.material(material_id) else { continue };
            let binding = Binding {
                material_id: material_id.clone(),
                bucket: Self::bucket_for(ctx, material_id),
                material,
            };
            if let Some(previous) = bindings.insert(mesh_id.as_str(), binding) {
                log::warn!("Mesh '{}' bound to several materials, '{}' replaced", mesh_id, previous.material_id);
            }
        }
        bindings
    }

    fn link(
        &self,
        rel: &Relation,
        scene: &mut Scene,
        ctx: &ResolutionContext,
        bindings: &HashMap<&str, Binding>,
    ) -> Result<(), String> {
        let first = ctx.get(&rel.ref1).map_err(|e| e.to_string())?;
        let second = ctx.get(&rel.ref2).map_err(|e| e.to_string())?;

        let (other, other_id, node) = match (first, second) {
            (ContextValue::Node(parent), ContextValue::Node(child)) => {
                return scene.attach_child(*parent, *child).map_err(|e| e.to_string());
            }
            (ContextValue::Material(_), ContextValue::Mesh(_)) | (ContextValue::Mesh(_), ContextValue::Material(_)) => {
                return Ok(());
            }
            (other, ContextValue::Node(node)) => (other, rel.ref1.as_str(), *node),
            (ContextValue::Node(node), other) => (other, rel.ref2.as_str(), *node),
            (a, b) => return Err(format!("no link between a {} and a {}", a.kind(), b.kind())),
        };

        let target = scene.node_mut(node).ok_or_else(|| format!("node {node:?} is not in the scene"))?;
        match other {
            ContextValue::Mesh(mesh) => {
                let (material, bucket) = match bindings.get(other_id) {
                    Some(binding) => (Arc::clone(&binding.material), binding.bucket),
                    None => (self.defaults.material(), RenderBucket::default()),
                };
                target.geometries.push(Geometry { name: other_id.to_string(), mesh: Arc::clone(mesh), material, bucket });
            }
            ContextValue::Light(light) => target.lights.push(Arc::clone(light)),
            ContextValue::Skeleton(skeleton) => {
                if target.skeleton.replace(Arc::clone(skeleton)).is_some() {
                    log::warn!("Node '{}' already had a skeleton, replaced by '{}'", target.name, other_id);
                }
            }
            ContextValue::Animation(animation) => target.animations.push(Arc::clone(animation)),
            ContextValue::PhysicsBody(body) => {
                if target.rigid_body.replace(Arc::clone(body)).is_some() {
                    log::warn!("Node '{}' already had a rigid body, replaced by '{}'", target.name, other_id);
                }
            }
            ContextValue::CustomParams(params) => {
                target.user_data.extend(params.iter().cloned());
            }
            ContextValue::Material(_) | ContextValue::Scalar(_) | ContextValue::Node(_) => {
                return Err(format!("a {} cannot be attached to a node", other.kind()));
            }
        }
        Ok(())
    }
}

impl Merger for RelationsMerger {
    fn name(&self) -> &'static str {
        "relations"
    }

    fn apply(&self, doc: &Document, scene: &mut Scene, ctx: &mut ResolutionContext) -> Result<(), MergeError> {
        let bindings = Self::collect_bindings(doc, ctx);
        for rel in &doc.relations {
            if let Err(reason) = self.link(rel, scene, ctx, &bindings) {
                log::warn!("Relation {} - {}: {}. Skip.", rel.ref1, rel.ref2, reason);
            }
        }
        Ok(())
    }
}
