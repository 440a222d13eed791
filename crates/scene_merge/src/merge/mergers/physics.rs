//! Rigid bodies merger

use std::sync::Arc;

use crate::document::{BodyKind, Document, RigidBodyRecord, ShapeRecord};
use crate::foundation::math::Vec3;
use crate::merge::{ContextValue, MergeError, Merger, ResolutionContext};
use crate::physics::{BodyType, CollisionShape, RigidBody};
use crate::scene::Scene;

/// Builds one rigid body description per physics record
pub struct PhysicsMerger;

fn build_body(record: &RigidBodyRecord, ctx: &ResolutionContext) -> RigidBody {
    let body_type = match record.kind {
        BodyKind::Static => BodyType::Static,
        BodyKind::Dynamic => BodyType::Dynamic,
        BodyKind::Kinematic => BodyType::Kinematic,
        BodyKind::Ghost => BodyType::Ghost,
    };

    let shape = match &record.shape {
        ShapeRecord::Sphere { radius } => CollisionShape::Sphere { radius: *radius },
        ShapeRecord::Box { half_extents } => CollisionShape::Box { half_extents: Vec3::from(*half_extents) },
        ShapeRecord::Capsule { radius, height } => CollisionShape::Capsule { radius: *radius, height: *height },
        ShapeRecord::Mesh { mesh_id } => {
            if let Err(e) = ctx.mesh(mesh_id) {
                log::warn!("Rigid body '{}': collision mesh unavailable ({})", record.id, e);
            }
            CollisionShape::Mesh { mesh_id: mesh_id.clone() }
        }
    };

    let mass = if body_type == BodyType::Static { 0.0 } else { record.mass };

    RigidBody {
        name: record.name.clone().unwrap_or_else(|| record.id.clone()),
        body_type,
        mass,
        friction: record.friction,
        restitution: record.restitution,
        linear_damping: record.linear_damping,
        angular_damping: record.angular_damping,
        linear_factor: Vec3::from(record.linear_factor),
        angular_factor: Vec3::from(record.angular_factor),
        collision_group: record.collision_group,
        collision_mask: record.collision_mask,
        shape,
    }
}

impl Merger for PhysicsMerger {
    fn name(&self) -> &'static str {
        "physics"
    }

    fn apply(&self, doc: &Document, _scene: &mut Scene, ctx: &mut ResolutionContext) -> Result<(), MergeError> {
        for record in &doc.physics {
            let body = build_body(record, ctx);
            ctx.put(record.id.clone(), ContextValue::PhysicsBody(Arc::new(body)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: &str, shape: &str) -> RigidBodyRecord {
        ron::from_str(&format!("(id: \"b1\", kind: {kind}, mass: 3.0, shape: {shape})")).unwrap()
    }

    #[test]
    fn test_dynamic_box() {
        let body = build_body(&record("dynamic", "Box(half_extents: (1.0, 2.0, 3.0))"), &ResolutionContext::new());
        assert_eq!(body.body_type, BodyType::Dynamic);
        assert_eq!(body.mass, 3.0);
        assert_eq!(body.shape, CollisionShape::Box { half_extents: Vec3::new(1.0, 2.0, 3.0) });
        assert_eq!(body.collision_mask, u32::MAX);
    }

    #[test]
    fn test_static_body_has_no_mass() {
        let body = build_body(&record("static", "Sphere(radius: 1.0)"), &ResolutionContext::new());
        assert_eq!(body.mass, 0.0);
    }

    #[test]
    fn test_mesh_shape_keeps_id() {
        let body = build_body(&record("ghost", "Mesh(mesh_id: \"hull\")"), &ResolutionContext::new());
        assert_eq!(body.shape, CollisionShape::Mesh { mesh_id: "hull".into() });
    }
}
