//! Lights merger

use std::sync::Arc;

use crate::document::{Document, LightKind, LightRecord};
use crate::merge::{ContextValue, MergeError, Merger, ResolutionContext};
use crate::render::{ColorRGBA, Light, LightType};
use crate::scene::Scene;

/// Builds one light per light record
pub struct LightsMerger;

fn build_light(record: &LightRecord) -> Light {
    let light_type = match record.kind {
        LightKind::Point => LightType::Point,
        LightKind::Spot => LightType::Spot,
        LightKind::Directional => LightType::Directional,
        LightKind::Ambient => LightType::Ambient,
    };

    let mut light = Light::new(record.name.clone().unwrap_or_else(|| record.id.clone()), light_type);
    light.color = ColorRGBA::from_array(record.color);
    light.intensity = record.intensity;
    light.range = record.radius;
    light.cast_shadow = record.cast_shadow;

    match (record.kind, record.spot_angle) {
        (LightKind::Spot, Some(cone)) => {
            light.inner_cone_angle = cone.inner;
            light.outer_cone_angle = cone.outer;
        }
        (LightKind::Spot, None) => log::warn!("Spot light '{}' has no cone angles", record.id),
        (_, Some(_)) => log::debug!("Cone angles of non-spot light '{}' ignored", record.id),
        (_, None) => {}
    }
    light
}

impl Merger for LightsMerger {
    fn name(&self) -> &'static str {
        "lights"
    }

    fn apply(&self, doc: &Document, _scene: &mut Scene, ctx: &mut ResolutionContext) -> Result<(), MergeError> {
        for record in &doc.lights {
            ctx.put(record.id.clone(), ContextValue::Light(Arc::new(build_light(record))));
        }
        Ok(())
    }
}
