//! Keyframed animations merger

use std::sync::Arc;

use super::matching_len;
use crate::document::{AnimationRecord, Document};
use crate::foundation::math::{quat_from_xyzw, Vec3};
use crate::merge::{ContextValue, MergeError, Merger, ResolutionContext};
use crate::render::{Animation, Track};
use crate::scene::Scene;

/// Builds one animation clip per animation record
pub struct AnimationsMerger;

#[allow(clippy::cast_precision_loss)]
fn ms_to_seconds(ms: u32) -> f32 {
    ms as f32 / 1000.0
}

fn build_animation(record: &AnimationRecord) -> Animation {
    let tracks = record
        .clips
        .iter()
        .map(|clip| {
            let owner = format!("animation '{}' target {}", record.id, clip.target_id);
            let count = clip.sample_times_ms.len();
            Track {
                target: clip.target_id.clone(),
                times: clip.sample_times_ms.iter().map(|t| ms_to_seconds(*t)).collect(),
                translations: matching_len(&owner, "translations", &clip.translations, count, |v| Vec3::from(*v)),
                rotations: matching_len(&owner, "rotations", &clip.rotations, count, |q| quat_from_xyzw(*q)),
                scales: matching_len(&owner, "scales", &clip.scales, count, |v| Vec3::from(*v)),
            }
        })
        .collect();

    Animation {
        name: record.name.clone().unwrap_or_else(|| record.id.clone()),
        duration: ms_to_seconds(record.duration_ms),
        tracks,
    }
}

impl Merger for AnimationsMerger {
    fn name(&self) -> &'static str {
        "animations"
    }

    fn apply(&self, doc: &Document, _scene: &mut Scene, ctx: &mut ResolutionContext) -> Result<(), MergeError> {
        for record in &doc.animations {
            ctx.put(record.id.clone(), ContextValue::Animation(Arc::new(build_animation(record))));
        }
        Ok(())
    }
}
