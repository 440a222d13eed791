//! Custom parameters merger

use std::sync::Arc;

use crate::document::{CustomValue, Document};
use crate::foundation::math::{quat_from_xyzw, Vec2, Vec3, Vec4};
use crate::merge::{ContextValue, MergeError, Merger, ResolutionContext};
use crate::render::ColorRGBA;
use crate::scene::{Scene, UserValue};

/// Converts custom parameter lists into typed user values
pub struct CustomParamsMerger;

fn user_value(value: &CustomValue) -> UserValue {
    match value {
        CustomValue::Bool(b) => UserValue::Bool(*b),
        CustomValue::Int(i) => UserValue::Int(*i),
        CustomValue::Float(f) => UserValue::Float(*f),
        CustomValue::Text(s) => UserValue::Text(s.clone()),
        CustomValue::Vec2(v) => UserValue::Vec2(Vec2::from(*v)),
        CustomValue::Vec3(v) => UserValue::Vec3(Vec3::from(*v)),
        CustomValue::Vec4(v) => UserValue::Vec4(Vec4::from(*v)),
        CustomValue::Quat(q) => UserValue::Quat(quat_from_xyzw(*q)),
        CustomValue::Color(c) => UserValue::Color(ColorRGBA::from_array(*c)),
    }
}

impl Merger for CustomParamsMerger {
    fn name(&self) -> &'static str {
        "custom_params"
    }

    fn apply(&self, doc: &Document, _scene: &mut Scene, ctx: &mut ResolutionContext) -> Result<(), MergeError> {
        for list in &doc.custom_params {
            let params = list.params.iter().map(|p| (p.name.clone(), user_value(&p.value))).collect();
            ctx.put(list.id.clone(), ContextValue::CustomParams(Arc::new(params)));
        }
        Ok(())
    }
}
