//! Category mergers

mod animations;
mod custom_params;
mod lights;
mod materials;
mod meshes;
mod nodes;
mod physics;
mod relations;
mod skeletons;

pub use animations::AnimationsMerger;
pub use custom_params::CustomParamsMerger;
pub use lights::LightsMerger;
pub use materials::{MaterialDefaults, MaterialsMerger};
pub use meshes::MeshesMerger;
pub use nodes::NodesMerger;
pub use physics::PhysicsMerger;
pub use relations::RelationsMerger;
pub use skeletons::SkeletonsMerger;

/// Convert a per-element array, or drop it with a warning when its length
/// differs from `expected`
fn matching_len<T, U>(owner: &str, what: &str, values: &[T], expected: usize, convert: impl Fn(&T) -> U) -> Vec<U> {
    if values.is_empty() {
        return Vec::new();
    }
    if values.len() != expected {
        log::warn!("{}: {} has {} entries, expected {}. Dropped.", owner, what, values.len(), expected);
        return Vec::new();
    }
    values.iter().map(convert).collect()
}
