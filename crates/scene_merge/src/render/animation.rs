//! Keyframed animation clips

use crate::foundation::math::{Quat, Vec3};

/// Keyframes driving one target (node or bone) of an [`Animation`]
///
/// Each non-empty channel has one key per entry in `times`.
#[derive(Debug, Clone, Default)]
pub struct Track {
    /// Id of the animated node or bone
    pub target: String,
    /// Key times in seconds
    pub times: Vec<f32>,
    /// Translation keys
    pub translations: Vec<Vec3>,
    /// Rotation keys
    pub rotations: Vec<Quat>,
    /// Scale keys
    pub scales: Vec<Vec3>,
}

/// Named animation clip
#[derive(Debug, Clone, Default)]
pub struct Animation {
    /// Clip name
    pub name: String,
    /// Length in seconds
    pub duration: f32,
    /// Per-target tracks
    pub tracks: Vec<Track>,
}
