//! The merger capability

use super::{MergeError, ResolutionContext};
use crate::document::Document;
use crate::scene::Scene;

/// One stage of the merge pipeline
///
/// A merger applies its category of the document to the scene and registers
/// what it produced in the context. It may read anything registered by the
/// mergers that ran before it.
pub trait Merger: Send + Sync {
    /// Stage name used in logs
    fn name(&self) -> &'static str;

    /// Apply this stage to the scene
    fn apply(&self, doc: &Document, scene: &mut Scene, ctx: &mut ResolutionContext) -> Result<(), MergeError>;
}
