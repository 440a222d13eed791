//! Merge pipeline
//!
//! Turns a decoded [`Document`](crate::document::Document) into scene graph
//! content. Each entity category has its own [`Merger`]; the [`Pipeline`]
//! runs them in a fixed order and hands them one [`ResolutionContext`] so
//! later stages can find what earlier stages produced.
//!
//! ```text
//! Nodes → Meshes → Materials → Lights → Skeletons → Animations
//!       → CustomParams → Physics → (extra mergers) → Relations
//! ```

pub mod context;
pub mod error;
pub mod merger;
pub mod mergers;
pub mod pipeline;

#[cfg(test)]
mod tests;

pub use context::{render_bucket_key, ContextError, ContextKind, ContextValue, CustomParams, ResolutionContext};
pub use error::MergeError;
pub use merger::Merger;
pub use mergers::{MaterialDefaults, MaterialsMerger, RelationsMerger};
pub use pipeline::{ExtensionRegistry, MergerOrder, Pipeline, PipelineBuilder};
