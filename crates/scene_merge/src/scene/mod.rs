//! Scene graph the pipeline merges into
//!
//! ## Architecture
//!
//! ```text
//! Document (decoded, read-only)
//!      ↓
//! Merge pipeline (mergers + resolution context)
//!      ↓
//! Scene (this module: caller-owned node arena)
//! ```
//!
//! The scene is owned by the caller. Mergers only append nodes and attach
//! objects to existing ones; the root is never replaced.

mod node;
mod scene_graph;

pub use node::{Geometry, Node, RenderBucket, UserValue};
pub use scene_graph::{Scene, SceneError};
