//! # Scene Merge
//!
//! Converts a decoded scene document into a live scene graph.
//!
//! ## Features
//!
//! - **Merge Pipeline**: one merger per entity category, Relations always last
//! - **Resolution Context**: typed id lookup between mergers
//! - **Material Conversion**: parameter mapping, texture resolution and defaults
//! - **Asset Stores**: filesystem and in-memory sources for textures and definitions
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use scene_merge::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PipelineConfig::load_from_file("pipeline.toml")?;
//!     let store = Arc::new(FileAssetStore::new(&config.assets));
//!     let pipeline = Pipeline::new(store, &config.merge);
//!
//!     let doc = Document::load_from_file("scenes/level1/level1.ron")?;
//!     let mut scene = Scene::new("scenes/level1/root");
//!     let ctx = pipeline.merge_fresh(&doc, &mut scene)?;
//!     println!("{} objects registered", ctx.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod core;

pub mod foundation;
pub mod config;
pub mod assets;
pub mod document;
pub mod render;
pub mod physics;
pub mod scene;
pub mod merge;

/// Common imports for pipeline users
pub mod prelude {
    pub use crate::{
        assets::{AssetError, AssetStore, FileAssetStore, MemoryAssetStore},
        config::Config,
        core::config::{AssetConfig, MergeConfig, PipelineConfig},
        document::Document,
        merge::{ContextValue, MergeError, Merger, Pipeline, ResolutionContext},
        scene::{Node, Scene},
    };
}
