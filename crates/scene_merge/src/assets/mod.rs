//! Asset store collaborators
//!
//! The merge pipeline never touches the filesystem directly: textures and
//! material definitions come from an [`AssetStore`]. Two stores are provided,
//! [`FileAssetStore`] (search paths on disk) and [`MemoryAssetStore`]
//! (preloaded assets, used by hosts that already hold their resources).

pub mod image_loader;
pub mod file_store;
pub mod memory_store;

pub use file_store::FileAssetStore;
pub use memory_store::MemoryAssetStore;

use std::sync::Arc;

use thiserror::Error;

use crate::render::{MaterialDef, Texture};

/// Source of textures and material definitions
///
/// Every call returns an independent [`Texture`] value: callers may change
/// its sampling state freely. Pixel data may be shared between calls.
pub trait AssetStore: Send + Sync {
    /// Load a texture by asset path
    fn load_texture(&self, path: &str) -> Result<Texture, AssetError>;

    /// Load a material definition by asset path
    fn load_material_def(&self, path: &str) -> Result<Arc<MaterialDef>, AssetError>;
}

impl<S: AssetStore + ?Sized> AssetStore for Arc<S> {
    fn load_texture(&self, path: &str) -> Result<Texture, AssetError> {
        (**self).load_texture(path)
    }

    fn load_material_def(&self, path: &str) -> Result<Arc<MaterialDef>, AssetError> {
        (**self).load_material_def(path)
    }
}

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset not found
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Failed to load asset
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),

    /// Invalid asset data
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// IO error during asset loading
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
