//! # Unified Configuration System
//!
//! Configuration for the merge pipeline and the asset store it reads from.
//!
//! ## Configuration Categories
//!
//! - **Merge Config**: default resources, sideband property ids, texture sampling policy
//! - **Asset Config**: search paths for the file-backed asset store
//! - **Pipeline Config**: top-level file format wrapping both, plus the host log level

use serde::{Serialize, Deserialize};

pub use crate::config::{Config, ConfigError};
use crate::render::texture::{MagFilter, MinFilter};

/// # Sampling Configuration
///
/// Filter state applied to a texture in one of the resolution branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Magnification filter
    pub mag_filter: MagFilter,
    /// Minification filter
    pub min_filter: MinFilter,
    /// Anisotropic filtering level
    pub anisotropy: u32,
}

impl SamplingConfig {
    /// Sampling used by the default (debug) texture
    pub const fn debug_default() -> Self {
        Self {
            mag_filter: MagFilter::Nearest,
            min_filter: MinFilter::NearestLinearMipMap,
            anisotropy: 2,
        }
    }

    /// Sampling applied to textures found only under the asset root
    pub const fn asset_root_upgrade() -> Self {
        Self {
            mag_filter: MagFilter::Bilinear,
            min_filter: MinFilter::Trilinear,
            anisotropy: 4,
        }
    }
}

/// # Merge Configuration
///
/// Controls the default resources built by the materials merger and the
/// property ids it treats as sideband directives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Asset path of the default (fallback) texture
    pub default_texture: String,
    /// Asset path of the material definition used for the default material
    pub default_material_def: String,
    /// Asset path of the diffuse map set on the default material
    pub default_material_texture: String,
    /// Property id that carries a render bucket directive instead of a material parameter
    pub render_bucket_property: String,
    /// Sampling of the default texture
    pub default_sampling: SamplingConfig,
    /// Sampling forced on textures resolved against the asset root
    pub asset_root_sampling: SamplingConfig,
}

impl MergeConfig {
    /// Create a new merge configuration with the stock defaults
    pub fn new() -> Self {
        Self {
            default_texture: "Textures/debug_8_64.png".to_string(),
            default_material_def: "MatDefs/MatCap.ron".to_string(),
            default_material_texture: "Textures/generator8.jpg".to_string(),
            render_bucket_property: "RenderBucket".to_string(),
            default_sampling: SamplingConfig::debug_default(),
            asset_root_sampling: SamplingConfig::asset_root_upgrade(),
        }
    }

    /// Set the default texture path
    pub fn with_default_texture(mut self, path: impl Into<String>) -> Self {
        self.default_texture = path.into();
        self
    }

    /// Set the default material definition path
    pub fn with_default_material_def(mut self, path: impl Into<String>) -> Self {
        self.default_material_def = path.into();
        self
    }
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Asset Configuration
///
/// Configuration for the file-backed asset store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directories searched in order before a path is tried as given
    pub search_paths: Vec<String>,
}

impl AssetConfig {
    /// Create a new asset configuration
    pub fn new() -> Self {
        Self {
            search_paths: vec!["resources".to_string()],
        }
    }

    /// Replace the search paths
    pub fn with_search_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_paths = paths.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Complete Pipeline Configuration
///
/// Top-level configuration a host loads from disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Host log filter (`env_logger` syntax)
    pub log_level: String,
    /// Merge behaviour
    pub merge: MergeConfig,
    /// Asset store behaviour
    pub assets: AssetConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            merge: MergeConfig::default(),
            assets: AssetConfig::default(),
        }
    }
}

impl Config for PipelineConfig {}
