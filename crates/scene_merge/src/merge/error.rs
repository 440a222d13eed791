//! Pass-fatal merge errors

use thiserror::Error;

use super::context::ContextError;
use crate::assets::AssetError;
use crate::document::PixelFormat;

/// Errors that abort a merge pass
///
/// Recoverable problems (unknown parameters, missing texture files) are
/// logged by the mergers and never surface here.
#[derive(Error, Debug)]
pub enum MergeError {
    /// Inline pixel data in a layout this version cannot build an image from
    #[error("Unsupported inline image format {format:?} in material '{material}'")]
    UnsupportedImageFormat {
        /// Material id
        material: String,
        /// Declared pixel format
        format: PixelFormat,
    },

    /// Payload that cannot be interpreted
    #[error("Unsupported data: {0}")]
    UnsupportedData(String),

    /// The material definition of a material could not be loaded
    #[error("Material '{material}' references definition '{definition}' which could not be loaded: {source}")]
    MaterialDefinition {
        /// Material id
        material: String,
        /// Definition asset path
        definition: String,
        /// Store failure
        #[source]
        source: AssetError,
    },

    /// The document requires an extension the pipeline was not configured with
    #[error("Document requires unregistered extension '{0}'")]
    UnregisteredExtension(String),

    /// Context lookup failed in a merger that cannot continue without it
    #[error("Context error: {0}")]
    Context(#[from] ContextError),
}
