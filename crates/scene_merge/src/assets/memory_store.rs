//! In-memory asset store

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use super::{AssetError, AssetStore};
use crate::render::{MaterialDef, Texture};

/// Asset store serving preloaded assets
///
/// Texture requests are recorded in call order, which lets a host see which
/// candidate paths a merge tried.
#[derive(Default)]
pub struct MemoryAssetStore {
    textures: HashMap<String, Texture>,
    definitions: HashMap<String, Arc<MaterialDef>>,
    requests: Mutex<Vec<String>>,
}

impl MemoryAssetStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a texture under an asset path
    pub fn insert_texture(&mut self, path: impl Into<String>, texture: Texture) {
        let path = path.into();
        let texture = texture.with_name(path.clone());
        self.textures.insert(path, texture);
    }

    /// Add a material definition under an asset path
    pub fn insert_material_def(&mut self, path: impl Into<String>, def: MaterialDef) {
        self.definitions.insert(path.into(), Arc::new(def));
    }

    /// Builder form of [`Self::insert_texture`]
    pub fn with_texture(mut self, path: impl Into<String>, texture: Texture) -> Self {
        self.insert_texture(path, texture);
        self
    }

    /// Builder form of [`Self::insert_material_def`]
    pub fn with_material_def(mut self, path: impl Into<String>, def: MaterialDef) -> Self {
        self.insert_material_def(path, def);
        self
    }

    /// Texture paths requested so far, in call order
    pub fn texture_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl AssetStore for MemoryAssetStore {
    fn load_texture(&self, path: &str) -> Result<Texture, AssetError> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).push(path.to_string());
        self.textures
            .get(path)
            .cloned()
            .ok_or_else(|| AssetError::NotFound(path.to_string()))
    }

    fn load_material_def(&self, path: &str) -> Result<Arc<MaterialDef>, AssetError> {
        self.definitions
            .get(path)
            .cloned()
            .ok_or_else(|| AssetError::NotFound(path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::image_loader::solid_color;

    #[test]
    fn test_lookup_and_request_log() {
        let store = MemoryAssetStore::new().with_texture("a.png", Texture::new_2d(solid_color(1, 1, [0; 4])));

        assert!(store.load_texture("missing.png").is_err());
        let tex = store.load_texture("a.png").unwrap();

        assert_eq!(tex.name(), Some("a.png"));
        assert_eq!(store.texture_requests(), vec!["missing.png".to_string(), "a.png".to_string()]);
    }

    #[test]
    fn test_material_def_shared() {
        let store = MemoryAssetStore::new().with_material_def("MatDefs/MatCap.ron", MaterialDef::debug_checker());
        let a = store.load_material_def("MatDefs/MatCap.ron").unwrap();
        let b = store.load_material_def("MatDefs/MatCap.ron").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(matches!(store.load_material_def("x"), Err(AssetError::NotFound(_))));
    }
}
