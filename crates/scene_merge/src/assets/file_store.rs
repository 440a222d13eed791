//! Filesystem asset store
//!
//! Paths are tried under each search path in order, then as given. Decoded
//! images and parsed definitions are cached by asset path, so repeated loads
//! share pixel data while still handing out independent [`Texture`] values.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

use super::{image_loader, AssetError, AssetStore};
use crate::core::config::AssetConfig;
use crate::render::{MaterialDef, Texture};

/// Asset store reading from the filesystem
pub struct FileAssetStore {
    search_paths: Vec<PathBuf>,
    textures: RwLock<HashMap<String, Texture>>,
    definitions: RwLock<HashMap<String, Arc<MaterialDef>>>,
}

impl FileAssetStore {
    /// Create a store from its configuration
    pub fn new(config: &AssetConfig) -> Self {
        Self {
            search_paths: config.search_paths.iter().map(PathBuf::from).collect(),
            textures: RwLock::new(HashMap::new()),
            definitions: RwLock::new(HashMap::new()),
        }
    }

    /// First existing file for an asset path
    pub fn resolve(&self, path: &str) -> Option<PathBuf> {
        self.search_paths
            .iter()
            .map(|root| root.join(path))
            .chain(std::iter::once(PathBuf::from(path)))
            .find(|candidate| candidate.is_file())
    }

    fn locate(&self, path: &str) -> Result<PathBuf, AssetError> {
        self.resolve(path).ok_or_else(|| AssetError::NotFound(path.to_string()))
    }
}

impl AssetStore for FileAssetStore {
    fn load_texture(&self, path: &str) -> Result<Texture, AssetError> {
        if let Some(texture) = self.textures.read().unwrap_or_else(PoisonError::into_inner).get(path) {
            return Ok(texture.clone());
        }

        let file = self.locate(path)?;
        let texture = Texture::new_2d(image_loader::image_from_file(&file)?).with_name(path);

        self.textures
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.to_string(), texture.clone());
        Ok(texture)
    }

    fn load_material_def(&self, path: &str) -> Result<Arc<MaterialDef>, AssetError> {
        if let Some(def) = self.definitions.read().unwrap_or_else(PoisonError::into_inner).get(path) {
            return Ok(Arc::clone(def));
        }

        let file = self.locate(path)?;
        let contents = std::fs::read_to_string(&file)?;
        let def: MaterialDef = ron::from_str(&contents)
            .map_err(|e| AssetError::InvalidData(format!("{}: {}", file.display(), e)))?;
        log::debug!("Loaded material definition '{}' from {:?}", def.name, file);

        let def = Arc::new(def);
        self.definitions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.to_string(), Arc::clone(&def));
        Ok(def)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{VarType, WrapMode};
    use std::fs;
    use tempfile::tempdir;

    fn write_png(path: &std::path::Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        image::RgbaImage::from_pixel(2, 2, image::Rgba([0, 255, 0, 255])).save(path).unwrap();
    }

    #[test]
    fn test_search_path_order() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        write_png(&second.path().join("Textures/a.png"));

        let config = AssetConfig::new().with_search_paths([
            first.path().to_str().unwrap(),
            second.path().to_str().unwrap(),
        ]);
        let store = FileAssetStore::new(&config);

        assert_eq!(store.resolve("Textures/a.png"), Some(second.path().join("Textures/a.png")));
        assert!(store.resolve("Textures/b.png").is_none());
    }

    #[test]
    fn test_texture_loads_share_pixels() {
        let dir = tempdir().unwrap();
        write_png(&dir.path().join("t.png"));
        let store = FileAssetStore::new(&AssetConfig::new().with_search_paths([dir.path().to_str().unwrap()]));

        let mut a = store.load_texture("t.png").unwrap();
        let b = store.load_texture("t.png").unwrap();
        a.set_wrap(WrapMode::Repeat);

        assert_eq!(a.name(), Some("t.png"));
        assert!(a.shares_image_with(&b));
        assert_eq!(b.wrap(), WrapMode::ClampToEdge);
    }

    #[test]
    fn test_missing_texture_not_found() {
        let store = FileAssetStore::new(&AssetConfig::new().with_search_paths(Vec::<String>::new()));
        let err = store.load_texture("nowhere/missing.png").unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
    }

    #[test]
    fn test_material_def_from_ron() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("MatDefs")).unwrap();
        fs::write(
            dir.path().join("MatDefs/Lit.ron"),
            "(name: \"Lit\", params: [(name: \"Shininess\", var_type: Float)])",
        )
        .unwrap();
        let store = FileAssetStore::new(&AssetConfig::new().with_search_paths([dir.path().to_str().unwrap()]));

        let def = store.load_material_def("MatDefs/Lit.ron").unwrap();
        assert_eq!(def.param("Shininess").map(|p| p.var_type), Some(VarType::Float));
        assert!(Arc::ptr_eq(&def, &store.load_material_def("MatDefs/Lit.ron").unwrap()));
    }

    #[test]
    fn test_malformed_material_def() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("bad.ron"), "(name: ").unwrap();
        let store = FileAssetStore::new(&AssetConfig::new().with_search_paths([dir.path().to_str().unwrap()]));

        assert!(matches!(store.load_material_def("bad.ron"), Err(AssetError::InvalidData(_))));
    }
}
