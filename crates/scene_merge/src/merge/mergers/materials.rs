//! Materials merger
//!
//! Builds one [`Material`] per material record, applies its property
//! assignments and registers it under the record id. Texture references are
//! resolved against the scene root's directory first, then against the asset
//! root, and fall back to a copy of the default texture.

use std::sync::Arc;

use crate::assets::AssetStore;
use crate::core::config::{MergeConfig, SamplingConfig};
use crate::document::{Document, MaterialRecord, PixelFormat, PropertyPayload, Texture2DInline, TextureRef};
use crate::foundation::math::{Vec2, Vec3};
use crate::merge::{render_bucket_key, ContextValue, MergeError, Merger, ResolutionContext};
use crate::render::{
    ColorRGBA, ColorSpace, Image, ImageFormat, Material, MaterialDef, MaterialError, Texture, VarType, WrapMode,
};
use crate::scene::Scene;

const CHECKER_SIZE: u32 = 64;
const CHECKER_CELL: u32 = 8;

fn apply_sampling(texture: &mut Texture, sampling: &SamplingConfig) {
    texture.set_mag_filter(sampling.mag_filter);
    texture.set_min_filter(sampling.min_filter);
    texture.set_anisotropy(sampling.anisotropy);
}

/// Default resources of the materials stage
///
/// Built once per pipeline and shared read-only. Texture fallbacks are
/// always handed out as copies so callers can change their sampling state.
#[derive(Debug)]
pub struct MaterialDefaults {
    texture: Texture,
    material: Arc<Material>,
}

impl MaterialDefaults {
    /// Load the defaults named by the configuration
    pub fn load(store: &dyn AssetStore, config: &MergeConfig) -> Self {
        let texture = Self::default_texture(store, config);
        let material = Self::default_material(store, config, &texture);
        Self { texture, material: Arc::new(material) }
    }

    /// Use caller-provided defaults
    pub fn from_parts(texture: Texture, material: Material) -> Self {
        Self { texture, material: Arc::new(material) }
    }

    fn default_texture(store: &dyn AssetStore, config: &MergeConfig) -> Texture {
        let mut texture = store.load_texture(&config.default_texture).unwrap_or_else(|e| {
            log::warn!("Default texture unavailable ({}), using a generated checkerboard", e);
            Texture::new_2d(Image::checkerboard(
                CHECKER_SIZE,
                CHECKER_CELL,
                [64, 64, 64, 255],
                [192, 192, 192, 255],
            ))
            .with_name(config.default_texture.clone())
        });
        texture.set_wrap(WrapMode::Repeat);
        apply_sampling(&mut texture, &config.default_sampling);
        texture
    }

    fn default_material(store: &dyn AssetStore, config: &MergeConfig, texture: &Texture) -> Material {
        let definition = store.load_material_def(&config.default_material_def).unwrap_or_else(|e| {
            log::warn!("Default material definition unavailable ({}), using the built-in checker", e);
            Arc::new(MaterialDef::debug_checker())
        });
        let diffuse = store.load_texture(&config.default_material_texture).unwrap_or_else(|e| {
            log::debug!("Default material texture unavailable ({}), using the default texture", e);
            texture.clone()
        });

        let mut material = Material::new(definition);
        material.set_name("DEFAULT");
        let results = [
            material.set_texture("DiffuseMap", diffuse),
            material.set_color("Multiply_Color", ColorRGBA::PINK),
            material.set_float("ChessSize", 0.5),
        ];
        for err in results.into_iter().filter_map(Result::err) {
            log::warn!("Default material: {}", err);
        }
        material
    }

    /// A fresh copy of the default texture
    pub fn texture_fallback(&self) -> Texture {
        self.texture.clone()
    }

    /// The shared default material
    pub fn material(&self) -> Arc<Material> {
        Arc::clone(&self.material)
    }
}

/// Merger for the material records of a document
pub struct MaterialsMerger {
    store: Arc<dyn AssetStore>,
    config: MergeConfig,
    defaults: Arc<MaterialDefaults>,
}

impl MaterialsMerger {
    /// Create the merger, loading its defaults from the store
    pub fn new(store: Arc<dyn AssetStore>, config: &MergeConfig) -> Self {
        let defaults = Arc::new(MaterialDefaults::load(store.as_ref(), config));
        Self::with_defaults(store, config, defaults)
    }

    /// Create the merger around existing defaults
    pub fn with_defaults(store: Arc<dyn AssetStore>, config: &MergeConfig, defaults: Arc<MaterialDefaults>) -> Self {
        Self { store, config: config.clone(), defaults }
    }

    /// Shared defaults, handed to the relations stage
    pub fn defaults(&self) -> Arc<MaterialDefaults> {
        Arc::clone(&self.defaults)
    }

    /// Resolve a texture reference of material `material_id`
    ///
    /// `root_dir` is the directory of the scene root's asset path. Returns
    /// `Ok(None)` for an absent reference; every returned texture wraps with
    /// [`WrapMode::Repeat`].
    pub fn resolve_texture(
        &self,
        root_dir: &str,
        material_id: &str,
        reference: &TextureRef,
    ) -> Result<Option<Texture>, MergeError> {
        let mut texture = match reference {
            TextureRef::Absent => return Ok(None),
            TextureRef::Path(path) => self.load_path(root_dir, path),
            TextureRef::Inline(inline) => inline_texture(material_id, inline)?,
            TextureRef::Unsupported(kind) => {
                return Err(MergeError::UnsupportedData(format!(
                    "texture payload '{kind}' in material '{material_id}'"
                )))
            }
        };
        texture.set_wrap(WrapMode::Repeat);
        Ok(Some(texture))
    }

    fn load_path(&self, root_dir: &str, path: &str) -> Texture {
        let candidate = if root_dir.is_empty() { path.to_string() } else { format!("{root_dir}/{path}") };
        match self.store.load_texture(&candidate) {
            Ok(texture) => return texture,
            Err(e) => log::debug!("Failed to load texture {}: {}, trying the asset root", candidate, e),
        }

        if candidate != path {
            match self.store.load_texture(path) {
                Ok(mut texture) => {
                    apply_sampling(&mut texture, &self.config.asset_root_sampling);
                    return texture;
                }
                Err(e) => log::debug!("Failed to load texture {}: {}", path, e),
            }
        }

        log::warn!("Failed to load texture {}, using the default texture", path);
        self.defaults.texture_fallback()
    }

    fn build_material(
        &self,
        record: &MaterialRecord,
        root_dir: &str,
        ctx: &mut ResolutionContext,
    ) -> Result<Material, MergeError> {
        let definition = self.store.load_material_def(&record.mat_id).map_err(|source| {
            MergeError::MaterialDefinition {
                material: record.id.clone(),
                definition: record.mat_id.clone(),
                source,
            }
        })?;

        let mut material = Material::new(definition);
        material.set_name(record.name.as_deref().unwrap_or(&record.id));

        for property in &record.properties {
            let name = property.id.as_str();
            if name == self.config.render_bucket_property {
                // an unset value reads as 0 (Opaque)
                let value = property.value.unwrap_or_else(|| {
                    log::debug!("Render bucket directive of material '{}' has no value, using 0", record.id);
                    0.0
                });
                ctx.put_namespaced(render_bucket_key(&record.id), ContextValue::Scalar(value), record.id.clone());
                continue;
            }

            let Some(payload) = property.payload() else {
                log::debug!("Property {} of material '{}' carries no value. Skip.", name, record.id);
                continue;
            };

            let result = match payload {
                PropertyPayload::Scalar(value) => {
                    set_scalar(&mut material, &record.mat_id, name, value);
                    Ok(())
                }
                PropertyPayload::Color(c) => material.set_color(name, ColorRGBA::from_array(c)),
                PropertyPayload::Texture(reference) => match self.resolve_texture(root_dir, &record.id, reference)? {
                    Some(texture) => material.set_texture(name, texture),
                    None => Ok(()),
                },
                PropertyPayload::Vec3(v) => material.set_vector3(name, Vec3::from(v)),
                PropertyPayload::Vec2(v) => material.set_vector2(name, Vec2::from(v)),
            };
            if let Err(e) = result {
                log::warn!("{} (material '{}'). Skip.", e, record.id);
            }
        }

        Ok(material)
    }
}

fn inline_texture(material_id: &str, inline: &Texture2DInline) -> Result<Texture, MergeError> {
    let format = match inline.format {
        PixelFormat::Rgb8 => ImageFormat::RGB8,
        PixelFormat::Rgba8 => ImageFormat::RGBA8,
        other => {
            return Err(MergeError::UnsupportedImageFormat {
                material: material_id.to_string(),
                format: other,
            })
        }
    };

    let Some(expected) = Image::expected_len(format, inline.width, inline.height) else {
        return Err(MergeError::UnsupportedData(format!(
            "inline texture of material '{}' declares {}x{} {:?}, too large to address",
            material_id, inline.width, inline.height, format
        )));
    };
    if inline.data.len() != expected {
        return Err(MergeError::UnsupportedData(format!(
            "inline texture of material '{}' holds {} bytes, {}x{} {:?} needs {}",
            material_id,
            inline.data.len(),
            inline.width,
            inline.height,
            format,
            expected
        )));
    }

    let image = Image::new(format, inline.width, inline.height, inline.data.clone(), ColorSpace::Linear);
    Ok(Texture::new_2d(image))
}

/// Set a scalar by the declared kind of the parameter; undeclared names are
/// logged and skipped, non-scalar kinds ignored
#[allow(clippy::cast_possible_truncation)]
fn set_scalar(material: &mut Material, mat_id: &str, name: &str, value: f32) {
    let Some(declared) = material.definition().param(name).map(|p| p.var_type) else {
        log::warn!("Parameter {} is not available for material {}. Skip.", name, mat_id);
        log::warn!(
            "Available parameters: {}",
            material.definition().param_names().collect::<Vec<_>>().join(", ")
        );
        return;
    };

    let result: Result<(), MaterialError> = match declared {
        VarType::Float => material.set_float(name, value),
        VarType::Int => material.set_int(name, value as i32),
        VarType::Boolean => material.set_boolean(name, value as i32 == 1),
        other => {
            log::debug!("Scalar for {:?} parameter {} ignored", other, name);
            Ok(())
        }
    };
    if let Err(e) = result {
        log::warn!("{}. Skip.", e);
    }
}

impl Merger for MaterialsMerger {
    fn name(&self) -> &'static str {
        "materials"
    }

    fn apply(&self, doc: &Document, scene: &mut Scene, ctx: &mut ResolutionContext) -> Result<(), MergeError> {
        let root_dir = scene.root_dir().to_string();
        for record in &doc.materials {
            let material = self.build_material(record, &root_dir, ctx)?;
            log::debug!("Material '{}' ({}) with {} parameters", record.id, record.mat_id, material.set_param_names().count());
            ctx.put(record.id.clone(), ContextValue::Material(Arc::new(material)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::image_loader::solid_color;
    use crate::assets::MemoryAssetStore;
    use crate::render::{MagFilter, MatParamDef, MinFilter};

    fn numeric_def() -> MaterialDef {
        MaterialDef::new(
            "Numeric",
            vec![
                MatParamDef::new("F", VarType::Float),
                MatParamDef::new("I", VarType::Int),
                MatParamDef::new("B", VarType::Boolean),
                MatParamDef::new("V", VarType::Vector4),
            ],
        )
    }

    #[test]
    fn test_scalar_conversion_by_kind() {
        let mut mat = Material::new(Arc::new(numeric_def()));
        set_scalar(&mut mat, "Numeric", "F", 0.25);
        set_scalar(&mut mat, "Numeric", "I", 2.9);
        set_scalar(&mut mat, "Numeric", "B", 1.7);
        set_scalar(&mut mat, "Numeric", "V", 3.0);

        assert_eq!(mat.float("F"), Some(0.25));
        assert!(matches!(mat.param("I"), Some(crate::render::MatParamValue::Int(2))));
        assert!(matches!(mat.param("B"), Some(crate::render::MatParamValue::Boolean(true))));
        assert!(mat.param("V").is_none());
    }

    #[test]
    fn test_boolean_only_true_for_one() {
        let mut mat = Material::new(Arc::new(numeric_def()));
        set_scalar(&mut mat, "Numeric", "B", 2.0);
        assert!(matches!(mat.param("B"), Some(crate::render::MatParamValue::Boolean(false))));
    }

    #[test]
    fn test_defaults_from_store() {
        let store = MemoryAssetStore::new()
            .with_texture("Textures/debug_8_64.png", Texture::new_2d(solid_color(8, 8, [1, 2, 3, 255])))
            .with_material_def("MatDefs/MatCap.ron", MaterialDef::debug_checker());
        let defaults = MaterialDefaults::load(&store, &MergeConfig::default());

        let tex = defaults.texture_fallback();
        assert_eq!(tex.wrap(), WrapMode::Repeat);
        assert_eq!(tex.mag_filter(), MagFilter::Nearest);
        assert_eq!(tex.min_filter(), MinFilter::NearestLinearMipMap);
        assert_eq!(tex.anisotropy(), 2);
        assert_eq!(tex.image().width, 8);

        let mat = defaults.material();
        assert_eq!(mat.name(), "DEFAULT");
        assert_eq!(mat.color("Multiply_Color"), Some(ColorRGBA::PINK));
        assert_eq!(mat.float("ChessSize"), Some(0.5));
        // generator texture missing: the default texture stands in
        assert!(mat.texture("DiffuseMap").unwrap().shares_image_with(&tex));
    }

    #[test]
    fn test_defaults_without_assets() {
        let defaults = MaterialDefaults::load(&MemoryAssetStore::new(), &MergeConfig::default());

        let tex = defaults.texture_fallback();
        assert_eq!((tex.image().width, tex.image().height), (64, 64));
        assert_eq!(tex.wrap(), WrapMode::Repeat);
        assert_eq!(defaults.material().definition().name, "MatCap");
    }

    #[test]
    fn test_fallbacks_are_independent() {
        let defaults = MaterialDefaults::load(&MemoryAssetStore::new(), &MergeConfig::default());
        let mut a = defaults.texture_fallback();
        let b = defaults.texture_fallback();
        a.set_wrap(WrapMode::ClampToEdge);

        assert_eq!(b.wrap(), WrapMode::Repeat);
        assert_eq!(defaults.texture_fallback().wrap(), WrapMode::Repeat);
    }

    #[test]
    fn test_inline_length_mismatch() {
        let inline = Texture2DInline { width: 2, height: 2, format: PixelFormat::Rgb8, data: vec![0; 11] };
        assert!(matches!(inline_texture("m", &inline), Err(MergeError::UnsupportedData(_))));
    }

    #[test]
    fn test_unknown_payload_kind_fails() {
        let merger = MaterialsMerger::new(Arc::new(MemoryAssetStore::new()), &MergeConfig::default());
        let err = merger
            .resolve_texture("scenes", "m1", &TextureRef::Unsupported("tex3d".into()))
            .unwrap_err();
        assert!(matches!(err, MergeError::UnsupportedData(_)));
    }

    #[test]
    fn test_absent_reference_resolves_to_none() {
        let merger = MaterialsMerger::new(Arc::new(MemoryAssetStore::new()), &MergeConfig::default());
        assert!(merger.resolve_texture("scenes", "m1", &TextureRef::Absent).unwrap().is_none());
    }
}
