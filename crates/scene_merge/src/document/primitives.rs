//! Shared primitive records: transforms and texture references

use serde::{Deserialize, Serialize};

use crate::foundation::math::{quat_from_xyzw, Transform, Vec3};

fn one3() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

fn identity_rotation() -> [f32; 4] {
    [0.0, 0.0, 0.0, 1.0]
}

/// Decoded local transform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformRecord {
    /// Translation
    #[serde(default)]
    pub translation: [f32; 3],
    /// Rotation quaternion as `[x, y, z, w]`
    #[serde(default = "identity_rotation")]
    pub rotation: [f32; 4],
    /// Scale
    #[serde(default = "one3")]
    pub scale: [f32; 3],
}

impl Default for TransformRecord {
    fn default() -> Self {
        Self {
            translation: [0.0; 3],
            rotation: identity_rotation(),
            scale: one3(),
        }
    }
}

impl TransformRecord {
    /// Convert to an engine transform
    pub fn to_transform(&self) -> Transform {
        Transform::from_parts(
            Vec3::from(self.translation),
            quat_from_xyzw(self.rotation),
            Vec3::from(self.scale),
        )
    }
}

/// Declared pixel layout of an inline texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelFormat {
    /// 8-bit RGB
    Rgb8,
    /// 8-bit RGBA
    Rgba8,
    /// 8-bit BGRA
    Bgra8,
    /// 16-bit float RGBA
    Rgba16f,
    /// 32-bit float RGBA
    Rgba32f,
    /// 8-bit single channel
    R8,
}

/// Texture whose pixels are embedded in the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Texture2DInline {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Declared pixel layout
    pub format: PixelFormat,
    /// Packed pixel rows
    pub data: Vec<u8>,
}

/// Texture reference carried by a material property
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextureRef {
    /// No texture
    #[default]
    Absent,
    /// Path relative to the scene's directory (or to the asset root)
    Path(String),
    /// Embedded pixel data
    Inline(Texture2DInline),
    /// Payload kind the decoder does not know, by name
    Unsupported(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_transform_defaults() {
        let record: TransformRecord = ron::from_str("(translation: (1.0, 2.0, 3.0))").unwrap();
        let t = record.to_transform();
        assert_relative_eq!(t.position, Vec3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(t.scale, Vec3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(t.rotation.w, 1.0);
    }

    #[test]
    fn test_texture_ref_variants_parse() {
        let path: TextureRef = ron::from_str("Path(\"tex/a.png\")").unwrap();
        assert_eq!(path, TextureRef::Path("tex/a.png".to_string()));

        let inline: TextureRef =
            ron::from_str("Inline((width: 1, height: 1, format: rgb8, data: [1, 2, 3]))").unwrap();
        assert!(matches!(inline, TextureRef::Inline(Texture2DInline { format: PixelFormat::Rgb8, .. })));
    }
}
