//! Texture and image types
//!
//! A [`Texture`] pairs shared pixel data ([`Image`]) with its own sampling
//! state. Cloning a texture shares the pixels but gives the clone its own
//! wrap and filter settings, so one material can change them without
//! affecting another.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Pixel layout of an [`Image`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// 8-bit red, green, blue
    RGB8,
    /// 8-bit red, green, blue, alpha
    RGBA8,
}

impl ImageFormat {
    /// Size of one pixel in bytes
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Self::RGB8 => 3,
            Self::RGBA8 => 4,
        }
    }
}

/// Color space the pixel values are stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Linear values
    Linear,
    /// sRGB-encoded values
    SRGB,
}

/// Texture wrapping modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WrapMode {
    /// Repeat the texture
    Repeat,
    /// Mirror the texture
    MirroredRepeat,
    /// Clamp to edge
    ClampToEdge,
}

/// Magnification filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MagFilter {
    /// Nearest neighbor
    Nearest,
    /// Bilinear interpolation
    Bilinear,
}

/// Minification filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MinFilter {
    /// Nearest neighbor, no mipmaps
    NearestNoMipMaps,
    /// Bilinear, no mipmaps
    BilinearNoMipMaps,
    /// Nearest neighbor on the nearest mipmap
    NearestNearestMipMap,
    /// Bilinear on the nearest mipmap
    BilinearNearestMipMap,
    /// Nearest neighbor, blended between mipmaps
    NearestLinearMipMap,
    /// Bilinear, blended between mipmaps
    Trilinear,
}

impl MinFilter {
    /// Whether this filter samples mipmaps
    pub const fn uses_mipmaps(self) -> bool {
        !matches!(self, Self::NearestNoMipMaps | Self::BilinearNoMipMaps)
    }
}

/// Raw pixel data with its dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Pixel layout
    pub format: ImageFormat,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Tightly packed rows of pixels
    pub data: Vec<u8>,
    /// Color space of the stored values
    pub color_space: ColorSpace,
}

impl Image {
    /// Create an image from already packed pixel data
    pub fn new(format: ImageFormat, width: u32, height: u32, data: Vec<u8>, color_space: ColorSpace) -> Self {
        Self { format, width, height, data, color_space }
    }

    /// Byte length a packed buffer of this layout must have, or `None` when
    /// it does not fit in `usize`
    pub fn expected_len(format: ImageFormat, width: u32, height: u32) -> Option<usize> {
        (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(format.bytes_per_pixel())
    }

    /// Whether `data` holds exactly `width * height` pixels
    pub fn is_consistent(&self) -> bool {
        Self::expected_len(self.format, self.width, self.height) == Some(self.data.len())
    }

    /// Generate an RGBA checkerboard, `cell` pixels per square
    pub fn checkerboard(size: u32, cell: u32, dark: [u8; 4], light: [u8; 4]) -> Self {
        let cell = cell.max(1);
        let mut data = Vec::with_capacity(Self::expected_len(ImageFormat::RGBA8, size, size).unwrap_or(0));
        for y in 0..size {
            for x in 0..size {
                let pixel = if ((x / cell) + (y / cell)) % 2 == 0 { dark } else { light };
                data.extend_from_slice(&pixel);
            }
        }
        Self::new(ImageFormat::RGBA8, size, size, data, ColorSpace::Linear)
    }
}

/// 2D texture: shared image plus per-instance sampling state
#[derive(Debug, Clone)]
pub struct Texture {
    name: Option<String>,
    image: Arc<Image>,
    wrap: WrapMode,
    mag_filter: MagFilter,
    min_filter: MinFilter,
    anisotropy: u32,
}

impl Texture {
    /// Wrap an image as a 2D texture with default sampling
    /// (clamped, bilinear, no mipmaps, no anisotropy)
    pub fn new_2d(image: Image) -> Self {
        Self {
            name: None,
            image: Arc::new(image),
            wrap: WrapMode::ClampToEdge,
            mag_filter: MagFilter::Bilinear,
            min_filter: MinFilter::BilinearNoMipMaps,
            anisotropy: 0,
        }
    }

    /// Set the asset name (usually the path it was loaded from)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Asset name, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Pixel data
    pub fn image(&self) -> &Image {
        &self.image
    }

    /// Whether two textures share the same pixel storage
    pub fn shares_image_with(&self, other: &Texture) -> bool {
        Arc::ptr_eq(&self.image, &other.image)
    }

    /// Wrap mode on both axes
    pub fn wrap(&self) -> WrapMode {
        self.wrap
    }

    /// Set the wrap mode on both axes
    pub fn set_wrap(&mut self, wrap: WrapMode) {
        self.wrap = wrap;
    }

    /// Magnification filter
    pub fn mag_filter(&self) -> MagFilter {
        self.mag_filter
    }

    /// Set the magnification filter
    pub fn set_mag_filter(&mut self, filter: MagFilter) {
        self.mag_filter = filter;
    }

    /// Minification filter
    pub fn min_filter(&self) -> MinFilter {
        self.min_filter
    }

    /// Set the minification filter
    pub fn set_min_filter(&mut self, filter: MinFilter) {
        self.min_filter = filter;
    }

    /// Anisotropic filtering level (0 disables it)
    pub fn anisotropy(&self) -> u32 {
        self.anisotropy
    }

    /// Set the anisotropic filtering level
    pub fn set_anisotropy(&mut self, level: u32) {
        self.anisotropy = level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkerboard_layout() {
        let img = Image::checkerboard(4, 2, [0, 0, 0, 255], [255, 255, 255, 255]);
        assert!(img.is_consistent());
        assert_eq!(&img.data[0..4], &[0, 0, 0, 255]);
        // third pixel of the first row is in the next cell
        assert_eq!(&img.data[8..12], &[255, 255, 255, 255]);
    }

    #[test]
    fn test_clone_has_independent_sampling() {
        let mut a = Texture::new_2d(Image::checkerboard(2, 1, [0; 4], [255; 4]));
        let b = a.clone();
        a.set_wrap(WrapMode::Repeat);
        a.set_anisotropy(8);

        assert_eq!(b.wrap(), WrapMode::ClampToEdge);
        assert_eq!(b.anisotropy(), 0);
        assert!(a.shares_image_with(&b));
    }

    #[test]
    fn test_expected_len() {
        assert_eq!(Image::expected_len(ImageFormat::RGB8, 2, 3), Some(18));
        assert_eq!(Image::expected_len(ImageFormat::RGBA8, 2, 2), Some(16));
        assert_eq!(Image::expected_len(ImageFormat::RGBA8, u32::MAX, u32::MAX), None);
    }
}
