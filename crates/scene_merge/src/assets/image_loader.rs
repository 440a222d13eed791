//! Image decoding for path-loaded textures
//!
//! Decodes PNG and JPEG through the `image` crate into RGBA8 [`Image`]s.

use std::path::Path;

use crate::assets::AssetError;
use crate::render::{ColorSpace, Image, ImageFormat};

/// Decode an image file
pub fn image_from_file<P: AsRef<Path>>(path: P) -> Result<Image, AssetError> {
    let path_ref = path.as_ref();

    log::debug!("Loading image from: {:?}", path_ref);

    let img = image::open(path_ref)
        .map_err(|e| AssetError::LoadFailed(format!("Failed to load image {}: {}", path_ref.display(), e)))?;

    let rgba_img = img.to_rgba8();
    let (width, height) = rgba_img.dimensions();

    log::debug!("Loaded image {}x{} from {:?}", width, height, path_ref);

    Ok(Image::new(ImageFormat::RGBA8, width, height, rgba_img.into_raw(), ColorSpace::SRGB))
}

/// Decode an encoded image held in memory
pub fn image_from_bytes(bytes: &[u8]) -> Result<Image, AssetError> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| AssetError::LoadFailed(format!("Failed to load image from bytes: {}", e)))?;

    let rgba_img = img.to_rgba8();
    let (width, height) = rgba_img.dimensions();

    Ok(Image::new(ImageFormat::RGBA8, width, height, rgba_img.into_raw(), ColorSpace::SRGB))
}

/// Solid color RGBA image
pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Image {
    let pixel_count = width as usize * height as usize;
    let data = color.iter().copied().cycle().take(pixel_count * 4).collect();
    Image::new(ImageFormat::RGBA8, width, height, data, ColorSpace::Linear)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_solid_color_image() {
        let img = solid_color(4, 4, [255, 0, 0, 255]);
        assert!(img.is_consistent());
        assert_eq!(&img.data[0..4], &[255, 0, 0, 255]);
        assert_eq!(&img.data[60..64], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_decode_png_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("red.png");
        image::RgbaImage::from_pixel(3, 2, image::Rgba([255, 0, 0, 255])).save(&path).unwrap();

        let img = image_from_file(&path).unwrap();
        assert_eq!((img.width, img.height), (3, 2));
        assert_eq!(img.format, ImageFormat::RGBA8);
        assert!(img.is_consistent());
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        let err = image_from_bytes(&[1, 2, 3, 4]).unwrap_err();
        assert!(matches!(err, AssetError::LoadFailed(_)));
    }
}
