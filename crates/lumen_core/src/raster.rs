//! Raster image loading for image textures.
//!
//! Decodes 8-bit RGB(A) files with the `image` crate and stores them as
//! linear float RGB, row-major from the top-left pixel.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use lumen_math::Color;

use crate::error::{LoadError, LoadResult};

/// A decoded image with linear RGB pixels in `[0, 1]`.
#[derive(Clone, Debug, Default)]
pub struct RasterImage {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Pixel data, row-major from the top-left corner
    pub pixels: Vec<Color>,
}

impl RasterImage {
    /// Create an image from linear pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<Color>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create an image from packed sRGB bytes (3 per pixel).
    pub fn from_srgb8(width: u32, height: u32, bytes: &[u8]) -> Self {
        let pixels = bytes
            .chunks_exact(3)
            .map(|p| {
                Color::new(
                    srgb_to_linear(p[0]),
                    srgb_to_linear(p[1]),
                    srgb_to_linear(p[2]),
                )
            })
            .collect();
        Self::new(width, height, pixels)
    }

    /// Returns true if there is no pixel data to sample.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Get the pixel at integer coordinates, clamped to the image edge.
    ///
    /// Returns `None` when the coordinates fall outside the stored data.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if self.is_empty() {
            return None;
        }
        let x = x.min(self.width - 1);
        let y = y.min(self.height - 1);
        self.pixels.get((y * self.width + x) as usize).copied()
    }
}

/// Load a raster image from a file path.
///
/// Fails with [`LoadError::ResourceUnavailable`] if the file cannot be opened.
pub fn load_raster<P: AsRef<Path>>(path: P) -> LoadResult<RasterImage> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::ResourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let img = image::io::Reader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?
        .decode()?;

    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    let image = RasterImage::from_srgb8(width, height, rgb.as_raw());

    log::debug!(
        "Loaded image: {} ({}x{})",
        path.display(),
        image.width,
        image.height
    );

    Ok(image)
}

/// Convert sRGB byte value to linear float.
fn srgb_to_linear(value: u8) -> f32 {
    let v = value as f32 / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_srgb8() {
        let image = RasterImage::from_srgb8(2, 1, &[0, 0, 0, 255, 255, 255]);

        assert_eq!(image.pixels.len(), 2);
        assert_eq!(image.pixel(0, 0), Some(Color::ZERO));
        assert!((image.pixel(1, 0).unwrap() - Color::ONE).length() < 1e-4);
    }

    #[test]
    fn test_pixel_clamps_to_edge() {
        let image = RasterImage::new(2, 2, vec![Color::X, Color::Y, Color::Z, Color::ONE]);

        assert_eq!(image.pixel(5, 0), Some(Color::Y));
        assert_eq!(image.pixel(0, 9), Some(Color::Z));
    }

    #[test]
    fn test_empty_image_has_no_pixels() {
        let image = RasterImage::default();
        assert!(image.is_empty());
        assert_eq!(image.pixel(0, 0), None);
    }

    #[test]
    fn test_srgb_to_linear() {
        assert!((srgb_to_linear(0) - 0.0).abs() < 0.001);
        assert!((srgb_to_linear(255) - 1.0).abs() < 0.001);

        // Mid-gray is darker in linear
        let mid = srgb_to_linear(128);
        assert!(mid < 0.5);
        assert!(mid > 0.1);
    }

    #[test]
    fn test_missing_file_is_resource_unavailable() {
        let err = load_raster("/nonexistent/lumen/earthmap.jpg").unwrap_err();
        assert!(err.is_resource_unavailable());
    }
}
