//! Procedural and image-backed textures.

use std::sync::Arc;

use crate::Perlin;
use lumen_core::RasterImage;
use lumen_math::{Color, Interval, Point3};

/// Debug color returned when an image texture has no pixel data.
pub const MISSING_TEXTURE_COLOR: Color = Color::new(0.0, 1.0, 1.0);

/// Default octave count for noise turbulence.
pub const DEFAULT_TURBULENCE_DEPTH: u32 = 7;

/// A color lookup over surface coordinates and world position.
pub trait Texture: Send + Sync {
    fn value(&self, u: f32, v: f32, p: Point3) -> Color;
}

/// A texture with a constant uniform color.
#[derive(Debug, Clone, Copy)]
pub struct SolidColor {
    albedo: Color,
}

impl SolidColor {
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }

    pub fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(Color::new(r, g, b))
    }
}

impl Texture for SolidColor {
    fn value(&self, _u: f32, _v: f32, _p: Point3) -> Color {
        self.albedo
    }
}

/// A 3D checkerboard alternating between two textures.
///
/// The cell containing `p` is even when `floor(x/s) + floor(y/s) + floor(z/s)`
/// is even, and then samples `even`.
#[derive(Clone)]
pub struct CheckerTexture {
    inv_scale: f32,
    even: Arc<dyn Texture>,
    odd: Arc<dyn Texture>,
}

impl CheckerTexture {
    pub fn new(scale: f32, even: Arc<dyn Texture>, odd: Arc<dyn Texture>) -> Self {
        Self {
            inv_scale: 1.0 / scale,
            even,
            odd,
        }
    }

    pub fn from_colors(scale: f32, even: Color, odd: Color) -> Self {
        Self::new(
            scale,
            Arc::new(SolidColor::new(even)),
            Arc::new(SolidColor::new(odd)),
        )
    }
}

impl Texture for CheckerTexture {
    fn value(&self, u: f32, v: f32, p: Point3) -> Color {
        let cell = (self.inv_scale * p).floor();
        let sum = cell.x as i64 + cell.y as i64 + cell.z as i64;

        if sum.rem_euclid(2) == 0 {
            self.even.value(u, v, p)
        } else {
            self.odd.value(u, v, p)
        }
    }
}

/// Marbled gray from Perlin turbulence.
///
/// `value = 0.5 * (1 + sin(scale * z + 10 * turbulence(p)))`
#[derive(Clone)]
pub struct NoiseTexture {
    noise: Perlin,
    scale: f32,
    depth: u32,
}

impl NoiseTexture {
    pub fn new(noise: Perlin, scale: f32) -> Self {
        Self {
            noise,
            scale,
            depth: DEFAULT_TURBULENCE_DEPTH,
        }
    }

    /// Override the number of turbulence octaves.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }
}

impl Texture for NoiseTexture {
    fn value(&self, _u: f32, _v: f32, p: Point3) -> Color {
        let turbulence = self.noise.turbulence(p, self.depth);
        Color::splat(0.5 * (1.0 + (self.scale * p.z + 10.0 * turbulence).sin()))
    }
}

/// How an image texture reconstructs color between pixel centers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageFilter {
    #[default]
    Nearest,
    Bilinear,
}

/// A texture backed by a decoded raster image.
///
/// UV are clamped to [0, 1]; v = 0 is the bottom row of the image.
#[derive(Clone)]
pub struct ImageTexture {
    image: Arc<RasterImage>,
    filter: ImageFilter,
}

impl ImageTexture {
    pub fn new(image: Arc<RasterImage>) -> Self {
        Self {
            image,
            filter: ImageFilter::Nearest,
        }
    }

    pub fn with_filter(mut self, filter: ImageFilter) -> Self {
        self.filter = filter;
        self
    }

    fn sample_nearest(&self, u: f32, v: f32) -> Option<Color> {
        let i = (u * self.image.width as f32) as u32;
        let j = (v * self.image.height as f32) as u32;
        self.image.pixel(i, j)
    }

    fn sample_bilinear(&self, u: f32, v: f32) -> Option<Color> {
        let x = u * (self.image.width - 1) as f32;
        let y = v * (self.image.height - 1) as f32;

        let x0 = x.floor() as u32;
        let y0 = y.floor() as u32;
        let fx = x - x0 as f32;
        let fy = y - y0 as f32;

        let p00 = self.image.pixel(x0, y0)?;
        let p10 = self.image.pixel(x0 + 1, y0)?;
        let p01 = self.image.pixel(x0, y0 + 1)?;
        let p11 = self.image.pixel(x0 + 1, y0 + 1)?;

        let top = p00.lerp(p10, fx);
        let bottom = p01.lerp(p11, fx);
        Some(top.lerp(bottom, fy))
    }
}

impl Texture for ImageTexture {
    fn value(&self, u: f32, v: f32, _p: Point3) -> Color {
        if self.image.is_empty() {
            return MISSING_TEXTURE_COLOR;
        }

        let unit = Interval::new(0.0, 1.0);
        let u = unit.clamp(u);
        // Flip V to image coordinates
        let v = 1.0 - unit.clamp(v);

        let sample = match self.filter {
            ImageFilter::Nearest => self.sample_nearest(u, v),
            ImageFilter::Bilinear => self.sample_bilinear(u, v),
        };
        sample.unwrap_or(MISSING_TEXTURE_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeded_rng;
    use lumen_math::Vec3;

    const WHITE: Color = Color::ONE;
    const BLACK: Color = Color::ZERO;

    #[test]
    fn test_solid_color_ignores_inputs() {
        let tex = SolidColor::from_rgb(1.0, 0.5, 0.0);
        assert_eq!(tex.value(0.3, 0.9, Vec3::new(4.0, 5.0, 6.0)), Color::new(1.0, 0.5, 0.0));
    }

    #[test]
    fn test_checker_parity() {
        let checker = CheckerTexture::from_colors(1.0, WHITE, BLACK);

        assert_eq!(checker.value(0.0, 0.0, Vec3::new(0.5, 0.5, 0.5)), WHITE);
        assert_eq!(checker.value(0.0, 0.0, Vec3::new(1.5, 0.5, 0.5)), BLACK);
        assert_eq!(checker.value(0.0, 0.0, Vec3::new(1.5, 1.5, 0.5)), WHITE);
        // floor(-0.5) = -1, so the cell below the origin is odd
        assert_eq!(checker.value(0.0, 0.0, Vec3::new(-0.5, 0.5, 0.5)), BLACK);
        assert_eq!(checker.value(0.0, 0.0, Vec3::new(-0.5, -0.5, -0.5)), BLACK);
        assert_eq!(checker.value(0.0, 0.0, Vec3::new(-0.5, -0.5, 0.5)), WHITE);
    }

    #[test]
    fn test_checker_scale() {
        let checker = CheckerTexture::from_colors(0.32, WHITE, BLACK);

        assert_eq!(checker.value(0.0, 0.0, Vec3::new(0.1, 0.1, 0.1)), WHITE);
        assert_eq!(checker.value(0.0, 0.0, Vec3::new(0.4, 0.1, 0.1)), BLACK);
    }

    #[test]
    fn test_noise_texture_is_gray_in_unit_range() {
        let tex = NoiseTexture::new(Perlin::new(&mut seeded_rng(8)), 4.0);
        let mut rng = seeded_rng(9);
        for _ in 0..200 {
            let p = crate::sampling::random_vec3(&mut rng, -10.0, 10.0);
            let c = tex.value(0.0, 0.0, p);
            assert_eq!(c.x, c.y);
            assert_eq!(c.y, c.z);
            assert!((0.0..=1.0).contains(&c.x));
        }
    }

    #[test]
    fn test_noise_texture_follows_marble_formula() {
        let perlin = Perlin::new(&mut seeded_rng(8));
        let tex = NoiseTexture::new(perlin.clone(), 4.0);

        for p in [Vec3::new(0.3, 1.7, -2.2), Vec3::new(5.5, -0.25, 0.8)] {
            let turb = perlin.turbulence(p, DEFAULT_TURBULENCE_DEPTH);
            let expected = 0.5 * (1.0 + (4.0 * p.z + 10.0 * turb).sin());
            assert!((tex.value(0.0, 0.0, p).x - expected).abs() < 1e-6);
        }

        // Turbulence vanishes on lattice points, leaving the bare sine stripe
        let p = Vec3::new(2.0, -3.0, 1.0);
        let expected = 0.5 * (1.0 + 4.0f32.sin());
        assert!((tex.value(0.0, 0.0, p).x - expected).abs() < 1e-6);
    }

    fn two_by_two() -> Arc<RasterImage> {
        // Top row: red, green. Bottom row: blue, white.
        Arc::new(RasterImage::new(2, 2, vec![Color::X, Color::Y, Color::Z, Color::ONE]))
    }

    #[test]
    fn test_image_texture_nearest() {
        let tex = ImageTexture::new(two_by_two());

        assert_eq!(tex.value(0.1, 0.9, Vec3::ZERO), Color::X);
        assert_eq!(tex.value(0.9, 0.9, Vec3::ZERO), Color::Y);
        assert_eq!(tex.value(0.1, 0.1, Vec3::ZERO), Color::Z);
        assert_eq!(tex.value(0.9, 0.1, Vec3::ZERO), Color::ONE);
    }

    #[test]
    fn test_image_texture_clamps_uv() {
        let tex = ImageTexture::new(two_by_two());

        assert_eq!(tex.value(-3.0, 7.0, Vec3::ZERO), Color::X);
        assert_eq!(tex.value(1.0, 0.0, Vec3::ZERO), Color::ONE);
    }

    #[test]
    fn test_image_texture_bilinear_center_is_average() {
        let tex = ImageTexture::new(two_by_two()).with_filter(ImageFilter::Bilinear);
        let c = tex.value(0.5, 0.5, Vec3::ZERO);

        let expected = (Color::X + Color::Y + Color::Z + Color::ONE) / 4.0;
        assert!((c - expected).length() < 1e-5);
    }

    #[test]
    fn test_missing_image_returns_debug_color() {
        let tex = ImageTexture::new(Arc::new(RasterImage::default()));
        assert_eq!(tex.value(0.5, 0.5, Vec3::ZERO), MISSING_TEXTURE_COLOR);
    }
}
