//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing bounded by the camera's max depth
//! - Emission from lights plus attenuated scattered radiance
//! - Anti-aliasing via multi-sampling
//! - Gamma-2 output encoding

use std::time::Instant;

use crate::{
    bucket::{render_parallel, DEFAULT_BUCKET_SIZE},
    sampling::seeded_rng,
    Camera, HitRecord, Hittable, Ray,
};
use lumen_math::{Color, Interval};
use rand::RngCore;

/// Hits closer than this are ignored to avoid self-intersection acne.
pub const SHADOW_EPSILON: f32 = 0.001;

/// Render-run settings that are not camera state.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Seed for all random streams of the run
    pub seed: u64,
    /// Bucket edge length in pixels for parallel rendering
    pub bucket_size: u32,
    /// Render buckets on the rayon pool instead of row by row
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            bucket_size: DEFAULT_BUCKET_SIZE,
            parallel: true,
        }
    }
}

/// Compute the radiance carried back along a ray.
///
/// Returns `background` on a miss, the material's emission when it absorbs,
/// and emission plus attenuation times the recursively traced scattered ray
/// otherwise. Depth 0 returns black; paths cut off there contribute no
/// further light, so long paths are slightly darkened.
pub fn trace_ray(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    background: Color,
    rng: &mut dyn RngCore,
) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    let mut rec = HitRecord::default();
    if !world.hit(ray, Interval::new(SHADOW_EPSILON, f32::INFINITY), &mut rec, rng) {
        return background;
    }

    let emission = rec.material.emitted(rec.u, rec.v, rec.p);

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => {
            let scattered = trace_ray(&result.scattered, world, depth - 1, background, rng);
            emission + result.attenuation * scattered
        }
        None => emission,
    }
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a linear color to gamma-encoded 8-bit RGB.
///
/// Channels are gamma corrected, clamped to [0, 0.999] and scaled by 256, so
/// 1.0 maps to 255. NaN channels map to 0.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let intensity = Interval::new(0.0, 0.999);
    let encode = |c: f32| {
        let c = if c.is_nan() { 0.0 } else { c };
        (256.0 * intensity.clamp(linear_to_gamma(c))) as u8
    };
    [encode(color.x), encode(color.y), encode(color.z)]
}

/// Render a single pixel, averaging `samples_per_pixel` traced rays.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..camera.samples_per_pixel {
        let ray = camera.get_ray(x, y, rng);
        pixel_color += trace_ray(&ray, world, camera.max_depth, camera.background, rng);
    }

    pixel_color * camera.samples_scale()
}

/// Linear-radiance image in row-major order, row 0 at the top.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Gamma-encoded 8-bit RGB triples in row-major order.
    pub fn to_rgb8(&self) -> Vec<[u8; 3]> {
        self.pixels.iter().copied().map(color_to_rgb).collect()
    }
}

/// Render the entire scene row by row on the calling thread.
///
/// The camera must already be initialized. One random stream seeded from
/// `config.seed` drives every sample in scanline order.
pub fn render(camera: &Camera, world: &dyn Hittable, config: &RenderConfig) -> ImageBuffer {
    let width = camera.image_width;
    let height = camera.image_height();
    let mut image = ImageBuffer::new(width, height);
    let mut rng = seeded_rng(config.seed);

    for y in 0..height {
        log::debug!("Scanlines remaining: {}", height - y);
        for x in 0..width {
            let color = render_pixel(camera, world, x, y, &mut rng);
            image.set(x, y, color);
        }
    }

    image
}

/// Render with the strategy selected by `config.parallel`, logging timing.
pub fn render_image(camera: &Camera, world: &dyn Hittable, config: &RenderConfig) -> ImageBuffer {
    log::info!(
        "Rendering {}x{} at {} spp, max depth {}{}",
        camera.image_width,
        camera.image_height(),
        camera.samples_per_pixel,
        camera.max_depth,
        if config.parallel { "" } else { " (single-threaded)" }
    );
    let start = Instant::now();

    let image = if config.parallel {
        render_parallel(camera, world, config)
    } else {
        render(camera, world, config)
    };

    log::info!("Render finished in {:.2?}", start.elapsed());
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DiffuseLight, HittableList, Lambertian, Metal, Sphere};
    use lumen_math::Vec3;
    use std::sync::Arc;

    fn small_camera(background: Color) -> Camera {
        let mut camera = Camera::new()
            .with_image(1.0, 8)
            .with_quality(2, 5)
            .with_position(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::Y)
            .with_lens(60.0, 0.0, 1.0)
            .with_background(background);
        camera.initialize();
        camera
    }

    #[test]
    fn test_linear_to_gamma() {
        assert_eq!(linear_to_gamma(0.0), 0.0);
        assert_eq!(linear_to_gamma(-1.0), 0.0);
        assert!((linear_to_gamma(1.0) - 1.0).abs() < 0.0001);
        assert!((linear_to_gamma(0.25) - 0.5).abs() < 0.0001);
    }

    #[test]
    fn test_color_to_rgb() {
        assert_eq!(color_to_rgb(Color::ZERO), [0, 0, 0]);
        assert_eq!(color_to_rgb(Color::ONE), [255, 255, 255]);
        assert_eq!(color_to_rgb(Color::splat(4.0)), [255, 255, 255]);
        assert_eq!(color_to_rgb(Color::new(0.25, -1.0, f32::NAN)), [128, 0, 0]);
    }

    #[test]
    fn test_zero_samples_still_shows_background() {
        let background = Color::new(0.2, 0.4, 0.6);
        let mut camera = small_camera(background).with_quality(0, 5);
        camera.initialize();
        let mut rng = seeded_rng(0);

        let color = render_pixel(&camera, &HittableList::new(), 3, 3, &mut rng);
        assert!((color - background).length() < 1e-6);
    }

    #[test]
    fn test_depth_zero_is_black() {
        let world = HittableList::new();
        let ray = Ray::new_simple(Vec3::ZERO, -Vec3::Z);
        let mut rng = seeded_rng(0);

        assert_eq!(trace_ray(&ray, &world, 0, Color::ONE, &mut rng), Color::ZERO);
        assert_eq!(trace_ray(&ray, &world, 1, Color::ONE, &mut rng), Color::ONE);
    }

    #[test]
    fn test_light_returns_emission() {
        let mut world = HittableList::new();
        world.add(Arc::new(Sphere::new(
            Vec3::new(0.0, 0.0, -2.0),
            1.0,
            Arc::new(DiffuseLight::from_color(Color::new(4.0, 2.0, 1.0))),
        )));
        let ray = Ray::new_simple(Vec3::ZERO, -Vec3::Z);
        let mut rng = seeded_rng(0);

        let color = trace_ray(&ray, &world, 10, Color::ZERO, &mut rng);
        assert_eq!(color, Color::new(4.0, 2.0, 1.0));
    }

    #[test]
    fn test_mirror_reflects_background() {
        let mut world = HittableList::new();
        world.add(Arc::new(Sphere::new(
            Vec3::new(0.0, 0.0, -2.0),
            1.0,
            Arc::new(Metal::new(Color::splat(0.5), 0.0)),
        )));
        let ray = Ray::new_simple(Vec3::ZERO, -Vec3::Z);
        let mut rng = seeded_rng(0);

        // One bounce off the mirror, then the background
        let color = trace_ray(&ray, &world, 10, Color::ONE, &mut rng);
        assert!((color - Color::splat(0.5)).length() < 1e-5);

        // Not enough depth for the bounce to reach the background
        let color = trace_ray(&ray, &world, 1, Color::ONE, &mut rng);
        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn test_render_pixel_hits_diffuse_sphere() {
        let mut world = HittableList::new();
        world.add(Arc::new(Sphere::new(
            Vec3::ZERO,
            1.0,
            Arc::new(Lambertian::from_color(Color::splat(0.5))),
        )));
        let camera = small_camera(Color::ONE);
        let mut rng = seeded_rng(42);

        // Diffuse bounces lose at least half the energy against a white sky
        let center = render_pixel(&camera, &world, 4, 4, &mut rng);
        assert!(center.x < 0.51 && center.x > 0.0);

        let corner = render_pixel(&camera, &world, 0, 0, &mut rng);
        assert_eq!(corner, Color::ONE);
    }

    #[test]
    fn test_render_is_deterministic_for_seed() {
        let mut world = HittableList::new();
        world.add(Arc::new(Sphere::new(
            Vec3::ZERO,
            1.0,
            Arc::new(Lambertian::from_color(Color::splat(0.5))),
        )));
        let camera = small_camera(Color::new(0.7, 0.8, 1.0));
        let config = RenderConfig {
            seed: 9,
            parallel: false,
            ..RenderConfig::default()
        };

        let a = render(&camera, &world, &config);
        let b = render(&camera, &world, &config);
        assert_eq!(a, b);
        assert_eq!((a.width, a.height), (8, 8));
    }

    #[test]
    fn test_image_buffer_get_set() {
        let mut image = ImageBuffer::new(3, 2);
        image.set(2, 1, Color::ONE);

        assert_eq!(image.get(2, 1), Color::ONE);
        assert_eq!(image.pixels[5], Color::ONE);
        assert_eq!(image.to_rgb8()[5], [255, 255, 255]);
        assert_eq!(image.to_rgb8()[0], [0, 0, 0]);
    }
}
