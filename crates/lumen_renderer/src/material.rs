//! Material trait for surface scattering.

use std::sync::Arc;

use crate::sampling::{gen_f32, random_unit_vector};
use crate::texture::{SolidColor, Texture};
use crate::{hittable::HitRecord, Ray};
use lumen_math::{Color, Point3, Vec3};
use rand::RngCore;

/// Outcome of a scattering event.
#[derive(Debug, Clone, Copy)]
pub struct ScatterResult {
    /// Per-channel throughput applied to the scattered ray's radiance
    pub attenuation: Color,
    /// The outgoing ray
    pub scattered: Ray,
}

/// Trait for materials that describe how light interacts with surfaces.
pub trait Material: Send + Sync {
    /// Scatter an incoming ray.
    ///
    /// Returns `None` if the ray is absorbed.
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult>;

    /// Light emitted at the given surface coordinates and point.
    ///
    /// Most materials return black (no emission).
    fn emitted(&self, _u: f32, _v: f32, _p: Point3) -> Color {
        Color::ZERO
    }
}

/// Lambertian (diffuse) material.
#[derive(Clone)]
pub struct Lambertian {
    albedo: Arc<dyn Texture>,
}

impl Lambertian {
    pub fn new(albedo: Arc<dyn Texture>) -> Self {
        Self { albedo }
    }

    pub fn from_color(albedo: Color) -> Self {
        Self::new(Arc::new(SolidColor::new(albedo)))
    }
}

impl Material for Lambertian {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let mut scatter_direction = rec.normal + random_unit_vector(rng);

        // Catch degenerate scatter direction
        if scatter_direction.length_squared() < 1e-8 {
            scatter_direction = rec.normal;
        } else {
            scatter_direction = scatter_direction.normalize();
        }

        Some(ScatterResult {
            attenuation: self.albedo.value(rec.u, rec.v, rec.p),
            scattered: Ray::new(rec.p, scatter_direction, ray_in.time()),
        })
    }
}

/// Metal (specular) material.
#[derive(Debug, Clone, Copy)]
pub struct Metal {
    albedo: Color,
    fuzz: f32,
}

impl Metal {
    /// Create a new Metal material.
    ///
    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness, 0.0 = perfect mirror, 1.0 = very rough
    pub fn new(albedo: Color, fuzz: f32) -> Self {
        Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }
}

impl Material for Metal {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let reflected = reflect(ray_in.direction(), rec.normal).normalize_or_zero();
        let scattered_dir = reflected + self.fuzz * random_unit_vector(rng);

        // Absorbed if the fuzzed direction points into the surface
        if scattered_dir.dot(rec.normal) > 0.0 {
            Some(ScatterResult {
                attenuation: self.albedo,
                scattered: Ray::new(rec.p, scattered_dir, ray_in.time()),
            })
        } else {
            None
        }
    }
}

/// Dielectric (glass) material.
#[derive(Debug, Clone, Copy)]
pub struct Dielectric {
    /// Index of refraction relative to the enclosing medium
    ior: f32,
}

impl Dielectric {
    /// Create a new Dielectric material.
    ///
    /// - `ior`: Index of refraction (1.0 = air, 1.5 = glass, 2.4 = diamond)
    pub fn new(ior: f32) -> Self {
        Self { ior }
    }

    /// Schlick's approximation for reflectance.
    pub fn reflectance(cosine: f32, refraction_ratio: f32) -> f32 {
        let r0 = ((1.0 - refraction_ratio) / (1.0 + refraction_ratio)).powi(2);
        r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
    }
}

impl Material for Dielectric {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let refraction_ratio = if rec.front_face {
            1.0 / self.ior
        } else {
            self.ior
        };

        let unit_direction = ray_in.direction().normalize();
        let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();

        // Total internal reflection
        let cannot_refract = refraction_ratio * sin_theta > 1.0;

        let direction = if cannot_refract
            || Self::reflectance(cos_theta, refraction_ratio) > gen_f32(rng)
        {
            reflect(unit_direction, rec.normal)
        } else {
            refract(unit_direction, rec.normal, refraction_ratio)
        };

        Some(ScatterResult {
            attenuation: Color::ONE,
            scattered: Ray::new(rec.p, direction, ray_in.time()),
        })
    }
}

/// Diffuse light emitter.
#[derive(Clone)]
pub struct DiffuseLight {
    emit: Arc<dyn Texture>,
}

impl DiffuseLight {
    pub fn new(emit: Arc<dyn Texture>) -> Self {
        Self { emit }
    }

    pub fn from_color(emit: Color) -> Self {
        Self::new(Arc::new(SolidColor::new(emit)))
    }
}

impl Material for DiffuseLight {
    fn scatter(
        &self,
        _ray_in: &Ray,
        _rec: &HitRecord,
        _rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        None
    }

    fn emitted(&self, u: f32, v: f32, p: Point3) -> Color {
        self.emit.value(u, v, p)
    }
}

/// Uniform phase function for participating media.
#[derive(Clone)]
pub struct Isotropic {
    albedo: Arc<dyn Texture>,
}

impl Isotropic {
    pub fn new(albedo: Arc<dyn Texture>) -> Self {
        Self { albedo }
    }

    pub fn from_color(albedo: Color) -> Self {
        Self::new(Arc::new(SolidColor::new(albedo)))
    }
}

impl Material for Isotropic {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        Some(ScatterResult {
            attenuation: self.albedo.value(rec.u, rec.v, rec.p),
            scattered: Ray::new(rec.p, random_unit_vector(rng), ray_in.time()),
        })
    }
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector through a surface with unit normal `n`.
#[inline]
pub fn refract(uv: Vec3, n: Vec3, etai_over_etat: f32) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeded_rng;

    fn record(material: &dyn Material, normal: Vec3, front_face: bool) -> HitRecord<'_> {
        HitRecord {
            p: Vec3::ZERO,
            normal,
            material,
            u: 0.25,
            v: 0.75,
            t: 1.0,
            front_face,
        }
    }

    #[test]
    fn test_lambertian_always_scatters_above_surface() {
        let mat = Lambertian::from_color(Color::new(0.2, 0.4, 0.6));
        let rec = record(&mat, Vec3::Y, true);
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), -Vec3::Y, 0.3);
        let mut rng = seeded_rng(10);

        for _ in 0..500 {
            let result = mat.scatter(&ray, &rec, &mut rng).unwrap();
            assert_eq!(result.attenuation, Color::new(0.2, 0.4, 0.6));
            assert!(result.scattered.direction().dot(Vec3::Y) >= 0.0);
            assert!((result.scattered.direction().length() - 1.0).abs() < 1e-4);
            assert_eq!(result.scattered.time(), 0.3);
        }
    }

    #[test]
    fn test_metal_mirror_reflection() {
        let mat = Metal::new(Color::new(0.9, 0.8, 0.7), 0.0);
        let rec = record(&mat, Vec3::Y, true);
        let ray = Ray::new_simple(Vec3::new(-1.0, 1.0, 0.0), Vec3::new(1.0, -1.0, 0.0));
        let mut rng = seeded_rng(11);

        let result = mat.scatter(&ray, &rec, &mut rng).unwrap();
        let expected = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert!((result.scattered.direction() - expected).length() < 1e-5);
        assert_eq!(result.attenuation, Color::new(0.9, 0.8, 0.7));
    }

    #[test]
    fn test_metal_fuzz_is_clamped() {
        assert_eq!(Metal::new(Color::ONE, 4.0).fuzz, 1.0);
        assert_eq!(Metal::new(Color::ONE, -1.0).fuzz, 0.0);
    }

    #[test]
    fn test_metal_absorbs_grazing_fuzz_into_surface() {
        let mat = Metal::new(Color::ONE, 1.0);
        let rec = record(&mat, Vec3::Y, true);
        // Nearly tangent incidence: heavy fuzz will often push below the surface
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::new(1.0, -0.01, 0.0));
        let mut rng = seeded_rng(12);

        let absorbed = (0..500)
            .filter(|_| mat.scatter(&ray, &rec, &mut rng).is_none())
            .count();
        assert!(absorbed > 0);
        assert!(absorbed < 500);
    }

    #[test]
    fn test_schlick_at_normal_incidence_is_r0() {
        for ratio in [1.0f32 / 1.5, 1.5, 1.0 / 2.4, 1.33] {
            let r0 = ((1.0 - ratio) / (1.0 + ratio)).powi(2);
            assert_eq!(Dielectric::reflectance(1.0, ratio), r0);
        }
    }

    #[test]
    fn test_schlick_at_grazing_is_total() {
        assert!((Dielectric::reflectance(0.0, 1.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_dielectric_total_internal_reflection() {
        let mat = Dielectric::new(1.5);
        // Exiting glass at a steep angle: 1.5 * sin(60deg) > 1
        let rec = record(&mat, Vec3::Y, false);
        let dir = Vec3::new(60f32.to_radians().sin(), -60f32.to_radians().cos(), 0.0);
        let ray = Ray::new_simple(Vec3::ZERO, dir);
        let mut rng = seeded_rng(13);

        for _ in 0..100 {
            let result = mat.scatter(&ray, &rec, &mut rng).unwrap();
            assert_eq!(result.attenuation, Color::ONE);
            assert!((result.scattered.direction() - reflect(dir, Vec3::Y)).length() < 1e-5);
        }
    }

    #[test]
    fn test_dielectric_normal_incidence_mostly_refracts() {
        let mat = Dielectric::new(1.5);
        let rec = record(&mat, Vec3::Y, true);
        let ray = Ray::new_simple(Vec3::new(0.0, 1.0, 0.0), -Vec3::Y);
        let mut rng = seeded_rng(14);

        let refracted = (0..1000)
            .filter(|_| {
                let result = mat.scatter(&ray, &rec, &mut rng).unwrap();
                result.scattered.direction().y < 0.0
            })
            .count();
        // r0 = 0.04 for glass
        assert!(refracted > 900);
    }

    #[test]
    fn test_diffuse_light_emits_and_absorbs() {
        let mat = DiffuseLight::from_color(Color::splat(4.0));
        let rec = record(&mat, Vec3::Y, true);
        let ray = Ray::new_simple(Vec3::Y, -Vec3::Y);
        let mut rng = seeded_rng(15);

        assert!(mat.scatter(&ray, &rec, &mut rng).is_none());
        assert_eq!(mat.emitted(0.0, 0.0, Vec3::ZERO), Color::splat(4.0));
        assert_eq!(Lambertian::from_color(Color::ONE).emitted(0.0, 0.0, Vec3::ZERO), Color::ZERO);
    }

    #[test]
    fn test_isotropic_ignores_normal() {
        let mat = Isotropic::from_color(Color::splat(0.5));
        let rec = record(&mat, Vec3::X, true);
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::X);
        let mut rng = seeded_rng(16);

        let behind = (0..1000)
            .filter(|_| {
                let result = mat.scatter(&ray, &rec, &mut rng).unwrap();
                assert_eq!(result.attenuation, Color::splat(0.5));
                result.scattered.direction().dot(Vec3::X) < 0.0
            })
            .count();
        assert!(behind > 400 && behind < 600);
    }
}
