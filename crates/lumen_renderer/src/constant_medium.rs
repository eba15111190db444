//! Homogeneous participating medium (fog, smoke).

use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable},
    material::Isotropic,
    sampling::gen_f32,
    texture::Texture,
    Material, Ray,
};
use lumen_math::{Aabb, Color, Interval, Vec3};
use rand::RngCore;

/// Offset past the entry point when searching for the exit.
const EXIT_EPSILON: f32 = 0.0001;

/// A volume of constant density bounded by a closed hittable.
///
/// Rays scatter inside with probability governed by an exponential
/// free-path distribution; the boundary must be convex enough that one
/// entry and one exit bound the inside.
pub struct ConstantMedium {
    boundary: Arc<dyn Hittable>,
    density: f32,
    phase_function: Arc<dyn Material>,
}

impl ConstantMedium {
    pub fn new(boundary: Arc<dyn Hittable>, density: f32, albedo: Arc<dyn Texture>) -> Self {
        Self {
            boundary,
            density,
            phase_function: Arc::new(Isotropic::new(albedo)),
        }
    }

    pub fn from_color(boundary: Arc<dyn Hittable>, density: f32, albedo: Color) -> Self {
        Self {
            boundary,
            density,
            phase_function: Arc::new(Isotropic::from_color(albedo)),
        }
    }
}

impl Hittable for ConstantMedium {
    fn hit<'a>(
        &'a self,
        ray: &Ray,
        ray_t: Interval,
        rec: &mut HitRecord<'a>,
        rng: &mut dyn RngCore,
    ) -> bool {
        if self.density <= 0.0 {
            return false;
        }

        let mut entry = HitRecord::default();
        if !self.boundary.hit(ray, Interval::UNIVERSE, &mut entry, rng) {
            return false;
        }

        let mut exit = HitRecord::default();
        let after_entry = Interval::new(entry.t + EXIT_EPSILON, f32::INFINITY);
        if !self.boundary.hit(ray, after_entry, &mut exit, rng) {
            return false;
        }

        let mut t_entry = entry.t.max(ray_t.min);
        let t_exit = exit.t.min(ray_t.max);
        if t_entry >= t_exit {
            return false;
        }
        t_entry = t_entry.max(0.0);

        let ray_length = ray.direction().length();
        if ray_length == 0.0 {
            return false;
        }
        let distance_inside = (t_exit - t_entry) * ray_length;
        // 1 - U keeps the draw in (0, 1]
        let hit_distance = -(1.0 - gen_f32(rng)).ln() / self.density;
        if hit_distance > distance_inside {
            return false;
        }

        rec.t = t_entry + hit_distance / ray_length;
        rec.p = ray.at(rec.t);
        // Isotropic scattering ignores the normal
        rec.normal = Vec3::X;
        rec.front_face = true;
        rec.material = self.phase_function.as_ref();

        true
    }

    fn bounding_box(&self) -> Aabb {
        self.boundary.bounding_box()
    }
}
