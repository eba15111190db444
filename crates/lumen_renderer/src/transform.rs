//! Rigid-body instancing wrappers.
//!
//! Each wrapper moves the ray into object space, delegates to the wrapped
//! hittable, and moves the hit back into world space.

use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable},
    Ray,
};
use lumen_math::{Aabb, Interval, Point3, Vec3};
use rand::RngCore;

/// Offsets a hittable by a fixed displacement.
pub struct Translate {
    object: Arc<dyn Hittable>,
    offset: Vec3,
    bbox: Aabb,
}

impl Translate {
    pub fn new(object: Arc<dyn Hittable>, offset: Vec3) -> Self {
        let bbox = object.bounding_box().translate(offset);
        Self {
            object,
            offset,
            bbox,
        }
    }
}

impl Hittable for Translate {
    fn hit<'a>(
        &'a self,
        ray: &Ray,
        ray_t: Interval,
        rec: &mut HitRecord<'a>,
        rng: &mut dyn RngCore,
    ) -> bool {
        let offset_ray = Ray::new(ray.origin() - self.offset, ray.direction(), ray.time());

        if !self.object.hit(&offset_ray, ray_t, rec, rng) {
            return false;
        }

        rec.p += self.offset;
        true
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}

/// Rotates a hittable about the world Y axis.
pub struct RotateY {
    object: Arc<dyn Hittable>,
    sin_theta: f32,
    cos_theta: f32,
    bbox: Aabb,
}

impl RotateY {
    /// Rotate by `angle` degrees, counter-clockwise looking down -Y.
    pub fn new(object: Arc<dyn Hittable>, angle: f32) -> Self {
        let (sin_theta, cos_theta) = angle.to_radians().sin_cos();
        let mut rotate = Self {
            object,
            sin_theta,
            cos_theta,
            bbox: Aabb::EMPTY,
        };

        let child = rotate.object.bounding_box();
        if !child.is_empty() {
            let corners = child.corners().map(|c| rotate.to_world(c));
            rotate.bbox = corners
                .iter()
                .fold(Aabb::EMPTY, |acc, &c| Aabb::surrounding(&acc, &Aabb::from_points(c, c)));
        }

        rotate
    }

    #[inline]
    fn to_object(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.cos_theta * v.x - self.sin_theta * v.z,
            v.y,
            self.sin_theta * v.x + self.cos_theta * v.z,
        )
    }

    #[inline]
    fn to_world(&self, v: Point3) -> Point3 {
        Vec3::new(
            self.cos_theta * v.x + self.sin_theta * v.z,
            v.y,
            -self.sin_theta * v.x + self.cos_theta * v.z,
        )
    }
}

impl Hittable for RotateY {
    fn hit<'a>(
        &'a self,
        ray: &Ray,
        ray_t: Interval,
        rec: &mut HitRecord<'a>,
        rng: &mut dyn RngCore,
    ) -> bool {
        let rotated = Ray::new(
            self.to_object(ray.origin()),
            self.to_object(ray.direction()),
            ray.time(),
        );

        if !self.object.hit(&rotated, ray_t, rec, rng) {
            return false;
        }

        rec.p = self.to_world(rec.p);
        rec.normal = self.to_world(rec.normal);
        true
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}
