//! Planar parallelogram primitive and the plane machinery shared with
//! [`Triangle`](crate::Triangle).

use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable, HittableList},
    Material, Ray,
};
use lumen_math::{Aabb, Interval, Point3, Vec3};
use rand::RngCore;

/// Rays this close to parallel with the plane are treated as misses.
const PARALLEL_EPSILON: f32 = 1e-8;

/// A plane spanned by corner `q` and edges `u`, `v`.
///
/// Stores the unit normal, the plane offset `d = normal . q`, and
/// `w = n / (n . n)` with `n = u x v`, which recovers planar coordinates
/// of a point with two dot products.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Plane {
    q: Point3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    normal: Vec3,
    d: f32,
}

impl Plane {
    pub(crate) fn new(q: Point3, u: Vec3, v: Vec3) -> Self {
        let n = u.cross(v);
        let nn = n.dot(n);
        // Degenerate edges leave a zero normal, which never intersects
        let (normal, w) = if nn > 0.0 {
            (n.normalize(), n / nn)
        } else {
            (Vec3::ZERO, Vec3::ZERO)
        };

        Self {
            q,
            u,
            v,
            w,
            normal,
            d: normal.dot(q),
        }
    }

    /// Intersect the plane, returning `(t, point, alpha, beta)`.
    pub(crate) fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<(f32, Point3, f32, f32)> {
        let denom = self.normal.dot(ray.direction());
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.d - self.normal.dot(ray.origin())) / denom;
        if !ray_t.contains(t) {
            return None;
        }

        let intersection = ray.at(t);
        let planar_hitpt_vector = intersection - self.q;
        let alpha = self.w.dot(planar_hitpt_vector.cross(self.v));
        let beta = self.w.dot(self.u.cross(planar_hitpt_vector));

        Some((t, intersection, alpha, beta))
    }

    /// Box around the parallelogram's four corners.
    pub(crate) fn parallelogram_bbox(&self) -> Aabb {
        let diagonal1 = Aabb::from_points(self.q, self.q + self.u + self.v);
        let diagonal2 = Aabb::from_points(self.q + self.u, self.q + self.v);
        Aabb::surrounding(&diagonal1, &diagonal2)
    }

    /// Box around the triangle `q`, `q + u`, `q + v`.
    pub(crate) fn triangle_bbox(&self) -> Aabb {
        let a = Aabb::from_points(self.q, self.q + self.u);
        let b = Aabb::from_points(self.q, self.q + self.v);
        Aabb::surrounding(&a, &b)
    }

    pub(crate) fn normal(&self) -> Vec3 {
        self.normal
    }
}

/// A planar parallelogram with corner `q` and edges `u`, `v`.
///
/// Interior is the closed unit square in (alpha, beta), which become the
/// hit's (u, v).
pub struct Quad {
    plane: Plane,
    material: Arc<dyn Material>,
    bbox: Aabb,
}

impl Quad {
    pub fn new(q: Point3, u: Vec3, v: Vec3, material: Arc<dyn Material>) -> Self {
        let plane = Plane::new(q, u, v);
        Self {
            bbox: plane.parallelogram_bbox(),
            plane,
            material,
        }
    }

    fn is_interior(alpha: f32, beta: f32) -> bool {
        let unit = Interval::new(0.0, 1.0);
        unit.contains(alpha) && unit.contains(beta)
    }
}

impl Hittable for Quad {
    fn hit<'a>(
        &'a self,
        ray: &Ray,
        ray_t: Interval,
        rec: &mut HitRecord<'a>,
        _rng: &mut dyn RngCore,
    ) -> bool {
        let Some((t, p, alpha, beta)) = self.plane.intersect(ray, ray_t) else {
            return false;
        };
        if !Self::is_interior(alpha, beta) {
            return false;
        }

        rec.t = t;
        rec.p = p;
        rec.u = alpha;
        rec.v = beta;
        rec.material = self.material.as_ref();
        rec.set_face_normal(ray, self.plane.normal());

        true
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}

/// The six quads of the axis-aligned box spanning two opposite corners.
pub fn make_box(a: Point3, b: Point3, material: Arc<dyn Material>) -> HittableList {
    let mut sides = HittableList::new();

    let min = a.min(b);
    let max = a.max(b);

    let dx = Vec3::new(max.x - min.x, 0.0, 0.0);
    let dy = Vec3::new(0.0, max.y - min.y, 0.0);
    let dz = Vec3::new(0.0, 0.0, max.z - min.z);

    let faces = [
        (Vec3::new(min.x, min.y, max.z), dx, dy),  // front
        (Vec3::new(max.x, min.y, max.z), -dz, dy), // right
        (Vec3::new(max.x, min.y, min.z), -dx, dy), // back
        (Vec3::new(min.x, min.y, min.z), dz, dy),  // left
        (Vec3::new(min.x, max.y, max.z), dx, -dz), // top
        (Vec3::new(min.x, min.y, min.z), dx, dz),  // bottom
    ];
    for (q, u, v) in faces {
        sides.add(Arc::new(Quad::new(q, u, v, material.clone())));
    }

    sides
}
