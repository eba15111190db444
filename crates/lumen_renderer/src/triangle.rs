//! Triangle primitive for ray tracing.
//!
//! Shares the quad's plane projection; only the interior test differs.

use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable},
    quad::Plane,
    Material, Ray,
};
use lumen_math::{Aabb, Interval, Point3, Vec3};
use rand::RngCore;

/// A triangle with corner `q` and edges `u`, `v`.
///
/// The hit's (u, v) are the planar coordinates (alpha, beta) of the point,
/// so `q + u*alpha + v*beta` reconstructs it.
pub struct Triangle {
    plane: Plane,
    material: Arc<dyn Material>,
    bbox: Aabb,
}

impl Triangle {
    pub fn new(q: Point3, u: Vec3, v: Vec3, material: Arc<dyn Material>) -> Self {
        let plane = Plane::new(q, u, v);
        Self {
            bbox: plane.triangle_bbox(),
            plane,
            material,
        }
    }

    /// Create a triangle from three vertices in counter-clockwise order.
    pub fn from_vertices(v0: Point3, v1: Point3, v2: Point3, material: Arc<dyn Material>) -> Self {
        Self::new(v0, v1 - v0, v2 - v0, material)
    }

    /// Unit face normal, zero for a degenerate triangle.
    pub fn normal(&self) -> Vec3 {
        self.plane.normal()
    }

    // Edges and vertices are exterior
    fn is_interior(alpha: f32, beta: f32) -> bool {
        alpha > 0.0 && beta > 0.0 && alpha + beta < 1.0
    }
}

impl Hittable for Triangle {
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
