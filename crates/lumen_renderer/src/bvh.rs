//! Bounding Volume Hierarchy (BVH) acceleration structure.
//!
//! A binary tree over shared hittables, split at the centroid median along
//! the longest axis of each node's box.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::{HitRecord, Hittable, HittableList, Ray};
use lumen_math::{Aabb, Interval};
use rand::RngCore;

/// BVH node: a branch with two children, a leaf with one primitive, or
/// nothing at all.
pub enum BvhNode {
    /// Internal node with two children.
    Branch {
        left: Box<BvhNode>,
        right: Box<BvhNode>,
        bbox: Aabb,
    },
    /// Leaf node sharing a single primitive.
    Leaf(Arc<dyn Hittable>),
    /// Empty scene.
    Empty,
}

/// Shape statistics for a built tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BvhStats {
    pub branches: usize,
    pub leaves: usize,
    pub depth: usize,
}

impl BvhNode {
    /// Create a BVH from a list of hittable objects.
    pub fn new(objects: Vec<Arc<dyn Hittable>>) -> Self {
        let count = objects.len();
        let root = if objects.is_empty() {
            BvhNode::Empty
        } else {
            Self::build(objects)
        };

        let stats = root.stats();
        log::debug!(
            "Built BVH over {} objects: {} branches, {} leaves, depth {}",
            count,
            stats.branches,
            stats.leaves,
            stats.depth
        );
        root
    }

    /// Create a BVH sharing the objects of a list.
    pub fn from_list(list: &HittableList) -> Self {
        Self::new(list.objects().to_vec())
    }

    /// Recursive BVH construction.
    fn build(mut objects: Vec<Arc<dyn Hittable>>) -> Self {
        if objects.len() == 1 {
            return BvhNode::Leaf(objects.swap_remove(0));
        }

        let bbox = objects.iter().fold(Aabb::EMPTY, |acc, obj| {
            Aabb::surrounding(&acc, &obj.bounding_box())
        });
        let axis = bbox.longest_axis();

        // Stable sort keeps equal centroids in insertion order
        objects.sort_by(|a, b| {
            let a_val = a.bounding_box().centroid()[axis];
            let b_val = b.bounding_box().centroid()[axis];
            a_val.partial_cmp(&b_val).unwrap_or(Ordering::Equal)
        });

        let mid = objects.len() / 2;
        let right_objects = objects.split_off(mid);

        let left = Self::build(objects);
        let right = Self::build(right_objects);
        let bbox = Aabb::surrounding(&left.bounding_box(), &right.bounding_box());

        BvhNode::Branch {
            left: Box::new(left),
            right: Box::new(right),
            bbox,
        }
    }

    /// Check that every branch box equals the union of its children's boxes.
    pub fn verify_bounds(&self) -> bool {
        match self {
            BvhNode::Empty | BvhNode::Leaf(_) => true,
            BvhNode::Branch { left, right, bbox } => {
                *bbox == Aabb::surrounding(&left.bounding_box(), &right.bounding_box())
                    && left.verify_bounds()
                    && right.verify_bounds()
            }
        }
    }

    pub fn stats(&self) -> BvhStats {
        match self {
            BvhNode::Empty => BvhStats::default(),
            BvhNode::Leaf(_) => BvhStats {
                branches: 0,
                leaves: 1,
                depth: 1,
            },
            BvhNode::Branch { left, right, .. } => {
                let l = left.stats();
                let r = right.stats();
                BvhStats {
                    branches: 1 + l.branches + r.branches,
                    leaves: l.leaves + r.leaves,
                    depth: 1 + l.depth.max(r.depth),
                }
            }
        }
    }
}

impl Hittable for BvhNode {
    fn hit<'a>(
        &'a self,
        ray: &Ray,
        ray_t: Interval,
        rec: &mut HitRecord<'a>,
        rng: &mut dyn RngCore,
    ) -> bool {
        match self {
            BvhNode::Empty => false,

            BvhNode::Leaf(object) => object.hit(ray, ray_t, rec, rng),

            BvhNode::Branch { left, right, bbox } => {
                if !bbox.hit(ray, ray_t) {
                    return false;
                }

                let hit_left = left.hit(ray, ray_t, rec, rng);

                // Only check right up to closest hit
                let right_max = if hit_left { rec.t } else { ray_t.max };
                let hit_right = right.hit(ray, Interval::new(ray_t.min, right_max), rec, rng);

                hit_left || hit_right
            }
        }
    }

    fn bounding_box(&self) -> Aabb {
        match self {
            BvhNode::Empty => Aabb::EMPTY,
            BvhNode::Leaf(object) => object.bounding_box(),
            BvhNode::Branch { bbox, .. } => *bbox,
        }
    }
}
