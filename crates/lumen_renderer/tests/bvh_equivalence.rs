//! The BVH must report exactly the hit a linear scan finds.

use std::sync::Arc;

use lumen_renderer::{
    gen_range_f32, random_unit_vector, random_vec3, seeded_rng, BvhNode, HitRecord, Hittable,
    HittableList, Interval, Lambertian, Material, Quad, Ray, Sphere, Triangle, Vec3,
};
use rand::RngCore;

fn material_id(material: &dyn Material) -> *const () {
    material as *const dyn Material as *const ()
}

fn random_scene(count: usize, rng: &mut dyn RngCore) -> HittableList {
    let mut world = HittableList::new();
    for i in 0..count {
        let material: Arc<dyn Material> =
            Arc::new(Lambertian::from_color(random_vec3(rng, 0.0, 1.0)));
        let center = random_vec3(rng, -10.0, 10.0);

        let object: Arc<dyn Hittable> = match i % 3 {
            0 => Arc::new(Sphere::new(center, gen_range_f32(rng, 0.2, 1.5), material)),
            1 => Arc::new(Quad::new(
                center,
                random_vec3(rng, -2.0, 2.0),
                random_vec3(rng, -2.0, 2.0),
                material,
            )),
            _ => Arc::new(Triangle::new(
                center,
                random_vec3(rng, -2.0, 2.0),
                random_vec3(rng, -2.0, 2.0),
                material,
            )),
        };
        world.add(object);
    }
    world
}

#[test]
fn bvh_matches_linear_scan() {
    let mut rng = seeded_rng(2024);

    for count in [0, 1, 2, 3, 5, 17, 64, 200] {
        let world = random_scene(count, &mut rng);
        let bvh = BvhNode::from_list(&world);
        assert!(bvh.verify_bounds());

        let mut hits = 0;
        for _ in 0..500 {
            // Aim from outside the scene toward a point inside it
            let origin = 25.0 * random_unit_vector(&mut rng);
            let target = random_vec3(&mut rng, -8.0, 8.0);
            let ray = Ray::new_simple(origin, target - origin);
            let ray_t = Interval::new(0.001, f32::INFINITY);

            let mut expected = HitRecord::default();
            let mut actual = HitRecord::default();
            let hit_list = world.hit(&ray, ray_t, &mut expected, &mut rng);
            let hit_bvh = bvh.hit(&ray, ray_t, &mut actual, &mut rng);

            assert_eq!(hit_list, hit_bvh, "{count} objects, ray {ray:?}");
            if hit_list {
                hits += 1;
                assert!((expected.t - actual.t).abs() < 1e-5);
                assert!((expected.p - actual.p).length() < 1e-4);
                assert_eq!(material_id(expected.material), material_id(actual.material));
            }
        }

        if count >= 17 {
            assert!(hits > 0, "no ray hit any of {count} objects");
        }
    }
}

#[test]
fn bvh_over_empty_scene_never_hits() {
    let bvh = BvhNode::from_list(&HittableList::new());
    let mut rng = seeded_rng(1);

    for _ in 0..100 {
        let ray = Ray::new_simple(random_vec3(&mut rng, -5.0, 5.0), random_unit_vector(&mut rng));
        let mut rec = HitRecord::default();
        assert!(!bvh.hit(&ray, Interval::UNIVERSE, &mut rec, &mut rng));
    }
}

#[test]
fn bvh_bounds_cover_every_object() {
    let mut rng = seeded_rng(77);
    let world = random_scene(100, &mut rng);
    let bvh = BvhNode::from_list(&world);
    let root = bvh.bounding_box();

    for object in world.objects() {
        for corner in object.bounding_box().corners() {
            assert!(root.contains_point(corner));
        }
    }
    assert_eq!(bvh.stats().leaves, 100);
    assert!(bvh.stats().depth <= 9);
    assert_eq!(root.centroid(), world.bounding_box().centroid());
}
