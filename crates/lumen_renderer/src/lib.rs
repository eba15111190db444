//! Lumen renderer - CPU path tracing
//!
//! A Monte Carlo path tracer over spheres, quads, triangles and
//! participating media, accelerated by a bounding volume hierarchy.
//!
//! All randomness is drawn from explicitly passed generators, so a render
//! is reproducible from its [`RenderConfig::seed`].

mod bucket;
mod bvh;
mod camera;
mod constant_medium;
mod hittable;
mod material;
mod perlin;
mod ppm;
mod quad;
mod renderer;
mod sampling;
mod sphere;
mod texture;
mod transform;
mod triangle;

pub use bucket::{generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use bvh::{BvhNode, BvhStats};
pub use camera::Camera;
pub use constant_medium::ConstantMedium;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{
    reflect, refract, Dielectric, DiffuseLight, Isotropic, Lambertian, Material, Metal,
    ScatterResult,
};
pub use perlin::Perlin;
pub use ppm::write_ppm;
pub use quad::{make_box, Quad};
pub use renderer::{
    color_to_rgb, linear_to_gamma, render, render_image, render_pixel, trace_ray, ImageBuffer,
    RenderConfig, SHADOW_EPSILON,
};
pub use sampling::{
    gen_f32, gen_range_f32, random_in_unit_disk, random_unit_vector, random_vec3, sample_square,
    seeded_rng, RenderRng,
};
pub use sphere::Sphere;
pub use texture::{
    CheckerTexture, ImageFilter, ImageTexture, NoiseTexture, SolidColor, Texture,
    DEFAULT_TURBULENCE_DEPTH, MISSING_TEXTURE_COLOR,
};
pub use transform::{RotateY, Translate};
pub use triangle::Triangle;

/// Re-export math types from lumen_math
pub use lumen_math::{Aabb, Color, Interval, Point3, Ray, Vec3};
