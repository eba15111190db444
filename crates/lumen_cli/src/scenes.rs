//! Built-in scene presets.
//!
//! Each preset assembles a world and a camera configured for it. Optional
//! assets (the OBJ mesh and the image texture) are loaded here; a failed
//! load is logged and the render continues without that asset.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::ValueEnum;
use lumen_core::{load_obj, load_raster, RasterImage};
use lumen_math::{Color, Point3, Vec3};
use lumen_renderer::{
    gen_f32, gen_range_f32, make_box, random_vec3, BvhNode, Camera, CheckerTexture,
    ConstantMedium, Dielectric, DiffuseLight, Hittable, HittableList, ImageTexture, Lambertian,
    Material, Metal, NoiseTexture, Perlin, Quad, RotateY, Sphere, Texture, Translate, Triangle,
};
use rand::RngCore;

const SKY: Color = Color::new(0.70, 0.80, 1.00);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScenePreset {
    BouncingSpheres,
    CheckeredSpheres,
    Earth,
    PerlinSpheres,
    Quads,
    SimpleLight,
    CornellBox,
    CornellSmoke,
    Final,
    Obj,
    DepthOfField,
    CameraFov,
    MotionBlur,
    MaterialsShowcase,
    Showcase,
}

/// Paths of the optional assets some presets use.
#[derive(Debug, Clone)]
pub struct Assets {
    pub obj: PathBuf,
    pub texture: PathBuf,
}

/// A world ready to render and the camera (not yet initialized) to view it.
pub struct Scene {
    pub world: BvhNode,
    pub camera: Camera,
}

impl Scene {
    fn new(world: HittableList, camera: Camera) -> Self {
        Self {
            world: BvhNode::from_list(&world),
            camera,
        }
    }
}

/// Build a preset, drawing all scene randomness from `rng`.
pub fn build(preset: ScenePreset, assets: &Assets, rng: &mut dyn RngCore) -> Scene {
    log::info!("Building scene {:?}", preset);
    match preset {
        ScenePreset::BouncingSpheres => bouncing_spheres(rng),
        ScenePreset::CheckeredSpheres => checkered_spheres(),
        ScenePreset::Earth => earth(&assets.texture),
        ScenePreset::PerlinSpheres => perlin_spheres(rng),
        ScenePreset::Quads => quads(),
        ScenePreset::SimpleLight => simple_light(rng),
        ScenePreset::CornellBox => cornell_box(),
        ScenePreset::CornellSmoke => cornell_smoke(),
        ScenePreset::Final => final_scene(&assets.texture, rng),
        ScenePreset::Obj => obj_scene(&assets.obj),
        ScenePreset::DepthOfField => depth_of_field(),
        ScenePreset::CameraFov => camera_fov(),
        ScenePreset::MotionBlur => motion_blur(),
        ScenePreset::MaterialsShowcase => materials_showcase(rng),
        ScenePreset::Showcase => showcase(assets, rng),
    }
}

fn lambertian(albedo: Color) -> Arc<dyn Material> {
    Arc::new(Lambertian::from_color(albedo))
}

fn ground_checker() -> Arc<dyn Texture> {
    Arc::new(CheckerTexture::from_colors(
        0.32,
        Color::new(0.2, 0.3, 0.1),
        Color::new(0.9, 0.9, 0.9),
    ))
}

fn noise(scale: f32, rng: &mut dyn RngCore) -> Arc<dyn Texture> {
    Arc::new(NoiseTexture::new(Perlin::new(rng), scale))
}

/// Image texture from disk, or the missing-texture color if it can't load.
fn image_texture(path: &Path) -> Arc<dyn Texture> {
    let image = match load_raster(path) {
        Ok(image) => image,
        Err(err) => {
            log::warn!("Texture unavailable, using debug color: {}", err);
            RasterImage::default()
        }
    };
    Arc::new(ImageTexture::new(Arc::new(image)))
}

/// Triangles of an OBJ mesh, or nothing if it can't load.
fn obj_triangles(path: &Path, material: Arc<dyn Material>) -> Option<HittableList> {
    let mesh = match load_obj(path) {
        Ok(mesh) => mesh,
        Err(err) => {
            log::warn!("Skipping mesh: {}", err);
            return None;
        }
    };
    log::info!(
        "Loaded {} vertices ({} triangles) from {}",
        mesh.vertices.len(),
        mesh.triangle_count(),
        path.display()
    );

    let mut triangles = HittableList::new();
    for [v0, v1, v2] in mesh.triangles() {
        triangles.add(Arc::new(Triangle::from_vertices(v0, v1, v2, material.clone())));
    }
    Some(triangles)
}

fn bouncing_spheres(rng: &mut dyn RngCore) -> Scene {
    let mut world = HittableList::new();
    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, -1000.0, 0.0),
        1000.0,
        Arc::new(Lambertian::new(ground_checker())),
    )));

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = gen_f32(rng);
            let center = Point3::new(
                a as f32 + 0.9 * gen_f32(rng),
                0.2,
                b as f32 + 0.9 * gen_f32(rng),
            );

            if (center - Point3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            if choose_mat < 0.8 {
                let albedo = random_vec3(rng, 0.0, 1.0) * random_vec3(rng, 0.0, 1.0);
                let center2 = center + Vec3::new(0.0, gen_range_f32(rng, 0.0, 0.5), 0.0);
                world.add(Arc::new(Sphere::moving(center, center2, 0.2, lambertian(albedo))));
            } else if choose_mat < 0.95 {
                let albedo = random_vec3(rng, 0.5, 1.0);
                let fuzz = gen_range_f32(rng, 0.0, 0.5);
                world.add(Arc::new(Sphere::new(center, 0.2, Arc::new(Metal::new(albedo, fuzz)))));
            } else {
                world.add(Arc::new(Sphere::new(center, 0.2, Arc::new(Dielectric::new(1.5)))));
            }
        }
    }

    world.add(Arc::new(Sphere::new(Point3::new(0.0, 1.0, 0.0), 1.0, Arc::new(Dielectric::new(1.5)))));
    world.add(Arc::new(Sphere::new(
        Point3::new(-4.0, 1.0, 0.0),
        1.0,
        lambertian(Color::new(0.4, 0.2, 0.1)),
    )));
    world.add(Arc::new(Sphere::new(
        Point3::new(4.0, 1.0, 0.0),
        1.0,
        Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0)),
    )));

    let camera = Camera::new()
        .with_image(16.0 / 9.0, 1200)
        .with_quality(10, 50)
        .with_background(SKY)
        .with_position(Point3::new(13.0, 2.0, 3.0), Point3::ZERO, Vec3::Y)
        .with_lens(20.0, 0.6, 10.0);

    Scene::new(world, camera)
}

fn checkered_spheres() -> Scene {
    let mut world = HittableList::new();
    let checker = ground_checker();

    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, -10.0, 0.0),
        10.0,
        Arc::new(Lambertian::new(checker.clone())),
    )));
    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, 10.0, 0.0),
        10.0,
        Arc::new(Lambertian::new(checker)),
    )));

    let camera = Camera::new()
        .with_image(16.0 / 9.0, 400)
        .with_quality(100, 50)
        .with_background(SKY)
        .with_position(Point3::new(13.0, 2.0, 3.0), Point3::ZERO, Vec3::Y)
        .with_lens(20.0, 0.0, 10.0);

    Scene::new(world, camera)
}

fn earth(texture: &Path) -> Scene {
    let globe = Sphere::new(Point3::ZERO, 2.0, Arc::new(Lambertian::new(image_texture(texture))));
    let world = HittableList::from_object(Arc::new(globe));

    let camera = Camera::new()
        .with_image(16.0 / 9.0, 400)
        .with_quality(100, 50)
        .with_background(SKY)
        .with_position(Point3::new(0.0, 0.0, 12.0), Point3::ZERO, Vec3::Y)
        .with_lens(20.0, 0.0, 10.0);

    Scene::new(world, camera)
}

fn perlin_spheres(rng: &mut dyn RngCore) -> Scene {
    let mut world = HittableList::new();
    let pertext = noise(4.0, rng);

    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, -1000.0, 0.0),
        1000.0,
        Arc::new(Lambertian::new(pertext.clone())),
    )));
    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, 2.0, 0.0),
        2.0,
        Arc::new(Lambertian::new(pertext)),
    )));

    let camera = Camera::new()
        .with_image(16.0 / 9.0, 400)
        .with_quality(100, 50)
        .with_background(SKY)
        .with_position(Point3::new(13.0, 2.0, 3.0), Point3::ZERO, Vec3::Y)
        .with_lens(20.0, 0.0, 10.0);

    Scene::new(world, camera)
}

fn quads() -> Scene {
    let mut world = HittableList::new();

    world.add(Arc::new(Quad::new(
        Point3::new(-3.0, -2.0, 5.0),
        Vec3::new(0.0, 0.0, -4.0),
        Vec3::new(0.0, 4.0, 0.0),
        lambertian(Color::new(1.0, 0.2, 0.2)),
    )));
    world.add(Arc::new(Triangle::new(
        Point3::new(-2.0, -2.0, 0.0),
        Vec3::new(4.0, 0.0, 0.0),
        Vec3::new(0.0, 4.0, 0.0),
        Arc::new(Lambertian::new(ground_checker())),
    )));
    world.add(Arc::new(Quad::new(
        Point3::new(3.0, -2.0, 1.0),
        Vec3::new(0.0, 0.0, 4.0),
        Vec3::new(0.0, 4.0, 0.0),
        lambertian(Color::new(0.2, 0.2, 1.0)),
    )));
    world.add(Arc::new(Quad::new(
        Point3::new(-2.0, 3.0, 1.0),
        Vec3::new(4.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 4.0),
        lambertian(Color::new(1.0, 0.5, 0.0)),
    )));
    world.add(Arc::new(Quad::new(
        Point3::new(-2.0, -3.0, 5.0),
        Vec3::new(4.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, -4.0),
        lambertian(Color::new(0.2, 0.8, 0.8)),
    )));

    let camera = Camera::new()
        .with_image(1.0, 400)
        .with_quality(100, 50)
        .with_background(SKY)
        .with_position(Point3::new(0.0, 0.0, 9.0), Point3::ZERO, Vec3::Y)
        .with_lens(80.0, 0.0, 10.0);

    Scene::new(world, camera)
}

fn simple_light(rng: &mut dyn RngCore) -> Scene {
    let mut world = HittableList::new();
    let difflight: Arc<dyn Material> = Arc::new(DiffuseLight::from_color(Color::splat(4.0)));

    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, -1000.0, 0.0),
        1000.0,
        Arc::new(Lambertian::new(ground_checker())),
    )));
    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, 2.0, 0.0),
        2.0,
        Arc::new(Lambertian::new(noise(4.0, rng))),
    )));
    world.add(Arc::new(Sphere::new(Point3::new(0.0, 7.0, 0.0), 2.0, difflight.clone())));
    world.add(Arc::new(Quad::new(
        Point3::new(3.0, 1.0, -2.0),
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(0.0, 2.0, 0.0),
        difflight,
    )));

    let camera = Camera::new()
        .with_image(16.0 / 9.0, 1200)
        .with_quality(100, 50)
        .with_background(Color::ZERO)
        .with_position(Point3::new(26.0, 3.0, 6.0), Point3::new(0.0, 2.0, 0.0), Vec3::Y)
        .with_lens(20.0, 0.0, 10.0);

    Scene::new(world, camera)
}

/// The five walls of the Cornell box, without its light.
fn cornell_walls(world: &mut HittableList, white: &Arc<dyn Material>) {
    let red = lambertian(Color::new(0.65, 0.05, 0.05));
    let green = lambertian(Color::new(0.12, 0.45, 0.15));

    world.add(Arc::new(Quad::new(
        Point3::new(555.0, 0.0, 0.0),
        Vec3::new(0.0, 555.0, 0.0),
        Vec3::new(0.0, 0.0, 555.0),
        green,
    )));
    world.add(Arc::new(Quad::new(
        Point3::ZERO,
        Vec3::new(0.0, 555.0, 0.0),
        Vec3::new(0.0, 0.0, 555.0),
        red,
    )));
    world.add(Arc::new(Quad::new(
        Point3::ZERO,
        Vec3::new(555.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 555.0),
        white.clone(),
    )));
    world.add(Arc::new(Quad::new(
        Point3::new(555.0, 555.0, 555.0),
        Vec3::new(-555.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, -555.0),
        white.clone(),
    )));
    world.add(Arc::new(Quad::new(
        Point3::new(0.0, 0.0, 555.0),
        Vec3::new(555.0, 0.0, 0.0),
        Vec3::new(0.0, 555.0, 0.0),
        white.clone(),
    )));
}

/// The tall and short boxes, rotated and placed inside the Cornell box.
fn cornell_boxes(white: &Arc<dyn Material>) -> [Arc<dyn Hittable>; 2] {
    let tall = make_box(Point3::ZERO, Point3::new(165.0, 330.0, 165.0), white.clone());
    let tall = RotateY::new(Arc::new(tall), 15.0);
    let tall = Translate::new(Arc::new(tall), Vec3::new(265.0, 0.0, 295.0));

    let short = make_box(Point3::ZERO, Point3::splat(165.0), white.clone());
    let short = RotateY::new(Arc::new(short), -18.0);
    let short = Translate::new(Arc::new(short), Vec3::new(130.0, 0.0, 65.0));

    [Arc::new(tall), Arc::new(short)]
}

fn cornell_camera() -> Camera {
    Camera::new()
        .with_image(1.0, 600)
        .with_background(Color::ZERO)
        .with_position(Point3::new(278.0, 278.0, -800.0), Point3::new(278.0, 278.0, 0.0), Vec3::Y)
        .with_lens(40.0, 0.0, 10.0)
}

fn cornell_box() -> Scene {
    let mut world = HittableList::new();
    let white = lambertian(Color::splat(0.73));

    cornell_walls(&mut world, &white);
    world.add(Arc::new(Quad::new(
        Point3::new(343.0, 554.0, 332.0),
        Vec3::new(-130.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, -105.0),
        Arc::new(DiffuseLight::from_color(Color::splat(15.0))),
    )));
    for object in cornell_boxes(&white) {
        world.add(object);
    }

    Scene::new(world, cornell_camera().with_quality(10, 50))
}

fn cornell_smoke() -> Scene {
    let mut world = HittableList::new();
    let white = lambertian(Color::splat(0.73));

    cornell_walls(&mut world, &white);
    world.add(Arc::new(Quad::new(
        Point3::new(113.0, 554.0, 127.0),
        Vec3::new(330.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 305.0),
        Arc::new(DiffuseLight::from_color(Color::splat(7.0))),
    )));
    let [tall, short] = cornell_boxes(&white);
    world.add(Arc::new(ConstantMedium::from_color(tall, 0.01, Color::ZERO)));
    world.add(Arc::new(ConstantMedium::from_color(short, 0.01, Color::ONE)));

    Scene::new(world, cornell_camera().with_quality(200, 50))
}

fn final_scene(texture: &Path, rng: &mut dyn RngCore) -> Scene {
    let mut boxes1 = HittableList::new();
    let ground = lambertian(Color::new(0.48, 0.83, 0.53));

    let boxes_per_side = 20;
    for i in 0..boxes_per_side {
        for j in 0..boxes_per_side {
            let w = 100.0;
            let x0 = -1000.0 + i as f32 * w;
            let z0 = -1000.0 + j as f32 * w;
            let y1 = gen_range_f32(rng, 1.0, 101.0);

            boxes1.add(Arc::new(make_box(
                Point3::new(x0, 0.0, z0),
                Point3::new(x0 + w, y1, z0 + w),
                ground.clone(),
            )));
        }
    }

    let mut world = HittableList::new();
    world.add(Arc::new(BvhNode::from_list(&boxes1)));

    world.add(Arc::new(Quad::new(
        Point3::new(123.0, 554.0, 147.0),
        Vec3::new(300.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 265.0),
        Arc::new(DiffuseLight::from_color(Color::splat(7.0))),
    )));

    let center1 = Point3::new(400.0, 400.0, 200.0);
    let center2 = center1 + Vec3::new(30.0, 0.0, 0.0);
    world.add(Arc::new(Sphere::moving(
        center1,
        center2,
        50.0,
        lambertian(Color::new(0.7, 0.3, 0.1)),
    )));

    world.add(Arc::new(Sphere::new(
        Point3::new(260.0, 150.0, 45.0),
        50.0,
        Arc::new(Dielectric::new(1.5)),
    )));
    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, 150.0, 145.0),
        50.0,
        Arc::new(Metal::new(Color::new(0.8, 0.8, 0.9), 1.0)),
    )));

    let boundary: Arc<dyn Hittable> = Arc::new(Sphere::new(
        Point3::new(360.0, 150.0, 145.0),
        70.0,
        Arc::new(Dielectric::new(1.5)),
    ));
    world.add(boundary.clone());
    world.add(Arc::new(ConstantMedium::from_color(boundary, 0.2, Color::new(0.2, 0.4, 0.9))));
    let mist = Arc::new(Sphere::new(Point3::ZERO, 5000.0, Arc::new(Dielectric::new(1.5))));
    world.add(Arc::new(ConstantMedium::from_color(mist, 0.0001, Color::ONE)));

    world.add(Arc::new(Sphere::new(
        Point3::new(400.0, 200.0, 400.0),
        100.0,
        Arc::new(Lambertian::new(image_texture(texture))),
    )));
    world.add(Arc::new(Sphere::new(
        Point3::new(220.0, 280.0, 300.0),
        80.0,
        Arc::new(Lambertian::new(noise(0.2, rng))),
    )));

    let mut boxes2 = HittableList::new();
    let white = lambertian(Color::splat(0.73));
    for _ in 0..1000 {
        boxes2.add(Arc::new(Sphere::new(random_vec3(rng, 0.0, 165.0), 10.0, white.clone())));
    }
    world.add(Arc::new(Translate::new(
        Arc::new(RotateY::new(Arc::new(BvhNode::from_list(&boxes2)), 15.0)),
        Vec3::new(-100.0, 270.0, 395.0),
    )));

    let camera = Camera::new()
        .with_image(1.0, 800)
        .with_quality(400, 40)
        .with_background(Color::ZERO)
        .with_position(Point3::new(478.0, 278.0, -600.0), Point3::new(278.0, 278.0, 0.0), Vec3::Y)
        .with_lens(40.0, 0.0, 10.0);

    Scene::new(world, camera)
}

fn obj_scene(obj: &Path) -> Scene {
    let mut world = HittableList::new();
    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, -1000.0, 0.0),
        1000.0,
        Arc::new(Lambertian::new(ground_checker())),
    )));
    if let Some(mesh) = obj_triangles(obj, lambertian(Color::new(0.65, 0.05, 0.05))) {
        world.add(Arc::new(BvhNode::from_list(&mesh)));
    }

    let camera = Camera::new()
        .with_image(16.0 / 9.0, 800)
        .with_quality(50, 50)
        .with_background(SKY)
        .with_position(Point3::new(0.0, 1.0, 3.0), Point3::new(0.0, 1.0, 0.0), Vec3::Y)
        .with_lens(40.0, 0.0, 10.0);

    Scene::new(world, camera)
}

fn depth_of_field() -> Scene {
    let mut world = HittableList::new();

    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, -1000.0, 0.0),
        1000.0,
        lambertian(Color::splat(0.5)),
    )));
    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, 1.0, 0.0),
        1.0,
        lambertian(Color::new(0.8, 0.2, 0.2)),
    )));
    world.add(Arc::new(Sphere::new(
        Point3::new(-4.0, 1.0, -7.0),
        1.0,
        lambertian(Color::new(0.2, 0.2, 0.8)),
    )));
    world.add(Arc::new(Sphere::new(
        Point3::new(3.0, 1.0, 4.0),
        1.0,
        lambertian(Color::new(0.2, 0.8, 0.2)),
    )));

    let camera = Camera::new()
        .with_image(16.0 / 9.0, 800)
        .with_quality(100, 50)
        .with_background(SKY)
        .with_position(Point3::new(0.0, 2.0, 12.0), Point3::new(0.0, 1.0, 0.0), Vec3::Y)
        .with_lens(30.0, 2.0, 12.0);

    Scene::new(world, camera)
}

fn camera_fov() -> Scene {
    let mut world = HittableList::new();

    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, -1000.0, 0.0),
        1000.0,
        lambertian(Color::splat(0.5)),
    )));
    world.add(Arc::new(Sphere::new(
        Point3::new(-2.0, 1.0, 0.0),
        1.0,
        Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 0.3)),
    )));
    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, 1.0, 0.0),
        1.0,
        lambertian(Color::new(0.8, 0.2, 0.2)),
    )));

    // Looking straight down, so "up" in the image is -Z
    let camera = Camera::new()
        .with_image(16.0 / 9.0, 800)
        .with_quality(50, 50)
        .with_background(SKY)
        .with_position(Point3::new(-1.0, 8.0, 0.0), Point3::new(0.0, 1.0, 0.0), -Vec3::Z)
        .with_lens(20.0, 0.0, 10.0);

    Scene::new(world, camera)
}

fn motion_blur() -> Scene {
    let mut world = HittableList::new();
    let static_mat: Arc<dyn Material> = Arc::new(Metal::new(Color::new(0.7, 0.7, 0.9), 0.1));

    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, -1000.0, 0.0),
        1000.0,
        lambertian(Color::splat(0.5)),
    )));

    let center1 = Point3::new(-2.0, 1.0, 0.0);
    world.add(Arc::new(Sphere::moving(
        center1,
        center1 + Vec3::new(0.0, 0.5, 0.0),
        0.7,
        lambertian(Color::new(0.8, 0.2, 0.2)),
    )));
    world.add(Arc::new(Sphere::new(Point3::new(2.0, 1.0, 0.0), 0.7, static_mat.clone())));
    world.add(Arc::new(Sphere::new(Point3::new(0.0, 0.5, -2.0), 0.5, static_mat)));

    let camera = Camera::new()
        .with_image(16.0 / 9.0, 800)
        .with_quality(100, 50)
        .with_background(SKY)
        .with_position(Point3::new(0.0, 2.0, 8.0), Point3::new(0.0, 1.0, 0.0), Vec3::Y)
        .with_lens(40.0, 0.0, 10.0);

    Scene::new(world, camera)
}

fn materials_showcase(rng: &mut dyn RngCore) -> Scene {
    let mut world = HittableList::new();

    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, -1000.0, 0.0),
        1000.0,
        Arc::new(Lambertian::new(noise(4.0, rng))),
    )));

    let row: [(f32, Arc<dyn Material>); 5] = [
        (-4.0, Arc::new(Dielectric::new(1.5))),
        (-2.0, Arc::new(Metal::new(Color::new(0.8, 0.8, 0.9), 0.1))),
        (0.0, lambertian(Color::new(0.8, 0.3, 0.3))),
        (2.0, Arc::new(Metal::new(Color::new(0.9, 0.7, 0.5), 0.5))),
        (4.0, Arc::new(DiffuseLight::from_color(Color::splat(4.0)))),
    ];
    for (x, material) in row {
        world.add(Arc::new(Sphere::new(Point3::new(x, 1.0, 0.0), 1.0, material)));
    }

    let camera = Camera::new()
        .with_image(16.0 / 9.0, 800)
        .with_quality(100, 50)
        .with_background(Color::splat(0.05))
        .with_position(Point3::new(0.0, 2.0, 12.0), Point3::new(0.0, 1.0, 0.0), Vec3::Y)
        .with_lens(40.0, 0.0, 10.0);

    Scene::new(world, camera)
}

fn showcase(assets: &Assets, rng: &mut dyn RngCore) -> Scene {
    let mut world = HittableList::new();

    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, -1000.0, 0.0),
        1000.0,
        Arc::new(Lambertian::new(ground_checker())),
    )));
    if let Some(mesh) = obj_triangles(&assets.obj, lambertian(Color::new(0.65, 0.05, 0.05))) {
        world.add(Arc::new(BvhNode::from_list(&mesh)));
    }

    let smoke = Arc::new(Sphere::new(
        Point3::new(0.0, 1.5, -3.0),
        1.5,
        Arc::new(Dielectric::new(1.5)),
    ));
    world.add(Arc::new(ConstantMedium::from_color(smoke, 0.5, Color::splat(0.9))));

    world.add(Arc::new(Sphere::new(
        Point3::new(-3.0, 1.5, -2.0),
        1.2,
        Arc::new(Lambertian::new(image_texture(&assets.texture))),
    )));
    world.add(Arc::new(Sphere::new(
        Point3::new(3.0, 1.5, -2.0),
        1.2,
        Arc::new(Lambertian::new(noise(3.0, rng))),
    )));

    let bounce_start = Point3::new(-1.0, 0.6, 1.5);
    world.add(Arc::new(Sphere::moving(
        bounce_start,
        bounce_start + Vec3::new(0.0, 0.6, 0.0),
        0.5,
        lambertian(Color::new(0.8, 0.2, 0.2)),
    )));

    world.add(Arc::new(Quad::new(
        Point3::new(-2.0, 5.0, 2.0),
        Vec3::new(4.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, -4.0),
        Arc::new(DiffuseLight::from_color(Color::splat(6.0))),
    )));

    let camera = Camera::new()
        .with_image(16.0 / 9.0, 800)
        .with_quality(50, 50)
        .with_background(Color::new(0.05, 0.05, 0.08))
        .with_position(Point3::new(0.0, 2.0, 6.0), Point3::new(0.0, 1.0, 0.0), Vec3::Y)
        .with_lens(40.0, 0.0, 10.0);

    Scene::new(world, camera)
}
