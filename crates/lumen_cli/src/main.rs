mod scenes;
mod settings;

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lumen_renderer::{render_image, seeded_rng, write_ppm, RenderConfig, DEFAULT_BUCKET_SIZE};

use scenes::{Assets, ScenePreset};
use settings::CameraSettings;

/// Render a built-in scene to a PPM image.
#[derive(Debug, Parser)]
#[command(name = "lumen", version, about)]
struct Args {
    /// Scene preset to render
    #[arg(long, value_enum, default_value_t = ScenePreset::CornellBox)]
    scene: ScenePreset,

    /// Image width in pixels; the height follows from the aspect ratio
    #[arg(long)]
    width: Option<u32>,

    /// Samples per pixel
    #[arg(long)]
    samples: Option<u32>,

    /// Maximum number of bounces per path
    #[arg(long)]
    max_depth: Option<u32>,

    /// Seed for scene generation and sampling
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Edge length of the square buckets rendered in parallel
    #[arg(long, default_value_t = DEFAULT_BUCKET_SIZE)]
    bucket_size: u32,

    /// Render row by row on the current thread
    #[arg(long)]
    single_threaded: bool,

    /// JSON file with camera overrides
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Mesh used by the obj and showcase scenes
    #[arg(long, default_value = "cloud.obj")]
    obj: PathBuf,

    /// Image texture used by the earth, final and showcase scenes
    #[arg(long, default_value = "earthmap.jpg")]
    texture: PathBuf,

    /// Where to write the PPM image
    #[arg(short, long, default_value = "image.ppm")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    run(Args::parse())
}

fn run(args: Args) -> Result<()> {
    // Settings are validated before the output file is created
    let settings = args
        .settings
        .as_deref()
        .map(CameraSettings::load)
        .transpose()?;

    // A missing output destination is fatal
    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create output file {}", args.output.display()))?;

    let assets = Assets {
        obj: args.obj.clone(),
        texture: args.texture.clone(),
    };
    let mut scene_rng = seeded_rng(args.seed);
    let mut scene = scenes::build(args.scene, &assets, &mut scene_rng);

    if let Some(settings) = &settings {
        settings.apply(&mut scene.camera);
    }
    if let Some(width) = args.width {
        scene.camera.image_width = width;
    }
    if let Some(samples) = args.samples {
        scene.camera.samples_per_pixel = samples;
    }
    if let Some(depth) = args.max_depth {
        scene.camera.max_depth = depth;
    }
    scene.camera.initialize();

    let config = RenderConfig {
        seed: args.seed,
        bucket_size: args.bucket_size,
        parallel: !args.single_threaded,
    };

    let image = render_image(&scene.camera, &scene.world, &config);

    let mut writer = BufWriter::new(file);
    write_ppm(&mut writer, &image)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!("Wrote {}", args.output.display());

    Ok(())
}
