//! Camera overrides read from a JSON settings file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use lumen_math::Vec3;
use lumen_renderer::Camera;
use serde::{Deserialize, Serialize};

/// Field-by-field camera overrides; absent fields keep the preset's value.
///
/// Vectors are written as `[x, y, z]` arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraSettings {
    pub aspect_ratio: Option<f32>,
    pub image_width: Option<u32>,
    pub samples_per_pixel: Option<u32>,
    pub max_depth: Option<u32>,
    pub background: Option<[f32; 3]>,
    pub vfov: Option<f32>,
    pub look_from: Option<[f32; 3]>,
    pub look_at: Option<[f32; 3]>,
    pub vup: Option<[f32; 3]>,
    pub defocus_angle: Option<f32>,
    pub focus_dist: Option<f32>,
}

impl CameraSettings {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))
    }

    /// Overwrite every camera field that is set here.
    pub fn apply(&self, camera: &mut Camera) {
        if let Some(v) = self.aspect_ratio {
            camera.aspect_ratio = v;
        }
        if let Some(v) = self.image_width {
            camera.image_width = v;
        }
        if let Some(v) = self.samples_per_pixel {
            camera.samples_per_pixel = v;
        }
        if let Some(v) = self.max_depth {
            camera.max_depth = v;
        }
        if let Some(v) = self.background {
            camera.background = Vec3::from_array(v);
        }
        if let Some(v) = self.vfov {
            camera.vfov = v;
        }
        if let Some(v) = self.look_from {
            camera.look_from = Vec3::from_array(v);
        }
        if let Some(v) = self.look_at {
            camera.look_at = Vec3::from_array(v);
        }
        if let Some(v) = self.vup {
            camera.vup = Vec3::from_array(v);
        }
        if let Some(v) = self.defocus_angle {
            camera.defocus_angle = v;
        }
        if let Some(v) = self.focus_dist {
            camera.focus_dist = v;
        }
    }
}
