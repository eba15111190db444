//! Lumen Core - asset loading for the Lumen path tracer.
//!
//! This crate provides the I/O collaborators the renderer consumes:
//!
//! - **OBJ meshes**: `v`/`vn`/`f` records, fan-triangulated into a flat
//!   vertex list (`ObjMesh`)
//! - **Raster images**: 8-bit RGB(A) files decoded into a linear pixel
//!   buffer for image textures (`RasterImage`)
//!
//! Both loaders report a missing or unreadable file as
//! [`LoadError::ResourceUnavailable`].
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::{load_obj, load_raster};
//!
//! let mesh = load_obj("cloud.obj")?;
//! println!("{} triangles", mesh.triangle_count());
//!
//! let earth = load_raster("earthmap.jpg")?;
//! println!("{}x{}", earth.width, earth.height);
//! ```

pub mod error;
pub mod obj;
pub mod raster;

// Re-export commonly used types
pub use error::{LoadError, LoadResult};
pub use obj::{load_obj, parse_obj, ObjMesh};
pub use raster::{load_raster, RasterImage};
