//! Wavefront OBJ loading.
//!
//! Only what the renderer needs is read: `v` positions, `vn` normals, and
//! `f` faces. Faces are fan-triangulated from their first vertex and
//! flattened into a vertex list where every three entries form a triangle.
//!
//! Face references that do not name an already-seen `v` record are dropped
//! individually rather than failing the load. A malformed face can therefore
//! shift the grouping of the vertices that follow it; consumers only use
//! complete groups of three.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use lumen_math::{Aabb, Vec3};

use crate::error::{LoadError, LoadResult};

/// Triangle soup read from an OBJ file.
#[derive(Clone, Debug, Default)]
pub struct ObjMesh {
    /// `v` records in file order
    pub positions: Vec<Vec3>,

    /// `vn` records in file order (not aligned with `positions`)
    pub normals: Vec<Vec3>,

    /// Triangulated face vertices, three per triangle
    pub vertices: Vec<Vec3>,

    /// Face references that were dropped for being out of range
    pub dropped_indices: usize,
}

impl ObjMesh {
    /// Number of complete triangles in `vertices`.
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Iterate over complete triangles.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.vertices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Bounding box of all triangle vertices.
    pub fn bounds(&self) -> Aabb {
        if self.vertices.is_empty() {
            return Aabb::empty();
        }

        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);

        for pos in &self.vertices {
            min = min.min(*pos);
            max = max.max(*pos);
        }

        Aabb::from_points(min, max)
    }
}

/// Load an OBJ file from disk.
///
/// Fails with [`LoadError::ResourceUnavailable`] if the file cannot be opened.
pub fn load_obj<P: AsRef<Path>>(path: P) -> LoadResult<ObjMesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::ResourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let mesh = parse_obj(BufReader::new(file)).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!(
        "Loaded OBJ: {} ({} positions, {} normals, {} triangles)",
        path.display(),
        mesh.positions.len(),
        mesh.normals.len(),
        mesh.triangle_count()
    );
    if mesh.dropped_indices > 0 {
        log::warn!(
            "{}: dropped {} out-of-range face references",
            path.display(),
            mesh.dropped_indices
        );
    }

    Ok(mesh)
}

/// Parse OBJ text from any buffered reader.
pub fn parse_obj<R: BufRead>(mut reader: R) -> std::io::Result<ObjMesh> {
    let mut mesh = ObjMesh::default();
    let mut buf = Vec::new();

    // Invalid UTF-8 is replaced rather than rejected
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let mut tokens = line.split_whitespace();

        match tokens.next() {
            Some("v") => mesh.positions.push(parse_vec3(tokens)),
            Some("vn") => mesh.normals.push(parse_vec3(tokens)),
            Some("f") => {
                // Only the position component of `p`, `p/t`, `p/t/n` or `p//n`
                let face: Vec<Option<Vec3>> = tokens
                    .map(|vertex| position_index(vertex, mesh.positions.len()))
                    .map(|index| index.map(|i| mesh.positions[i]))
                    .collect();

                for i in 1..face.len().saturating_sub(1) {
                    for corner in [face[0], face[i], face[i + 1]] {
                        match corner {
                            Some(p) => mesh.vertices.push(p),
                            None => mesh.dropped_indices += 1,
                        }
                    }
                }
            }
            _ => {}
        }
    }

    Ok(mesh)
}

/// Missing or malformed components read as zero.
fn parse_vec3<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Vec3 {
    let mut next = || {
        tokens
            .next()
            .and_then(|t| t.parse::<f32>().ok())
            .unwrap_or(0.0)
    };
    let x = next();
    let y = next();
    let z = next();
    Vec3::new(x, y, z)
}

/// Resolve a 1-based position reference against the positions seen so far.
fn position_index(vertex: &str, position_count: usize) -> Option<usize> {
    let index: usize = vertex.split('/').next()?.parse().ok()?;
    (1..=position_count).contains(&index).then(|| index - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> ObjMesh {
        parse_obj(Cursor::new(text)).unwrap()
    }

    const SQUARE: &str = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
vn 0 0 1
";

    #[test]
    fn test_non_utf8_bytes_do_not_abort_parse() {
        let bytes = b"# Cr\xe9\xe9 par Blender\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
        let mesh = parse_obj(Cursor::new(&bytes[..])).unwrap();

        assert_eq!(mesh.positions.len(), 3);
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn test_triangle_face() {
        let mesh = parse(&format!("{SQUARE}f 1 2 3\n"));

        assert_eq!(mesh.positions.len(), 4);
        assert_eq!(mesh.normals, vec![Vec3::Z]);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(
            mesh.vertices,
            vec![Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0)]
        );
    }

    #[test]
    fn test_fan_triangulation() {
        let mut text = String::new();
        for i in 0..7 {
            let angle = i as f32;
            text.push_str(&format!("v {} {} 0\n", angle.cos(), angle.sin()));
        }
        text.push_str("f 1 2 3 4 5 6 7\n");
        let mesh = parse(&text);

        // n vertices produce n - 2 triangles sharing the first vertex
        assert_eq!(mesh.triangle_count(), 5);
        for tri in mesh.triangles() {
            assert_eq!(tri[0], mesh.positions[0]);
        }
        let second: Vec<Vec3> = mesh.triangles().map(|t| t[1]).collect();
        assert_eq!(second, mesh.positions[1..6].to_vec());
    }

    #[test]
    fn test_compound_face_references() {
        let mesh = parse(&format!("{SQUARE}f 1/1/1 2//1 3/2 4/3/1\n"));

        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.vertices[3], Vec3::ZERO);
        assert_eq!(mesh.vertices[5], Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_out_of_range_indices_dropped() {
        let mesh = parse(&format!("{SQUARE}f 1 2 9\nf 0 1 2\n"));

        assert_eq!(mesh.dropped_indices, 2);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn test_forward_reference_dropped() {
        let mesh = parse("v 0 0 0\nv 1 0 0\nf 1 2 3\nv 0 1 0\n");

        assert_eq!(mesh.positions.len(), 3);
        assert_eq!(mesh.dropped_indices, 1);
    }

    #[test]
    fn test_degenerate_faces_and_comments() {
        let mesh = parse(&format!("# comment\n{SQUARE}f 1 2\nvt 0.5 0.5\ng group\n"));

        assert_eq!(mesh.triangle_count(), 0);
        assert_eq!(mesh.dropped_indices, 0);
    }

    #[test]
    fn test_missing_file_is_resource_unavailable() {
        let err = load_obj("/nonexistent/lumen/missing.obj").unwrap_err();
        assert!(err.is_resource_unavailable());
    }

    #[test]
    fn test_bounds() {
        let mesh = parse(&format!("{SQUARE}f 1 2 3 4\n"));
        let bounds = mesh.bounds();

        assert_eq!(bounds.x.min, 0.0);
        assert_eq!(bounds.y.max, 1.0);
        assert!(bounds.z.size() > 0.0);
    }
}
