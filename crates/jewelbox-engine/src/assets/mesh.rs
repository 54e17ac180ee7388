use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::AssetError;

/// Triangle mesh as uploaded to the GPU.
///
/// Positions and normals are padded to `vec4` so they can be bound directly as
/// `array<vec4<f32>>` storage buffers. Indices form a triangle list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<[f32; 4]>,
    pub normals: Vec<[f32; 4]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Parses OBJ text. Faces are triangulated and every model in the file is
    /// merged into one mesh. Materials are ignored.
    pub fn from_obj_reader<R: BufRead>(reader: &mut R, origin: &str) -> Result<Self, AssetError> {
        let (models, _materials) =
            tobj::load_obj_buf(reader, &tobj::GPU_LOAD_OPTIONS, |_| Ok(Default::default()))
                .map_err(|source| AssetError::Obj {
                    origin: origin.to_string(),
                    source,
                })?;

        let mut mesh = MeshData::default();
        for model in &models {
            mesh.append(&model.mesh);
        }

        if mesh.is_empty() {
            return Err(AssetError::EmptyMesh {
                origin: origin.to_string(),
            });
        }
        Ok(mesh)
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<([f32; 3], [f32; 3])> {
        let first = self.positions.first()?;
        let mut min = [first[0], first[1], first[2]];
        let mut max = min;
        for p in &self.positions {
            for axis in 0..3 {
                min[axis] = min[axis].min(p[axis]);
                max[axis] = max[axis].max(p[axis]);
            }
        }
        Some((min, max))
    }

    /// Recenters on the bounds' midpoint and scales so the farthest vertex sits
    /// at distance 1. Normals are unaffected by uniform scaling.
    pub fn normalize(&mut self) {
        let Some((min, max)) = self.bounds() else { return };
        let center = [
            (min[0] + max[0]) * 0.5,
            (min[1] + max[1]) * 0.5,
            (min[2] + max[2]) * 0.5,
        ];

        let radius = self
            .positions
            .iter()
            .map(|p| {
                let d = [p[0] - center[0], p[1] - center[1], p[2] - center[2]];
                (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt()
            })
            .fold(0.0f32, f32::max);

        let inv = if radius > 0.0 { 1.0 / radius } else { 1.0 };
        for p in &mut self.positions {
            for axis in 0..3 {
                p[axis] = (p[axis] - center[axis]) * inv;
            }
        }
    }

    fn append(&mut self, src: &tobj::Mesh) {
        let base = self.positions.len() as u32;
        let count = src.positions.len() / 3;

        self.positions.extend(
            src.positions
                .chunks_exact(3)
                .map(|p| [p[0], p[1], p[2], 1.0]),
        );

        let start = self.indices.len();
        self.indices.extend(src.indices.iter().map(|i| base + i));

        if src.normals.len() == src.positions.len() {
            self.normals.extend(
                src.normals
                    .chunks_exact(3)
                    .map(|n| normalize3([n[0], n[1], n[2]])),
            );
        } else {
            self.normals.resize(self.positions.len(), [0.0; 4]);
            self.accumulate_face_normals(base as usize, base as usize + count, start);
        }
    }

    /// Smooth normals for vertices `[first, end)` from the triangles added since
    /// `index_start`.
    fn accumulate_face_normals(&mut self, first: usize, end: usize, index_start: usize) {
        for tri in self.indices[index_start..].chunks_exact(3) {
            let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            if a >= end || b >= end || c >= end {
                continue;
            }
            let (p0, p1, p2) = (self.positions[a], self.positions[b], self.positions[c]);
            let e1 = [p1[0] - p0[0], p1[1] - p0[1], p1[2] - p0[2]];
            let e2 = [p2[0] - p0[0], p2[1] - p0[1], p2[2] - p0[2]];
            let face = [
                e1[1] * e2[2] - e1[2] * e2[1],
                e1[2] * e2[0] - e1[0] * e2[2],
                e1[0] * e2[1] - e1[1] * e2[0],
            ];
            for v in [a, b, c] {
                for axis in 0..3 {
                    self.normals[v][axis] += face[axis];
                }
            }
        }

        for n in &mut self.normals[first..end] {
            *n = normalize3([n[0], n[1], n[2]]);
        }
    }
}

fn normalize3(v: [f32; 3]) -> [f32; 4] {
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if len > 0.0 {
        [v[0] / len, v[1] / len, v[2] / len, 0.0]
    } else {
        [0.0, 1.0, 0.0, 0.0]
    }
}

/// Loads an OBJ file from disk.
pub fn load_mesh(path: &Path) -> Result<MeshData, AssetError> {
    let file = File::open(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let origin = path.display().to_string();
    let mesh = MeshData::from_obj_reader(&mut BufReader::new(file), &origin)?;

    log::info!(
        "loaded {origin}: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count(),
    );
    Ok(mesh)
}

/// Loads an OBJ file, or logs the failure and returns an empty mesh.
///
/// Rendering continues with no geometry; no retry is attempted.
pub fn load_mesh_or_empty(path: &Path) -> MeshData {
    match load_mesh(path) {
        Ok(mesh) => mesh,
        Err(e) => {
            log::error!("{:#}", anyhow::Error::from(e));
            MeshData::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUAD_WITH_NORMALS: &str = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
vn 0 0 1
f 1//1 2//1 3//1 4//1
";

    const TETRA_NO_NORMALS: &str = "\
o tetra
v 0 0 0
v 1 0 0
v 0 1 0
v 0 0 1
f 1 3 2
f 1 2 4
f 1 4 3
f 2 3 4
";

    fn parse(src: &str) -> Result<MeshData, AssetError> {
        MeshData::from_obj_reader(&mut src.as_bytes(), "test")
    }

    // ── parsing ───────────────────────────────────────────────────────────

    #[test]
    fn quad_is_triangulated() {
        let mesh = parse(QUAD_WITH_NORMALS).unwrap();
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.vertex_count(), 4);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertex_count()));
    }

    #[test]
    fn positions_are_padded_to_vec4() {
        let mesh = parse(QUAD_WITH_NORMALS).unwrap();
        assert!(mesh.positions.iter().all(|p| p[3] == 1.0));
        assert!(mesh.normals.iter().all(|n| n[3] == 0.0));
    }

    #[test]
    fn file_normals_are_kept() {
        let mesh = parse(QUAD_WITH_NORMALS).unwrap();
        assert_eq!(mesh.normals.len(), mesh.positions.len());
        assert!(mesh.normals.iter().all(|n| n[..3] == [0.0, 0.0, 1.0]));
    }

    #[test]
    fn missing_normals_are_synthesised() {
        let mesh = parse(TETRA_NO_NORMALS).unwrap();
        assert_eq!(mesh.normals.len(), mesh.positions.len());
        for n in &mesh.normals {
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-5);
        }
        // The corner at the origin joins the faces pointing along -x, -y and -z.
        let origin = mesh
            .positions
            .iter()
            .position(|p| p[..3] == [0.0, 0.0, 0.0])
            .unwrap();
        let n = mesh.normals[origin];
        assert!(n[0] < 0.0 && n[1] < 0.0 && n[2] < 0.0);
    }

    #[test]
    fn multiple_objects_are_merged_with_rebased_indices() {
        let src = format!("{TETRA_NO_NORMALS}o second\nv 5 5 5\nv 6 5 5\nv 5 6 5\nf 5 6 7\n");
        let mesh = parse(&src).unwrap();
        assert_eq!(mesh.triangle_count(), 5);
        let last = &mesh.indices[mesh.indices.len() - 3..];
        for &i in last {
            assert!(mesh.positions[i as usize][0] >= 5.0);
        }
    }

    #[test]
    fn text_without_faces_is_an_error() {
        let err = parse("v 0 0 0\nv 1 0 0\n").unwrap_err();
        assert!(matches!(err, AssetError::EmptyMesh { .. }));
    }

    // ── failure path ──────────────────────────────────────────────────────

    #[test]
    fn file_on_disk_matches_in_memory_parse() {
        let path = std::env::temp_dir().join(format!("jewelbox-tetra-{}.obj", std::process::id()));
        std::fs::write(&path, TETRA_NO_NORMALS).unwrap();
        let loaded = load_mesh(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded.unwrap(), parse(TETRA_NO_NORMALS).unwrap());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_mesh(Path::new("definitely/not/here.obj")).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }

    #[test]
    fn missing_file_yields_empty_mesh() {
        let mesh = load_mesh_or_empty(Path::new("definitely/not/here.obj"));
        assert!(mesh.is_empty());
        assert_eq!(mesh.bounds(), None);
    }

    // ── normalize ─────────────────────────────────────────────────────────

    #[test]
    fn normalize_fits_unit_sphere() {
        let mut mesh = parse(QUAD_WITH_NORMALS).unwrap();
        mesh.normalize();
        let (min, max) = mesh.bounds().unwrap();
        for axis in 0..2 {
            assert!((min[axis] + max[axis]).abs() < 1e-6);
        }
        let far = mesh
            .positions
            .iter()
            .map(|p| (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt())
            .fold(0.0f32, f32::max);
        assert!((far - 1.0).abs() < 1e-5);
    }

    #[test]
    fn normalize_empty_is_noop() {
        let mut mesh = MeshData::default();
        mesh.normalize();
        assert!(mesh.is_empty());
    }
}
