use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use voxcull_mesh::SurfaceMesh;

use crate::error::AppError;

/// Writes positions, per-vertex normals and 1-based faces as Wavefront OBJ.
/// The full lattice is written so OBJ indices equal mesh indices plus one.
pub fn write_obj<W: Write>(mesh: &SurfaceMesh, mut w: W) -> io::Result<()> {
    writeln!(
        w,
        "# voxcull surface mesh: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    )?;
    for v in &mesh.vertices {
        writeln!(w, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for n in &mesh.normals {
        writeln!(w, "vn {} {} {}", n.x, n.y, n.z)?;
    }
    for t in &mesh.triangles {
        let [a, b, c] = t.map(|i| i as u64 + 1);
        writeln!(w, "f {a}//{a} {b}//{b} {c}//{c}")?;
    }
    w.flush()
}

pub fn save_obj(path: &Path, mesh: &SurfaceMesh) -> Result<(), AppError> {
    let export_err = |source| AppError::Export {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(export_err)?;
    write_obj(mesh, BufWriter::new(file)).map_err(export_err)
}
