use std::time::Instant;

use voxcull_grid::{GridSize, VoxelGrid};

use crate::MeshError;
use crate::face::Face;
use crate::lattice::Lattice;
use crate::mesh_build::SurfaceMesh;

/// Meshes the exposed faces of every solid voxel.
///
/// Emits the whole `(W+1)(H+1)(D+1)` vertex lattice plus two triangles per
/// face whose neighbor is empty or lies past the grid edge. Nothing is merged
/// and nothing is cached between calls.
pub fn build_surface_mesh<V>(
    grid: &VoxelGrid<V>,
    voxel_size: f32,
) -> Result<SurfaceMesh, MeshError> {
    if !(voxel_size.is_finite() && voxel_size > 0.0) {
        return Err(MeshError::InvalidVoxelSize(voxel_size));
    }
    let size = grid.size();
    let lattice = Lattice::for_grid(size)?;
    let t0 = Instant::now();

    let vertices = lattice.positions(voxel_size);
    let triangles = emit_exposed_faces(grid, size, &lattice);
    let mesh = SurfaceMesh::from_buffers(vertices, triangles);

    log::info!(
        target: "perf",
        "ms={} surface_mesh dims={} voxel_size={} verts={} tris={}",
        t0.elapsed().as_millis(),
        size,
        voxel_size,
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// True when a solid neighbor hides `face` of the voxel at `(x,y,z)`.
#[inline]
pub fn is_occluded<V>(
    grid: &VoxelGrid<V>,
    size: GridSize,
    x: usize,
    y: usize,
    z: usize,
    face: Face,
) -> bool {
    face.neighbor(x, y, z, size)
        .is_some_and(|(nx, ny, nz)| grid.solid_at(nx, ny, nz))
}

fn emit_exposed_faces<V>(grid: &VoxelGrid<V>, size: GridSize, lattice: &Lattice) -> Vec<[u32; 3]> {
    let mut triangles = Vec::new();
    for x in 0..size.sx {
        for y in 0..size.sy {
            for z in 0..size.sz {
                if !grid.solid_at(x, y, z) {
                    continue;
                }
                for face in Face::ALL {
                    if is_occluded(grid, size, x, y, z, face) {
                        continue;
                    }
                    for tri in face.triangles() {
                        triangles.push(tri.map(|c| lattice.corner(x, y, z, c)));
                    }
                }
            }
        }
    }
    triangles
}
