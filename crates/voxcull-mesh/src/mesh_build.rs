use voxcull_geom::{Aabb, Vec3};

/// Output of a meshing pass. Owned entirely by the caller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurfaceMesh {
    /// The full corner lattice, including vertices no triangle uses.
    pub vertices: Vec<Vec3>,
    /// Index triples into `vertices`, wound so `(b-a) x (c-a)` faces out of the solid.
    pub triangles: Vec<[u32; 3]>,
    /// One per vertex. Zero where no triangle touches the vertex or the
    /// adjacent face normals cancel.
    pub normals: Vec<Vec3>,
    pub bounds: Aabb,
}

impl SurfaceMesh {
    /// Assembles a mesh and derives normals and bounds from the buffers.
    pub(crate) fn from_buffers(vertices: Vec<Vec3>, triangles: Vec<[u32; 3]>) -> Self {
        let normals = vertex_normals(&vertices, &triangles);
        let bounds = Aabb::from_points(vertices.iter().copied()).unwrap_or_default();
        Self {
            vertices,
            triangles,
            normals,
            bounds,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// True when nothing is visible.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Positions as a packed xyz stream for upload.
    pub fn flat_positions(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.to_array()).collect()
    }

    pub fn flat_normals(&self) -> Vec<f32> {
        self.normals.iter().flat_map(|n| n.to_array()).collect()
    }

    pub fn flat_indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Number of distinct vertices referenced by at least one triangle.
    pub fn referenced_vertex_count(&self) -> usize {
        let mut used = vec![false; self.vertices.len()];
        for &i in self.triangles.iter().flatten() {
            if let Some(u) = used.get_mut(i as usize) {
                *u = true;
            }
        }
        used.into_iter().filter(|u| *u).count()
    }
}

/// Area-weighted vertex normals: each triangle adds its unnormalized cross
/// product to its three corners, then every sum is normalized.
fn vertex_normals(vertices: &[Vec3], triangles: &[[u32; 3]]) -> Vec<Vec3> {
    let mut acc = vec![Vec3::ZERO; vertices.len()];
    for &[a, b, c] in triangles {
        let (a, b, c) = (a as usize, b as usize, c as usize);
        let n = (vertices[b] - vertices[a]).cross(vertices[c] - vertices[a]);
        acc[a] += n;
        acc[b] += n;
        acc[c] += n;
    }
    for n in &mut acc {
        *n = n.normalized();
    }
    acc
}
