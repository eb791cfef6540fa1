use voxcull_geom::Vec3;
use voxcull_grid::GridSize;

use crate::MeshError;
use crate::face::Corner;

/// The dense `(W+1) x (H+1) x (D+1)` corner lattice of a grid.
///
/// Vertex `(x, y, z)` lives at index `y*(D+1)*(W+1) + z*(W+1) + x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lattice {
    nx: usize,
    ny: usize,
    nz: usize,
}

impl Lattice {
    /// Lattice for a grid, provided every vertex index fits a `u32`.
    pub fn for_grid(size: GridSize) -> Result<Self, MeshError> {
        let too_large = MeshError::LatticeTooLarge(size);
        let nx = size.sx.checked_add(1).ok_or(too_large)?;
        let ny = size.sy.checked_add(1).ok_or(too_large)?;
        let nz = size.sz.checked_add(1).ok_or(too_large)?;
        let count = nx
            .checked_mul(ny)
            .and_then(|n| n.checked_mul(nz))
            .ok_or(too_large)?;
        if count > u32::MAX as usize {
            return Err(too_large);
        }
        Ok(Self { nx, ny, nz })
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// Vertices per axis, `(W+1, H+1, D+1)`.
    #[inline]
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.nx, self.ny, self.nz)
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize, z: usize) -> u32 {
        ((y * self.nz + z) * self.nx + x) as u32
    }

    /// Index of a voxel corner, given the voxel origin.
    #[inline]
    pub fn corner(&self, x: usize, y: usize, z: usize, c: Corner) -> u32 {
        self.index(x + c[0], y + c[1], z + c[2])
    }

    /// Every lattice point scaled by `voxel_size`, in index order
    /// (y outermost, then z, then x).
    pub fn positions(&self, voxel_size: f32) -> Vec<Vec3> {
        let mut out = Vec::with_capacity(self.vertex_count());
        for y in 0..self.ny {
            for z in 0..self.nz {
                for x in 0..self.nx {
                    out.push(Vec3::from_lattice(x, y, z) * voxel_size);
                }
            }
        }
        out
    }
}
