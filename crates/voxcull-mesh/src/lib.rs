//! CPU face-culling mesher: turns a dense voxel grid into a triangle mesh of
//! the faces that border empty space.
#![forbid(unsafe_code)]

use thiserror::Error;
use voxcull_grid::GridSize;

mod build;
mod face;
mod lattice;
mod mesh_build;

pub use build::{build_surface_mesh, is_occluded};
pub use face::{Corner, Face};
pub use lattice::Lattice;
pub use mesh_build::SurfaceMesh;

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum MeshError {
    #[error("voxel size must be a positive finite number, got {0}")]
    InvalidVoxelSize(f32),
    #[error("vertex lattice for a {0} grid does not fit 32-bit indices")]
    LatticeTooLarge(GridSize),
}
