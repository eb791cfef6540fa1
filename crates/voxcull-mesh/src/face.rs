use voxcull_geom::Vec3;
use voxcull_grid::GridSize;

/// Corner offset `(dx, dy, dz)` in `{0,1}^3` relative to a voxel's origin.
pub type Corner = [usize; 3];

/// The six axis directions a voxel face can point along.
///
/// Discriminants follow the order faces are tested for each voxel.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    PosY = 0,
    NegY = 1,
    PosZ = 2,
    NegZ = 3,
    PosX = 4,
    NegX = 5,
}

impl Face {
    /// Up, down, forward, back, right, left.
    pub const ALL: [Face; 6] = [
        Face::PosY,
        Face::NegY,
        Face::PosZ,
        Face::NegZ,
        Face::PosX,
        Face::NegX,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Integer grid step `(dx,dy,dz)` out through this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::PosY => (0, 1, 0),
            Face::NegY => (0, -1, 0),
            Face::PosZ => (0, 0, 1),
            Face::NegZ => (0, 0, -1),
            Face::PosX => (1, 0, 0),
            Face::NegX => (-1, 0, 0),
        }
    }

    /// Outward unit normal.
    #[inline]
    pub fn normal(self) -> Vec3 {
        let (dx, dy, dz) = self.delta();
        Vec3::new(dx as f32, dy as f32, dz as f32)
    }

    /// Neighbor cell across this face, or `None` when the voxel already sits on
    /// the grid edge along this axis. Edge faces are never culled.
    #[inline]
    pub fn neighbor(
        self,
        x: usize,
        y: usize,
        z: usize,
        size: GridSize,
    ) -> Option<(usize, usize, usize)> {
        match self {
            Face::PosY => (y + 1 < size.sy).then(|| (x, y + 1, z)),
            Face::NegY => y.checked_sub(1).map(|ny| (x, ny, z)),
            Face::PosZ => (z + 1 < size.sz).then(|| (x, y, z + 1)),
            Face::NegZ => z.checked_sub(1).map(|nz| (x, y, nz)),
            Face::PosX => (x + 1 < size.sx).then(|| (x + 1, y, z)),
            Face::NegX => x.checked_sub(1).map(|nx| (nx, y, z)),
        }
    }

    /// The two triangles of this face as voxel corners. Each triangle's
    /// `(b - a) x (c - a)` points along [`Face::normal`].
    #[inline]
    pub fn triangles(self) -> [[Corner; 3]; 2] {
        match self {
            Face::PosY => [
                [[0, 1, 0], [0, 1, 1], [1, 1, 0]],
                [[1, 1, 0], [0, 1, 1], [1, 1, 1]],
            ],
            Face::NegY => [
                [[0, 0, 0], [1, 0, 0], [0, 0, 1]],
                [[1, 0, 0], [1, 0, 1], [0, 0, 1]],
            ],
            Face::PosZ => [
                [[0, 0, 1], [1, 1, 1], [0, 1, 1]],
                [[1, 0, 1], [1, 1, 1], [0, 0, 1]],
            ],
            Face::NegZ => [
                [[0, 0, 0], [0, 1, 0], [1, 1, 0]],
                [[1, 1, 0], [1, 0, 0], [0, 0, 0]],
            ],
            Face::PosX => [
                [[1, 0, 0], [1, 1, 0], [1, 1, 1]],
                [[1, 0, 1], [1, 0, 0], [1, 1, 1]],
            ],
            Face::NegX => [
                [[0, 0, 0], [0, 1, 1], [0, 1, 0]],
                [[0, 1, 1], [0, 0, 0], [0, 0, 1]],
            ],
        }
    }
}
