//! Dense, fixed-size voxel occupancy grid.
#![forbid(unsafe_code)]

use std::fmt;

use thiserror::Error;

/// Cell counts along x (width), y (height) and z (depth).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridSize {
    pub sx: usize,
    pub sy: usize,
    pub sz: usize,
}

impl GridSize {
    #[inline]
    pub const fn new(sx: usize, sy: usize, sz: usize) -> Self {
        Self { sx, sy, sz }
    }

    /// Total number of cells, or `None` if it overflows `usize`.
    #[inline]
    pub fn volume(self) -> Option<usize> {
        self.sx.checked_mul(self.sy)?.checked_mul(self.sz)
    }

    #[inline]
    pub fn contains(self, x: usize, y: usize, z: usize) -> bool {
        x < self.sx && y < self.sy && z < self.sz
    }

    #[inline]
    pub const fn as_tuple(self) -> (usize, usize, usize) {
        (self.sx, self.sy, self.sz)
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.sx, self.sy, self.sz)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid grid dimensions {0}: every axis needs at least one cell")]
    InvalidDimension(GridSize),
    #[error("grid dimensions {0} exceed addressable memory")]
    TooLarge(GridSize),
    #[error("coordinate ({x}, {y}, {z}) is outside the {size} grid")]
    OutOfRange {
        x: usize,
        y: usize,
        z: usize,
        size: GridSize,
    },
}

/// Dense 3D grid of optional cells. A present cell is solid and may carry a
/// payload `V`; an absent cell is empty.
///
/// Storage is y-major, then z, then x, matching the vertex lattice order used
/// by the mesher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelGrid<V = ()> {
    size: GridSize,
    cells: Vec<Option<V>>,
}

impl<V> VoxelGrid<V> {
    /// Allocates an all-empty grid. Fails on a zero-length axis or when the
    /// cells cannot be allocated.
    pub fn new(sx: usize, sy: usize, sz: usize) -> Result<Self, GridError> {
        Self::from_fn(sx, sy, sz, |_, _, _| None)
    }

    /// Builds a grid by evaluating `f` once per cell, in storage order.
    pub fn from_fn(
        sx: usize,
        sy: usize,
        sz: usize,
        mut f: impl FnMut(usize, usize, usize) -> Option<V>,
    ) -> Result<Self, GridError> {
        let size = GridSize::new(sx, sy, sz);
        if sx == 0 || sy == 0 || sz == 0 {
            return Err(GridError::InvalidDimension(size));
        }
        let volume = size.volume().ok_or(GridError::TooLarge(size))?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(volume)
            .map_err(|_| GridError::TooLarge(size))?;
        for y in 0..sy {
            for z in 0..sz {
                for x in 0..sx {
                    cells.push(f(x, y, z));
                }
            }
        }
        Ok(Self { size, cells })
    }

    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize, z: usize) -> bool {
        self.size.contains(x, y, z)
    }

    /// Linear storage index of an in-range coordinate.
    pub fn index(&self, x: usize, y: usize, z: usize) -> Result<usize, GridError> {
        if !self.contains(x, y, z) {
            return Err(GridError::OutOfRange {
                x,
                y,
                z,
                size: self.size,
            });
        }
        Ok(self.idx(x, y, z))
    }

    #[inline]
    fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        (y * self.size.sz + z) * self.size.sx + x
    }

    pub fn get(&self, x: usize, y: usize, z: usize) -> Result<Option<&V>, GridError> {
        let i = self.index(x, y, z)?;
        Ok(self.cells[i].as_ref())
    }

    pub fn get_mut(&mut self, x: usize, y: usize, z: usize) -> Result<Option<&mut V>, GridError> {
        let i = self.index(x, y, z)?;
        Ok(self.cells[i].as_mut())
    }

    /// Replaces a cell, returning what it held before.
    pub fn set(
        &mut self,
        x: usize,
        y: usize,
        z: usize,
        cell: Option<V>,
    ) -> Result<Option<V>, GridError> {
        let i = self.index(x, y, z)?;
        Ok(std::mem::replace(&mut self.cells[i], cell))
    }

    /// Empties a cell, returning its previous payload.
    pub fn clear(&mut self, x: usize, y: usize, z: usize) -> Result<Option<V>, GridError> {
        self.set(x, y, z, None)
    }

    pub fn is_solid(&self, x: usize, y: usize, z: usize) -> Result<bool, GridError> {
        Ok(self.get(x, y, z)?.is_some())
    }

    /// Probe for hot loops: anything outside the grid reads as empty.
    #[inline]
    pub fn solid_at(&self, x: usize, y: usize, z: usize) -> bool {
        self.contains(x, y, z) && self.cells[self.idx(x, y, z)].is_some()
    }

    pub fn solid_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    #[inline]
    pub fn has_solid(&self) -> bool {
        self.cells.iter().any(Option::is_some)
    }

    #[inline]
    pub fn is_all_empty(&self) -> bool {
        !self.has_solid()
    }

    /// Coordinates of solid cells, x outermost, then y, then z.
    pub fn iter_solid(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        let GridSize { sx, sy, sz } = self.size;
        (0..sx).flat_map(move |x| {
            (0..sy).flat_map(move |y| {
                (0..sz).filter_map(move |z| self.solid_at(x, y, z).then_some((x, y, z)))
            })
        })
    }
}

impl<V: Default> VoxelGrid<V> {
    /// Marks a cell solid with a default payload. An existing payload is kept.
    pub fn fill(&mut self, x: usize, y: usize, z: usize) -> Result<(), GridError> {
        let i = self.index(x, y, z)?;
        if self.cells[i].is_none() {
            self.cells[i] = Some(V::default());
        }
        Ok(())
    }
}
