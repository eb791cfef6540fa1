use voxcull_grid::{GridError, GridSize, VoxelGrid};

#[test]
fn new_grid_is_empty_with_fixed_size() {
    let grid: VoxelGrid = VoxelGrid::new(3, 4, 5).unwrap();
    assert_eq!(grid.size(), GridSize::new(3, 4, 5));
    assert_eq!(grid.size().as_tuple(), (3, 4, 5));
    assert_eq!(grid.size().volume(), Some(60));
    assert_eq!(grid.solid_count(), 0);
    assert!(grid.is_all_empty());
    assert!(!grid.has_solid());
}

#[test]
fn zero_dimension_is_rejected() {
    for (sx, sy, sz) in [(0, 1, 1), (1, 0, 1), (1, 1, 0), (0, 0, 0)] {
        let err = VoxelGrid::<()>::new(sx, sy, sz).unwrap_err();
        assert_eq!(err, GridError::InvalidDimension(GridSize::new(sx, sy, sz)));
    }
}

#[test]
fn overflowing_volume_is_rejected() {
    let err = VoxelGrid::<()>::new(usize::MAX, 2, 1).unwrap_err();
    assert!(matches!(err, GridError::TooLarge(_)));
}

#[test]
fn unallocatable_volume_is_an_error() {
    // 2^60 cells fit in usize, but 16-byte cells overflow the byte count
    let err = VoxelGrid::<u64>::new(1 << 20, 1 << 20, 1 << 20).unwrap_err();
    assert_eq!(err, GridError::TooLarge(GridSize::new(1 << 20, 1 << 20, 1 << 20)));
}

#[test]
fn storage_order_is_y_then_z_then_x() {
    let grid: VoxelGrid = VoxelGrid::new(4, 3, 2).unwrap();
    assert_eq!(grid.index(0, 0, 0), Ok(0));
    assert_eq!(grid.index(1, 0, 0), Ok(1));
    assert_eq!(grid.index(0, 0, 1), Ok(4));
    assert_eq!(grid.index(0, 1, 0), Ok(8));
    assert_eq!(grid.index(3, 2, 1), Ok(23));
}

#[test]
fn fill_keeps_existing_payload() {
    let mut grid: VoxelGrid<u8> = VoxelGrid::new(2, 2, 2).unwrap();
    grid.set(1, 1, 1, Some(9)).unwrap();
    grid.fill(1, 1, 1).unwrap();
    grid.fill(0, 0, 0).unwrap();
    assert_eq!(grid.get(1, 1, 1).unwrap(), Some(&9));
    assert_eq!(grid.get(0, 0, 0).unwrap(), Some(&0));
    assert_eq!(grid.solid_count(), 2);
}

#[test]
fn get_mut_edits_payload_in_place() {
    let mut grid: VoxelGrid<u8> = VoxelGrid::new(1, 1, 1).unwrap();
    assert_eq!(grid.get_mut(0, 0, 0).unwrap(), None);
    grid.set(0, 0, 0, Some(1)).unwrap();
    if let Some(v) = grid.get_mut(0, 0, 0).unwrap() {
        *v += 41;
    }
    assert_eq!(grid.get(0, 0, 0).unwrap(), Some(&42));
}

#[test]
fn out_of_range_error_message_names_coordinate_and_size() {
    let grid: VoxelGrid = VoxelGrid::new(2, 2, 2).unwrap();
    let err = grid.is_solid(2, 0, 1).unwrap_err();
    assert_eq!(err.to_string(), "coordinate (2, 0, 1) is outside the 2x2x2 grid");
}
