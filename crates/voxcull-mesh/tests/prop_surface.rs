use proptest::prelude::*;
use voxcull_geom::Vec3;
use voxcull_grid::VoxelGrid;
use voxcull_mesh::build_surface_mesh;

fn dim() -> impl Strategy<Value = usize> {
    1usize..=6
}

fn arb_grid() -> impl Strategy<Value = VoxelGrid> {
    (dim(), dim(), dim()).prop_flat_map(|(sx, sy, sz)| {
        prop::collection::vec(any::<bool>(), sx * sy * sz).prop_map(move |bits| {
            let mut it = bits.into_iter();
            VoxelGrid::from_fn(sx, sy, sz, |_, _, _| it.next().unwrap_or(false).then_some(())).unwrap()
        })
    })
}

/// Solid test for any integer cell; outside the grid is empty.
fn solid_i(grid: &VoxelGrid, x: i64, y: i64, z: i64) -> bool {
    x >= 0 && y >= 0 && z >= 0 && grid.solid_at(x as usize, y as usize, z as usize)
}

/// Straightforward count of solid faces that touch empty space or the grid edge.
fn exposed_faces(grid: &VoxelGrid) -> usize {
    const DIRS: [(i64, i64, i64); 6] = [(0, 1, 0), (0, -1, 0), (0, 0, 1), (0, 0, -1), (1, 0, 0), (-1, 0, 0)];
    grid.iter_solid()
        .map(|(x, y, z)| {
            DIRS.iter()
                .filter(|(dx, dy, dz)| !solid_i(grid, x as i64 + dx, y as i64 + dy, z as i64 + dz))
                .count()
        })
        .sum()
}

proptest! {
    // Two triangles per exposed face, against a naive reference
    #[test]
    fn triangle_count_matches_reference(grid in arb_grid()) {
        let mesh = build_surface_mesh(&grid, 1.0).unwrap();
        prop_assert_eq!(mesh.triangle_count(), 2 * exposed_faces(&grid));
    }

    // The lattice is always complete, whatever the occupancy
    #[test]
    fn vertex_lattice_is_dense(grid in arb_grid(), s in 0.01f32..8.0) {
        let (sx, sy, sz) = grid.size().as_tuple();
        let mesh = build_surface_mesh(&grid, s).unwrap();
        prop_assert_eq!(mesh.vertex_count(), (sx + 1) * (sy + 1) * (sz + 1));
        prop_assert_eq!(mesh.normals.len(), mesh.vertex_count());
        prop_assert_eq!(mesh.bounds.min, Vec3::ZERO);
        prop_assert_eq!(mesh.bounds.max, Vec3::from_lattice(sx, sy, sz) * s);
        for t in &mesh.triangles {
            for &i in t {
                prop_assert!((i as usize) < mesh.vertex_count());
            }
        }
    }

    // Every triangle has solid behind it and empty space (or the edge) in front
    #[test]
    fn triangles_face_out_of_the_solid(grid in arb_grid()) {
        let mesh = build_surface_mesh(&grid, 1.0).unwrap();
        for t in &mesh.triangles {
            let [a, b, c] = t.map(|i| mesh.vertices[i as usize]);
            let n = (b - a).cross(c - a);
            prop_assert!((n.length() - 1.0).abs() < 1e-6);
            let centroid = (a + b + c) / 3.0;
            let inside = centroid - n * 0.25;
            let outside = centroid + n * 0.25;
            let cell = |p: Vec3| (p.x.floor() as i64, p.y.floor() as i64, p.z.floor() as i64);
            let (ix, iy, iz) = cell(inside);
            let (ox, oy, oz) = cell(outside);
            prop_assert!(solid_i(&grid, ix, iy, iz));
            prop_assert!(!solid_i(&grid, ox, oy, oz));
        }
    }

    // Normals are unit length or zero; untouched vertices stay zero
    #[test]
    fn normals_are_unit_or_zero(grid in arb_grid()) {
        let mesh = build_surface_mesh(&grid, 1.0).unwrap();
        let mut used = vec![false; mesh.vertex_count()];
        for &i in mesh.triangles.iter().flatten() {
            used[i as usize] = true;
        }
        for (n, u) in mesh.normals.iter().zip(used) {
            let len = n.length();
            prop_assert!(len == 0.0 || (len - 1.0).abs() < 1e-5);
            if !u {
                prop_assert_eq!(*n, Vec3::ZERO);
            }
        }
    }

    // Scaling the voxel size scales positions and leaves topology alone
    #[test]
    fn voxel_size_only_scales_positions(grid in arb_grid(), s in 0.01f32..8.0) {
        let unit = build_surface_mesh(&grid, 1.0).unwrap();
        let scaled = build_surface_mesh(&grid, s).unwrap();
        prop_assert_eq!(&unit.triangles, &scaled.triangles);
        for (u, v) in unit.vertices.iter().zip(&scaled.vertices) {
            prop_assert_eq!(*u * s, *v);
        }
    }
}
