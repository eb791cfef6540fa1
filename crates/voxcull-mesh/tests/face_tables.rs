use voxcull_geom::Vec3;
use voxcull_grid::GridSize;
use voxcull_mesh::Face;

fn corner(c: [usize; 3]) -> Vec3 {
    Vec3::from_lattice(c[0], c[1], c[2])
}

#[test]
fn windings_face_outward() {
    for face in Face::ALL {
        for [a, b, c] in face.triangles() {
            let n = (corner(b) - corner(a)).cross(corner(c) - corner(a));
            assert_eq!(n, face.normal(), "{:?}", face);
        }
    }
}

#[test]
fn face_corners_sit_on_the_face_plane() {
    for face in Face::ALL {
        let (dx, dy, dz) = face.delta();
        for tri in face.triangles() {
            for c in tri {
                let on_plane = match (dx, dy, dz) {
                    (1, _, _) => c[0] == 1,
                    (-1, _, _) => c[0] == 0,
                    (_, 1, _) => c[1] == 1,
                    (_, -1, _) => c[1] == 0,
                    (_, _, 1) => c[2] == 1,
                    _ => c[2] == 0,
                };
                assert!(on_plane, "{:?} corner {:?}", face, c);
            }
        }
    }
}

#[test]
fn two_triangles_cover_all_four_face_corners() {
    for face in Face::ALL {
        let mut corners: Vec<[usize; 3]> = face.triangles().into_iter().flatten().collect();
        corners.sort();
        corners.dedup();
        assert_eq!(corners.len(), 4, "{:?}", face);
    }
}

#[test]
fn order_and_indices() {
    let names: Vec<usize> = Face::ALL.iter().map(|f| f.index()).collect();
    assert_eq!(names, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(Face::ALL[0], Face::PosY);
    assert_eq!(Face::ALL[2], Face::PosZ);
    assert_eq!(Face::ALL[4], Face::PosX);
}

#[test]
fn neighbor_respects_grid_edges() {
    let size = GridSize::new(3, 3, 3);
    assert_eq!(Face::PosY.neighbor(1, 1, 1, size), Some((1, 2, 1)));
    assert_eq!(Face::NegY.neighbor(1, 1, 1, size), Some((1, 0, 1)));
    assert_eq!(Face::PosZ.neighbor(1, 1, 1, size), Some((1, 1, 2)));
    assert_eq!(Face::NegZ.neighbor(1, 1, 1, size), Some((1, 1, 0)));
    assert_eq!(Face::PosX.neighbor(1, 1, 1, size), Some((2, 1, 1)));
    assert_eq!(Face::NegX.neighbor(1, 1, 1, size), Some((0, 1, 1)));

    assert_eq!(Face::PosY.neighbor(0, 2, 0, size), None);
    assert_eq!(Face::NegY.neighbor(0, 0, 0, size), None);
    assert_eq!(Face::PosZ.neighbor(0, 0, 2, size), None);
    assert_eq!(Face::NegZ.neighbor(0, 0, 0, size), None);
    assert_eq!(Face::PosX.neighbor(2, 0, 0, size), None);
    assert_eq!(Face::NegX.neighbor(0, 0, 0, size), None);
}
