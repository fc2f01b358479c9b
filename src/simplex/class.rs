use super::{
    coords::Coord,
    neighbor::FaceTransition,
    tables::{RefinementTables, TETRAHEDRON, TRIANGLE},
    Simplex,
};
use nalgebra::{Vector2, Vector3};

/// Triangles of a 2D space-tree
///
/// ## Layout
/// A type 0 triangle covers the part of its square below the diagonal; type 1 the part above it.
/// Vertex `i` lies opposite of face `i`:
///
/// ```text
///   type 0                type 1
///
///             2           1 --------- 2
///           / |           |    0    /
///         /   |           |       /
///    1  /     | 0       2 |     /  1
///     /       |           |   /
///   0 --------- 1         0
///         2
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Triangle;

impl Simplex for Triangle {
    const DIM: usize = 2;
    const MAX_LEVEL: u8 = 29;
    const NUM_TYPES: u8 = 2;
    const NUM_CHILDREN: usize = 4;
    const NUM_FACES: usize = 3;
    const NUM_VERTICES: usize = 3;
    const NAME: &'static str = "triangle";

    type Coords = [Coord; 2];
    type Vertices = [[Coord; 2]; 3];
    type Point = Vector2<f64>;

    fn tables() -> &'static RefinementTables {
        &TRIANGLE
    }

    fn vertex_axes(simplex_type: u8) -> [usize; 2] {
        let ei = simplex_type as usize;
        [ei, 1 - ei]
    }

    fn face_transition(simplex_type: u8, face: usize) -> FaceTransition {
        let t = simplex_type as usize;
        let shift = match face {
            0 => Some((t, 1)),
            2 => Some((1 - t, -1)),
            // face 1 is the diagonal of the square; only the type flips
            _ => None,
        };

        FaceTransition {
            shift,
            simplex_type: 1 - simplex_type,
            face: 2 - face,
        }
    }

    fn in_root(point: &[Coord]) -> bool {
        0 <= point[1] && point[1] <= point[0] && point[0] <= Self::root_len()
    }

    fn point_from_fn<F: FnMut(usize) -> f64>(mut f: F) -> Self::Point {
        Vector2::from_fn(|axis, _| f(axis))
    }
}

/// Tetrahedra of a 3D space-tree
///
/// The six types are the six tetrahedra of the Kuhn subdivision of a cube. All of them share the
/// cube's main diagonal (from vertex 0 to vertex 3). Starting from the anchor, a type `t` tetrahedron
/// steps along axis `t / 2` to reach vertex 1, and then along axis `(t / 2 + 2) % 3` (even `t`) or
/// `(t / 2 + 1) % 3` (odd `t`) to reach vertex 2. Vertex `i` lies opposite of face `i`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Tetrahedron;

impl Simplex for Tetrahedron {
    const DIM: usize = 3;
    const MAX_LEVEL: u8 = 21;
    const NUM_TYPES: u8 = 6;
    const NUM_CHILDREN: usize = 8;
    const NUM_FACES: usize = 4;
    const NUM_VERTICES: usize = 4;
    const NAME: &'static str = "tetrahedron";

    type Coords = [Coord; 3];
    type Vertices = [[Coord; 3]; 4];
    type Point = Vector3<f64>;

    fn tables() -> &'static RefinementTables {
        &TETRAHEDRON
    }

    fn vertex_axes(simplex_type: u8) -> [usize; 2] {
        let ei = simplex_type as usize / 2;
        let ej = (ei + if simplex_type % 2 == 0 { 2 } else { 1 }) % 3;
        [ei, ej]
    }

    fn face_transition(simplex_type: u8, face: usize) -> FaceTransition {
        // shifted by 6 so that the decrements below stay positive
        let t = simplex_type as usize + 6;
        let even_type = t % 2 == 0;

        match face {
            1 | 2 => {
                // faces 1 and 2 lie inside the cube; the neighbor is the adjacent type
                let next_type = if even_type == (face % 2 == 0) { t + 1 } else { t - 1 };
                FaceTransition {
                    shift: None,
                    simplex_type: (next_type % 6) as u8,
                    face,
                }
            }
            0 => FaceTransition {
                // types 0,1 -> x+1; 2,3 -> y+1; 4,5 -> z+1
                shift: Some((simplex_type as usize / 2, 1)),
                simplex_type: ((t + if even_type { 4 } else { 2 }) % 6) as u8,
                face: 3,
            },
            _ => FaceTransition {
                // types 1,2 -> z-1; 3,4 -> x-1; 5,0 -> y-1
                shift: Some((((t + 3) % 6) / 2, -1)),
                simplex_type: ((t + if even_type { 2 } else { 4 }) % 6) as u8,
                face: 0,
            },
        }
    }

    fn in_root(point: &[Coord]) -> bool {
        0 <= point[1]
            && point[1] <= point[2]
            && point[2] <= point[0]
            && point[0] <= Self::root_len()
    }

    fn point_from_fn<F: FnMut(usize) -> f64>(mut f: F) -> Self::Point {
        Vector3::from_fn(|axis, _| f(axis))
    }
}
