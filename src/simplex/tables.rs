/// The lookup tables describing how one element class refines
///
/// All tables are indexed with the element's type on one axis:
/// * `parent_type[cube_id][type]`: type of the parent of an element with this cube-id and type
/// * `child_index_to_bey[type][child_index]`: Bey number of the child with a given (Morton-ordered) child index
/// * `child_type[type][bey_id]`: type of the child with a given Bey number
/// * `bey_to_vertex[bey_id]`: the parent vertex whose midpoint with the parent anchor is the child's anchor
#[derive(Debug)]
pub struct RefinementTables {
    pub parent_type: &'static [&'static [u8]],
    pub child_index_to_bey: &'static [&'static [u8]],
    pub child_type: &'static [&'static [u8]],
    pub bey_to_vertex: &'static [usize],
}

impl RefinementTables {
    /// Type of the parent of an element with this cube-id and type
    pub fn parent_type(&self, cube_id: u8, simplex_type: u8) -> u8 {
        self.parent_type[cube_id as usize][simplex_type as usize]
    }

    /// Bey number of the child with index `child_index`
    pub fn bey_id(&self, simplex_type: u8, child_index: usize) -> u8 {
        self.child_index_to_bey[simplex_type as usize][child_index]
    }

    /// Type of the child with Bey number `bey_id`
    pub fn child_type(&self, simplex_type: u8, bey_id: u8) -> u8 {
        self.child_type[simplex_type as usize][bey_id as usize]
    }

    /// Parent vertex that anchors the child with Bey number `bey_id` (through its midpoint with the parent's anchor)
    pub fn bey_vertex(&self, bey_id: u8) -> usize {
        self.bey_to_vertex[bey_id as usize]
    }
}

/*
    Triangles: type 0 lies below the diagonal of its square, type 1 above it.

    Bey children 0, 1, 2 sit at the corners (vertices 0, 1, 2) and keep the parent's type.
    Bey child 3 is the flipped middle triangle, anchored at the midpoint of vertices 0 and 1.
*/
pub static TRIANGLE: RefinementTables = RefinementTables {
    parent_type: &[&[0, 1], &[0, 0], &[1, 1], &[0, 1]],
    child_index_to_bey: &[&[0, 1, 3, 2], &[0, 3, 1, 2]],
    child_type: &[&[0, 0, 0, 1], &[1, 1, 1, 0]],
    bey_to_vertex: &[0, 1, 2, 1],
};

/*
    Tetrahedra: the six types of the Kuhn subdivision of the cube.

    Bey children 0..=3 sit at the corners and keep the parent's type.
    Bey children 4..=7 are cut from the interior octahedron; 4 and 5 are anchored at
    the midpoint of vertices 0 and 1, 6 and 7 at the midpoint of vertices 0 and 2.
*/
pub static TETRAHEDRON: RefinementTables = RefinementTables {
    parent_type: &[
        &[0, 1, 2, 3, 4, 5],
        &[0, 1, 1, 1, 0, 0],
        &[2, 2, 2, 3, 3, 3],
        &[1, 1, 2, 2, 2, 1],
        &[5, 5, 4, 4, 4, 5],
        &[0, 0, 0, 5, 5, 5],
        &[4, 3, 3, 3, 4, 4],
        &[0, 1, 2, 3, 4, 5],
    ],
    child_index_to_bey: &[
        &[0, 1, 4, 5, 2, 7, 6, 3],
        &[0, 1, 5, 4, 7, 2, 6, 3],
        &[0, 4, 5, 1, 2, 7, 6, 3],
        &[0, 1, 5, 4, 6, 7, 2, 3],
        &[0, 4, 5, 1, 6, 2, 7, 3],
        &[0, 5, 4, 1, 6, 7, 2, 3],
    ],
    child_type: &[
        &[0, 0, 0, 0, 4, 5, 2, 1],
        &[1, 1, 1, 1, 3, 2, 5, 0],
        &[2, 2, 2, 2, 0, 1, 4, 3],
        &[3, 3, 3, 3, 5, 4, 1, 2],
        &[4, 4, 4, 4, 2, 3, 0, 5],
        &[5, 5, 5, 5, 1, 0, 3, 4],
    ],
    bey_to_vertex: &[0, 1, 2, 3, 1, 1, 2, 2],
};
