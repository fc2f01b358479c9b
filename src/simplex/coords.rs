/// Integer type of an anchor or vertex coordinate
///
/// Coordinates are given at the finest resolution of the tree: the root cell spans `[0, 2^MAX_LEVEL]`.
/// They are signed so that face neighbors outside of the root cell can still be represented (see `in_band`).
pub type Coord = i32;

/// Length of a cell at `level` in a tree refined down to `max_level`: `2^(max_level - level)`
#[inline]
pub const fn cell_len(max_level: u8, level: u8) -> Coord {
    1 << (max_level - level)
}

/// Can `coord` appear in the anchor of an element of a tree refined down to `max_level`
///
/// Face neighbors may leave the root cell, but by at most one root length on either side:
/// the band is `[-2^max_level, 2 * 2^max_level)`. Vertices and ancestors of anchors inside
/// the band always fit into a `Coord`.
pub fn in_band(coord: Coord, max_level: u8) -> bool {
    let root_len = cell_len(max_level, 0);
    -root_len <= coord && coord < 2 * root_len
}

/// Which octant (quadrant in 2D) of the enclosing cube at `level - 1` a point anchored at `coords` occupies
///
/// Bit `i` of the result is set if the coordinate along axis `i` has the `cell_len(level)` bit set.
/// The root has no enclosing cube, so the id is 0 at `level == 0`.
pub fn cube_id(coords: &[Coord], max_level: u8, level: u8) -> u8 {
    if level == 0 {
        return 0;
    }

    let h = cell_len(max_level, level);
    coords
        .iter()
        .enumerate()
        .filter(|(_, c)| *c & h != 0)
        .fold(0, |id, (axis, _)| id | (1u8 << axis))
}
