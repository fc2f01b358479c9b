use super::{
    coords::{cube_id, Coord},
    Simplex, SimplexError,
};
#[cfg(feature = "json_export")]
use json::{object, JsonValue};
use std::fmt;
use std::marker::PhantomData;

/// A single node of a simplicial space-tree
///
/// `SimplexElement`s are immutable values described entirely by:
/// * their refinement `level` (0 at the root)
/// * their `type`, which selects one of the `S::NUM_TYPES` simplices a cube is split into
/// * the integer coordinates of their `anchor` (vertex 0) at the finest resolution of the tree
///
/// Every navigation method returns a new element; nothing is shared or mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SimplexElement<S: Simplex> {
    level: u8,
    simplex_type: u8,
    anchor: S::Coords,
    class: PhantomData<S>,
}

impl<S: Simplex> SimplexElement<S> {
    /// Construct an element from its level, type and anchor coordinates
    ///
    /// The anchor must lie in `[0, 2^MAX_LEVEL)` along every axis and be a multiple of the cell length at `level`.
    pub fn new(level: u8, simplex_type: u8, anchor: S::Coords) -> Result<Self, SimplexError> {
        if level > S::MAX_LEVEL {
            return Err(SimplexError::InvalidLevel { level, op: "new" }.logged());
        }
        if simplex_type >= S::NUM_TYPES {
            return Err(SimplexError::InvalidType(simplex_type).logged());
        }

        let h = S::len(level);
        if anchor
            .as_ref()
            .iter()
            .any(|&c| c < 0 || c >= S::root_len() || c % h != 0)
        {
            return Err(SimplexError::InvalidAnchor { level, op: "new" }.logged());
        }

        Ok(Self::from_raw(level, simplex_type, anchor))
    }

    /// The level 0, type 0 element anchored at the origin
    pub fn root() -> Self {
        Self::from_raw(0, 0, S::Coords::default())
    }

    pub(crate) fn from_raw(level: u8, simplex_type: u8, anchor: S::Coords) -> Self {
        Self {
            level,
            simplex_type,
            anchor,
            class: PhantomData,
        }
    }

    /// Refinement level (0 at the root)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Type of this element within its enclosing cube
    pub fn simplex_type(&self) -> u8 {
        self.simplex_type
    }

    /// Coordinates of vertex 0
    pub fn anchor(&self) -> S::Coords {
        self.anchor
    }

    /// Length of this element's enclosing cube along each axis
    pub fn cell_len(&self) -> Coord {
        S::len(self.level)
    }

    /// Which of the octants (quadrants in 2D) of its parent's cube this element lies in
    pub fn cube_id(&self) -> u8 {
        cube_id(self.anchor.as_ref(), S::MAX_LEVEL, self.level)
    }

    /// Coordinates of one of this element's vertices
    pub fn vertex(&self, vertex: usize) -> Result<S::Coords, SimplexError> {
        if vertex >= S::NUM_VERTICES {
            return Err(SimplexError::InvalidIndex {
                index: vertex,
                bound: S::NUM_VERTICES,
                what: "Vertex",
            }
            .logged());
        }

        Ok(self.vertex_unchecked(vertex))
    }

    // vertex k (k < NUM_VERTICES - 1) is reached by stepping one cell length along the first k vertex axes,
    // the last vertex is the opposite corner of the cube
    pub(crate) fn vertex_unchecked(&self, vertex: usize) -> S::Coords {
        let h = self.cell_len();
        let mut coords = self.anchor;

        if vertex == S::NUM_VERTICES - 1 {
            coords.as_mut().iter_mut().for_each(|c| *c += h);
        } else {
            for &axis in S::vertex_axes(self.simplex_type).iter().take(vertex) {
                coords.as_mut()[axis] += h;
            }
        }

        coords
    }

    /// Coordinates of all vertices at once (in vertex order)
    pub fn all_vertices(&self) -> S::Vertices {
        let h = self.cell_len();
        let axes = S::vertex_axes(self.simplex_type);
        let last = S::NUM_VERTICES - 1;

        let mut vertices = S::Vertices::default();
        let v = vertices.as_mut();

        v[0] = self.anchor;
        for k in 1..last {
            v[k] = v[k - 1];
            v[k].as_mut()[axes[k - 1]] += h;
        }
        v[last] = self.anchor;
        v[last].as_mut().iter_mut().for_each(|c| *c += h);

        vertices
    }

    /// Produce a Json Object that describes this element
    #[cfg(feature = "json_export")]
    pub fn to_json(&self) -> JsonValue {
        object! {
            "class": S::NAME,
            "level": self.level,
            "type": self.simplex_type,
            "anchor": self.anchor.as_ref().to_vec(),
        }
    }

    /// Reconstruct an element from the output of `to_json`
    #[cfg(feature = "json_export")]
    pub fn from_json(value: &JsonValue) -> Result<Self, SimplexError> {
        if value["class"].as_str() != Some(S::NAME) {
            return Err(SimplexError::MalformedJson("class").logged());
        }

        let level = value["level"]
            .as_u8()
            .ok_or_else(|| SimplexError::MalformedJson("level").logged())?;
        let simplex_type = value["type"]
            .as_u8()
            .ok_or_else(|| SimplexError::MalformedJson("type").logged())?;

        let json_anchor = &value["anchor"];
        if !json_anchor.is_array() || json_anchor.len() != S::DIM {
            return Err(SimplexError::MalformedJson("anchor").logged());
        }

        let mut anchor = S::Coords::default();
        for (c, json_c) in anchor.as_mut().iter_mut().zip(json_anchor.members()) {
            *c = json_c
                .as_i32()
                .ok_or_else(|| SimplexError::MalformedJson("anchor").logged())?;
        }

        Self::new(level, simplex_type, anchor)
    }
}

impl<S: Simplex> fmt::Display for SimplexElement<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} (level: {}, type: {}, anchor: {:?})",
            S::NAME,
            self.level,
            self.simplex_type,
            self.anchor.as_ref()
        )
    }
}
