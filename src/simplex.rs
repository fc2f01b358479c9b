/// The two element classes (`Triangle` and `Tetrahedron`) and their per-class rules
pub mod class;
/// Fixed-point integer coordinates and the cube-id of an element
pub mod coords;
/// The `SimplexElement` value type and its vertex coordinates
pub mod element;
/// Mapping of element vertices into reference and physical space
pub mod geometry;
/// Same-level adjacency across element faces
pub mod neighbor;
/// Parent, child and sibling computation
pub mod refinement;
/// Equality, sibling, parent and ancestor predicates
pub mod relations;
/// Precomputed lookup tables defining Bey's refinement scheme
pub mod tables;

pub use class::{Tetrahedron, Triangle};

use coords::{cell_len, Coord};
use neighbor::FaceTransition;
use tables::RefinementTables;

use std::fmt;
use std::hash::Hash;
use std::ops::Index;

/// The expected refinement depth of a tree. This determines the stack allocation size of the `SmallVec`s returned by `ancestors`
pub const EXPECTED_DEPTH: usize = 16;

/// A triangle in a 2D space-tree
pub type Tri = element::SimplexElement<Triangle>;

/// A tetrahedron in a 3D space-tree
pub type Tet = element::SimplexElement<Tetrahedron>;

/// Everything that distinguishes triangles from tetrahedra
///
/// The navigation algorithms in this module are written once against this trait;
/// the implementors only supply axis counts, the constant tables, the layout of the
/// vertices relative to the anchor, and the face transition rules.
pub trait Simplex:
    Copy + Clone + fmt::Debug + Default + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// Number of coordinate axes
    const DIM: usize;
    /// Finest refinement level. Cells at this level have length 1
    const MAX_LEVEL: u8;
    /// Number of distinct element types
    const NUM_TYPES: u8;
    /// Number of children produced by one refinement
    const NUM_CHILDREN: usize;
    /// Number of faces (edges in 2D)
    const NUM_FACES: usize;
    /// Number of corner vertices
    const NUM_VERTICES: usize;
    /// Name used in Display output and JSON export
    const NAME: &'static str;

    /// Anchor or vertex coordinates: one `Coord` per axis
    type Coords: Copy
        + Clone
        + fmt::Debug
        + Default
        + PartialEq
        + Eq
        + Hash
        + AsRef<[Coord]>
        + AsMut<[Coord]>
        + Send
        + Sync
        + 'static;

    /// Coordinates of all vertices of an element
    type Vertices: Copy + fmt::Debug + Default + AsRef<[Self::Coords]> + AsMut<[Self::Coords]>;

    /// Floating point location in reference or physical space
    type Point: Copy + fmt::Debug + PartialEq + Index<usize, Output = f64>;

    /// The constant tables of this class
    fn tables() -> &'static RefinementTables;

    /// Axes stepped along (in order) when walking from the anchor to vertex 1 and then vertex 2
    ///
    /// The last vertex is always offset by one cell length along every axis.
    fn vertex_axes(simplex_type: u8) -> [usize; 2];

    /// How the anchor, type and face index change when crossing `face` of an element of `simplex_type`
    ///
    /// `face` must be smaller than `NUM_FACES`
    fn face_transition(simplex_type: u8, face: usize) -> FaceTransition;

    /// Is a point (in integer coordinates) inside the closed root simplex of type 0
    fn in_root(point: &[Coord]) -> bool;

    /// Build a `Point` from a function of its axis
    fn point_from_fn<F: FnMut(usize) -> f64>(f: F) -> Self::Point;

    /// Length of a cell at `level`
    fn len(level: u8) -> Coord {
        cell_len(Self::MAX_LEVEL, level)
    }

    /// Length of the root cell
    fn root_len() -> Coord {
        cell_len(Self::MAX_LEVEL, 0)
    }
}

/// Precondition violations of element operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimplexError {
    /// The level is outside of `[0, MAX_LEVEL]` or not valid for the requested operation
    InvalidLevel { level: u8, op: &'static str },
    /// A child index, face, or vertex index is outside of its range
    InvalidIndex {
        index: usize,
        bound: usize,
        what: &'static str,
    },
    /// The type discriminator is not smaller than the number of types of the class
    InvalidType(u8),
    /// The anchor is out of range or not aligned to the cell length of its level
    InvalidAnchor { level: u8, op: &'static str },
    /// A JSON element description is missing a field or has a field of the wrong shape
    MalformedJson(&'static str),
}

impl SimplexError {
    // report the violation before handing it back to the caller
    pub(crate) fn logged(self) -> Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(error = %self, "rejected simplex operation");
        self
    }
}

impl fmt::Display for SimplexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidLevel { level, op } => {
                write!(f, "Level {} is not valid here; Cannot compute {}!", level, op)
            }
            Self::InvalidIndex { index, bound, what } => write!(
                f,
                "{} index {} is out of range (must be smaller than {})!",
                what, index, bound
            ),
            Self::InvalidAnchor { level, op } => {
                write!(f, "Anchor is not valid at level {}; Cannot compute {}!", level, op)
            }
            Self::InvalidType(simplex_type) => {
                write!(f, "Type {} does not exist for this element class!", simplex_type)
            }
            Self::MalformedJson(field) => {
                write!(f, "Element JSON has a missing or malformed '{}' field!", field)
            }
        }
    }
}

impl std::error::Error for SimplexError {}
