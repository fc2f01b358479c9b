//! Encoding and navigation of single elements in adaptive simplicial space-trees.
//!
//! A tree node is a triangle (2D) or tetrahedron (3D) described by its refinement `level`,
//! its `type` (orientation inside the enclosing cube) and the integer `anchor` coordinates
//! of its reference corner. All operations are pure functions from existing elements to new ones:
//! parent, child and sibling computation, face neighbors, vertex coordinates and the
//! relation predicates used to validate adjacency across a forest.

extern crate json;
extern crate nalgebra;
extern crate smallvec;

/// Triangles and Tetrahedra in adaptive space-trees
pub mod simplex;

pub use simplex::{
    coords::Coord, element::SimplexElement, neighbor::FaceTransition, tables::RefinementTables,
    Simplex, SimplexError, Tet, Tetrahedron, Tri, Triangle,
};
