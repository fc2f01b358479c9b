use super::{
    coords::{in_band, Coord},
    element::SimplexElement,
    Simplex, SimplexError,
};

/// The change from an element to its same-level neighbor across one face
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceTransition {
    /// Axis along which the anchor moves, and the direction (+1 / -1) in units of the cell length
    pub shift: Option<(usize, Coord)>,
    /// Type of the neighbor
    pub simplex_type: u8,
    /// Face of the neighbor through which the two elements touch
    pub face: usize,
}

impl<S: Simplex> SimplexElement<S> {
    /// The same-level element on the other side of `face`
    ///
    /// Also returns the neighbor's index of the shared face. This is generally not the same as `face`.
    /// The neighbor may lie outside of the root (see `is_inside_root`), but its anchor must stay in the
    /// band around the root cell given by `coords::in_band`.
    pub fn face_neighbor(&self, face: usize) -> Result<(Self, usize), SimplexError> {
        if face >= S::NUM_FACES {
            return Err(SimplexError::InvalidIndex {
                index: face,
                bound: S::NUM_FACES,
                what: "Face",
            }
            .logged());
        }

        let transition = S::face_transition(self.simplex_type(), face);
        let mut anchor = self.anchor();
        if let Some((axis, direction)) = transition.shift {
            let moved = anchor.as_mut()[axis] + direction * self.cell_len();
            if !in_band(moved, S::MAX_LEVEL) {
                return Err(SimplexError::InvalidAnchor {
                    level: self.level(),
                    op: "face_neighbor",
                }
                .logged());
            }
            anchor.as_mut()[axis] = moved;
        }

        Ok((
            Self::from_raw(self.level(), transition.simplex_type, anchor),
            transition.face,
        ))
    }

    /// Does this element lie inside the root simplex (level 0, type 0)
    pub fn is_inside_root(&self) -> bool {
        self.all_vertices()
            .as_ref()
            .iter()
            .all(|vertex| S::in_root(vertex.as_ref()))
    }
}
