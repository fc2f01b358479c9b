use super::{element::SimplexElement, Simplex};

impl<S: Simplex> SimplexElement<S> {
    /// Do both elements have the same level, type and anchor
    pub fn is_equal(&self, other: &Self) -> bool {
        self.level() == other.level()
            && self.simplex_type() == other.simplex_type()
            && self
                .anchor()
                .as_ref()
                .iter()
                .zip(other.anchor().as_ref())
                .all(|(a, b)| a == b)
    }

    /// Are both elements distinct-type children of the same parent
    ///
    /// Root elements have no siblings. An element is never its own sibling.
    pub fn is_sibling(&self, other: &Self) -> bool {
        if self.level() == 0 || other.level() == 0 {
            return false;
        }

        let h = self.cell_len();
        let tables = S::tables();

        // the anchors may only differ in the bit that selects the octant of the parent's cube
        self.level() == other.level()
            && self
                .anchor()
                .as_ref()
                .iter()
                .zip(other.anchor().as_ref())
                .all(|(a, b)| (a ^ b) & !h == 0)
            && tables.parent_type(self.cube_id(), self.simplex_type())
                == tables.parent_type(other.cube_id(), other.simplex_type())
            && self.simplex_type() != other.simplex_type()
    }

    /// Is this element the parent of `child`
    pub fn is_parent_of(&self, child: &Self) -> bool {
        if child.level() != self.level() + 1 {
            return false;
        }

        let h = child.cell_len();
        self.anchor()
            .as_ref()
            .iter()
            .zip(child.anchor().as_ref())
            .all(|(p, c)| *p == c & !h)
            && self.simplex_type()
                == S::tables().parent_type(child.cube_id(), child.simplex_type())
    }

    /// Does `descendant` lie inside this element's cube at a finer level
    ///
    /// Only the anchor coordinates above this element's cell length are compared; the types are not considered.
    pub fn is_ancestor_of(&self, descendant: &Self) -> bool {
        if self.level() >= descendant.level() {
            return false;
        }

        let shift = S::MAX_LEVEL - self.level();
        self.anchor()
            .as_ref()
            .iter()
            .zip(descendant.anchor().as_ref())
            .all(|(a, d)| (a ^ d) >> shift == 0)
    }
}
