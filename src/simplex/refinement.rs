use super::{element::SimplexElement, Simplex, SimplexError, EXPECTED_DEPTH};
use smallvec::SmallVec;

/// All children of one element, in child-index order
pub type Children<S> = SmallVec<[SimplexElement<S>; 8]>;

/// Chain of ancestors of an element, starting with its parent
pub type Ancestors<S> = SmallVec<[SimplexElement<S>; EXPECTED_DEPTH]>;

impl<S: Simplex> SimplexElement<S> {
    /// The element one level up which this element was refined from
    ///
    /// Fails for the root (level 0)
    pub fn parent(&self) -> Result<Self, SimplexError> {
        if self.level() == 0 {
            return Err(SimplexError::InvalidLevel {
                level: 0,
                op: "parent",
            }
            .logged());
        }

        Ok(self.parent_unchecked())
    }

    pub(crate) fn parent_unchecked(&self) -> Self {
        let h = self.cell_len();
        let mut anchor = self.anchor();
        anchor.as_mut().iter_mut().for_each(|c| *c &= !h);

        Self::from_raw(
            self.level() - 1,
            S::tables().parent_type(self.cube_id(), self.simplex_type()),
            anchor,
        )
    }

    /// One of the `S::NUM_CHILDREN` children of this element
    ///
    /// `child_index` follows the Morton-style child order of the tree; it is translated into
    /// Bey's numbering before the child is constructed.
    pub fn child(&self, child_index: usize) -> Result<Self, SimplexError> {
        self.check_refinable("child")?;
        if child_index >= S::NUM_CHILDREN {
            return Err(SimplexError::InvalidIndex {
                index: child_index,
                bound: S::NUM_CHILDREN,
                what: "Child",
            }
            .logged());
        }

        Ok(self.child_unchecked(child_index))
    }

    pub(crate) fn child_unchecked(&self, child_index: usize) -> Self {
        let tables = S::tables();
        let bey_id = tables.bey_id(self.simplex_type(), child_index);

        // Bey child 0 shares the parent's anchor; all others are anchored halfway between
        // the parent's anchor and one of its vertices
        let mut anchor = self.anchor();
        if bey_id != 0 {
            let vertex = self.vertex_unchecked(tables.bey_vertex(bey_id));
            for (c, v) in anchor.as_mut().iter_mut().zip(vertex.as_ref()) {
                *c += (v - *c) >> 1;
            }
        }

        Self::from_raw(
            self.level() + 1,
            tables.child_type(self.simplex_type(), bey_id),
            anchor,
        )
    }

    /// All children of this element in child-index order
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip_all, name = "simplex::children")
    )]
    pub fn children(&self) -> Result<Children<S>, SimplexError> {
        self.check_refinable("children")?;
        Ok((0..S::NUM_CHILDREN)
            .map(|child_index| self.child_unchecked(child_index))
            .collect())
    }

    /// The child of this element's parent with index `sibling_index`
    ///
    /// This is always identical to `self.parent()?.child(sibling_index)`
    pub fn sibling(&self, sibling_index: usize) -> Result<Self, SimplexError> {
        if self.level() == 0 {
            return Err(SimplexError::InvalidLevel {
                level: 0,
                op: "sibling",
            }
            .logged());
        }

        self.parent_unchecked().child(sibling_index)
    }

    /// The child index of this element within its parent (the inverse of `child`)
    pub fn child_id(&self) -> Result<usize, SimplexError> {
        let parent = self.parent()?;
        let cube_id = self.cube_id();

        // (cube-id, type) identify a child uniquely among its siblings
        (0..S::NUM_CHILDREN)
            .find(|&child_index| {
                let child = parent.child_unchecked(child_index);
                child.simplex_type() == self.simplex_type() && child.cube_id() == cube_id
            })
            .ok_or_else(|| {
                SimplexError::InvalidAnchor {
                    level: self.level(),
                    op: "child_id",
                }
                .logged()
            })
    }

    /// This element's ancestor at a coarser (or equal) `level`
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self), name = "simplex::ancestor")
    )]
    pub fn ancestor(&self, level: u8) -> Result<Self, SimplexError> {
        if level > self.level() {
            return Err(SimplexError::InvalidLevel {
                level,
                op: "ancestor",
            }
            .logged());
        }

        let mut ancestor = *self;
        while ancestor.level() > level {
            ancestor = ancestor.parent_unchecked();
        }

        Ok(ancestor)
    }

    /// Every ancestor of this element, from its parent up to the root
    pub fn ancestors(&self) -> Ancestors<S> {
        std::iter::successors(Some(*self), |elem| elem.parent().ok())
            .skip(1)
            .collect()
    }

    /// Do `elems` hold exactly the children of one parent (in child-index order)
    pub fn is_family(elems: &[Self]) -> bool {
        match elems.first().map(|first| first.parent()) {
            Some(Ok(parent)) if elems.len() == S::NUM_CHILDREN => elems
                .iter()
                .enumerate()
                .all(|(child_index, elem)| parent.child_unchecked(child_index) == *elem),
            _ => false,
        }
    }

    fn check_refinable(&self, op: &'static str) -> Result<(), SimplexError> {
        if self.level() >= S::MAX_LEVEL {
            Err(SimplexError::InvalidLevel {
                level: self.level(),
                op,
            }
            .logged())
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Tet, Tetrahedron, Tri, Triangle};
    use super::*;

    // every element below `elem` down to `depth` further levels (including `elem`)
    fn subtree<S: Simplex>(elem: SimplexElement<S>, depth: u8) -> Vec<SimplexElement<S>> {
        let mut elems = vec![elem];
        if depth > 0 {
            for child in elem.children().unwrap() {
                elems.extend(subtree(child, depth - 1));
            }
        }
        elems
    }

    fn roots<S: Simplex>() -> Vec<SimplexElement<S>> {
        (0..S::NUM_TYPES)
            .map(|t| SimplexElement::new(0, t, S::Coords::default()).unwrap())
            .collect()
    }

    #[test]
    fn triangle_root_children() {
        let root = Tri::root();
        let h = Triangle::len(1);

        let expected = [(0, [0, 0]), (0, [h, 0]), (1, [h, 0]), (0, [h, h])];
        for (child_index, (t, anchor)) in expected.iter().enumerate() {
            let child = root.child(child_index).unwrap();
            assert_eq!(child.level(), 1);
            assert_eq!(child.simplex_type(), *t);
            assert_eq!(child.anchor(), *anchor);
            assert_eq!(child.parent().unwrap(), root);
        }
    }

    #[test]
    fn tetrahedron_root_children() {
        let root = Tet::root();
        let h = Tetrahedron::len(1);

        let expected = [
            (0, [0, 0, 0]),
            (0, [h, 0, 0]),
            (4, [h, 0, 0]),
            (5, [h, 0, 0]),
            (0, [h, 0, h]),
            (1, [h, 0, h]),
            (2, [h, 0, h]),
            (0, [h, h, h]),
        ];
        let children = root.children().unwrap();
        for (child, (t, anchor)) in children.iter().zip(expected.iter()) {
            assert_eq!(child.simplex_type(), *t);
            assert_eq!(child.anchor(), *anchor);
        }
    }

    fn check_parent_child_round_trip<S: Simplex>(depth: u8) {
        for root in roots::<S>() {
            for elem in subtree(root, depth) {
                for (child_index, child) in elem.children().unwrap().iter().enumerate() {
                    assert_eq!(child.parent().unwrap(), elem);
                    assert_eq!(child.child_id().unwrap(), child_index);
                    assert_eq!(*child, elem.child(child_index).unwrap());
                }
            }
        }
    }

    #[test]
    fn triangle_parent_child_round_trip() {
        check_parent_child_round_trip::<Triangle>(4);
    }

    #[test]
    fn tetrahedron_parent_child_round_trip() {
        check_parent_child_round_trip::<Tetrahedron>(2);
    }

    fn check_sibling_closure<S: Simplex>(depth: u8) {
        for elem in subtree(SimplexElement::<S>::root(), depth).into_iter().skip(1) {
            let parent = elem.parent().unwrap();
            for sibling_index in 0..S::NUM_CHILDREN {
                let sibling = elem.sibling(sibling_index).unwrap();
                assert_eq!(sibling.parent().unwrap(), parent);
                assert_eq!(sibling, parent.child(sibling_index).unwrap());
            }
        }
    }

    fn check_cube_ids<S: Simplex>(depth: u8) {
        for root in roots::<S>() {
            for elem in subtree(root, depth) {
                assert!(elem.cube_id() < 1u8 << S::DIM);
            }
        }
    }

    #[test]
    fn cube_ids_in_range() {
        check_cube_ids::<Triangle>(4);
        check_cube_ids::<Tetrahedron>(2);
    }

    // every (cube-id, type) pair has a matching child in the parent it maps to
    fn check_child_id_coverage<S: Simplex>() {
        let h = S::len(1);
        for cube_id in 0..(1u8 << S::DIM) {
            let mut anchor = S::Coords::default();
            for (axis, c) in anchor.as_mut().iter_mut().enumerate() {
                if cube_id & (1u8 << axis) != 0 {
                    *c = h;
                }
            }

            for t in 0..S::NUM_TYPES {
                let elem = SimplexElement::<S>::new(1, t, anchor).unwrap();
                let child_index = elem.child_id().unwrap();
                assert_eq!(elem.parent().unwrap().child(child_index).unwrap(), elem);
            }
        }
    }

    #[test]
    fn child_id_of_every_cube_and_type() {
        check_child_id_coverage::<Triangle>();
        check_child_id_coverage::<Tetrahedron>();
    }

    #[test]
    fn child_id_of_root() {
        assert_eq!(
            Tet::root().child_id(),
            Err(SimplexError::InvalidLevel {
                level: 0,
                op: "parent"
            })
        );
    }

    #[test]
    fn triangle_sibling_closure() {
        check_sibling_closure::<Triangle>(3);
    }

    #[test]
    fn tetrahedron_sibling_closure() {
        check_sibling_closure::<Tetrahedron>(2);
    }

    #[test]
    fn children_are_distinct() {
        for root in roots::<Tetrahedron>() {
            let children = root.children().unwrap();
            for (i, a) in children.iter().enumerate() {
                for b in children.iter().skip(i + 1) {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn ancestors() {
        let mut elem = Tet::root();
        for child_index in [3, 7, 1, 5, 6] {
            elem = elem.child(child_index).unwrap();
        }

        assert_eq!(elem.ancestor(5).unwrap(), elem);
        assert_eq!(elem.ancestor(0).unwrap(), Tet::root());
        assert_eq!(elem.ancestor(3).unwrap(), elem.parent().unwrap().parent().unwrap());

        let chain = elem.ancestors();
        assert_eq!(chain.len(), 5);
        assert_eq!(chain[0], elem.parent().unwrap());
        assert_eq!(*chain.last().unwrap(), Tet::root());
        for (level, ancestor) in (0..5).rev().zip(chain.iter()) {
            assert_eq!(ancestor.level(), level);
        }

        assert!(Tri::root().ancestors().is_empty());
    }

    #[test]
    fn families() {
        let parent = Tri::root().child(2).unwrap();
        let children = parent.children().unwrap();
        assert!(Tri::is_family(&children));

        let mut shuffled = children.clone();
        shuffled.swap(1, 2);
        assert!(!Tri::is_family(&shuffled));
        assert!(!Tri::is_family(&children[..3]));
        assert!(!Tri::is_family(&[]));

        let mut mixed = children.clone();
        mixed[3] = parent.sibling(0).unwrap().child(3).unwrap();
        assert!(!Tri::is_family(&mixed));
    }

    #[test]
    #[should_panic]
    fn root_has_no_parent() {
        Tri::root().parent().unwrap();
    }

    #[test]
    #[should_panic]
    fn root_has_no_siblings() {
        Tet::root().sibling(1).unwrap();
    }

    #[test]
    #[should_panic]
    fn child_index_out_of_range() {
        Tet::root().child(8).unwrap();
    }

    #[test]
    #[should_panic]
    fn ancestor_below_level() {
        Tri::root().child(0).unwrap().ancestor(2).unwrap();
    }

    #[test]
    fn refine_past_max_level() {
        let finest = Tet::new(Tetrahedron::MAX_LEVEL, 2, [1, 1, 1]).unwrap();
        assert_eq!(
            finest.child(0),
            Err(SimplexError::InvalidLevel {
                level: Tetrahedron::MAX_LEVEL,
                op: "child"
            })
        );
        assert!(finest.children().is_err());
        // the finest element can still be coarsened
        assert_eq!(finest.parent().unwrap().level(), Tetrahedron::MAX_LEVEL - 1);
    }

    #[test]
    fn deepest_path() {
        let mut elem = Tri::root();
        for level in 0..Triangle::MAX_LEVEL {
            elem = elem.child((level % 4) as usize).unwrap();
        }
        assert_eq!(elem.level(), Triangle::MAX_LEVEL);
        assert_eq!(elem.cell_len(), 1);
        assert_eq!(elem.ancestor(0).unwrap(), Tri::root());
    }
}
