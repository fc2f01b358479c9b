use super::{element::SimplexElement, Simplex, SimplexError};

impl<S: Simplex> SimplexElement<S> {
    /// Location of one of this element's vertices in the unit cube spanned by the root
    pub fn reference_coords(&self, vertex: usize) -> Result<S::Point, SimplexError> {
        let coords = self.vertex(vertex)?;
        let root_len = f64::from(S::root_len());

        Ok(S::point_from_fn(|axis| {
            f64::from(coords.as_ref()[axis]) / root_len
        }))
    }

    /// Location of one of this element's vertices after mapping the root onto the cube at `origin` with side length `extent`
    pub fn map_to_cell(
        &self,
        vertex: usize,
        origin: &S::Point,
        extent: f64,
    ) -> Result<S::Point, SimplexError> {
        let reference = self.reference_coords(vertex)?;
        Ok(S::point_from_fn(|axis| origin[axis] + extent * reference[axis]))
    }

    /// Center of mass of this element in the unit cube spanned by the root
    pub fn reference_centroid(&self) -> S::Point {
        let vertices = self.all_vertices();
        let scale = f64::from(S::root_len()) * S::NUM_VERTICES as f64;

        S::point_from_fn(|axis| {
            let sum: f64 = vertices
                .as_ref()
                .iter()
                .map(|v| f64::from(v.as_ref()[axis]))
                .sum();
            sum / scale
        })
    }
}
