use crate::error::Result;
use crate::shape::{Capability, Shape, ShapeKind};
use crate::topology::TopologyStore;

use super::Explore;

/// Computes the total curve length of an edge or wire.
pub struct Length {
    shape: Shape,
}

impl Length {
    /// Creates a new `Length` query.
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        Self { shape }
    }

    /// Executes the query, returning the length.
    ///
    /// Edges are parameterized by arc length, so each contributes
    /// `|t_end - t_start|`.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is not an edge or wire, or an entity
    /// is missing.
    pub fn execute(&self, store: &TopologyStore) -> Result<f64> {
        self.shape.require(Capability::Length, "length")?;
        let mut total = 0.0;
        for edge in Explore::new(self.shape, ShapeKind::Edge).execute(store)? {
            if let Shape::Edge(id) = edge {
                let data = store.edge(id)?;
                total += (data.t_end - data.t_start).abs();
            }
        }
        Ok(total)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::MakeWire;

    #[test]
    fn line_length_3_4_5() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 4.0, 0.0)],
            false,
        )
        .execute(&mut store)
        .unwrap();
        let edge_id = store.wire(wire).unwrap().edges[0].edge;

        let len = Length::new(Shape::Edge(edge_id)).execute(&store).unwrap();
        assert!((len - 5.0).abs() < 1e-10);
    }

    #[test]
    fn closed_wire_perimeter() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(2.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            true,
        )
        .execute(&mut store)
        .unwrap();

        let len = Length::new(Shape::Wire(wire)).execute(&store).unwrap();
        assert!((len - 6.0).abs() < 1e-10);
    }
}
