use crate::error::Result;
use crate::math::polygon::polygon_area;
use crate::shape::{Capability, Shape, ShapeKind};
use crate::topology::TopologyStore;

use super::{Explore, FacePoints};

/// Computes the total face area of a face, shell or solid.
///
/// Faces are planar polygons, so the result is exact up to rounding.
pub struct Area {
    shape: Shape,
}

impl Area {
    /// Creates a new `Area` query.
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        Self { shape }
    }

    /// Executes the query, returning the total area.
    ///
    /// # Errors
    ///
    /// Returns an error for vertices, edges and wires, or if an entity is
    /// missing.
    pub fn execute(&self, store: &TopologyStore) -> Result<f64> {
        self.shape.require(Capability::Area, "area")?;
        let mut total = 0.0;
        for face in Explore::new(self.shape, ShapeKind::Face).execute(store)? {
            if let Shape::Face(id) = face {
                total += polygon_area(&FacePoints::new(id).execute(store)?);
            }
        }
        Ok(total)
    }
}
