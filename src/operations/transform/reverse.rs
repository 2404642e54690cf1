use crate::error::Result;
use crate::operations::query::Explore;
use crate::shape::{Shape, ShapeKind};
use crate::topology::TopologyStore;

use super::general::refit_face_planes;

/// Flips the orientation of a shape in place.
///
/// Every wire under the shape is traversed the other way round, so face
/// normals point to the opposite side. Vertex positions do not change.
pub struct Reverse {
    shape: Shape,
}

impl Reverse {
    /// Creates a new `Reverse` operation.
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        Self { shape }
    }

    /// Executes the reversal.
    ///
    /// # Errors
    ///
    /// Returns an error if an entity of the shape is missing.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<()> {
        for wire in Explore::new(self.shape, ShapeKind::Wire).execute(store)? {
            if let Shape::Wire(id) = wire {
                store.wire_mut(id)?.reverse();
            }
        }
        refit_face_planes(store, self.shape)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point3, Vector3};
    use crate::operations::creation::MakePolygon;
    use crate::operations::query::FaceNormal;

    #[test]
    fn reversed_face_points_down() {
        let mut store = TopologyStore::new();
        let face = MakePolygon::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ])
        .execute(&mut store)
        .unwrap();

        Reverse::new(Shape::Face(face)).execute(&mut store).unwrap();
        let normal = FaceNormal::new(face).execute(&store).unwrap();
        assert!((normal + Vector3::z()).norm() < 1e-12);
    }
}
