use crate::error::Result;
use crate::math::Point3;
use crate::topology::{FaceId, TopologyStore};

use super::{MakeFace, MakeWire};

/// Creates a planar polygonal face from an ordered loop of points.
///
/// The loop is closed implicitly; a last point repeating the first is
/// accepted and dropped.
pub struct MakePolygon {
    points: Vec<Point3>,
}

impl MakePolygon {
    /// Creates a new `MakePolygon` operation.
    #[must_use]
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    /// Executes the operation, creating the face in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if the points do not describe a simple planar
    /// polygon with at least three vertices.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<FaceId> {
        let wire = MakeWire::new(self.points.clone(), true).execute(store)?;
        MakeFace::new(wire).execute(store)
    }
}
