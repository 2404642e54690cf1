use crate::error::Result;
use crate::math::Vector3;
use crate::topology::{FaceId, TopologyStore};

/// Returns the outward unit normal of a planar face.
pub struct FaceNormal {
    face: FaceId,
}

impl FaceNormal {
    /// Creates a new `FaceNormal` query.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is missing.
    pub fn execute(&self, store: &TopologyStore) -> Result<Vector3> {
        Ok(*store.face(self.face)?.surface.plane_normal())
    }
}
