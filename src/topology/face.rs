use crate::geometry::surface::Plane;

use super::wire::WireId;

slotmap::new_key_type! {
    /// Unique identifier for a face in the topology store.
    pub struct FaceId;
}

/// Data associated with a topological face.
///
/// A face is a bounded region of a plane enclosed by a single closed wire.
/// The face normal is the plane normal; the wire runs counter-clockwise
/// when viewed from the side the normal points to.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// The plane on which this face lies.
    pub surface: Plane,
    /// The boundary wire.
    pub outer_wire: WireId,
}
