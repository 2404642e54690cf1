use crate::error::Result;
use crate::math::Point3;
use crate::topology::{FaceId, TopologyStore, WireId};

/// Collects vertex positions from a wire in traversal order.
///
/// For a closed wire the first point is not repeated at the end.
///
/// # Errors
///
/// Returns an error if the wire or any of its edges or vertices is missing.
pub fn collect_wire_points(store: &TopologyStore, wire_id: WireId) -> Result<Vec<Point3>> {
    let wire = store.wire(wire_id)?;
    let mut points = Vec::with_capacity(wire.edges.len() + 1);

    for oe in &wire.edges {
        let edge = store.edge(oe.edge)?;
        let vertex_id = if oe.forward { edge.start } else { edge.end };
        points.push(store.vertex(vertex_id)?.point);
    }
    if !wire.is_closed {
        if let Some(last) = wire.edges.last() {
            let edge = store.edge(last.edge)?;
            let vertex_id = if last.forward { edge.end } else { edge.start };
            points.push(store.vertex(vertex_id)?.point);
        }
    }

    Ok(points)
}

/// Returns the ordered boundary vertices of a face.
///
/// Boundary edge `k` runs from point `k` to point `(k + 1) % n`.
pub struct FacePoints {
    face: FaceId,
}

impl FacePoints {
    /// Creates a new `FacePoints` query.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the face or its boundary is missing.
    pub fn execute(&self, store: &TopologyStore) -> Result<Vec<Point3>> {
        collect_wire_points(store, store.face(self.face)?.outer_wire)
    }
}
