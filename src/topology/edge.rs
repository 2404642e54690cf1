use crate::geometry::curve::Line;

use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the topology store.
    pub struct EdgeId;
}

/// Data associated with a topological edge.
///
/// An edge connects two vertices along a straight line. The line is
/// parameterized by arc length from the start vertex.
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// Start vertex of the edge.
    pub start: VertexId,
    /// End vertex of the edge.
    pub end: VertexId,
    /// The supporting line of this edge.
    pub curve: Line,
    /// Parameter on the line corresponding to the start vertex.
    pub t_start: f64,
    /// Parameter on the line corresponding to the end vertex.
    pub t_end: f64,
}
