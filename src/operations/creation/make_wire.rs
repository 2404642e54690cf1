use crate::error::{GeometryError, Result};
use crate::geometry::curve::Line;
use crate::math::{Point3, TOLERANCE};
use crate::topology::{EdgeData, OrientedEdge, TopologyStore, VertexData, WireData, WireId};

/// Creates a wire of line edges from a sequence of 3D points.
pub struct MakeWire {
    points: Vec<Point3>,
    close: bool,
}

impl MakeWire {
    /// Creates a new `MakeWire` operation.
    ///
    /// With `close` set, an edge from the last point back to the first is
    /// added. A closing point that repeats the first one is dropped.
    #[must_use]
    pub fn new(points: Vec<Point3>, close: bool) -> Self {
        Self { points, close }
    }

    /// Executes the operation, creating the wire in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] for fewer than two distinct
    /// points, or [`GeometryError::ZeroVector`] if two consecutive points
    /// coincide.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<WireId> {
        let mut points = self.points.clone();
        if self.close && points.len() > 1 {
            if let (Some(first), Some(last)) = (points.first(), points.last()) {
                if (last - first).norm() < TOLERANCE {
                    points.pop();
                }
            }
        }
        if points.len() < 2 {
            return Err(GeometryError::Degenerate(format!(
                "a wire needs at least 2 points, got {}",
                points.len()
            ))
            .into());
        }

        let segment_count = if self.close {
            points.len()
        } else {
            points.len() - 1
        };

        // Validate every segment before touching the store.
        let mut lines = Vec::with_capacity(segment_count);
        for i in 0..segment_count {
            let start = points[i];
            let end = points[(i + 1) % points.len()];
            lines.push(Line::through(start, end)?);
        }

        let vertices: Vec<_> = points
            .iter()
            .map(|p| store.add_vertex(VertexData::new(*p)))
            .collect();

        let mut edges = Vec::with_capacity(segment_count);
        for (i, (line, length)) in lines.into_iter().enumerate() {
            let edge = store.add_edge(EdgeData {
                start: vertices[i],
                end: vertices[(i + 1) % vertices.len()],
                curve: line,
                t_start: 0.0,
                t_end: length,
            });
            edges.push(OrientedEdge::new(edge, true));
        }

        Ok(store.add_wire(WireData {
            edges,
            is_closed: self.close,
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn open_wire_has_n_minus_one_edges() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)], false)
            .execute(&mut store)
            .unwrap();
        let data = store.wire(wire).unwrap();
        assert_eq!(data.edges.len(), 2);
        assert!(!data.is_closed);
    }

    #[test]
    fn closed_wire_drops_repeated_closing_point() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(0.0, 0.0, 0.0)],
            true,
        )
        .execute(&mut store)
        .unwrap();
        assert_eq!(store.wire(wire).unwrap().edges.len(), 3);
        assert_eq!(store.vertex_count(), 3);
    }

    #[test]
    fn repeated_point_fails_without_side_effects() {
        let mut store = TopologyStore::new();
        let result = MakeWire::new(vec![p(0.0, 0.0, 0.0), p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)], false)
            .execute(&mut store);
        assert!(result.is_err());
        assert_eq!(store.vertex_count(), 0);
    }

    #[test]
    fn single_point_fails() {
        let mut store = TopologyStore::new();
        assert!(MakeWire::new(vec![p(0.0, 0.0, 0.0)], false)
            .execute(&mut store)
            .is_err());
    }
}
