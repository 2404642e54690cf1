use std::collections::HashMap;

use crate::error::Result;
use crate::shape::Shape;
use crate::topology::{
    EdgeData, EdgeId, FaceData, FaceId, OrientedEdge, ShellData, ShellId, SolidData, SolidId,
    TopologyStore, VertexId, WireData, WireId,
};

/// Deep-copies a shape, giving the copy its own vertices, edges and wires.
///
/// Sharing inside the shape is preserved: an edge used by two faces of a
/// shell is copied once and used by both copied faces.
pub struct CopyShape {
    shape: Shape,
}

impl CopyShape {
    /// Creates a new `CopyShape` operation.
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        Self { shape }
    }

    /// Copies the shape within the same store.
    ///
    /// # Errors
    ///
    /// Returns an error if an entity of the shape is missing.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<Shape> {
        let snapshot = store.clone();
        self.execute_into(&snapshot, store)
    }

    /// Copies the shape from `source` into `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if an entity of the shape is missing from `source`.
    pub fn execute_into(&self, source: &TopologyStore, target: &mut TopologyStore) -> Result<Shape> {
        let mut copier = Copier {
            source,
            target,
            vertices: HashMap::new(),
            edges: HashMap::new(),
        };
        Ok(match self.shape {
            Shape::Vertex(id) => Shape::Vertex(copier.vertex(id)?),
            Shape::Edge(id) => Shape::Edge(copier.edge(id)?),
            Shape::Wire(id) => Shape::Wire(copier.wire(id)?),
            Shape::Face(id) => Shape::Face(copier.face(id)?),
            Shape::Shell(id) => Shape::Shell(copier.shell(id)?),
            Shape::Solid(id) => Shape::Solid(copier.solid(id)?),
        })
    }
}

struct Copier<'a> {
    source: &'a TopologyStore,
    target: &'a mut TopologyStore,
    vertices: HashMap<VertexId, VertexId>,
    edges: HashMap<EdgeId, EdgeId>,
}

impl Copier<'_> {
    fn vertex(&mut self, id: VertexId) -> Result<VertexId> {
        if let Some(&copied) = self.vertices.get(&id) {
            return Ok(copied);
        }
        let copied = self.target.add_vertex(self.source.vertex(id)?.clone());
        self.vertices.insert(id, copied);
        Ok(copied)
    }

    fn edge(&mut self, id: EdgeId) -> Result<EdgeId> {
        if let Some(&copied) = self.edges.get(&id) {
            return Ok(copied);
        }
        let data = self.source.edge(id)?;
        let copied = EdgeData {
            start: self.vertex(data.start)?,
            end: self.vertex(data.end)?,
            curve: data.curve.clone(),
            t_start: data.t_start,
            t_end: data.t_end,
        };
        let copied = self.target.add_edge(copied);
        self.edges.insert(id, copied);
        Ok(copied)
    }

    fn wire(&mut self, id: WireId) -> Result<WireId> {
        let data = self.source.wire(id)?;
        let edges = data
            .edges
            .iter()
            .map(|oe| Ok(OrientedEdge::new(self.edge(oe.edge)?, oe.forward)))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.target.add_wire(WireData {
            edges,
            is_closed: data.is_closed,
        }))
    }

    fn face(&mut self, id: FaceId) -> Result<FaceId> {
        let data = self.source.face(id)?;
        let outer_wire = self.wire(data.outer_wire)?;
        Ok(self.target.add_face(FaceData {
            surface: data.surface.clone(),
            outer_wire,
        }))
    }

    fn shell(&mut self, id: ShellId) -> Result<ShellId> {
        let data = self.source.shell(id)?;
        let faces = data
            .faces
            .iter()
            .map(|&face| self.face(face))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.target.add_shell(ShellData {
            faces,
            is_closed: data.is_closed,
        }))
    }

    fn solid(&mut self, id: SolidId) -> Result<SolidId> {
        let outer_shell = self.shell(self.source.solid(id)?.outer_shell)?;
        Ok(self.target.add_solid(SolidData { outer_shell }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::{MakePolygon, Sew};
    use crate::operations::query::FacePoints;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn copy_is_independent() {
        let mut store = TopologyStore::new();
        let face = MakePolygon::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)])
            .execute(&mut store)
            .unwrap();
        let copy = CopyShape::new(Shape::Face(face)).execute(&mut store).unwrap();
        let Shape::Face(copy) = copy else {
            panic!("expected a face, got {copy:?}");
        };
        assert_ne!(copy, face);
        assert_eq!(store.vertex_count(), 6);

        let wire = store.face(copy).unwrap().outer_wire;
        let edge = store.wire(wire).unwrap().edges[0].edge;
        let start = store.edge(edge).unwrap().start;
        store.vertex_mut(start).unwrap().point.z = 4.0;
        let original = FacePoints::new(face).execute(&store).unwrap();
        assert!(original.iter().all(|q| q.z.abs() < 1e-12));
    }

    #[test]
    fn shared_edges_stay_shared() {
        let mut store = TopologyStore::new();
        let a = MakePolygon::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)])
            .execute(&mut store)
            .unwrap();
        let b = MakePolygon::new(vec![p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(0.0, 1.0, 0.0)])
            .execute(&mut store)
            .unwrap();
        let mut sewn = TopologyStore::new();
        let shell = Sew::new(vec![a, b]).execute_into(&store, &mut sewn).unwrap();

        let mut target = TopologyStore::new();
        CopyShape::new(Shape::Shell(shell))
            .execute_into(&sewn, &mut target)
            .unwrap();
        assert_eq!(target.vertex_count(), 4);
        assert_eq!(target.edge_count(), 5);
        assert_eq!(target.face_count(), 2);
    }
}
