use std::collections::HashSet;

use slotmap::KeyData;

use crate::error::Result;
use crate::shape::{Shape, ShapeKind};
use crate::topology::TopologyStore;

/// Enumerates the sub-shapes of one kind contained in a shape.
///
/// Results come in first-visit order (faces in shell order, edges in wire
/// order, a wire's vertices in traversal order) and each entity appears
/// once, however many parents share it. Asking for the shape's own kind
/// yields the shape itself; asking for a higher kind yields nothing.
pub struct Explore {
    shape: Shape,
    kind: ShapeKind,
}

impl Explore {
    /// Creates a new `Explore` query.
    #[must_use]
    pub fn new(shape: Shape, kind: ShapeKind) -> Self {
        Self { shape, kind }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if any referenced entity is missing from the store.
    pub fn execute(&self, store: &TopologyStore) -> Result<Vec<Shape>> {
        let mut seen = HashSet::new();
        let mut found: Vec<KeyData> = Vec::new();
        self.visit(store, self.shape, &mut seen, &mut found)?;
        Ok(found
            .into_iter()
            .map(|key| Shape::from_raw(self.kind, key))
            .collect())
    }

    /// Number of distinct sub-shapes of the requested kind.
    ///
    /// # Errors
    ///
    /// Returns an error if any referenced entity is missing from the store.
    pub fn count(&self, store: &TopologyStore) -> Result<usize> {
        Ok(self.execute(store)?.len())
    }

    fn visit(
        &self,
        store: &TopologyStore,
        shape: Shape,
        seen: &mut HashSet<KeyData>,
        found: &mut Vec<KeyData>,
    ) -> Result<()> {
        if shape.kind() == self.kind {
            if seen.insert(shape.raw()) {
                found.push(shape.raw());
            }
            return Ok(());
        }
        if shape.kind() < self.kind {
            return Ok(());
        }
        match shape {
            Shape::Solid(id) => {
                let shell = store.solid(id)?.outer_shell;
                self.visit(store, Shape::Shell(shell), seen, found)?;
            }
            Shape::Shell(id) => {
                for &face in &store.shell(id)?.faces {
                    self.visit(store, Shape::Face(face), seen, found)?;
                }
            }
            Shape::Face(id) => {
                let wire = store.face(id)?.outer_wire;
                self.visit(store, Shape::Wire(wire), seen, found)?;
            }
            Shape::Wire(id) => {
                for oe in &store.wire(id)?.edges {
                    if self.kind == ShapeKind::Vertex {
                        // Traversal order: the vertex each oriented edge leaves from,
                        // plus the far end of an open wire's last edge.
                        let edge = store.edge(oe.edge)?;
                        let (from, to) = if oe.forward {
                            (edge.start, edge.end)
                        } else {
                            (edge.end, edge.start)
                        };
                        self.visit(store, Shape::Vertex(from), seen, found)?;
                        self.visit(store, Shape::Vertex(to), seen, found)?;
                    } else {
                        self.visit(store, Shape::Edge(oe.edge), seen, found)?;
                    }
                }
            }
            Shape::Edge(id) => {
                let edge = store.edge(id)?;
                self.visit(store, Shape::Vertex(edge.start), seen, found)?;
                self.visit(store, Shape::Vertex(edge.end), seen, found)?;
            }
            Shape::Vertex(_) => {}
        }
        Ok(())
    }
}
