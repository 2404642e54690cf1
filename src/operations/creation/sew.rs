use std::collections::HashMap;

use tracing::debug;

use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::curve::Line;
use crate::geometry::surface::Plane;
use crate::math::Point3;
use crate::operations::query::collect_wire_points;
use crate::topology::{
    EdgeData, EdgeId, FaceData, FaceId, OrientedEdge, ShellData, ShellId, TopologyStore,
    VertexData, VertexId, WireData,
};

/// Coincidence tolerance used when sewing a planar net into a shell.
pub const DEFAULT_SEW_TOLERANCE: f64 = 1e-6;

/// Stitches independent faces into one shell.
///
/// Boundary points closer than the tolerance are merged into one vertex,
/// and each unordered pair of merged vertices becomes a single shared edge.
/// Every sewn face keeps its input orientation. The input faces are left
/// untouched; the shell is built from fresh entities.
pub struct Sew {
    faces: Vec<FaceId>,
    tolerance: f64,
}

/// One face boundary read out of the source store.
struct Loop {
    points: Vec<Point3>,
    surface: Plane,
}

impl Sew {
    /// Creates a new `Sew` operation with [`DEFAULT_SEW_TOLERANCE`].
    #[must_use]
    pub fn new(faces: Vec<FaceId>) -> Self {
        Self {
            faces,
            tolerance: DEFAULT_SEW_TOLERANCE,
        }
    }

    /// Sets the coincidence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sews faces of `store` into a new shell in the same store.
    ///
    /// # Errors
    ///
    /// See [`Sew::execute_into`].
    pub fn execute(&self, store: &mut TopologyStore) -> Result<ShellId> {
        let loops = self.read_loops(store)?;
        self.build(loops, store)
    }

    /// Sews faces of `source` into a new shell in `target`.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] for an empty face list or a
    /// negative tolerance, and [`GeometryError::Degenerate`] when merging
    /// collapses a boundary edge to a point.
    pub fn execute_into(&self, source: &TopologyStore, target: &mut TopologyStore) -> Result<ShellId> {
        let loops = self.read_loops(source)?;
        self.build(loops, target)
    }

    fn read_loops(&self, store: &TopologyStore) -> Result<Vec<Loop>> {
        if self.faces.is_empty() {
            return Err(OperationError::InvalidInput("cannot sew an empty face list".into()).into());
        }
        if self.tolerance.is_nan() || self.tolerance < 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "sewing tolerance must be non-negative, got {}",
                self.tolerance
            ))
            .into());
        }
        self.faces
            .iter()
            .map(|&fid| {
                let face = store.face(fid)?;
                Ok(Loop {
                    points: collect_wire_points(store, face.outer_wire)?,
                    surface: face.surface.clone(),
                })
            })
            .collect()
    }

    fn build(&self, loops: Vec<Loop>, store: &mut TopologyStore) -> Result<ShellId> {
        let mut merged: Vec<(Point3, VertexId)> = Vec::new();
        let mut edges: HashMap<(VertexId, VertexId), EdgeId> = HashMap::new();
        let mut uses: HashMap<EdgeId, Vec<bool>> = HashMap::new();
        let mut faces = Vec::with_capacity(loops.len());

        for face_loop in loops {
            let ids: Vec<VertexId> = face_loop
                .points
                .iter()
                .map(|p| self.merge_vertex(store, &mut merged, *p))
                .collect();

            let n = ids.len();
            let mut wire_edges = Vec::with_capacity(n);
            for i in 0..n {
                let (a, b) = (ids[i], ids[(i + 1) % n]);
                if a == b {
                    return Err(GeometryError::Degenerate(
                        "sewing collapsed a boundary edge to a point".into(),
                    )
                    .into());
                }
                let key = if a < b { (a, b) } else { (b, a) };
                let edge = if let Some(&edge) = edges.get(&key) {
                    edge
                } else {
                    let (line, length) =
                        Line::through(store.vertex(a)?.point, store.vertex(b)?.point)?;
                    let edge = store.add_edge(EdgeData {
                        start: a,
                        end: b,
                        curve: line,
                        t_start: 0.0,
                        t_end: length,
                    });
                    edges.insert(key, edge);
                    edge
                };
                let forward = store.edge(edge)?.start == a;
                uses.entry(edge).or_default().push(forward);
                wire_edges.push(OrientedEdge::new(edge, forward));
            }

            let wire = store.add_wire(WireData {
                edges: wire_edges,
                is_closed: true,
            });
            faces.push(store.add_face(FaceData {
                surface: face_loop.surface,
                outer_wire: wire,
            }));
        }

        let is_closed = uses
            .values()
            .all(|u| u.len() == 2 && u[0] != u[1]);
        debug!(
            faces = faces.len(),
            vertices = merged.len(),
            edges = edges.len(),
            closed = is_closed,
            "sewed shell"
        );

        Ok(store.add_shell(ShellData { faces, is_closed }))
    }

    fn merge_vertex(
        &self,
        store: &mut TopologyStore,
        merged: &mut Vec<(Point3, VertexId)>,
        point: Point3,
    ) -> VertexId {
        if let Some((_, id)) = merged
            .iter()
            .find(|(q, _)| (q - point).norm() <= self.tolerance)
        {
            return *id;
        }
        let id = store.add_vertex(VertexData::new(point));
        merged.push((point, id));
        id
    }
}
