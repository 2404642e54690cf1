use std::collections::VecDeque;

use tracing::{info, warn};

use crate::error::{NetError, Result};
use crate::operations::creation::MakeSolid;
use crate::operations::query::{Explore, IsValid, Volume};
use crate::operations::transform::Rotate;
use crate::shape::{Shape, ShapeKind};
use crate::topology::{ShellId, TopologyStore};

use super::{hinge_edge, sew_shell, FaceNode, FoldOutcome, FoldState, PlanarNet, ValidityReport};

/// Per-node list of `(hinge index, neighbour)` pairs.
type Adjacency = Vec<Vec<(usize, usize)>>;

impl PlanarNet {
    /// Folds every hinge by its stored angle, then sews the faces and checks
    /// whether they close into a solid.
    ///
    /// Folding is relative to the current pose: folding twice applies every
    /// rotation twice.
    ///
    /// # Errors
    ///
    /// Returns [`NetError::NonTreeTopology`] if the hinge graph has a cycle,
    /// or a kernel error if a face cannot be moved or sewn. The net is left
    /// unchanged on any error. An open or non-manifold result is not an
    /// error; it is reported in [`FoldOutcome::report`].
    pub fn fold(&mut self) -> Result<FoldOutcome> {
        self.run(false)
    }

    /// Rotates every hinge back by its stored angle and re-sews the faces.
    ///
    /// # Errors
    ///
    /// As for [`PlanarNet::fold`].
    pub fn unfold(&mut self) -> Result<FoldOutcome> {
        self.run(true)
    }

    fn run(&mut self, reverse: bool) -> Result<FoldOutcome> {
        let adjacency = self.adjacency();
        self.check_forest(&adjacency)?;

        let mut store = self.store.clone();
        for (index, hinge) in self.hinges.iter().enumerate() {
            let angle = if reverse { -hinge.angle } else { hinge.angle };
            let (a, b) = hinge_edge(&store, self.nodes[hinge.from].face, hinge.from, hinge.edge)?;
            let pivot = a + (b - a) * 0.5;
            for node in downstream(&adjacency, index, hinge.to) {
                Rotate::new(Shape::Face(self.nodes[node].face), pivot, b - a, angle)
                    .execute(&mut store)?;
            }
        }

        let nodes = self
            .nodes
            .iter()
            .map(|node| FaceNode::measure(&store, node.face))
            .collect::<Result<Vec<_>>>()?;
        let (mut assembly, shell) = sew_shell(&self.options, &store, self.face_ids())?;

        let (shape, report, state) = if reverse {
            (Shape::Shell(shell), None, FoldState::Unfolded)
        } else {
            let (shape, report) = self.close(&mut assembly, shell)?;
            (shape, Some(report), FoldState::Folded)
        };

        self.store = store;
        self.nodes = nodes;
        self.assembly = assembly;
        self.shell = shell;
        self.state = state;
        Ok(FoldOutcome { shape, report })
    }

    /// Wraps the shell in a solid and reports on its manifoldness. The
    /// solid is returned only when the kernel accepts it.
    fn close(&self, assembly: &mut TopologyStore, shell: ShellId) -> Result<(Shape, ValidityReport)> {
        let solid = MakeSolid::new(shell).execute(assembly)?;
        let is_closed_solid = IsValid::new(solid).execute(assembly);
        let signed_volume = if is_closed_solid {
            Volume::new(solid).signed(assembly)?
        } else {
            0.0
        };
        let count = |kind| Explore::new(Shape::Solid(solid), kind).count(assembly);
        let report = ValidityReport {
            is_closed_solid,
            is_outward: signed_volume > 0.0,
            vertex_count: count(ShapeKind::Vertex)?,
            edge_count: count(ShapeKind::Edge)?,
            face_count: count(ShapeKind::Face)?,
        };
        let euler = report.euler_characteristic();

        if is_closed_solid {
            info!(
                closed = true,
                vertices = report.vertex_count,
                edges = report.edge_count,
                faces = report.face_count,
                euler,
                "folded net closes into a solid"
            );
            if !report.is_outward {
                warn!(
                    volume = signed_volume,
                    "closed fold is inside out; hinge angles may have the wrong sign"
                );
            }
            if euler != self.options.expected_euler {
                warn!(
                    euler,
                    expected = self.options.expected_euler,
                    "closed fold has an unexpected Euler characteristic"
                );
            }
            Ok((Shape::Solid(solid), report))
        } else {
            warn!(
                closed = false,
                vertices = report.vertex_count,
                edges = report.edge_count,
                faces = report.face_count,
                "folded net is an open shell"
            );
            Ok((Shape::Shell(shell), report))
        }
    }

    fn adjacency(&self) -> Adjacency {
        let mut adjacency = vec![Vec::new(); self.nodes.len()];
        for (index, hinge) in self.hinges.iter().enumerate() {
            adjacency[hinge.from].push((index, hinge.to));
            adjacency[hinge.to].push((index, hinge.from));
        }
        adjacency
    }

    /// Every hinge must join two components: `hinges == nodes - components`.
    fn check_forest(&self, adjacency: &Adjacency) -> Result<()> {
        let mut seen = vec![false; self.nodes.len()];
        let mut components = 0;
        for start in 0..self.nodes.len() {
            if seen[start] {
                continue;
            }
            components += 1;
            seen[start] = true;
            let mut queue = VecDeque::from([start]);
            while let Some(node) = queue.pop_front() {
                for &(_, next) in &adjacency[node] {
                    if !seen[next] {
                        seen[next] = true;
                        queue.push_back(next);
                    }
                }
            }
        }

        if self.hinges.len() + components == self.nodes.len() {
            Ok(())
        } else {
            Err(NetError::NonTreeTopology {
                hinges: self.hinges.len(),
                faces: self.nodes.len(),
                components,
            }
            .into())
        }
    }
}

/// Nodes reachable from `start` without crossing hinge `cut`: the side of
/// the cut that moves.
fn downstream(adjacency: &Adjacency, cut: usize, start: usize) -> Vec<usize> {
    let mut seen = vec![false; adjacency.len()];
    seen[start] = true;
    let mut queue = VecDeque::from([start]);
    let mut reached = Vec::new();
    while let Some(node) = queue.pop_front() {
        reached.push(node);
        for &(hinge, next) in &adjacency[node] {
            if hinge != cut && !seen[next] {
                seen[next] = true;
                queue.push_back(next);
            }
        }
    }
    reached
}
