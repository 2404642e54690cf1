//! Planar nets: flat polygon faces joined by hinges, foldable into a shell.
//!
//! A [`PlanarNet`] owns the face geometry in its own [`TopologyStore`] and
//! keeps the hinge graph as a plain list indexed by node number. The sewn
//! shell lives in a second store that is rebuilt from scratch whenever the
//! net changes shape.

mod fold;
mod grow;
mod merge;
mod options;


use std::fmt;

pub use merge::MergeRejected;
pub use options::NetOptions;

use crate::error::{NetError, Result};
use crate::math::{Point2, Point3, Vector3};
use crate::operations::creation::Sew;
use crate::operations::query::{Center, FaceNormal, FacePoints};
use crate::shape::Shape;
use crate::topology::{FaceId, ShellId, TopologyStore};

/// Fold state of a whole net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FoldState {
    #[default]
    Unfolded,
    Folded,
}

impl fmt::Display for FoldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unfolded => "unfolded",
            Self::Folded => "folded",
        })
    }
}

/// One planar face of a net with its cached placement.
#[derive(Debug, Clone, Copy)]
pub struct FaceNode {
    /// The face in the net's store.
    pub face: FaceId,
    /// Unit normal of the face.
    pub normal: Vector3,
    /// Area-weighted centroid of the face.
    pub centroid: Point3,
    /// Layout position: the centroid projected onto XY.
    pub position: Point2,
}

impl FaceNode {
    fn measure(store: &TopologyStore, face: FaceId) -> Result<Self> {
        let centroid = Center::new(Shape::Face(face)).execute(store)?;
        Ok(Self {
            face,
            normal: FaceNormal::new(face).execute(store)?,
            centroid,
            position: Point2::new(centroid.x, centroid.y),
        })
    }
}

/// A fold relation between two nodes.
///
/// The axis is never stored: it is read from boundary edge `edge` of node
/// `from` each time the hinge is folded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hinge {
    /// Node whose boundary edge carries the hinge.
    pub from: usize,
    /// Node attached along that edge.
    pub to: usize,
    /// Boundary edge index on `from`.
    pub edge: usize,
    /// Dihedral fold angle in radians.
    pub angle: f64,
}

/// Manifold report produced by a fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidityReport {
    /// Whether the kernel accepts the folded shell as a closed solid.
    pub is_closed_solid: bool,
    /// Whether the closed solid's faces point outward (positive signed
    /// volume). Always false for an open shell.
    pub is_outward: bool,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub face_count: usize,
}

impl ValidityReport {
    /// `V - E + F`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn euler_characteristic(&self) -> i64 {
        self.vertex_count as i64 - self.edge_count as i64 + self.face_count as i64
    }
}

/// Result of a fold or unfold pass.
#[derive(Debug, Clone, Copy)]
pub struct FoldOutcome {
    /// A solid when folding closed the net, the open shell otherwise.
    /// Lives in [`PlanarNet::assembly`].
    pub shape: Shape,
    /// Present after folding, absent after unfolding.
    pub report: Option<ValidityReport>,
}

/// Receives the sewn shell of a net for display.
pub trait Viewer {
    /// Shows `shape`, whose entities live in `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the viewer cannot show the shape.
    fn show(&mut self, store: &TopologyStore, shape: Shape) -> Result<()>;
}

/// A graph of planar faces joined by hinges.
#[derive(Debug, Clone)]
pub struct PlanarNet {
    store: TopologyStore,
    nodes: Vec<FaceNode>,
    hinges: Vec<Hinge>,
    state: FoldState,
    assembly: TopologyStore,
    shell: ShellId,
    options: NetOptions,
}

impl PlanarNet {
    /// Number of face nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of hinges.
    #[must_use]
    pub fn hinge_count(&self) -> usize {
        self.hinges.len()
    }

    /// Hinges in creation order.
    #[must_use]
    pub fn hinges(&self) -> &[Hinge] {
        &self.hinges
    }

    /// Face nodes by index.
    #[must_use]
    pub fn nodes(&self) -> &[FaceNode] {
        &self.nodes
    }

    #[must_use]
    pub fn node(&self, index: usize) -> Option<&FaceNode> {
        self.nodes.get(index)
    }

    /// Layout position of a node.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<Point2> {
        self.nodes.get(index).map(|node| node.position)
    }

    /// Layout positions of all nodes, by index.
    #[must_use]
    pub fn positions(&self) -> Vec<Point2> {
        self.nodes.iter().map(|node| node.position).collect()
    }

    #[must_use]
    pub fn fold_state(&self) -> FoldState {
        self.state
    }

    #[must_use]
    pub fn is_folded(&self) -> bool {
        self.state == FoldState::Folded
    }

    #[must_use]
    pub fn options(&self) -> &NetOptions {
        &self.options
    }

    /// Store holding the individual faces.
    #[must_use]
    pub fn store(&self) -> &TopologyStore {
        &self.store
    }

    /// Store holding the sewn shell and, after a fold, its solid.
    #[must_use]
    pub fn assembly(&self) -> &TopologyStore {
        &self.assembly
    }

    /// The sewn shell, in [`PlanarNet::assembly`].
    #[must_use]
    pub fn shell(&self) -> ShellId {
        self.shell
    }

    /// Ordered boundary vertices of a face; edge `k` runs from point `k`
    /// to point `k + 1`.
    ///
    /// # Errors
    ///
    /// Returns [`NetError::FaceIndexOutOfRange`] for an unknown face.
    pub fn face_points(&self, face: usize) -> Result<Vec<Point3>> {
        FacePoints::new(self.face_id(face)?).execute(&self.store)
    }

    /// Length of boundary edge `edge` of face `face`.
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of range.
    pub fn edge_length(&self, face: usize, edge: usize) -> Result<f64> {
        let (a, b) = self.edge_points(face, edge)?;
        Ok((b - a).norm())
    }

    /// Hands the current shell to a viewer.
    ///
    /// # Errors
    ///
    /// Propagates the viewer's error.
    pub fn display(&self, viewer: &mut impl Viewer) -> Result<()> {
        viewer.show(&self.assembly, Shape::Shell(self.shell))
    }

    fn face_id(&self, face: usize) -> Result<FaceId> {
        self.nodes
            .get(face)
            .map(|node| node.face)
            .ok_or_else(|| {
                NetError::FaceIndexOutOfRange {
                    face,
                    count: self.nodes.len(),
                }
                .into()
            })
    }

    /// Endpoints of a boundary edge, read from the live face geometry.
    fn edge_points(&self, face: usize, edge: usize) -> Result<(Point3, Point3)> {
        hinge_edge(&self.store, self.face_id(face)?, face, edge)
    }

    fn face_ids(&self) -> Vec<FaceId> {
        self.nodes.iter().map(|node| node.face).collect()
    }
}

/// Sews the given faces of `store` into a fresh assembly store.
fn sew_shell(
    options: &NetOptions,
    store: &TopologyStore,
    faces: Vec<FaceId>,
) -> Result<(TopologyStore, ShellId)> {
    let mut assembly = TopologyStore::new();
    let shell = Sew::new(faces)
        .with_tolerance(options.sew_tolerance)
        .execute_into(store, &mut assembly)?;
    Ok((assembly, shell))
}

/// Endpoints of boundary edge `edge` of `face_id` (node number `face`).
fn hinge_edge(
    store: &TopologyStore,
    face_id: FaceId,
    face: usize,
    edge: usize,
) -> Result<(Point3, Point3)> {
    let points = FacePoints::new(face_id).execute(store)?;
    let count = points.len();
    if edge >= count {
        return Err(NetError::EdgeIndexOutOfRange { face, edge, count }.into());
    }
    Ok((points[edge], points[(edge + 1) % count]))
}

impl fmt::Display for PlanarNet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "PlanarNet: {} faces, {} hinges, {}",
            self.nodes.len(),
            self.hinges.len(),
            self.state
        )?;
        for (index, node) in self.nodes.iter().enumerate() {
            write!(f, "  face {index}: ")?;
            match FacePoints::new(node.face).execute(&self.store) {
                Ok(points) => write!(f, "{} sides", points.len())?,
                Err(err) => write!(f, "<missing: {err}>")?,
            }
            writeln!(f, " at ({:.4}, {:.4})", node.position.x, node.position.y)?;
        }
        Ok(())
    }
}
