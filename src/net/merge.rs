use thiserror::Error;
use tracing::{debug, warn};

use crate::error::{NetError, NetfoldError, OperationError, Result};
use crate::operations::transform::CopyShape;
use crate::shape::Shape;

use super::{sew_shell, FaceNode, Hinge, PlanarNet};

/// A refused merge. Both nets come back exactly as they went in.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct MergeRejected {
    /// The net `merge` was called on.
    pub left: Box<PlanarNet>,
    /// The net passed to `merge`.
    pub right: Box<PlanarNet>,
    source: NetfoldError,
}

impl MergeRejected {
    fn new(left: PlanarNet, right: PlanarNet, source: NetfoldError) -> Self {
        Self {
            left: Box::new(left),
            right: Box::new(right),
            source,
        }
    }

    /// Why the merge was refused.
    #[must_use]
    pub fn reason(&self) -> &NetfoldError {
        &self.source
    }

    /// Hands back both nets, `(left, right)`.
    #[must_use]
    pub fn into_nets(self) -> (PlanarNet, PlanarNet) {
        (*self.left, *self.right)
    }
}

impl From<MergeRejected> for NetfoldError {
    fn from(rejected: MergeRejected) -> Self {
        rejected.source
    }
}

impl PlanarNet {
    /// Joins two nets into one, consuming both.
    ///
    /// `other`'s nodes are renumbered after this net's nodes and keep their
    /// faces, hinges and positions; node 0 of this net stays node 0. No
    /// hinge is added between the two parts, so the result is a forest
    /// until a later operation connects them.
    ///
    /// # Errors
    ///
    /// Returns [`MergeRejected`] carrying [`NetError::FoldStateMismatch`]
    /// when the nets are in different fold states, or the kernel error if
    /// the combined shell cannot be sewn. Both nets are handed back
    /// untouched.
    pub fn merge(self, other: Self) -> std::result::Result<Self, MergeRejected> {
        if self.state != other.state {
            warn!(left = %self.state, right = %other.state, "refusing to merge nets");
            let source = NetError::FoldStateMismatch {
                left: self.state,
                right: other.state,
            }
            .into();
            return Err(MergeRejected::new(self, other, source));
        }
        match self.compose(&other) {
            Ok(merged) => Ok(merged),
            Err(source) => Err(MergeRejected::new(self, other, source)),
        }
    }

    fn compose(&self, other: &Self) -> Result<Self> {
        let offset = self.nodes.len();
        let mut store = self.store.clone();
        let mut nodes = self.nodes.clone();
        for node in &other.nodes {
            let face = CopyShape::new(Shape::Face(node.face))
                .execute_into(&other.store, &mut store)?
                .as_face()
                .ok_or_else(|| OperationError::Failed("copied face is not a face".into()))?;
            nodes.push(FaceNode { face, ..*node });
        }

        let mut hinges = self.hinges.clone();
        hinges.extend(other.hinges.iter().map(|hinge| Hinge {
            from: hinge.from + offset,
            to: hinge.to + offset,
            ..*hinge
        }));

        let faces = nodes.iter().map(|node| node.face).collect();
        let (assembly, shell) = sew_shell(&self.options, &store, faces)?;
        debug!(
            nodes = nodes.len(),
            hinges = hinges.len(),
            offset,
            "merged planar nets"
        );

        Ok(Self {
            store,
            nodes,
            hinges,
            state: self.state,
            assembly,
            shell,
            options: self.options.clone(),
        })
    }
}
