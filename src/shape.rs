//! Kind-tagged handles over the topology arena.
//!
//! A [`Shape`] is a copyable handle naming one entity of a
//! [`TopologyStore`](crate::topology::TopologyStore) together with its kind.
//! Which queries make sense for a handle is decided by its kind through a
//! fixed capability table, not by the caller guessing.

use std::fmt;

use slotmap::{Key, KeyData};

use crate::error::{OperationError, Result};
use crate::topology::{EdgeId, FaceId, ShellId, SolidId, VertexId, WireId};

/// The closed set of topological kinds, ordered from lowest to highest
/// dimension of containment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    Vertex,
    Edge,
    Wire,
    Face,
    Shell,
    Solid,
}

/// Queries a shape kind may or may not support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Point, length-, area- or volume-weighted centre.
    Center,
    /// Total curve length.
    Length,
    /// Total face area.
    Area,
    /// Enclosed volume.
    Volume,
    /// Single planar normal.
    Normal,
}

impl ShapeKind {
    /// All kinds, lowest first.
    pub const ALL: [Self; 6] = [
        Self::Vertex,
        Self::Edge,
        Self::Wire,
        Self::Face,
        Self::Shell,
        Self::Solid,
    ];

    /// Lower-case kind name, as used in error messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::Edge => "edge",
            Self::Wire => "wire",
            Self::Face => "face",
            Self::Shell => "shell",
            Self::Solid => "solid",
        }
    }

    /// Capabilities legal for this kind.
    #[must_use]
    pub fn capabilities(self) -> &'static [Capability] {
        use Capability::{Area, Center, Length, Normal, Volume};
        match self {
            Self::Vertex => &[Center],
            Self::Edge | Self::Wire => &[Center, Length],
            Self::Face => &[Center, Area, Normal],
            Self::Shell => &[Center, Area],
            Self::Solid => &[Center, Area, Volume],
        }
    }

    /// Returns `true` if this kind supports `capability`.
    #[must_use]
    pub fn supports(self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A handle to one topological entity, tagged with its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Vertex(VertexId),
    Edge(EdgeId),
    Wire(WireId),
    Face(FaceId),
    Shell(ShellId),
    Solid(SolidId),
}

impl Shape {
    /// Builds the handle for a raw arena key of the given kind.
    ///
    /// This is the single place that maps a kind tag to a handle variant.
    #[must_use]
    pub fn from_raw(kind: ShapeKind, key: KeyData) -> Self {
        match kind {
            ShapeKind::Vertex => Self::Vertex(key.into()),
            ShapeKind::Edge => Self::Edge(key.into()),
            ShapeKind::Wire => Self::Wire(key.into()),
            ShapeKind::Face => Self::Face(key.into()),
            ShapeKind::Shell => Self::Shell(key.into()),
            ShapeKind::Solid => Self::Solid(key.into()),
        }
    }

    /// The kind tag of this handle.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Vertex(_) => ShapeKind::Vertex,
            Self::Edge(_) => ShapeKind::Edge,
            Self::Wire(_) => ShapeKind::Wire,
            Self::Face(_) => ShapeKind::Face,
            Self::Shell(_) => ShapeKind::Shell,
            Self::Solid(_) => ShapeKind::Solid,
        }
    }

    /// The untyped arena key.
    #[must_use]
    pub fn raw(&self) -> KeyData {
        match self {
            Self::Vertex(id) => id.data(),
            Self::Edge(id) => id.data(),
            Self::Wire(id) => id.data(),
            Self::Face(id) => id.data(),
            Self::Shell(id) => id.data(),
            Self::Solid(id) => id.data(),
        }
    }

    /// Returns `true` if the handle's kind supports `capability`.
    #[must_use]
    pub fn supports(&self, capability: Capability) -> bool {
        self.kind().supports(capability)
    }

    /// Fails with [`OperationError::Unsupported`] unless the kind supports
    /// `capability`.
    ///
    /// # Errors
    ///
    /// Returns an error naming `operation` and the shape kind.
    pub fn require(&self, capability: Capability, operation: &'static str) -> Result<()> {
        if self.supports(capability) {
            Ok(())
        } else {
            Err(OperationError::Unsupported {
                operation,
                kind: self.kind().name(),
            }
            .into())
        }
    }

    /// The face id, if this is a face.
    #[must_use]
    pub fn as_face(&self) -> Option<FaceId> {
        match self {
            Self::Face(id) => Some(*id),
            _ => None,
        }
    }

    /// The shell id, if this is a shell.
    #[must_use]
    pub fn as_shell(&self) -> Option<ShellId> {
        match self {
            Self::Shell(id) => Some(*id),
            _ => None,
        }
    }

    /// The solid id, if this is a solid.
    #[must_use]
    pub fn as_solid(&self) -> Option<SolidId> {
        match self {
            Self::Solid(id) => Some(*id),
            _ => None,
        }
    }
}

impl From<VertexId> for Shape {
    fn from(id: VertexId) -> Self {
        Self::Vertex(id)
    }
}

impl From<EdgeId> for Shape {
    fn from(id: EdgeId) -> Self {
        Self::Edge(id)
    }
}

impl From<WireId> for Shape {
    fn from(id: WireId) -> Self {
        Self::Wire(id)
    }
}

impl From<FaceId> for Shape {
    fn from(id: FaceId) -> Self {
        Self::Face(id)
    }
}

impl From<ShellId> for Shape {
    fn from(id: ShellId) -> Self {
        Self::Shell(id)
    }
}

impl From<SolidId> for Shape {
    fn from(id: SolidId) -> Self {
        Self::Solid(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::topology::{TopologyStore, VertexData};

    #[test]
    fn raw_round_trip_keeps_kind() {
        let mut store = TopologyStore::new();
        let v = store.add_vertex(VertexData::new(Point3::origin()));
        let shape = Shape::from(v);
        let rebuilt = Shape::from_raw(shape.kind(), shape.raw());
        assert_eq!(rebuilt, shape);
        assert_eq!(rebuilt.kind(), ShapeKind::Vertex);
    }

    #[test]
    fn capability_table() {
        assert!(ShapeKind::Edge.supports(Capability::Length));
        assert!(!ShapeKind::Edge.supports(Capability::Area));
        assert!(ShapeKind::Face.supports(Capability::Normal));
        assert!(!ShapeKind::Shell.supports(Capability::Volume));
        assert!(ShapeKind::Solid.supports(Capability::Volume));
        for kind in ShapeKind::ALL {
            assert!(kind.supports(Capability::Center), "{kind} lacks a centre");
        }
    }

    #[test]
    fn require_reports_kind() {
        let mut store = TopologyStore::new();
        let v = Shape::from(store.add_vertex(VertexData::new(Point3::origin())));
        let err = v.require(Capability::Area, "area").unwrap_err();
        assert_eq!(err.to_string(), "area is not supported on a vertex");
    }
}
