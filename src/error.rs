use thiserror::Error;

use crate::net::FoldState;

/// Top-level error type for the netfold crate.
#[derive(Debug, Error)]
pub enum NetfoldError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Net(#[from] NetError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to topological operations.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("wire is not closed")]
    WireNotClosed,
}

/// Errors related to kernel operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{operation} is not supported on a {kind}")]
    Unsupported {
        operation: &'static str,
        kind: &'static str,
    },

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Errors raised by planar-net construction, folding and merging.
#[derive(Debug, Error)]
pub enum NetError {
    #[error("face index {face} is out of range (net has {count} faces)")]
    FaceIndexOutOfRange { face: usize, count: usize },

    #[error("edge index {edge} is out of range for face {face} ({count} edges)")]
    EdgeIndexOutOfRange {
        face: usize,
        edge: usize,
        count: usize,
    },

    #[error("a polygon needs at least 3 sides, got {sides}")]
    InvalidSideCount { sides: usize },

    #[error("winding sign must be +1 or -1, got {sign}")]
    InvalidWindingSign { sign: i32 },

    #[error("cannot merge nets in different fold states ({left} and {right})")]
    FoldStateMismatch { left: FoldState, right: FoldState },

    #[error(
        "hinge graph is not a forest ({hinges} hinges, {faces} faces, {components} components)"
    )]
    NonTreeTopology {
        hinges: usize,
        faces: usize,
        components: usize,
    },
}

/// Convenience type alias for results using [`NetfoldError`].
pub type Result<T> = std::result::Result<T, NetfoldError>;
