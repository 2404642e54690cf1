pub mod error;
pub mod geometry;
pub mod math;
pub mod net;
pub mod operations;
pub mod shape;
pub mod topology;

pub use error::{NetfoldError, Result};
pub use net::{
    FaceNode, FoldOutcome, FoldState, Hinge, MergeRejected, NetOptions, PlanarNet, ValidityReport,
    Viewer,
};
pub use shape::{Shape, ShapeKind};
