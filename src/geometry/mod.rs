pub mod curve;
pub mod surface;

pub use curve::Line;
pub use surface::Plane;
