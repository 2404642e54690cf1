mod make_face;
mod make_polygon;
mod make_regular_polygon;
mod make_solid;
mod make_wire;
mod sew;

pub use make_face::MakeFace;
pub use make_polygon::MakePolygon;
pub use make_regular_polygon::MakeRegularPolygon;
pub use make_solid::MakeSolid;
pub use make_wire::MakeWire;
pub use sew::{Sew, DEFAULT_SEW_TOLERANCE};
