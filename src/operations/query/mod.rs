mod area;
mod bounding_box;
mod center;
mod explore;
mod face_points;
mod is_valid;
mod length;
mod normal;
mod volume;

pub use area::Area;
pub use bounding_box::{Aabb, BoundingBox};
pub use center::Center;
pub use explore::Explore;
pub use face_points::{collect_wire_points, FacePoints};
pub use is_valid::IsValid;
pub use length::Length;
pub use normal::FaceNormal;
pub use volume::Volume;
