mod copy;
mod general;
mod mirror;
mod reverse;
mod rotate;
mod scale;
mod translate;

pub use copy::CopyShape;
pub use general::GeneralTransform;
pub use mirror::Mirror;
pub use reverse::Reverse;
pub use rotate::Rotate;
pub use scale::Scale;
pub use translate::Translate;
