use crate::error::Result;
use crate::geometry::surface::Plane;
use crate::math::{Matrix4, Point3, Vector3};
use crate::shape::Shape;
use crate::topology::TopologyStore;

use super::{CopyShape, GeneralTransform};

/// Mirrors a shape across a plane defined by a point and normal.
///
/// The result is a new shape; the input is left untouched. Boundary loops
/// of the copy run the other way round, so each mirrored face normal is the
/// reflection of the original normal.
pub struct Mirror {
    shape: Shape,
    plane_origin: Point3,
    plane_normal: Vector3,
}

impl Mirror {
    /// Creates a new `Mirror` operation.
    #[must_use]
    pub fn new(shape: Shape, plane_origin: Point3, plane_normal: Vector3) -> Self {
        Self {
            shape,
            plane_origin,
            plane_normal,
        }
    }

    /// The homogeneous reflection matrix of this mirror plane.
    ///
    /// # Errors
    ///
    /// Returns an error if the plane normal is zero-length.
    pub fn matrix(&self) -> Result<Matrix4> {
        let plane = Plane::from_normal(self.plane_origin, self.plane_normal)?;
        let n = plane.plane_normal();
        let linear = nalgebra::Matrix3::identity() - 2.0 * n * n.transpose();
        let offset = 2.0 * self.plane_origin.coords.dot(n) * n;

        let mut matrix = linear.to_homogeneous();
        matrix.fixed_view_mut::<3, 1>(0, 3).copy_from(&offset);
        Ok(matrix)
    }

    /// Executes the mirror, creating a mirrored copy in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if the plane normal is zero-length or an entity of
    /// the shape is missing.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<Shape> {
        let matrix = self.matrix()?;
        let copy = CopyShape::new(self.shape).execute(store)?;
        GeneralTransform::new(copy, matrix).execute(store)?;
        Ok(copy)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::MakePolygon;
    use crate::operations::query::{FaceNormal, FacePoints};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn mirror_across_offset_plane() {
        let mut store = TopologyStore::new();
        let face = MakePolygon::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 1.0)])
            .execute(&mut store)
            .unwrap();

        let mirrored = Mirror::new(Shape::Face(face), p(2.0, 0.0, 0.0), Vector3::x())
            .execute(&mut store)
            .unwrap();
        let mirrored = mirrored.as_face().unwrap();

        let pts = FacePoints::new(mirrored).execute(&store).unwrap();
        assert_eq!(pts.len(), 3);
        for q in [p(4.0, 0.0, 0.0), p(3.0, 0.0, 0.0), p(4.0, 1.0, 1.0)] {
            assert!(pts.iter().any(|r| (r - q).norm() < 1e-12), "missing {q}");
        }

        // Normal (0, -1, 1)/sqrt2 has no x part, so the reflection keeps it.
        let before = FaceNormal::new(face).execute(&store).unwrap();
        let after = FaceNormal::new(mirrored).execute(&store).unwrap();
        assert!((before - after).norm() < 1e-12, "{before} vs {after}");
    }

    #[test]
    fn original_is_untouched() {
        let mut store = TopologyStore::new();
        let pts = vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)];
        let face = MakePolygon::new(pts.clone()).execute(&mut store).unwrap();
        Mirror::new(Shape::Face(face), Point3::origin(), Vector3::z())
            .execute(&mut store)
            .unwrap();
        assert_eq!(FacePoints::new(face).execute(&store).unwrap(), pts);
    }

    #[test]
    fn zero_normal_fails() {
        let mut store = TopologyStore::new();
        let face = MakePolygon::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)])
            .execute(&mut store)
            .unwrap();
        assert!(Mirror::new(Shape::Face(face), Point3::origin(), Vector3::zeros())
            .execute(&mut store)
            .is_err());
    }
}
