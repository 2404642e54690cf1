use crate::error::{OperationError, Result};
use crate::math::{Matrix4, Point3, TOLERANCE};
use crate::shape::Shape;
use crate::topology::TopologyStore;

use super::GeneralTransform;

/// Scales a shape uniformly from a center point.
pub struct Scale {
    shape: Shape,
    center: Point3,
    factor: f64,
}

impl Scale {
    /// Creates a new `Scale` operation.
    #[must_use]
    pub fn new(shape: Shape, center: Point3, factor: f64) -> Self {
        Self {
            shape,
            center,
            factor,
        }
    }

    /// Executes the scaling, modifying the shape in-place.
    ///
    /// A negative factor is a point reflection through `center`.
    ///
    /// # Errors
    ///
    /// Returns an error if the factor is zero or not finite.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<()> {
        if !self.factor.is_finite() || self.factor.abs() < TOLERANCE {
            return Err(OperationError::InvalidInput(format!(
                "scale factor must be finite and non-zero, got {}",
                self.factor
            ))
            .into());
        }
        let t_neg = Matrix4::new_translation(&(-self.center.coords));
        let scale = Matrix4::new_scaling(self.factor);
        let t_pos = Matrix4::new_translation(&self.center.coords);
        GeneralTransform::new(self.shape, t_pos * scale * t_neg).execute(store)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::operations::creation::MakePolygon;
    use crate::operations::query::Area;

    #[test]
    fn doubling_quadruples_area() {
        let mut store = TopologyStore::new();
        let face = MakePolygon::new(vec![
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(2.0, 1.0, 0.0),
            Point3::new(2.0, 2.0, 0.0),
            Point3::new(1.0, 2.0, 0.0),
        ])
        .execute(&mut store)
        .unwrap();

        Scale::new(Shape::Face(face), Point3::new(1.0, 1.0, 0.0), 2.0)
            .execute(&mut store)
            .unwrap();
        let area = Area::new(Shape::Face(face)).execute(&store).unwrap();
        assert_relative_eq!(area, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_factor_fails() {
        let mut store = TopologyStore::new();
        let face = MakePolygon::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ])
        .execute(&mut store)
        .unwrap();
        assert!(Scale::new(Shape::Face(face), Point3::origin(), 0.0)
            .execute(&mut store)
            .is_err());
    }
}
