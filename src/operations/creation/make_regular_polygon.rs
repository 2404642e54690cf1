use std::f64::consts::PI;

use crate::error::{GeometryError, NetError, Result};
use crate::math::Point3;
use crate::topology::{FaceId, TopologyStore};

use super::MakePolygon;

/// Creates a regular polygon centred at the origin in the XY plane.
///
/// Vertex `k` sits at angle `2πk/n` on the circumscribed circle, so the
/// boundary runs counter-clockwise and the face normal is `+Z`.
pub struct MakeRegularPolygon {
    sides: usize,
    edge_length: f64,
}

impl MakeRegularPolygon {
    /// Creates a new `MakeRegularPolygon` operation.
    #[must_use]
    pub fn new(sides: usize, edge_length: f64) -> Self {
        Self { sides, edge_length }
    }

    /// Circumradius of a regular `n`-gon with the given edge length.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn circumradius(sides: usize, edge_length: f64) -> f64 {
        edge_length / (2.0 * (PI / sides as f64).sin())
    }

    /// Computes the boundary points without touching a store.
    ///
    /// # Errors
    ///
    /// Returns [`NetError::InvalidSideCount`] for fewer than three sides and
    /// [`GeometryError::ParameterOutOfRange`] for a non-positive or
    /// non-finite edge length.
    #[allow(clippy::cast_precision_loss)]
    pub fn points(&self) -> Result<Vec<Point3>> {
        if self.sides < 3 {
            return Err(NetError::InvalidSideCount { sides: self.sides }.into());
        }
        if !(self.edge_length.is_finite() && self.edge_length > 0.0) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "edge_length",
                value: self.edge_length,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }
        let r = Self::circumradius(self.sides, self.edge_length);
        let n = self.sides as f64;
        Ok((0..self.sides)
            .map(|k| {
                let u = 2.0 * PI * k as f64 / n;
                Point3::new(r * u.cos(), r * u.sin(), 0.0)
            })
            .collect())
    }

    /// Executes the operation, creating the face in the topology store.
    ///
    /// # Errors
    ///
    /// See [`MakeRegularPolygon::points`].
    pub fn execute(&self, store: &mut TopologyStore) -> Result<FaceId> {
        MakePolygon::new(self.points()?).execute(store)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::query::{Center, FacePoints};
    use crate::shape::Shape;

    #[test]
    fn every_edge_has_requested_length() {
        for sides in 3..=8 {
            let pts = MakeRegularPolygon::new(sides, 1.5).points().unwrap();
            assert_eq!(pts.len(), sides);
            for i in 0..sides {
                let d = (pts[(i + 1) % sides] - pts[i]).norm();
                assert!((d - 1.5).abs() < 1e-12, "n={sides} edge {i}: {d}");
            }
        }
    }

    #[test]
    fn unit_triangle_circumradius() {
        let r = MakeRegularPolygon::circumradius(3, 1.0);
        assert!((r - 1.0 / 3.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn face_is_centred_on_origin() {
        let mut store = TopologyStore::new();
        let face = MakeRegularPolygon::new(5, 2.0).execute(&mut store).unwrap();
        let c = Center::new(Shape::Face(face)).execute(&store).unwrap();
        assert!(c.coords.norm() < 1e-12);
        assert_eq!(FacePoints::new(face).execute(&store).unwrap().len(), 5);
    }

    #[test]
    fn rejects_digons_and_bad_lengths() {
        assert!(MakeRegularPolygon::new(2, 1.0).points().is_err());
        assert!(MakeRegularPolygon::new(4, 0.0).points().is_err());
        assert!(MakeRegularPolygon::new(4, -1.0).points().is_err());
        assert!(MakeRegularPolygon::new(4, f64::NAN).points().is_err());
    }
}
