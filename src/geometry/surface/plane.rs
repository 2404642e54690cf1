use crate::error::{GeometryError, Result};
use crate::math::polygon::{newell_vector, vertex_mean};
use crate::math::{Point3, Vector3, TOLERANCE};

/// An infinite plane in 3D space.
///
/// Defined by an origin point, and two orthogonal direction vectors
/// (`u_dir`, `v_dir`). The normal is `u_dir × v_dir`.
///
/// Parametric form: `P(u, v) = origin + u * u_dir + v * v_dir`.
#[derive(Debug, Clone)]
pub struct Plane {
    origin: Point3,
    u_dir: Vector3,
    v_dir: Vector3,
    normal: Vector3,
}

impl Plane {
    /// Creates a new plane from an origin and two direction vectors.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vectors are zero-length
    /// or parallel (degenerate plane).
    pub fn new(origin: Point3, u_dir: Vector3, v_dir: Vector3) -> Result<Self> {
        let u_len = u_dir.norm();
        if u_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let v_len = v_dir.norm();
        if v_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }

        let u_dir = u_dir / u_len;
        let normal = u_dir.cross(&(v_dir / v_len));
        let normal_len = normal.norm();
        if normal_len < TOLERANCE {
            return Err(
                GeometryError::Degenerate("plane directions are parallel".into()).into(),
            );
        }
        let normal = normal / normal_len;
        let v_dir = normal.cross(&u_dir);

        Ok(Self {
            origin,
            u_dir,
            v_dir,
            normal,
        })
    }

    /// Creates a plane from an origin and a normal vector.
    ///
    /// The U and V directions are computed automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal vector is zero-length.
    pub fn from_normal(origin: Point3, normal: Vector3) -> Result<Self> {
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / len;

        // Choose a reference vector not parallel to the normal
        let reference = if normal.x.abs() < 0.9 {
            Vector3::new(1.0, 0.0, 0.0)
        } else {
            Vector3::new(0.0, 1.0, 0.0)
        };

        let u_dir = normal.cross(&reference).normalize();
        let v_dir = normal.cross(&u_dir);

        Ok(Self {
            origin,
            u_dir,
            v_dir,
            normal,
        })
    }

    /// Fits the plane of a polygon loop: Newell normal through the vertex mean.
    ///
    /// The normal follows the loop's winding (counter-clockwise when viewed
    /// from the side it points to).
    ///
    /// # Errors
    ///
    /// Returns an error if the loop is degenerate (collinear or repeated points).
    pub fn from_points(points: &[Point3]) -> Result<Self> {
        let normal = newell_vector(points);
        if normal.norm() < TOLERANCE {
            return Err(GeometryError::Degenerate(
                "polygon has no area: cannot compute normal".into(),
            )
            .into());
        }
        Self::from_normal(vertex_mean(points), normal)
    }

    /// Returns the origin point of the plane.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the U direction vector.
    #[must_use]
    pub fn u_dir(&self) -> &Vector3 {
        &self.u_dir
    }

    /// Returns the V direction vector.
    #[must_use]
    pub fn v_dir(&self) -> &Vector3 {
        &self.v_dir
    }

    /// Returns the normal vector of the plane.
    #[must_use]
    pub fn plane_normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Point at plane coordinates `(u, v)`.
    #[must_use]
    pub fn evaluate(&self, u: f64, v: f64) -> Point3 {
        self.origin + self.u_dir * u + self.v_dir * v
    }

    /// Signed distance of `point` from the plane, positive on the normal side.
    #[must_use]
    pub fn signed_distance(&self, point: &Point3) -> f64 {
        (point - self.origin).dot(&self.normal)
    }

    /// Projects `point` into the plane's `(u, v)` coordinates.
    #[must_use]
    pub fn project(&self, point: &Point3) -> (f64, f64) {
        let diff = point - self.origin;
        (diff.dot(&self.u_dir), diff.dot(&self.v_dir))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn from_points_follows_winding() {
        let ccw = [p(0.0, 0.0, 2.0), p(1.0, 0.0, 2.0), p(0.0, 1.0, 2.0)];
        let plane = Plane::from_points(&ccw).unwrap();
        assert!((plane.plane_normal() - Vector3::z()).norm() < 1e-12);
        assert!(plane.signed_distance(&p(5.0, 5.0, 3.0)) > 0.0);

        let cw: Vec<Point3> = ccw.iter().rev().copied().collect();
        let flipped = Plane::from_points(&cw).unwrap();
        assert!((flipped.plane_normal() + Vector3::z()).norm() < 1e-12);
    }

    #[test]
    fn project_round_trips_through_evaluate() {
        let plane = Plane::from_normal(p(1.0, 2.0, 3.0), Vector3::new(1.0, 1.0, 1.0)).unwrap();
        let q = plane.evaluate(0.25, -1.5);
        let (u, v) = plane.project(&q);
        assert!((u - 0.25).abs() < 1e-12);
        assert!((v + 1.5).abs() < 1e-12);
        assert!(plane.signed_distance(&q).abs() < 1e-12);
    }

    #[test]
    fn collinear_points_fail() {
        let pts = [p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0), p(2.0, 2.0, 2.0)];
        assert!(Plane::from_points(&pts).is_err());
    }
}
