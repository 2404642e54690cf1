use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// An infinite line defined by an origin point and a direction vector.
///
/// The parametric form is: `P(t) = origin + t * direction`, with a unit
/// direction so that `t` measures arc length.
#[derive(Debug, Clone)]
pub struct Line {
    origin: Point3,
    direction: Vector3,
}

impl Line {
    /// Creates a new line from an origin and direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length.
    pub fn new(origin: Point3, direction: Vector3) -> Result<Self> {
        let len = direction.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            origin,
            direction: direction / len,
        })
    }

    /// Creates the line through two points, returning it together with the
    /// parameter of `end` (the segment length).
    ///
    /// # Errors
    ///
    /// Returns an error if the points coincide.
    pub fn through(start: Point3, end: Point3) -> Result<(Self, f64)> {
        let direction = end - start;
        let length = direction.norm();
        let line = Self::new(start, direction)?;
        Ok((line, length))
    }

    /// Returns the origin point of the line.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the unit direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    /// Parameter of the orthogonal projection of `point` onto the line.
    #[must_use]
    pub fn parameter_of(&self, point: &Point3) -> f64 {
        (point - self.origin).dot(&self.direction)
    }

    /// Point at parameter `t`.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }

    /// Distance from `point` to the line.
    #[must_use]
    pub fn distance_to(&self, point: &Point3) -> f64 {
        let foot = self.origin + self.direction * self.parameter_of(point);
        (point - foot).norm()
    }
}
