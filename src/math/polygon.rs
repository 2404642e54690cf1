use super::{Point3, Vector3, PLANARITY_TOLERANCE, TOLERANCE};

/// Unnormalized polygon normal by Newell's method.
///
/// Its length is twice the polygon area, so a near-zero result means the
/// loop is degenerate (collinear or repeated points).
#[must_use]
pub fn newell_vector(points: &[Point3]) -> Vector3 {
    let n = points.len();
    let mut normal = Vector3::zeros();
    for i in 0..n {
        let curr = &points[i];
        let next = &points[(i + 1) % n];
        normal.x += (curr.y - next.y) * (curr.z + next.z);
        normal.y += (curr.z - next.z) * (curr.x + next.x);
        normal.z += (curr.x - next.x) * (curr.y + next.y);
    }
    normal
}

/// Unit normal of a polygon, or `None` if the loop is degenerate.
#[must_use]
pub fn polygon_normal(points: &[Point3]) -> Option<Vector3> {
    let normal = newell_vector(points);
    let len = normal.norm();
    if len < TOLERANCE {
        None
    } else {
        Some(normal / len)
    }
}

/// Area enclosed by a planar polygon.
#[must_use]
pub fn polygon_area(points: &[Point3]) -> f64 {
    newell_vector(points).norm() * 0.5
}

/// Arithmetic mean of the points.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn vertex_mean(points: &[Point3]) -> Point3 {
    if points.is_empty() {
        return Point3::origin();
    }
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Point3::from(sum / points.len() as f64)
}

/// Area-weighted centroid of a planar polygon.
///
/// Fans triangles from the vertex mean; falls back to the vertex mean for
/// degenerate loops.
#[must_use]
pub fn polygon_centroid(points: &[Point3]) -> Point3 {
    let Some(normal) = polygon_normal(points) else {
        return vertex_mean(points);
    };
    let anchor = vertex_mean(points);
    let n = points.len();
    let mut weighted = Vector3::zeros();
    let mut total = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let signed = (a - anchor).cross(&(b - anchor)).dot(&normal) * 0.5;
        weighted += (anchor.coords + a.coords + b.coords) / 3.0 * signed;
        total += signed;
    }
    if total.abs() < TOLERANCE {
        anchor
    } else {
        Point3::from(weighted / total)
    }
}

/// Largest distance between the vertex mean and any vertex.
#[must_use]
pub fn polygon_extent(points: &[Point3]) -> f64 {
    let mean = vertex_mean(points);
    points
        .iter()
        .map(|p| (p - mean).norm())
        .fold(0.0, f64::max)
}

/// Returns `true` if every vertex lies on the Newell plane of the polygon.
///
/// The tolerance scales with the polygon extent so that large and small
/// polygons are judged alike.
#[must_use]
pub fn is_planar(points: &[Point3]) -> bool {
    let Some(normal) = polygon_normal(points) else {
        return false;
    };
    let mean = vertex_mean(points);
    let tol = PLANARITY_TOLERANCE * polygon_extent(points).max(1.0);
    points.iter().all(|p| (p - mean).dot(&normal).abs() <= tol)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn unit_square() -> Vec<Point3> {
        vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn square_normal_points_up() {
        let n = polygon_normal(&unit_square()).unwrap();
        assert_relative_eq!(n, Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn square_area_and_centroid() {
        let square = unit_square();
        assert_relative_eq!(polygon_area(&square), 1.0, epsilon = 1e-12);
        assert_relative_eq!(polygon_centroid(&square), p(0.5, 0.5, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn centroid_is_area_weighted() {
        // L-shape: vertex mean differs from the true centroid.
        let l_shape = vec![
            p(0.0, 0.0, 0.0),
            p(2.0, 0.0, 0.0),
            p(2.0, 1.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(1.0, 2.0, 0.0),
            p(0.0, 2.0, 0.0),
        ];
        let c = polygon_centroid(&l_shape);
        assert_relative_eq!(c.x, 5.0 / 6.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, 5.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn collinear_points_are_degenerate() {
        let line = vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)];
        assert!(polygon_normal(&line).is_none());
        assert!(!is_planar(&line));
    }

    #[test]
    fn lifted_corner_is_not_planar() {
        let mut square = unit_square();
        square[2].z = 0.1;
        assert!(!is_planar(&square));
        assert!(is_planar(&unit_square()));
    }
}
