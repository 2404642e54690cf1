use crate::error::{GeometryError, Result, TopologyError};
use crate::geometry::surface::Plane;
use crate::math::polygon::is_planar;
use crate::math::TOLERANCE;
use crate::operations::query::collect_wire_points;
use crate::topology::{FaceData, FaceId, TopologyStore, WireId};

/// Creates a planar face bounded by a closed wire.
///
/// The plane is fitted to the wire with Newell's method, so the face normal
/// follows the wire's winding.
pub struct MakeFace {
    outer_wire: WireId,
}

impl MakeFace {
    /// Creates a new `MakeFace` operation.
    #[must_use]
    pub fn new(outer_wire: WireId) -> Self {
        Self { outer_wire }
    }

    /// Executes the operation, creating the face in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::WireNotClosed`] for an open wire, and
    /// [`GeometryError::Degenerate`] when the boundary has fewer than three
    /// edges, no area, non-coplanar vertices, or crosses itself.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<FaceId> {
        let wire = store.wire(self.outer_wire)?;
        if !wire.is_closed {
            return Err(TopologyError::WireNotClosed.into());
        }
        if wire.edges.len() < 3 {
            return Err(GeometryError::Degenerate(format!(
                "a face boundary needs at least 3 edges, got {}",
                wire.edges.len()
            ))
            .into());
        }

        let points = collect_wire_points(store, self.outer_wire)?;
        let plane = Plane::from_points(&points)?;
        if !is_planar(&points) {
            return Err(GeometryError::Degenerate("face boundary is not planar".into()).into());
        }
        let uv: Vec<(f64, f64)> = points.iter().map(|p| plane.project(p)).collect();
        if !is_simple(&uv) {
            return Err(
                GeometryError::Degenerate("face boundary intersects itself".into()).into(),
            );
        }

        Ok(store.add_face(FaceData {
            surface: plane,
            outer_wire: self.outer_wire,
        }))
    }
}

/// Returns `true` if no two non-adjacent edges of the closed loop touch.
fn is_simple(uv: &[(f64, f64)]) -> bool {
    let n = uv.len();
    for i in 0..n {
        let a0 = uv[i];
        let a1 = uv[(i + 1) % n];
        for j in (i + 1)..n {
            // Skip the edge itself and its two neighbours.
            if j == i + 1 || (i == 0 && j == n - 1) {
                continue;
            }
            let b0 = uv[j];
            let b1 = uv[(j + 1) % n];
            if segments_touch(a0, a1, b0, b1) {
                return false;
            }
        }
    }
    true
}

fn orient(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0)
}

fn on_segment(a: (f64, f64), b: (f64, f64), p: (f64, f64)) -> bool {
    p.0 >= a.0.min(b.0) - TOLERANCE
        && p.0 <= a.0.max(b.0) + TOLERANCE
        && p.1 >= a.1.min(b.1) - TOLERANCE
        && p.1 <= a.1.max(b.1) + TOLERANCE
}

fn segments_touch(a0: (f64, f64), a1: (f64, f64), b0: (f64, f64), b1: (f64, f64)) -> bool {
    let d1 = orient(b0, b1, a0);
    let d2 = orient(b0, b1, a1);
    let d3 = orient(a0, a1, b0);
    let d4 = orient(a0, a1, b1);

    if ((d1 > TOLERANCE && d2 < -TOLERANCE) || (d1 < -TOLERANCE && d2 > TOLERANCE))
        && ((d3 > TOLERANCE && d4 < -TOLERANCE) || (d3 < -TOLERANCE && d4 > TOLERANCE))
    {
        return true;
    }

    (d1.abs() <= TOLERANCE && on_segment(b0, b1, a0))
        || (d2.abs() <= TOLERANCE && on_segment(b0, b1, a1))
        || (d3.abs() <= TOLERANCE && on_segment(a0, a1, b0))
        || (d4.abs() <= TOLERANCE && on_segment(a0, a1, b1))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point3, Vector3};
    use crate::operations::creation::MakeWire;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn face_from(store: &mut TopologyStore, points: Vec<Point3>) -> Result<FaceId> {
        let wire = MakeWire::new(points, true).execute(store)?;
        MakeFace::new(wire).execute(store)
    }

    #[test]
    fn ccw_square_faces_up() {
        let mut store = TopologyStore::new();
        let face = face_from(
            &mut store,
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(0.0, 1.0, 0.0)],
        )
        .unwrap();
        let normal = *store.face(face).unwrap().surface.plane_normal();
        assert!((normal - Vector3::z()).norm() < 1e-12);
    }

    #[test]
    fn open_wire_is_rejected() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)], false)
            .execute(&mut store)
            .unwrap();
        assert!(matches!(
            MakeFace::new(wire).execute(&mut store),
            Err(crate::NetfoldError::Topology(TopologyError::WireNotClosed))
        ));
    }

    #[test]
    fn non_planar_boundary_is_rejected() {
        let mut store = TopologyStore::new();
        let result = face_from(
            &mut store,
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.5), p(0.0, 1.0, 0.0)],
        );
        assert!(result.is_err());
        assert_eq!(store.face_count(), 0);
    }

    #[test]
    fn bow_tie_is_rejected() {
        let mut store = TopologyStore::new();
        let result = face_from(
            &mut store,
            vec![p(0.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)],
        );
        assert!(result.is_err());
    }

    #[test]
    fn collinear_boundary_is_rejected() {
        let mut store = TopologyStore::new();
        let result = face_from(
            &mut store,
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)],
        );
        assert!(result.is_err());
    }
}
