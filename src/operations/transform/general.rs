use crate::error::Result;
use crate::geometry::curve::Line;
use crate::geometry::surface::Plane;
use crate::math::Matrix4;
use crate::operations::query::{Explore, FacePoints};
use crate::shape::{Shape, ShapeKind};
use crate::topology::TopologyStore;

/// Applies an arbitrary 4x4 affine transformation to a shape in place.
pub struct GeneralTransform {
    shape: Shape,
    matrix: Matrix4,
}

impl GeneralTransform {
    /// Creates a new `GeneralTransform` operation.
    #[must_use]
    pub fn new(shape: Shape, matrix: Matrix4) -> Self {
        Self { shape, matrix }
    }

    /// Executes the transformation, modifying the shape in-place.
    ///
    /// Transforms every vertex reachable from the shape, then rebuilds each
    /// edge line and face plane from the moved vertices. An orientation
    /// reversing matrix (negative determinant) also reverses every wire, so
    /// face normals are the transformed normals rather than their opposites.
    ///
    /// Entities shared with shapes outside `shape` move too.
    ///
    /// # Errors
    ///
    /// Returns an error if an entity is missing or the transform collapses
    /// an edge or face (e.g. a singular matrix).
    pub fn execute(&self, store: &mut TopologyStore) -> Result<()> {
        for vertex in Explore::new(self.shape, ShapeKind::Vertex).execute(store)? {
            if let Shape::Vertex(id) = vertex {
                let v = store.vertex_mut(id)?;
                v.point = self.matrix.transform_point(&v.point);
            }
        }

        for edge in Explore::new(self.shape, ShapeKind::Edge).execute(store)? {
            if let Shape::Edge(id) = edge {
                let data = store.edge(id)?;
                let start = store.vertex(data.start)?.point;
                let end = store.vertex(data.end)?.point;
                let (line, length) = Line::through(start, end)?;
                let data = store.edge_mut(id)?;
                data.curve = line;
                data.t_start = 0.0;
                data.t_end = length;
            }
        }

        if self.matrix.fixed_view::<3, 3>(0, 0).determinant() < 0.0 {
            for wire in Explore::new(self.shape, ShapeKind::Wire).execute(store)? {
                if let Shape::Wire(id) = wire {
                    store.wire_mut(id)?.reverse();
                }
            }
        }

        refit_face_planes(store, self.shape)
    }
}

/// Recomputes every face plane under `shape` from its boundary vertices.
pub(super) fn refit_face_planes(store: &mut TopologyStore, shape: Shape) -> Result<()> {
    for face in Explore::new(shape, ShapeKind::Face).execute(store)? {
        if let Shape::Face(id) = face {
            let plane = Plane::from_points(&FacePoints::new(id).execute(store)?)?;
            store.face_mut(id)?.surface = plane;
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point3, Vector3};
    use crate::operations::creation::MakePolygon;
    use crate::operations::query::FaceNormal;
    use crate::topology::FaceId;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn unit_square(store: &mut TopologyStore) -> FaceId {
        MakePolygon::new(vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ])
        .execute(store)
        .unwrap()
    }

    #[test]
    fn translation_shifts_all_vertices() {
        let mut store = TopologyStore::new();
        let face = unit_square(&mut store);

        let matrix = Matrix4::new_translation(&Vector3::new(5.0, 3.0, 2.0));
        GeneralTransform::new(Shape::Face(face), matrix)
            .execute(&mut store)
            .unwrap();

        for pt in FacePoints::new(face).execute(&store).unwrap() {
            assert!(pt.x >= 5.0 - 1e-10 && pt.x <= 6.0 + 1e-10);
            assert!(pt.y >= 3.0 - 1e-10 && pt.y <= 4.0 + 1e-10);
            assert!((pt.z - 2.0).abs() < 1e-10);
        }
    }

    #[test]
    fn reflection_keeps_normal_geometric() {
        let mut store = TopologyStore::new();
        let face = unit_square(&mut store);

        // Mirror in the plane x = 0: a face lying in z = 0 keeps normal +Z.
        let matrix = Matrix4::new_nonuniform_scaling(&Vector3::new(-1.0, 1.0, 1.0));
        GeneralTransform::new(Shape::Face(face), matrix)
            .execute(&mut store)
            .unwrap();

        let normal = FaceNormal::new(face).execute(&store).unwrap();
        assert!((normal - Vector3::z()).norm() < 1e-12);
    }

    #[test]
    fn singular_matrix_fails() {
        let mut store = TopologyStore::new();
        let face = unit_square(&mut store);
        let matrix = Matrix4::new_nonuniform_scaling(&Vector3::new(1.0, 0.0, 1.0));
        assert!(GeneralTransform::new(Shape::Face(face), matrix)
            .execute(&mut store)
            .is_err());
    }
}
