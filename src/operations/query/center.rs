use crate::error::{OperationError, Result};
use crate::math::polygon::{polygon_area, polygon_centroid};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::shape::{Capability, Shape, ShapeKind};
use crate::topology::TopologyStore;

use super::volume::volume_moments;
use super::{Explore, FacePoints};

/// Computes the centre of a shape, weighted by its own dimension.
///
/// - vertex: its point
/// - edge, wire: length-weighted centre of the edges
/// - face, shell: area-weighted centroid of the faces
/// - solid: centroid of the enclosed volume
pub struct Center {
    shape: Shape,
}

impl Center {
    /// Creates a new `Center` query.
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        Self { shape }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if an entity is missing, or the shape has zero
    /// measure (e.g. a solid that encloses no volume).
    pub fn execute(&self, store: &TopologyStore) -> Result<Point3> {
        self.shape.require(Capability::Center, "center")?;
        match self.shape {
            Shape::Vertex(id) => Ok(store.vertex(id)?.point),
            Shape::Edge(_) | Shape::Wire(_) => self.curve_center(store),
            Shape::Face(_) | Shape::Shell(_) => self.surface_center(store),
            Shape::Solid(id) => {
                let (volume, moment) = volume_moments(store, id)?;
                if volume.abs() < TOLERANCE {
                    return Err(zero_measure("solid"));
                }
                Ok(Point3::from(moment / volume))
            }
        }
    }

    fn curve_center(&self, store: &TopologyStore) -> Result<Point3> {
        let mut weighted = Vector3::zeros();
        let mut total = 0.0;
        for edge in Explore::new(self.shape, ShapeKind::Edge).execute(store)? {
            if let Shape::Edge(id) = edge {
                let data = store.edge(id)?;
                let a = store.vertex(data.start)?.point;
                let b = store.vertex(data.end)?.point;
                let len = (b - a).norm();
                weighted += (a.coords + b.coords) * 0.5 * len;
                total += len;
            }
        }
        if total < TOLERANCE {
            return Err(zero_measure(self.shape.kind().name()));
        }
        Ok(Point3::from(weighted / total))
    }

    fn surface_center(&self, store: &TopologyStore) -> Result<Point3> {
        let mut weighted = Vector3::zeros();
        let mut total = 0.0;
        for face in Explore::new(self.shape, ShapeKind::Face).execute(store)? {
            if let Shape::Face(id) = face {
                let points = FacePoints::new(id).execute(store)?;
                let area = polygon_area(&points);
                weighted += polygon_centroid(&points).coords * area;
                total += area;
            }
        }
        if total < TOLERANCE {
            return Err(zero_measure(self.shape.kind().name()));
        }
        Ok(Point3::from(weighted / total))
    }
}

fn zero_measure(kind: &str) -> crate::error::NetfoldError {
    OperationError::Failed(format!("{kind} has zero measure: centre is undefined")).into()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::{MakePolygon, MakeSolid, MakeWire, Sew};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn wire_center_is_length_weighted() {
        let mut store = TopologyStore::new();
        // Long edge along x, short edge up y.
        let wire = MakeWire::new(vec![p(0.0, 0.0, 0.0), p(3.0, 0.0, 0.0), p(3.0, 1.0, 0.0)], false)
            .execute(&mut store)
            .unwrap();
        let c = Center::new(Shape::Wire(wire)).execute(&store).unwrap();
        // (1.5,0)*3 + (3,0.5)*1 over 4
        assert!((c - p(7.5 / 4.0, 0.5 / 4.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn tetra_center_is_vertex_mean() {
        let mut store = TopologyStore::new();
        let o = p(0.0, 0.0, 0.0);
        let x = p(1.0, 0.0, 0.0);
        let y = p(0.0, 1.0, 0.0);
        let z = p(0.0, 0.0, 1.0);
        let faces = [vec![o, y, x], vec![o, x, z], vec![o, z, y], vec![x, y, z]]
            .into_iter()
            .map(|pts| MakePolygon::new(pts).execute(&mut store).unwrap())
            .collect();
        let shell = Sew::new(faces).execute(&mut store).unwrap();
        let solid = MakeSolid::new(shell).execute(&mut store).unwrap();
        let c = Center::new(Shape::Solid(solid)).execute(&store).unwrap();
        assert!((c - p(0.25, 0.25, 0.25)).norm() < 1e-12);
    }
}
