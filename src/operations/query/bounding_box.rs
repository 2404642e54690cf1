use crate::error::{OperationError, Result};
use crate::math::Point3;
use crate::shape::{Shape, ShapeKind};
use crate::topology::TopologyStore;

use super::Explore;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Length of the box diagonal.
    #[must_use]
    pub fn diagonal(&self) -> f64 {
        (self.max - self.min).norm()
    }
}

/// Computes the axis-aligned bounding box of any shape.
pub struct BoundingBox {
    shape: Shape,
}

impl BoundingBox {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        Self { shape }
    }

    /// Executes the query, returning the AABB of the shape's vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if an entity is missing or the shape has no vertices.
    pub fn execute(&self, store: &TopologyStore) -> Result<Aabb> {
        let mut bounds: Option<Aabb> = None;
        for vertex in Explore::new(self.shape, ShapeKind::Vertex).execute(store)? {
            if let Shape::Vertex(id) = vertex {
                let p = store.vertex(id)?.point;
                bounds = Some(match bounds {
                    None => Aabb { min: p, max: p },
                    Some(b) => Aabb {
                        min: b.min.inf(&p),
                        max: b.max.sup(&p),
                    },
                });
            }
        }
        bounds.ok_or_else(|| OperationError::Failed("shape has no vertices".into()).into())
    }
}
