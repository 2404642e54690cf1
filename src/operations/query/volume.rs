use crate::error::Result;
use crate::math::polygon::vertex_mean;
use crate::math::{Point3, Vector3};
use crate::shape::{Capability, Shape, ShapeKind};
use crate::topology::{SolidId, TopologyStore};

use super::{Explore, FacePoints};

/// Computes the volume enclosed by a solid's shell.
///
/// Each face is fanned into triangles, and every triangle closes a
/// tetrahedron with a reference point inside the vertex hull. The signed
/// tetrahedron volumes sum to the enclosed volume: positive when face
/// normals point outward, negative when the shell is inside out.
pub struct Volume {
    solid: SolidId,
}

impl Volume {
    /// Creates a new `Volume` query.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the volume (absolute value).
    ///
    /// # Errors
    ///
    /// Returns an error if an entity is missing.
    pub fn execute(&self, store: &TopologyStore) -> Result<f64> {
        Ok(self.signed(store)?.abs())
    }

    /// Signed volume; negative for an inward-facing shell.
    ///
    /// # Errors
    ///
    /// Returns an error if an entity is missing.
    pub fn signed(&self, store: &TopologyStore) -> Result<f64> {
        Ok(volume_moments(store, self.solid)?.0)
    }
}

/// Signed volume and first moment (volume-weighted centroid sum) of a solid.
pub(crate) fn volume_moments(store: &TopologyStore, solid: SolidId) -> Result<(f64, Vector3)> {
    let shape = Shape::Solid(solid);
    shape.require(Capability::Volume, "volume")?;

    let mut faces = Vec::new();
    for face in Explore::new(shape, ShapeKind::Face).execute(store)? {
        if let Shape::Face(id) = face {
            faces.push(FacePoints::new(id).execute(store)?);
        }
    }
    let all: Vec<Point3> = faces.iter().flatten().copied().collect();
    let reference = vertex_mean(&all);

    let mut volume = 0.0;
    let mut moment = Vector3::zeros();
    for points in &faces {
        let Some(first) = points.first() else {
            continue;
        };
        for pair in points[1..].windows(2) {
            let a = first - reference;
            let b = pair[0] - reference;
            let c = pair[1] - reference;
            let v = a.dot(&b.cross(&c)) / 6.0;
            volume += v;
            moment += (reference.coords * 4.0 + a + b + c) / 4.0 * v;
        }
    }
    Ok((volume, moment))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::{MakePolygon, MakeSolid, Sew};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn corner_tetra(store: &mut TopologyStore, inward: bool) -> SolidId {
        let o = p(0.0, 0.0, 0.0);
        let x = p(2.0, 0.0, 0.0);
        let y = p(0.0, 2.0, 0.0);
        let z = p(0.0, 0.0, 2.0);
        let faces = [vec![o, y, x], vec![o, x, z], vec![o, z, y], vec![x, y, z]]
            .into_iter()
            .map(|mut pts| {
                if inward {
                    pts.reverse();
                }
                MakePolygon::new(pts).execute(store).unwrap()
            })
            .collect();
        let shell = Sew::new(faces).execute(store).unwrap();
        MakeSolid::new(shell).execute(store).unwrap()
    }

    #[test]
    fn tetra_volume() {
        let mut store = TopologyStore::new();
        let solid = corner_tetra(&mut store, false);
        let volume = Volume::new(solid).execute(&store).unwrap();
        // 2 * 2 * 2 / 6
        assert!((volume - 8.0 / 6.0).abs() < 1e-12, "got {volume}");
    }

    #[test]
    fn inside_out_shell_has_negative_sign() {
        let mut store = TopologyStore::new();
        let solid = corner_tetra(&mut store, true);
        let signed = Volume::new(solid).signed(&store).unwrap();
        assert!((signed + 8.0 / 6.0).abs() < 1e-12, "got {signed}");
        assert!((Volume::new(solid).execute(&store).unwrap() - 8.0 / 6.0).abs() < 1e-12);
    }
}
