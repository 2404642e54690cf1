use std::collections::HashMap;

use crate::error::Result;
use crate::math::polygon::is_planar;
use crate::math::TOLERANCE;
use crate::topology::{EdgeId, SolidId, TopologyStore};

use super::{FacePoints, Volume};

/// Validates the topological and geometric consistency of a solid.
///
/// A valid solid has:
/// - closed, connected boundary wires of at least three edges
/// - planar faces
/// - every edge shared by exactly two faces, traversed in opposite directions
/// - a non-zero enclosed volume
pub struct IsValid {
    solid: SolidId,
}

impl IsValid {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the validation, returning `true` if the solid is valid.
    #[must_use]
    pub fn execute(&self, store: &TopologyStore) -> bool {
        matches!(self.diagnose(store), Ok(problems) if problems.is_empty())
    }

    /// Lists every violated condition; empty for a valid solid.
    ///
    /// # Errors
    ///
    /// Returns an error if an entity referenced by the solid is missing.
    pub fn diagnose(&self, store: &TopologyStore) -> Result<Vec<String>> {
        let mut problems = Vec::new();
        let shell = store.shell(store.solid(self.solid)?.outer_shell)?;
        if shell.faces.is_empty() {
            problems.push("shell has no faces".to_string());
            return Ok(problems);
        }

        let mut edge_uses: HashMap<EdgeId, Vec<bool>> = HashMap::new();
        for (index, &face_id) in shell.faces.iter().enumerate() {
            let face = store.face(face_id)?;
            let wire = store.wire(face.outer_wire)?;
            if !wire.is_closed {
                problems.push(format!("face {index}: boundary wire is open"));
            }
            if wire.edges.len() < 3 {
                problems.push(format!(
                    "face {index}: boundary has {} edges",
                    wire.edges.len()
                ));
            }

            let n = wire.edges.len();
            for i in 0..n {
                let here = wire.edges[i];
                let next = wire.edges[(i + 1) % n];
                let here_edge = store.edge(here.edge)?;
                let next_edge = store.edge(next.edge)?;
                let here_end = if here.forward { here_edge.end } else { here_edge.start };
                let next_start = if next.forward { next_edge.start } else { next_edge.end };
                if here_end != next_start {
                    problems.push(format!("face {index}: boundary is disconnected after edge {i}"));
                }
                edge_uses.entry(here.edge).or_default().push(here.forward);
            }

            if !is_planar(&FacePoints::new(face_id).execute(store)?) {
                problems.push(format!("face {index}: boundary is not planar"));
            }
        }

        let mut free = 0usize;
        let mut non_manifold = 0usize;
        let mut misoriented = 0usize;
        for uses in edge_uses.values() {
            match uses.len() {
                1 => free += 1,
                2 if uses[0] == uses[1] => misoriented += 1,
                2 => {}
                _ => non_manifold += 1,
            }
        }
        if free > 0 {
            problems.push(format!("{free} free edges (shell is open)"));
        }
        if non_manifold > 0 {
            problems.push(format!("{non_manifold} edges shared by more than two faces"));
        }
        if misoriented > 0 {
            problems.push(format!(
                "{misoriented} edges traversed the same way by both faces"
            ));
        }

        if problems.is_empty() {
            let volume = Volume::new(self.solid).signed(store)?;
            if volume.abs() < TOLERANCE {
                problems.push("solid encloses no volume".to_string());
            }
        }

        Ok(problems)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::{MakePolygon, MakeSolid, Sew};
    use crate::topology::FaceId;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn faces(store: &mut TopologyStore, loops: Vec<Vec<Point3>>) -> Vec<FaceId> {
        loops
            .into_iter()
            .map(|pts| MakePolygon::new(pts).execute(store).unwrap())
            .collect()
    }

    fn tetra_loops() -> Vec<Vec<Point3>> {
        let o = p(0.0, 0.0, 0.0);
        let x = p(1.0, 0.0, 0.0);
        let y = p(0.0, 1.0, 0.0);
        let z = p(0.0, 0.0, 1.0);
        vec![vec![o, y, x], vec![o, x, z], vec![o, z, y], vec![x, y, z]]
    }

    #[test]
    fn closed_tetra_is_valid() {
        let mut store = TopologyStore::new();
        let f = faces(&mut store, tetra_loops());
        let shell = Sew::new(f).execute(&mut store).unwrap();
        let solid = MakeSolid::new(shell).execute(&mut store).unwrap();
        assert!(IsValid::new(solid).execute(&store));
    }

    #[test]
    fn open_shell_is_invalid() {
        let mut store = TopologyStore::new();
        let mut loops = tetra_loops();
        loops.pop();
        let f = faces(&mut store, loops);
        let shell = Sew::new(f).execute(&mut store).unwrap();
        let solid = MakeSolid::new(shell).execute(&mut store).unwrap();
        assert!(!IsValid::new(solid).execute(&store));
        let problems = IsValid::new(solid).diagnose(&store).unwrap();
        assert!(problems.iter().any(|m| m.contains("free edges")), "{problems:?}");
    }

    #[test]
    fn flipped_face_is_misoriented() {
        let mut store = TopologyStore::new();
        let mut loops = tetra_loops();
        loops[3].reverse();
        let f = faces(&mut store, loops);
        let shell = Sew::new(f).execute(&mut store).unwrap();
        let solid = MakeSolid::new(shell).execute(&mut store).unwrap();
        let problems = IsValid::new(solid).diagnose(&store).unwrap();
        assert!(
            problems.iter().any(|m| m.contains("same way")),
            "{problems:?}"
        );
    }
}
