pub mod edge;
pub mod face;
pub mod shell;
pub mod solid;
pub mod vertex;
pub mod wire;

pub use edge::{EdgeData, EdgeId};
pub use face::{FaceData, FaceId};
pub use shell::{ShellData, ShellId};
pub use solid::{SolidData, SolidId};
pub use vertex::{VertexData, VertexId};
pub use wire::{OrientedEdge, WireData, WireId};

use crate::error::TopologyError;
use slotmap::SlotMap;

/// Central arena that owns all topological entities.
///
/// Entities reference each other via typed IDs (generational indices),
/// avoiding self-referential structures and enabling safe mutation.
/// Cloning a store yields an independent copy in which every ID stays valid.
#[derive(Debug, Default, Clone)]
pub struct TopologyStore {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    wires: SlotMap<WireId, WireData>,
    faces: SlotMap<FaceId, FaceData>,
    shells: SlotMap<ShellId, ShellData>,
    solids: SlotMap<SolidId, SolidData>,
}

/// Generates insert / lookup / mutable lookup for one entity arena.
macro_rules! arena_accessors {
    ($field:ident, $id:ty, $data:ty, $add:ident, $get:ident, $get_mut:ident, $count:ident, $name:literal) => {
        #[doc = concat!("Inserts a ", $name, " and returns its ID.")]
        pub fn $add(&mut self, data: $data) -> $id {
            self.$field.insert(data)
        }

        #[doc = concat!("Returns a reference to the ", $name, " data, or an error if not found.")]
        ///
        /// # Errors
        ///
        /// Returns an error if the entity is not found in the store.
        pub fn $get(&self, id: $id) -> Result<&$data, TopologyError> {
            self.$field
                .get(id)
                .ok_or_else(|| TopologyError::EntityNotFound($name.into()))
        }

        #[doc = concat!("Returns a mutable reference to the ", $name, " data, or an error if not found.")]
        ///
        /// # Errors
        ///
        /// Returns an error if the entity is not found in the store.
        pub fn $get_mut(&mut self, id: $id) -> Result<&mut $data, TopologyError> {
            self.$field
                .get_mut(id)
                .ok_or_else(|| TopologyError::EntityNotFound($name.into()))
        }

        #[doc = concat!("Number of ", $name, " entities in the store.")]
        #[must_use]
        pub fn $count(&self) -> usize {
            self.$field.len()
        }
    };
}

impl TopologyStore {
    /// Creates a new, empty topology store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    arena_accessors!(vertices, VertexId, VertexData, add_vertex, vertex, vertex_mut, vertex_count, "vertex");
    arena_accessors!(edges, EdgeId, EdgeData, add_edge, edge, edge_mut, edge_count, "edge");
    arena_accessors!(wires, WireId, WireData, add_wire, wire, wire_mut, wire_count, "wire");
    arena_accessors!(faces, FaceId, FaceData, add_face, face, face_mut, face_count, "face");
    arena_accessors!(shells, ShellId, ShellData, add_shell, shell, shell_mut, shell_count, "shell");
    arena_accessors!(solids, SolidId, SolidData, add_solid, solid, solid_mut, solid_count, "solid");
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;

    #[test]
    fn insert_and_lookup_vertex() {
        let mut store = TopologyStore::new();
        let id = store.add_vertex(VertexData::new(Point3::new(1.0, 2.0, 3.0)));
        assert_eq!(store.vertex_count(), 1);
        assert!((store.vertex(id).unwrap().point.y - 2.0).abs() < 1e-12);

        store.vertex_mut(id).unwrap().point.y = 5.0;
        assert!((store.vertex(id).unwrap().point.y - 5.0).abs() < 1e-12);
    }

    #[test]
    fn ids_from_another_store_are_not_found() {
        let mut store = TopologyStore::new();
        let mut other = TopologyStore::new();
        other.add_vertex(VertexData::new(Point3::origin()));
        let foreign = other.add_vertex(VertexData::new(Point3::origin()));
        store.add_vertex(VertexData::new(Point3::origin()));
        // Second slot does not exist in `store`.
        assert!(matches!(
            store.vertex(foreign),
            Err(TopologyError::EntityNotFound(_))
        ));
    }

    #[test]
    fn clone_is_independent() {
        let mut store = TopologyStore::new();
        let id = store.add_vertex(VertexData::new(Point3::origin()));
        let mut copy = store.clone();
        copy.vertex_mut(id).unwrap().point.x = 9.0;
        assert!(store.vertex(id).unwrap().point.x.abs() < 1e-12);
        assert!((copy.vertex(id).unwrap().point.x - 9.0).abs() < 1e-12);
    }
}
