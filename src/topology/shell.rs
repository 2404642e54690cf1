use super::face::FaceId;

slotmap::new_key_type! {
    /// Unique identifier for a shell in the topology store.
    pub struct ShellId;
}

/// Data associated with a topological shell.
///
/// A shell is a set of faces sewn along shared edges. It may be open or
/// closed.
#[derive(Debug, Clone)]
pub struct ShellData {
    /// The faces that make up this shell.
    pub faces: Vec<FaceId>,
    /// Whether every edge of the shell is shared by exactly two faces.
    pub is_closed: bool,
}
