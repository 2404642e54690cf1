use super::shell::ShellId;

slotmap::new_key_type! {
    /// Unique identifier for a solid in the topology store.
    pub struct SolidId;
}

/// Data associated with a topological solid.
///
/// A solid is the volume bounded by a single shell. Whether that shell
/// actually encloses a volume is checked by `IsValid`, not assumed.
#[derive(Debug, Clone)]
pub struct SolidData {
    /// The bounding shell of the solid.
    pub outer_shell: ShellId,
}
