use slotmap::new_key_type;

new_key_type! {
    /// Strongly-typed handle to a node in the scene graph.
    pub struct NodeHandle;
}

/// Position of an action in the animation controller's registry.
///
/// Registry order is the order in which the loader reported the clips, and
/// entries are never removed, so an id stays valid for the scene's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionId(pub usize);

impl ActionId {
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}
