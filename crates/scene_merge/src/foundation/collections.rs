//! Specialized collection types

pub use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Stable handle to a node stored in a [`crate::scene::Scene`]
    pub struct NodeKey;
}

/// Arena holding scene nodes behind stable keys
pub type NodeArena<T> = SlotMap<NodeKey, T>;
