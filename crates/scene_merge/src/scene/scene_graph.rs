//! Arena-backed scene graph
//!
//! Nodes live in a slot map and refer to each other by [`NodeKey`], so keys
//! stay valid while nodes are added and re-parented during a merge.

use thiserror::Error;

use super::Node;
use crate::foundation::collections::{NodeArena, NodeKey};
use crate::foundation::math::Transform;

/// Scene graph errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    /// The key does not refer to a node of this scene
    #[error("Unknown node: {0:?}")]
    UnknownNode(NodeKey),

    /// Attaching would make a node its own ancestor
    #[error("Attaching {child:?} under {parent:?} would create a cycle")]
    Cycle {
        /// Requested parent
        parent: NodeKey,
        /// Requested child
        child: NodeKey,
    },

    /// The root cannot be re-parented
    #[error("The scene root cannot be attached to another node")]
    RootAttach,
}

/// Scene graph with a single root
///
/// The root's name is its asset path (e.g. `scenes/level1/root`); relative
/// texture references in a document resolve against its directory.
#[derive(Debug, Clone)]
pub struct Scene {
    nodes: NodeArena<Node>,
    root: NodeKey,
}

impl Scene {
    /// Create a scene whose root node is named `root_name`
    pub fn new(root_name: impl Into<String>) -> Self {
        let mut nodes = NodeArena::with_key();
        let root = nodes.insert(Node::new(root_name));
        Self { nodes, root }
    }

    /// Key of the root node
    pub fn root(&self) -> NodeKey {
        self.root
    }

    /// Name (asset path) of the root node
    pub fn root_name(&self) -> &str {
        &self.nodes[self.root].name
    }

    /// Directory part of the root's asset path: everything before the last
    /// `/`, or an empty string when the name has no `/`
    pub fn root_dir(&self) -> &str {
        let name = self.root_name();
        name.rfind('/').map_or("", |i| &name[..i])
    }

    /// Number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene only holds its root
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Borrow a node
    pub fn node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    /// Mutably borrow a node
    pub fn node_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.nodes.get_mut(key)
    }

    /// Insert a node as the last child of the root
    pub fn add_node(&mut self, mut node: Node) -> NodeKey {
        node.parent = Some(self.root);
        node.children.clear();
        let key = self.nodes.insert(node);
        self.nodes[self.root].children.push(key);
        key
    }

    /// Move `child` (and its subtree) under `parent`, keeping its local transform
    pub fn attach_child(&mut self, parent: NodeKey, child: NodeKey) -> Result<(), SceneError> {
        if !self.nodes.contains_key(parent) {
            return Err(SceneError::UnknownNode(parent));
        }
        if !self.nodes.contains_key(child) {
            return Err(SceneError::UnknownNode(child));
        }
        if child == self.root {
            return Err(SceneError::RootAttach);
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(SceneError::Cycle { parent, child });
        }

        if let Some(old) = self.nodes[child].parent {
            self.nodes[old].children.retain(|k| *k != child);
        }
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
        Ok(())
    }

    /// Whether `ancestor` is `key` or one of its ancestors
    pub fn is_ancestor_or_self(&self, ancestor: NodeKey, key: NodeKey) -> bool {
        let mut cursor = Some(key);
        while let Some(k) = cursor {
            if k == ancestor {
                return true;
            }
            cursor = self.nodes.get(k).and_then(|n| n.parent);
        }
        false
    }

    /// First node with this name, in depth-first order from the root
    pub fn find_by_name(&self, name: &str) -> Option<NodeKey> {
        self.depth_first().into_iter().map(|(k, _)| k).find(|k| self.nodes[*k].name == name)
    }

    /// Transform of a node relative to the root
    pub fn world_transform(&self, key: NodeKey) -> Option<Transform> {
        let node = self.nodes.get(key)?;
        match node.parent {
            Some(parent) => Some(self.world_transform(parent)?.combine(&node.transform)),
            None => Some(node.transform.clone()),
        }
    }

    /// All nodes reachable from the root with their depth, parents before children
    pub fn depth_first(&self) -> Vec<(NodeKey, usize)> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![(self.root, 0)];
        while let Some((key, depth)) = stack.pop() {
            out.push((key, depth));
            for child in self.nodes[key].children.iter().rev() {
                stack.push((*child, depth + 1));
            }
        }
        out
    }
}
