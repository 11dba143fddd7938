// src/assign/pool.rs

use indexmap::IndexSet;

/// Node identifier.
pub type NodeId = String;

/// Insertion-ordered set of available execution nodes.
#[derive(Debug, Clone, Default)]
pub struct NodePool {
    nodes: IndexSet<NodeId>,
}

impl NodePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node at the end of the pool.
    ///
    /// Returns `false` (and keeps the original position) if it was present.
    pub fn add(&mut self, id: &str) -> bool {
        if self.nodes.contains(id) {
            return false;
        }
        self.nodes.insert(id.to_string())
    }

    /// Remove a node, keeping the order of the others.
    ///
    /// Returns `false` if it was absent.
    pub fn remove(&mut self, id: &str) -> bool {
        self.nodes.shift_remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + Clone {
        self.nodes.iter().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
