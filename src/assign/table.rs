// src/assign/table.rs

use indexmap::IndexMap;

use crate::assign::pool::NodeId;
use crate::registry::TaskId;

/// Mapping from node to the ordered list of tasks dealt to it.
///
/// Rebuilt from scratch on every assignment run; entries follow pool order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentTable {
    entries: IndexMap<NodeId, Vec<TaskId>>,
}

impl AssignmentTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with an empty task list for each node.
    pub fn with_nodes<'a>(nodes: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            entries: nodes
                .into_iter()
                .map(|node| (node.to_string(), Vec::new()))
                .collect(),
        }
    }

    pub(crate) fn push(&mut self, node: &str, task: TaskId) {
        if let Some(tasks) = self.entries.get_mut(node) {
            tasks.push(task);
        }
    }

    /// Drop a node's entry, returning the tasks it held.
    pub(crate) fn remove(&mut self, node: &str) -> Option<Vec<TaskId>> {
        self.entries.shift_remove(node)
    }

    /// Tasks dealt to `node`, or `None` if the node has no entry.
    pub fn tasks_for(&self, node: &str) -> Option<&[TaskId]> {
        self.entries.get(node).map(Vec::as_slice)
    }

    /// Node holding `task`, if it was dealt out.
    pub fn node_of(&self, task: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, tasks)| tasks.iter().any(|t| t == task))
            .map(|(node, _)| node.as_str())
    }

    pub fn contains_node(&self, node: &str) -> bool {
        self.entries.contains_key(node)
    }

    /// Number of tasks across all nodes.
    pub fn total_assigned(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[TaskId])> {
        self.entries
            .iter()
            .map(|(node, tasks)| (node.as_str(), tasks.as_slice()))
    }

    /// Number of node entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
