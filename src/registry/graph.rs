// src/registry/graph.rs

use std::collections::BTreeSet;

use indexmap::IndexMap;
use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;

use crate::registry::task::TaskId;

/// Internal node structure: stores immediate deps and dependents.
#[derive(Debug, Clone, Default)]
struct DagNode {
    /// Direct dependencies: tasks that must be ordered before this one.
    deps: BTreeSet<TaskId>,
    /// Direct dependents, in the order the edges were registered.
    dependents: Vec<TaskId>,
}

/// In-memory dependency graph keyed by task id.
///
/// Owned by [`TaskRegistry`](crate::registry::TaskRegistry) and mutated only
/// in lockstep with its task map. Nodes iterate in registration order.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: IndexMap<TaskId, DagNode>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// All task ids, in registration order.
    pub fn tasks(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(|s| s.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Immediate dependencies of a task, or `None` for unknown ids.
    pub fn dependencies_of(&self, id: &str) -> Option<&BTreeSet<TaskId>> {
        self.nodes.get(id).map(|n| &n.deps)
    }

    /// Immediate dependents of a task (tasks listing it as a dependency).
    pub fn dependents_of(&self, id: &str) -> &[TaskId] {
        self.nodes
            .get(id)
            .map(|n| n.dependents.as_slice())
            .unwrap_or(&[])
    }

    /// Register a new node with its dependency set.
    ///
    /// Dependencies that are not registered are still recorded on the node,
    /// but no dependent edge is created for them.
    pub(crate) fn insert(&mut self, id: &str, deps: &BTreeSet<TaskId>) {
        for dep in deps {
            if let Some(dep_node) = self.nodes.get_mut(dep) {
                dep_node.dependents.push(id.to_string());
            }
        }

        self.nodes.insert(
            id.to_string(),
            DagNode {
                deps: deps.clone(),
                dependents: Vec::new(),
            },
        );
    }

    /// Replace the dependency set of an existing node, keeping its position
    /// and its dependents.
    pub(crate) fn replace_dependencies(&mut self, id: &str, deps: &BTreeSet<TaskId>) {
        let old_deps = match self.nodes.get(id) {
            Some(node) => node.deps.clone(),
            None => {
                self.insert(id, deps);
                return;
            }
        };

        for dep in old_deps.difference(deps) {
            if let Some(dep_node) = self.nodes.get_mut(dep) {
                dep_node.dependents.retain(|d| d != id);
            }
        }
        for dep in deps.difference(&old_deps) {
            if let Some(dep_node) = self.nodes.get_mut(dep) {
                dep_node.dependents.push(id.to_string());
            }
        }
        if let Some(node) = self.nodes.get_mut(id) {
            node.deps = deps.clone();
        }
    }

    /// Remove a node and scrub it from every other node.
    ///
    /// Returns `true` if the node was present.
    pub(crate) fn remove(&mut self, id: &str) -> bool {
        let removed = self.nodes.shift_remove(id).is_some();

        for node in self.nodes.values_mut() {
            node.deps.remove(id);
            node.dependents.retain(|d| d != id);
        }

        removed
    }

    /// Groups of tasks that depend on each other in a cycle.
    ///
    /// Diagnostics only: the registry never rejects cycles, and the execution
    /// order silently omits their members. Each group is sorted, and groups
    /// are sorted by their first member.
    pub fn cycles(&self) -> Vec<Vec<TaskId>> {
        // Edge direction: dep -> task.
        let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

        for id in self.nodes.keys() {
            graph.add_node(id.as_str());
        }
        for (id, node) in self.nodes.iter() {
            for dep in node.deps.iter() {
                if self.nodes.contains_key(dep) {
                    graph.add_edge(dep.as_str(), id.as_str(), ());
                }
            }
        }

        let mut cycles: Vec<Vec<TaskId>> = tarjan_scc(&graph)
            .into_iter()
            .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
            .map(|scc| {
                let mut ids: Vec<TaskId> = scc.into_iter().map(str::to_string).collect();
                ids.sort();
                ids
            })
            .collect();
        cycles.sort();
        cycles
    }
}
