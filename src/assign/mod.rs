// src/assign/mod.rs

//! Node pool and round-robin task assignment.
//!
//! - [`pool`] holds the insertion-ordered set of available nodes.
//! - [`table`] holds the node -> tasks mapping produced by a run.

pub mod pool;
pub mod table;

pub use pool::{NodeId, NodePool};
pub use table::AssignmentTable;

use tracing::{debug, info, warn};

use crate::registry::{TaskId, TaskRegistry};
use crate::scheduler::compute_registry_order;
use crate::types::ReassignScope;

/// Owns the node pool and the assignment table.
///
/// Every assignment run recomputes the execution order from the registry
/// and rebuilds the table from scratch; nothing is carried over from the
/// previous run.
#[derive(Debug, Clone, Default)]
pub struct NodeAssignmentManager {
    pool: NodePool,
    table: AssignmentTable,
}

impl NodeAssignmentManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the pool. No-op if it is already present.
    pub fn add_node(&mut self, id: &str) {
        if self.pool.add(id) {
            debug!(node = %id, "assign: node added");
        } else {
            debug!(node = %id, "assign: node already in pool; ignoring");
        }
    }

    /// Remove a node from the pool and redistribute all work.
    ///
    /// Reassignment runs even if the node was absent or held no tasks.
    /// Returns the tasks the node held before removal.
    pub fn remove_node(
        &mut self,
        id: &str,
        registry: &TaskRegistry,
        scope: ReassignScope,
    ) -> Vec<TaskId> {
        if self.pool.remove(id) {
            debug!(node = %id, "assign: node removed from pool");
        }
        self.handle_failure(id, registry, scope)
    }

    /// Release the tasks held by `node` and redistribute everything across
    /// the remaining nodes.
    ///
    /// The released tasks need no separate bookkeeping: the following full
    /// recompute places every task again.
    pub fn handle_failure(
        &mut self,
        node: &str,
        registry: &TaskRegistry,
        scope: ReassignScope,
    ) -> Vec<TaskId> {
        let released = self.table.remove(node).unwrap_or_default();
        if !released.is_empty() {
            info!(
                node = %node,
                released = released.len(),
                "assign: node failed; redistributing its tasks"
            );
        }

        self.assign_all(registry, scope);
        released
    }

    /// Deal the current execution order to the pool, round-robin.
    ///
    /// Dealing starts from the first node in pool order on every run. With an
    /// empty pool the order is still computed but nothing is placed.
    pub fn assign_all(&mut self, registry: &TaskRegistry, scope: ReassignScope) {
        self.table = AssignmentTable::with_nodes(self.pool.iter());

        let order = compute_registry_order(registry);

        let to_deal: Vec<&TaskId> = order
            .ids()
            .iter()
            .filter(|id| match scope {
                ReassignScope::All => true,
                ReassignScope::Outstanding => {
                    registry.get(id).is_some_and(|task| !task.is_done())
                }
            })
            .collect();

        if self.pool.is_empty() {
            if !to_deal.is_empty() {
                warn!(
                    tasks = to_deal.len(),
                    "assign: no nodes available; tasks left unassigned"
                );
            }
            return;
        }

        let mut nodes = self.pool.iter().cycle();
        for id in to_deal {
            if let Some(node) = nodes.next() {
                self.table.push(node, id.clone());
            }
        }

        info!(
            nodes = self.pool.len(),
            assigned = self.table.total_assigned(),
            unscheduled = order.unscheduled_count(),
            "assign: tasks distributed"
        );
    }

    pub fn assignments(&self) -> &AssignmentTable {
        &self.table
    }

    pub fn nodes(&self) -> &NodePool {
        &self.pool
    }
}
