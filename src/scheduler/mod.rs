// src/scheduler/mod.rs

//! Execution-order computation.
//!
//! - [`ready`] holds the priority-ordered ready set.
//! - [`order`] holds the result type, [`ExecutionOrder`].
//!
//! The algorithm is Kahn's topological sort where the ready set is drained
//! highest priority first. Equal priorities are drained in the order the
//! tasks became ready; the initial ready tasks become ready in registry
//! order, and a task's dependents are released in the order they were
//! registered.

pub mod order;
pub mod ready;

pub use order::ExecutionOrder;
pub use ready::ReadyQueue;

use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::registry::{DependencyGraph, Task, TaskId, TaskRegistry};

/// Compute an execution order for the registry's current contents.
pub fn compute_registry_order(registry: &TaskRegistry) -> ExecutionOrder {
    compute_order(registry.tasks(), registry.graph())
}

/// Compute an execution order over `tasks`, using `graph` to find dependents.
///
/// Never fails. Tasks on a dependency cycle, and everything downstream of
/// one, never become ready; they are left out of the order and reported by
/// [`ExecutionOrder::unscheduled`].
pub fn compute_order(tasks: &IndexMap<TaskId, Task>, graph: &DependencyGraph) -> ExecutionOrder {
    let mut remaining: HashMap<&str, usize> = tasks
        .values()
        .map(|task| (task.id.as_str(), task.dependencies.len()))
        .collect();

    let mut ready = ReadyQueue::new();
    for task in tasks.values() {
        if task.dependencies.is_empty() {
            ready.push(task.id.clone(), task.priority);
        }
    }

    let mut ids: Vec<TaskId> = Vec::with_capacity(tasks.len());

    while let Some(id) = ready.pop() {
        for dependent in graph.dependents_of(&id) {
            let Some(count) = remaining.get_mut(dependent.as_str()) else {
                continue;
            };
            *count = count.saturating_sub(1);
            if *count == 0 {
                if let Some(task) = tasks.get(dependent) {
                    ready.push(task.id.clone(), task.priority);
                }
            }
        }
        ids.push(id);
    }

    let unscheduled: Vec<TaskId> = tasks
        .keys()
        .filter(|id| remaining.get(id.as_str()).is_some_and(|count| *count > 0))
        .cloned()
        .collect();

    if unscheduled.is_empty() {
        debug!(order = ?ids, "scheduler: execution order computed");
    } else {
        warn!(
            scheduled = ids.len(),
            ?unscheduled,
            "scheduler: tasks never became ready (dependency cycle); omitted from order"
        );
    }

    ExecutionOrder::new(ids, unscheduled)
}
