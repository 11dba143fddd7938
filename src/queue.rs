// src/queue.rs

//! The handle that ties the registry, the scheduler and the assignment
//! manager together.

use std::sync::{Arc, Mutex, PoisonError};

use crate::assign::{AssignmentTable, NodeAssignmentManager, NodePool};
use crate::errors::Result;
use crate::registry::{Priority, TaskId, TaskRegistry};
use crate::scheduler::{ExecutionOrder, compute_registry_order};
use crate::types::QueueOptions;

/// One independent scheduling context.
///
/// Owns its registry, node pool and assignment table; there is no shared or
/// global state, so several queues can coexist.
#[derive(Debug, Clone, Default)]
pub struct TaskQueue {
    registry: TaskRegistry,
    manager: NodeAssignmentManager,
    options: QueueOptions,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: QueueOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> QueueOptions {
        self.options
    }

    pub fn add_task<I, S>(&mut self, id: &str, priority: Priority, dependencies: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<TaskId>,
    {
        self.registry.add_task(id, priority, dependencies)
    }

    /// Redefine a task according to the queue's
    /// [`UpdateMode`](crate::types::UpdateMode).
    pub fn update_task<I, S>(&mut self, id: &str, priority: Priority, dependencies: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<TaskId>,
    {
        self.registry
            .update_task(id, priority, dependencies, self.options.update_mode)
    }

    pub fn remove_task(&mut self, id: &str) {
        self.registry.remove_task(id);
    }

    pub fn mark_done(&mut self, id: &str) -> bool {
        self.registry.mark_done(id)
    }

    pub fn add_node(&mut self, id: &str) {
        self.manager.add_node(id);
    }

    /// Remove a node and redistribute all tasks. Returns the tasks it held.
    pub fn remove_node(&mut self, id: &str) -> Vec<TaskId> {
        self.manager
            .remove_node(id, &self.registry, self.options.reassign_scope)
    }

    /// Task ids in execution order.
    pub fn execution_order(&self) -> Vec<TaskId> {
        self.compute_execution_order().into_ids()
    }

    /// Full execution-order result, including the tasks left out of it.
    pub fn compute_execution_order(&self) -> ExecutionOrder {
        compute_registry_order(&self.registry)
    }

    /// Number of tasks the execution order currently leaves out.
    pub fn unscheduled_count(&self) -> usize {
        self.compute_execution_order().unscheduled_count()
    }

    pub fn assign_all(&mut self) {
        self.manager
            .assign_all(&self.registry, self.options.reassign_scope);
    }

    pub fn assignments(&self) -> &AssignmentTable {
        self.manager.assignments()
    }

    pub fn nodes(&self) -> &NodePool {
        self.manager.nodes()
    }

    pub fn registry(&self) -> &TaskRegistry {
        &self.registry
    }
}

/// A [`TaskQueue`] behind one lock, for callers on several threads.
///
/// Registry, pool and table are guarded together since an assignment run
/// reads all three. Clones share the same queue.
#[derive(Debug, Clone, Default)]
pub struct SharedTaskQueue {
    inner: Arc<Mutex<TaskQueue>>,
}

impl SharedTaskQueue {
    pub fn new(queue: TaskQueue) -> Self {
        Self {
            inner: Arc::new(Mutex::new(queue)),
        }
    }

    /// Run `f` with exclusive access to the queue.
    ///
    /// A lock poisoned by a panicking caller is recovered, not propagated.
    pub fn with<R>(&self, f: impl FnOnce(&mut TaskQueue) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Copy of the current queue state.
    pub fn snapshot(&self) -> TaskQueue {
        self.with(|queue| queue.clone())
    }
}
