// src/scheduler/order.rs

use crate::registry::TaskId;

/// Result of an execution-order computation.
///
/// `ids` lists every task whose full dependency closure could be placed,
/// each after all of its direct dependencies. `unscheduled` lists the rest,
/// in registry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionOrder {
    ids: Vec<TaskId>,
    unscheduled: Vec<TaskId>,
}

impl ExecutionOrder {
    pub fn new(ids: Vec<TaskId>, unscheduled: Vec<TaskId>) -> Self {
        Self { ids, unscheduled }
    }

    pub fn ids(&self) -> &[TaskId] {
        &self.ids
    }

    pub fn into_ids(self) -> Vec<TaskId> {
        self.ids
    }

    /// Tasks left out of the order because they never became ready.
    pub fn unscheduled(&self) -> &[TaskId] {
        &self.unscheduled
    }

    pub fn unscheduled_count(&self) -> usize {
        self.unscheduled.len()
    }

    /// `true` if every registered task was placed.
    pub fn is_complete(&self) -> bool {
        self.unscheduled.is_empty()
    }

    /// Position of a task in the order, if it was placed.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|t| t == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
