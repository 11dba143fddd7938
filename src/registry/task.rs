// src/registry/task.rs

//! Task definition and completion status.

use std::collections::BTreeSet;
use std::fmt;

/// Unique task identifier.
pub type TaskId = String;

/// Task priority. Higher is more urgent; the range is not checked.
pub type Priority = i32;

/// Completion status of a task.
///
/// Only consulted by assignment runs using
/// [`ReassignScope::Outstanding`](crate::types::ReassignScope::Outstanding);
/// the execution order itself ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    Pending,
    Done,
}

/// A unit of work with a priority and a set of prerequisite tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub priority: Priority,
    /// Tasks that must appear earlier in any execution order.
    pub dependencies: BTreeSet<TaskId>,
    pub status: TaskStatus,
}

impl Task {
    pub fn new<I, S>(id: impl Into<TaskId>, priority: Priority, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TaskId>,
    {
        Self {
            id: id.into(),
            priority,
            dependencies: dependencies.into_iter().map(Into::into).collect(),
            status: TaskStatus::Pending,
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (priority {}", self.id, self.priority)?;
        if !self.dependencies.is_empty() {
            let deps: Vec<&str> = self.dependencies.iter().map(String::as_str).collect();
            write!(f, ", after {}", deps.join(", "))?;
        }
        write!(f, ")")
    }
}
