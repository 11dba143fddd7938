// src/registry/mod.rs

//! Canonical task storage and the dependency relation between tasks.
//!
//! - [`task`] holds the task definition and its completion status.
//! - [`graph`] holds the dependency graph kept in lockstep with the tasks.

pub mod graph;
pub mod task;

pub use graph::DependencyGraph;
pub use task::{Priority, Task, TaskId, TaskStatus};

use std::collections::BTreeSet;

use indexmap::IndexMap;
use tracing::debug;

use crate::errors::{Result, TaskQueueError};
use crate::types::UpdateMode;

/// Owns every task and the dependency graph between them.
///
/// Invariants held after every public call:
/// - task ids are unique;
/// - every dependency was a registered task when its dependent was created;
/// - no task references a removed task;
/// - the task map and the graph contain the same ids in the same order.
#[derive(Debug, Clone, Default)]
pub struct TaskRegistry {
    tasks: IndexMap<TaskId, Task>,
    graph: DependencyGraph,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new task.
    ///
    /// Fails with [`TaskQueueError::DuplicateTask`] if `id` is taken and with
    /// [`TaskQueueError::UnknownDependency`] if any dependency is not a
    /// registered task. A failed call leaves the registry untouched.
    pub fn add_task<I, S>(&mut self, id: &str, priority: Priority, dependencies: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<TaskId>,
    {
        if self.tasks.contains_key(id) {
            return Err(TaskQueueError::DuplicateTask(id.to_string()));
        }

        let task = Task::new(id, priority, dependencies);
        self.ensure_dependencies_exist(&task)?;

        self.graph.insert(id, &task.dependencies);
        debug!(task = %id, priority, deps = ?task.dependencies, "registry: task added");
        self.tasks.insert(id.to_string(), task);

        Ok(())
    }

    /// Remove a task and scrub it from every other task's dependencies.
    ///
    /// Removing an unknown id is a no-op. Returns the removed task, if any.
    pub fn remove_task(&mut self, id: &str) -> Option<Task> {
        let removed = self.tasks.shift_remove(id);
        self.graph.remove(id);

        for task in self.tasks.values_mut() {
            task.dependencies.remove(id);
        }

        if removed.is_some() {
            debug!(task = %id, "registry: task removed");
        }
        removed
    }

    /// Redefine a task's priority and dependencies.
    ///
    /// See [`UpdateMode`] for how the two modes differ on failure.
    pub fn update_task<I, S>(
        &mut self,
        id: &str,
        priority: Priority,
        dependencies: I,
        mode: UpdateMode,
    ) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<TaskId>,
    {
        match mode {
            UpdateMode::Replace => {
                self.remove_task(id);
                self.add_task(id, priority, dependencies)
            }
            UpdateMode::Atomic => self.swap_task(id, priority, dependencies),
        }
    }

    /// Mark a task as done. Returns `false` for unknown ids.
    pub fn mark_done(&mut self, id: &str) -> bool {
        match self.tasks.get_mut(id) {
            Some(task) => {
                task.status = TaskStatus::Done;
                debug!(task = %id, "registry: task marked done");
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tasks.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All tasks in registration order.
    pub fn tasks(&self) -> &IndexMap<TaskId, Task> {
        &self.tasks
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    fn ensure_dependencies_exist(&self, task: &Task) -> Result<()> {
        for dep in task.dependencies.iter() {
            if !self.tasks.contains_key(dep) {
                return Err(TaskQueueError::UnknownDependency {
                    task: task.id.clone(),
                    dependency: dep.clone(),
                });
            }
        }
        Ok(())
    }

    /// Validate-then-swap variant of `update_task`.
    fn swap_task<I, S>(&mut self, id: &str, priority: Priority, dependencies: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<TaskId>,
    {
        let task = Task::new(id, priority, dependencies);

        // A task cannot be its own prerequisite; after a remove-then-add it
        // would not exist at validation time either.
        if task.dependencies.contains(id) {
            return Err(TaskQueueError::UnknownDependency {
                task: id.to_string(),
                dependency: id.to_string(),
            });
        }
        self.ensure_dependencies_exist(&task)?;

        let deps: BTreeSet<TaskId> = task.dependencies.clone();
        match self.tasks.get_mut(id) {
            Some(existing) => {
                *existing = task;
                self.graph.replace_dependencies(id, &deps);
                debug!(task = %id, priority, deps = ?deps, "registry: task swapped in place");
            }
            None => {
                self.graph.insert(id, &deps);
                self.tasks.insert(id.to_string(), task);
                debug!(task = %id, priority, deps = ?deps, "registry: task added by update");
            }
        }

        Ok(())
    }
}
