#![allow(dead_code)]

use taskqueue::config::{RawScenarioFile, ScenarioFile, TaskEntry};
use taskqueue::registry::Priority;
use taskqueue::{QueueOptions, ReassignScope, TaskQueue, UpdateMode};

/// Builder for `TaskQueue` to simplify test setup.
///
/// Tasks are registered in the order they are added to the builder, so
/// dependencies must be added before their dependents.
pub struct TaskQueueBuilder {
    options: QueueOptions,
    tasks: Vec<TaskEntry>,
    nodes: Vec<String>,
}

impl TaskQueueBuilder {
    pub fn new() -> Self {
        Self {
            options: QueueOptions::default(),
            tasks: Vec::new(),
            nodes: Vec::new(),
        }
    }

    pub fn with_task(mut self, id: &str, priority: Priority, after: &[&str]) -> Self {
        self.tasks.push(TaskEntry::new(id, priority, after));
        self
    }

    pub fn with_node(mut self, id: &str) -> Self {
        self.nodes.push(id.to_string());
        self
    }

    pub fn with_nodes(mut self, ids: &[&str]) -> Self {
        self.nodes.extend(ids.iter().map(|s| s.to_string()));
        self
    }

    pub fn update_mode(mut self, mode: UpdateMode) -> Self {
        self.options.update_mode = mode;
        self
    }

    pub fn reassign_scope(mut self, scope: ReassignScope) -> Self {
        self.options.reassign_scope = scope;
        self
    }

    pub fn build(self) -> TaskQueue {
        let mut queue = TaskQueue::with_options(self.options);
        for entry in self.tasks {
            queue
                .add_task(&entry.id, entry.priority, entry.after)
                .expect("Failed to add task from builder");
        }
        for node in self.nodes {
            queue.add_node(&node);
        }
        queue
    }
}

impl Default for TaskQueueBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The five-task graph used throughout the tests:
/// A(3); B(2) after A; C(1) after A; D(3) after B, C; E(2) after C, D.
pub fn reference_graph() -> TaskQueueBuilder {
    TaskQueueBuilder::new()
        .with_task("A", 3, &[])
        .with_task("B", 2, &["A"])
        .with_task("C", 1, &["A"])
        .with_task("D", 3, &["B", "C"])
        .with_task("E", 2, &["C", "D"])
}

/// Builder for `ScenarioFile`.
pub struct ScenarioBuilder {
    raw: RawScenarioFile,
}

impl ScenarioBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawScenarioFile::default(),
        }
    }

    pub fn with_task(mut self, id: &str, priority: Priority, after: &[&str]) -> Self {
        self.raw.task.push(TaskEntry::new(id, priority, after));
        self
    }

    pub fn with_update(mut self, id: &str, priority: Priority, after: &[&str]) -> Self {
        self.raw.update.push(TaskEntry::new(id, priority, after));
        self
    }

    pub fn with_done(mut self, id: &str) -> Self {
        self.raw.done.push(id.to_string());
        self
    }

    pub fn with_nodes(mut self, ids: &[&str]) -> Self {
        self.raw.nodes.extend(ids.iter().map(|s| s.to_string()));
        self
    }

    pub fn with_failed_node(mut self, id: &str) -> Self {
        self.raw.failed_nodes.push(id.to_string());
        self
    }

    pub fn update_mode(mut self, mode: UpdateMode) -> Self {
        self.raw.config.update_mode = mode;
        self
    }

    pub fn reassign_scope(mut self, scope: ReassignScope) -> Self {
        self.raw.config.reassign_scope = scope;
        self
    }

    pub fn raw(self) -> RawScenarioFile {
        self.raw
    }

    pub fn build(self) -> ScenarioFile {
        ScenarioFile::try_from(self.raw).expect("Failed to build valid scenario from builder")
    }
}

impl Default for ScenarioBuilder {
    fn default() -> Self {
        Self::new()
    }
}
