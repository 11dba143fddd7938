// src/config/model.rs

use serde::Deserialize;

use crate::registry::{Priority, TaskId};
use crate::types::QueueOptions;

/// Scenario file as read from TOML, before validation.
///
/// ```toml
/// nodes = ["node1", "node2", "node3"]
/// failed_nodes = ["node2"]
///
/// [config]
/// update_mode = "replace"
/// reassign_scope = "all"
///
/// [[task]]
/// id = "A"
/// priority = 3
///
/// [[task]]
/// id = "B"
/// priority = 2
/// after = ["A"]
///
/// [[update]]
/// id = "B"
/// priority = 1
/// ```
///
/// Top-level keys must come before the first table. All sections are
/// optional and default to empty, but validation requires at least one task.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawScenarioFile {
    /// Queue behaviour from `[config]`.
    #[serde(default)]
    pub config: QueueOptions,

    /// Tasks from `[[task]]`, registered in file order.
    #[serde(default)]
    pub task: Vec<TaskEntry>,

    /// Redefinitions from `[[update]]`, applied after all tasks.
    #[serde(default)]
    pub update: Vec<TaskEntry>,

    /// Tasks to mark done before assignment.
    #[serde(default)]
    pub done: Vec<TaskId>,

    /// Nodes added to the pool, in order.
    #[serde(default)]
    pub nodes: Vec<String>,

    /// Nodes removed after all nodes are added.
    #[serde(default)]
    pub failed_nodes: Vec<String>,
}

/// A `[[task]]` or `[[update]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskEntry {
    pub id: TaskId,

    pub priority: Priority,

    /// Dependency list: this task is ordered after every task listed here.
    #[serde(default)]
    pub after: Vec<TaskId>,
}

impl TaskEntry {
    pub fn new(id: &str, priority: Priority, after: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            priority,
            after: after.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A validated scenario.
///
/// Only constructible through `TryFrom<RawScenarioFile>`, so holding one
/// means the checks in `config::validate` passed.
#[derive(Debug, Clone)]
pub struct ScenarioFile {
    pub config: QueueOptions,
    pub task: Vec<TaskEntry>,
    pub update: Vec<TaskEntry>,
    pub done: Vec<TaskId>,
    pub nodes: Vec<String>,
    pub failed_nodes: Vec<String>,
}

impl ScenarioFile {
    pub(crate) fn new_unchecked(raw: RawScenarioFile) -> Self {
        Self {
            config: raw.config,
            task: raw.task,
            update: raw.update,
            done: raw.done,
            nodes: raw.nodes,
            failed_nodes: raw.failed_nodes,
        }
    }
}
