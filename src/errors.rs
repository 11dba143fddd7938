// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

use crate::registry::TaskId;

#[derive(Error, Debug)]
pub enum TaskQueueError {
    #[error("Task already exists: {0} (task ids must be unique)")]
    DuplicateTask(TaskId),

    #[error("Task '{task}' has unknown dependency '{dependency}'")]
    UnknownDependency { task: TaskId, dependency: TaskId },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TaskQueueError>;
