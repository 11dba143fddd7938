// src/config/validate.rs

use std::collections::HashSet;

use crate::config::model::{RawScenarioFile, ScenarioFile};
use crate::errors::{Result, TaskQueueError};

impl TryFrom<RawScenarioFile> for ScenarioFile {
    type Error = crate::errors::TaskQueueError;

    fn try_from(raw: RawScenarioFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_scenario(&raw)?;
        Ok(ScenarioFile::new_unchecked(raw))
    }
}

fn validate_raw_scenario(raw: &RawScenarioFile) -> Result<()> {
    ensure_has_tasks(raw)?;
    validate_task_ids(raw)?;
    validate_nodes(raw)?;
    validate_done(raw)?;
    Ok(())
}

fn ensure_has_tasks(raw: &RawScenarioFile) -> Result<()> {
    if raw.task.is_empty() {
        return Err(TaskQueueError::ConfigError(
            "scenario must contain at least one [[task]] entry".to_string(),
        ));
    }
    Ok(())
}

fn validate_task_ids(raw: &RawScenarioFile) -> Result<()> {
    for (section, entries) in [("task", &raw.task), ("update", &raw.update)] {
        for entry in entries.iter() {
            if entry.id.trim().is_empty() {
                return Err(TaskQueueError::ConfigError(format!(
                    "[[{section}]] entry has an empty `id`"
                )));
            }
            if let Some(dep) = entry.after.iter().find(|dep| dep.trim().is_empty()) {
                return Err(TaskQueueError::ConfigError(format!(
                    "[[{section}]] '{}' has an empty dependency '{dep}' in `after`",
                    entry.id
                )));
            }
        }
    }
    Ok(())
}

fn validate_nodes(raw: &RawScenarioFile) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();
    for node in raw.nodes.iter() {
        if node.trim().is_empty() {
            return Err(TaskQueueError::ConfigError(
                "`nodes` contains an empty node id".to_string(),
            ));
        }
        if !seen.insert(node.as_str()) {
            return Err(TaskQueueError::ConfigError(format!(
                "node '{node}' is listed more than once in `nodes`"
            )));
        }
    }

    for node in raw.failed_nodes.iter() {
        if !seen.contains(node.as_str()) {
            return Err(TaskQueueError::ConfigError(format!(
                "`failed_nodes` references unknown node '{node}'"
            )));
        }
    }
    Ok(())
}

fn validate_done(raw: &RawScenarioFile) -> Result<()> {
    let declared: HashSet<&str> = raw
        .task
        .iter()
        .chain(raw.update.iter())
        .map(|entry| entry.id.as_str())
        .collect();

    for id in raw.done.iter() {
        if !declared.contains(id.as_str()) {
            return Err(TaskQueueError::ConfigError(format!(
                "`done` references unknown task '{id}'"
            )));
        }
    }
    Ok(())
}
