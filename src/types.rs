// src/types.rs

//! Behaviour switches shared by the registry, the assignment manager and the
//! scenario config.

use std::str::FromStr;

use serde::Deserialize;

/// How `update_task` replaces an existing task definition.
///
/// - `Replace`: remove the task, then add it again. The removal scrubs the id
///   from every other task's dependencies and is committed even when the
///   re-add fails validation (default behaviour).
/// - `Atomic`: validate the new definition with the old task still in place,
///   then swap it in. On failure nothing changes; on success the task keeps
///   its registry position and its dependents keep pointing at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateMode {
    Replace,
    Atomic,
}

impl Default for UpdateMode {
    fn default() -> Self {
        UpdateMode::Replace
    }
}

impl FromStr for UpdateMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "replace" => Ok(UpdateMode::Replace),
            "atomic" => Ok(UpdateMode::Atomic),
            other => Err(format!(
                "invalid update_mode: {other} (expected \"replace\" or \"atomic\")"
            )),
        }
    }
}

/// Which tasks an assignment run deals out to nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReassignScope {
    /// Every task in the execution order, regardless of status (default).
    All,
    /// Only tasks not marked done. Done tasks still satisfy their dependents
    /// when the order is computed.
    Outstanding,
}

impl Default for ReassignScope {
    fn default() -> Self {
        ReassignScope::All
    }
}

impl FromStr for ReassignScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(ReassignScope::All),
            "outstanding" => Ok(ReassignScope::Outstanding),
            other => Err(format!(
                "invalid reassign_scope: {other} (expected \"all\" or \"outstanding\")"
            )),
        }
    }
}

/// Options for a [`crate::queue::TaskQueue`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct QueueOptions {
    #[serde(default)]
    pub update_mode: UpdateMode,
    #[serde(default)]
    pub reassign_scope: ReassignScope,
}
