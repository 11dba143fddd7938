// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{RawScenarioFile, ScenarioFile};
use crate::errors::Result;

/// Load a scenario file from a given path and return the raw `RawScenarioFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawScenarioFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let scenario: RawScenarioFile = toml::from_str(&contents)?;

    Ok(scenario)
}

/// Load a scenario file from path and run validation.
///
/// Dependency references are not checked here; the registry rejects unknown
/// dependencies when the scenario is applied.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ScenarioFile> {
    let raw = load_from_path(&path)?;
    let scenario = ScenarioFile::try_from(raw)?;
    Ok(scenario)
}

/// Default scenario path: `Taskqueue.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Taskqueue.toml")
}
