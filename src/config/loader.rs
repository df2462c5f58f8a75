// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ProjectFile, RawProjectFile};
use crate::errors::Result;

/// Environment variable consulted by [`default_config_path`].
pub const CONFIG_ENV: &str = "GAPFILL_CONFIG";

/// Load a project file from a given path and return the raw `RawProjectFile`.
///
/// This only performs TOML deserialization; it does **not** check the
/// hierarchy. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawProjectFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let raw: RawProjectFile = toml::from_str(&contents)?;
    debug!(path = %path.display(), projects = raw.project.len(), "parsed project file");

    Ok(raw)
}

/// Load a project file from path and validate it.
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde`).
/// - Checks for:
///   - an empty file,
///   - unknown or self-referencing `parent` entries,
///   - cycles in the parent relation,
///   - `[config]` sanity.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ProjectFile> {
    let raw = load_from_path(&path)?;
    let config = ProjectFile::try_from(raw)?;
    Ok(config)
}

/// Default project file location.
///
/// `GAPFILL_CONFIG` if set and non-empty, else `Projects.toml` in the
/// current working directory.
pub fn default_config_path() -> PathBuf {
    match std::env::var(CONFIG_ENV) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from("Projects.toml"),
    }
}
