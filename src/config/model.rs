// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::tree::GapFiller;

/// Top-level project file as read from TOML, before validation.
///
/// ```toml
/// [config]
/// max_depth = 64
///
/// [project.root]
///
/// [project.a]
/// parent = "root"
/// ```
///
/// All sections are optional at this stage; [`ProjectFile::try_from`]
/// rejects files without projects.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProjectFile {
    /// Global behaviour config from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// All projects from `[project.<name>]`, keyed by name.
    #[serde(default)]
    pub project: BTreeMap<String, ProjectConfig>,
}

/// Validated project file.
///
/// Fields are private: outside the crate the only way in is
/// `TryFrom<RawProjectFile>`, so every parent exists and the hierarchy is
/// acyclic.
#[derive(Debug, Clone)]
pub struct ProjectFile {
    config: ConfigSection,
    project: BTreeMap<String, ProjectConfig>,
}

impl ProjectFile {
    pub(crate) fn new_unchecked(
        config: ConfigSection,
        project: BTreeMap<String, ProjectConfig>,
    ) -> Self {
        Self { config, project }
    }

    pub fn config(&self) -> &ConfigSection {
        &self.config
    }

    /// Projects keyed by name.
    pub fn projects(&self) -> &BTreeMap<String, ProjectConfig> {
        &self.project
    }

    /// Closure builder configured from `[config]`.
    pub fn gap_filler(&self) -> GapFiller {
        match self.config.max_depth {
            Some(depth) => GapFiller::with_max_depth(depth),
            None => GapFiller::new(),
        }
    }
}

/// `[config]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigSection {
    /// Upper bound on how many missing ancestors a single project may pull
    /// in. Unbounded when absent.
    #[serde(default)]
    pub max_depth: Option<usize>,
}

/// `[project.<name>]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectConfig {
    /// Name of the parent project; absent for a root.
    #[serde(default)]
    pub parent: Option<String>,
}
