// src/config/validate.rs

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::config::model::{ProjectFile, RawProjectFile};
use crate::errors::{GapfillError, Result};

impl TryFrom<RawProjectFile> for ProjectFile {
    type Error = GapfillError;

    fn try_from(raw: RawProjectFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ProjectFile::new_unchecked(raw.config, raw.project))
    }
}

fn validate_raw_config(cfg: &RawProjectFile) -> Result<()> {
    ensure_has_projects(cfg)?;
    validate_global_config(cfg)?;
    validate_parents(cfg)?;
    validate_hierarchy(cfg)?;
    Ok(())
}

fn ensure_has_projects(cfg: &RawProjectFile) -> Result<()> {
    if cfg.project.is_empty() {
        return Err(GapfillError::ConfigError(
            "project file must contain at least one [project.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_global_config(cfg: &RawProjectFile) -> Result<()> {
    if cfg.config.max_depth == Some(0) {
        return Err(GapfillError::ConfigError(
            "[config].max_depth must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

fn validate_parents(cfg: &RawProjectFile) -> Result<()> {
    for (name, project) in cfg.project.iter() {
        let Some(parent) = project.parent.as_ref() else {
            continue;
        };
        if parent == name {
            return Err(GapfillError::ConfigError(format!(
                "project '{}' cannot be its own parent",
                name
            )));
        }
        if !cfg.project.contains_key(parent) {
            return Err(GapfillError::ConfigError(format!(
                "project '{}' has unknown parent '{}'",
                name, parent
            )));
        }
    }
    Ok(())
}

fn validate_hierarchy(cfg: &RawProjectFile) -> Result<()> {
    // Edge direction: parent -> child.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for name in cfg.project.keys() {
        graph.add_node(name.as_str());
    }

    for (name, project) in cfg.project.iter() {
        if let Some(parent) = project.parent.as_ref() {
            graph.add_edge(parent.as_str(), name.as_str(), ());
        }
    }

    // With one parent per node, a failed toposort means a parent cycle.
    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(GapfillError::HierarchyCycle(format!(
            "cycle detected in project hierarchy involving project '{}'",
            cycle.node_id()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::ProjectConfig;

    fn raw(projects: &[(&str, Option<&str>)]) -> RawProjectFile {
        let mut cfg = RawProjectFile::default();
        for (name, parent) in projects {
            cfg.project.insert(
                name.to_string(),
                ProjectConfig {
                    parent: parent.map(str::to_string),
                },
            );
        }
        cfg
    }

    #[test]
    fn forest_is_valid() {
        let cfg = raw(&[("r1", None), ("r2", None), ("c", Some("r2"))]);
        assert!(ProjectFile::try_from(cfg).is_ok());
    }

    #[test]
    fn empty_file_is_rejected() {
        assert!(matches!(
            ProjectFile::try_from(RawProjectFile::default()),
            Err(GapfillError::ConfigError(_))
        ));
    }

    #[test]
    fn three_cycle_is_rejected() {
        let cfg = raw(&[("a", Some("c")), ("b", Some("a")), ("c", Some("b"))]);
        match ProjectFile::try_from(cfg) {
            Err(GapfillError::HierarchyCycle(msg)) => assert!(msg.contains("cycle detected")),
            other => panic!("expected HierarchyCycle, got {other:?}"),
        }
    }

    #[test]
    fn zero_max_depth_is_rejected() {
        let mut cfg = raw(&[("a", None)]);
        cfg.config.max_depth = Some(0);
        assert!(matches!(
            ProjectFile::try_from(cfg),
            Err(GapfillError::ConfigError(msg)) if msg.contains("max_depth")
        ));
    }
}
