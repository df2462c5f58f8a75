#![allow(dead_code)]

use std::collections::HashMap;

use gapfill::config::{ConfigSection, ProjectConfig, ProjectFile, RawProjectFile};
use gapfill::tree::{ProjectEntry, ProjectId, ProjectTree};

/// Builder for `ProjectFile` to simplify test setup.
pub struct ProjectFileBuilder {
    config: RawProjectFile,
}

impl ProjectFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawProjectFile {
                config: ConfigSection::default(),
                project: Default::default(),
            },
        }
    }

    pub fn with_root(mut self, name: &str) -> Self {
        self.config
            .project
            .insert(name.to_string(), ProjectConfig { parent: None });
        self
    }

    pub fn with_project(mut self, name: &str, parent: &str) -> Self {
        self.config.project.insert(
            name.to_string(),
            ProjectConfig {
                parent: Some(parent.to_string()),
            },
        );
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.config.config.max_depth = Some(depth);
        self
    }

    pub fn raw(self) -> RawProjectFile {
        self.config
    }

    pub fn build(self) -> ProjectFile {
        ProjectFile::try_from(self.config).expect("Failed to build valid project file from builder")
    }
}

impl Default for ProjectFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `ProjectTree`, keeping declaration order as id order.
///
/// `build_unchecked` skips validation so tests can describe broken
/// hierarchies (cycles, self-parents).
pub struct ProjectTreeBuilder {
    projects: Vec<(String, Option<String>)>,
}

impl ProjectTreeBuilder {
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
        }
    }

    pub fn root(mut self, name: &str) -> Self {
        self.projects.push((name.to_string(), None));
        self
    }

    pub fn child(mut self, name: &str, parent: &str) -> Self {
        self.projects
            .push((name.to_string(), Some(parent.to_string())));
        self
    }

    /// Validated tree; ids follow sorted names like a loaded project file.
    pub fn build(self) -> ProjectTree {
        let mut file = ProjectFileBuilder::new();
        for (name, parent) in &self.projects {
            file = match parent {
                Some(parent) => file.with_project(name, parent),
                None => file.with_root(name),
            };
        }
        ProjectTree::from_config(&file.build()).expect("validated project file resolves every parent")
    }

    pub fn build_unchecked(self) -> ProjectTree {
        let ids: HashMap<&str, ProjectId> = self
            .projects
            .iter()
            .enumerate()
            .map(|(i, (name, _))| (name.as_str(), ProjectId::from_index(i)))
            .collect();

        let entries = self
            .projects
            .iter()
            .map(|(name, parent)| {
                let parent = parent.as_deref().map(|p| {
                    *ids.get(p)
                        .unwrap_or_else(|| panic!("unknown parent '{p}' for '{name}'"))
                });
                ProjectEntry::new(name.clone(), parent)
            })
            .collect();

        ProjectTree::new_unchecked(entries)
    }
}

impl Default for ProjectTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// `root -> a -> {a_b, a_c}`, `root -> d -> d_e -> d_e_f`
pub fn sample_tree() -> ProjectTree {
    ProjectTreeBuilder::new()
        .root("root")
        .child("a", "root")
        .child("a_b", "a")
        .child("a_c", "a")
        .child("d", "root")
        .child("d_e", "d")
        .child("d_e_f", "d_e")
        .build()
}
