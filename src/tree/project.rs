// src/tree/project.rs

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::config::model::ProjectFile;
use crate::errors::{GapfillError, Result};
use crate::tree::node::TreeNode;

/// Index of a project inside its [`ProjectTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(usize);

impl ProjectId {
    /// Id of the `index`-th arena slot.
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// One arena slot: a project name and its parent handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    pub name: String,
    pub parent: Option<ProjectId>,
}

impl ProjectEntry {
    pub fn new(name: impl Into<String>, parent: Option<ProjectId>) -> Self {
        Self {
            name: name.into(),
            parent,
        }
    }
}

/// Arena of projects keyed by [`ProjectId`], with a name index.
///
/// The tree only stores parent links; children are never looked up.
#[derive(Debug, Clone, Default)]
pub struct ProjectTree {
    entries: Vec<ProjectEntry>,
    by_name: HashMap<String, ProjectId>,
}

impl ProjectTree {
    /// Build the tree from a validated [`ProjectFile`].
    ///
    /// Ids follow the sorted project names of the file. A `parent` that
    /// names no project is a [`GapfillError::ConfigError`].
    pub fn from_config(cfg: &ProjectFile) -> Result<Self> {
        let by_name: HashMap<String, ProjectId> = cfg
            .projects()
            .keys()
            .enumerate()
            .map(|(i, name)| (name.clone(), ProjectId(i)))
            .collect();

        let entries = cfg
            .projects()
            .iter()
            .map(|(name, project)| {
                let parent = match project.parent.as_deref() {
                    Some(parent) => Some(by_name.get(parent).copied().ok_or_else(|| {
                        GapfillError::ConfigError(format!(
                            "project '{}' has unknown parent '{}'",
                            name, parent
                        ))
                    })?),
                    None => None,
                };
                Ok(ProjectEntry::new(name.clone(), parent))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries, by_name })
    }

    /// Build a tree straight from arena entries, without checking the
    /// hierarchy.
    ///
    /// Parent ids must be in range; cycles are allowed here and only show up
    /// when something walks the tree. If two entries share a name, lookups
    /// by name resolve to the first.
    pub fn new_unchecked(entries: Vec<ProjectEntry>) -> Self {
        let mut by_name = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            by_name.entry(entry.name.clone()).or_insert(ProjectId(i));
        }
        Self { entries, by_name }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Handle for `id`, or `None` if it is out of range for this tree.
    pub fn project(&self, id: ProjectId) -> Option<ProjectRef<'_>> {
        (id.0 < self.entries.len()).then_some(ProjectRef { tree: self, id })
    }

    /// Look a project up by name.
    pub fn get(&self, name: &str) -> Option<ProjectRef<'_>> {
        self.by_name
            .get(name)
            .map(|&id| ProjectRef { tree: self, id })
    }

    /// Resolve a list of names into handles, keeping order and duplicates.
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<ProjectRef<'_>>> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.get(name)
                    .ok_or_else(|| GapfillError::UnknownProject(name.to_string()))
            })
            .collect()
    }

    /// All projects in id order.
    pub fn iter(&self) -> impl Iterator<Item = ProjectRef<'_>> {
        (0..self.entries.len()).map(move |i| ProjectRef {
            tree: self,
            id: ProjectId(i),
        })
    }

    /// Projects without a parent.
    pub fn roots(&self) -> impl Iterator<Item = ProjectRef<'_>> {
        self.iter().filter(|p| p.parent().is_none())
    }

    /// Colon-separated path from the root down to `id`, e.g. `:root:a:a_b`.
    ///
    /// Fails with [`GapfillError::MalformedHierarchy`] if the walk upwards
    /// visits more projects than the tree holds.
    pub fn path_of(&self, id: ProjectId) -> Result<String> {
        let mut names: Vec<&str> = Vec::new();
        let mut cursor = Some(id);

        while let Some(current) = cursor {
            if names.len() >= self.entries.len() {
                return Err(GapfillError::MalformedHierarchy {
                    node: self.entries[id.0].name.clone(),
                    walked: names.len(),
                });
            }
            let entry = &self.entries[current.0];
            names.push(entry.name.as_str());
            cursor = entry.parent;
        }

        let mut path = String::new();
        for name in names.iter().rev() {
            path.push(':');
            path.push_str(name);
        }
        Ok(path)
    }
}

/// Borrowed handle to one project of a [`ProjectTree`].
///
/// Equality and hashing go by id within the same tree, never by name.
#[derive(Clone, Copy)]
pub struct ProjectRef<'a> {
    tree: &'a ProjectTree,
    id: ProjectId,
}

impl<'a> ProjectRef<'a> {
    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn name(&self) -> &'a str {
        &self.tree.entries[self.id.0].name
    }

    pub fn path(&self) -> Result<String> {
        self.tree.path_of(self.id)
    }
}

impl TreeNode for ProjectRef<'_> {
    fn parent(&self) -> Option<Self> {
        self.tree.entries[self.id.0].parent.map(|id| ProjectRef {
            tree: self.tree,
            id,
        })
    }
}

impl PartialEq for ProjectRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for ProjectRef<'_> {}

impl Hash for ProjectRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ProjectRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ProjectRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
