// src/tree/gaps.rs

//! Ancestor closure ("filling the gaps") over a selection of tree nodes.
//!
//! Given nodes in some order, [`fill_gaps`] returns a new list in which every
//! node's ancestors are present and listed before it, each node appears once,
//! and the input order is kept wherever the ancestry allows it.
//!
//! For each input node we walk upwards until we hit a node that is already
//! in the output (its ancestors are then in the output too) or a root, and
//! append the walked chain root-first. Every parent edge is therefore
//! followed at most once per call, no matter how many input nodes share it.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::errors::{GapfillError, Result};
use crate::tree::node::TreeNode;

/// Configurable ancestor-closure builder.
///
/// The default filler relies on cycle detection alone. A depth bound can be
/// added with [`GapFiller::with_max_depth`] to reject implausibly deep
/// chains early.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GapFiller {
    max_depth: Option<usize>,
}

impl GapFiller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any single upward walk that would collect more than `max_depth`
    /// missing nodes.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Build the gap-free closure of `nodes`.
    ///
    /// The input is only read. The result is a fresh `Vec` in which:
    /// - every input node appears exactly once,
    /// - every parent appears before its children,
    /// - an ancestor shared by several input nodes is emitted while
    ///   processing the first of them.
    ///
    /// An input that is already gap-free is returned unchanged.
    ///
    /// Returns [`GapfillError::MalformedHierarchy`] if the parent relation
    /// cycles, or if a walk exceeds the depth bound.
    pub fn fill<N: TreeNode>(&self, nodes: &[N]) -> Result<Vec<N>> {
        let mut closed: Vec<N> = Vec::with_capacity(nodes.len());
        let mut placed: HashSet<N> = HashSet::with_capacity(nodes.len());

        // Reused across input nodes: the not-yet-placed part of the current
        // ancestor chain, leaf first.
        let mut chain: Vec<N> = Vec::new();
        let mut on_chain: HashSet<N> = HashSet::new();

        for node in nodes {
            let mut cursor = Some(node.clone());

            while let Some(current) = cursor {
                if placed.contains(&current) {
                    break;
                }
                if on_chain.contains(&current) {
                    return Err(self.malformed(&current, chain.len()));
                }
                if self.max_depth.is_some_and(|limit| chain.len() >= limit) {
                    return Err(self.malformed(&current, chain.len()));
                }

                cursor = current.parent();
                on_chain.insert(current.clone());
                chain.push(current);
            }

            if chain.len() > 1 {
                trace!(node = ?node, added = chain.len(), "filled ancestor chain");
            }

            on_chain.clear();
            while let Some(missing) = chain.pop() {
                placed.insert(missing.clone());
                closed.push(missing);
            }
        }

        debug!(
            input = nodes.len(),
            output = closed.len(),
            "computed ancestor closure"
        );

        Ok(closed)
    }

    fn malformed<N: TreeNode>(&self, node: &N, walked: usize) -> GapfillError {
        GapfillError::MalformedHierarchy {
            node: format!("{node:?}"),
            walked,
        }
    }
}

/// Closure of `nodes` with the default [`GapFiller`].
pub fn fill_gaps<N: TreeNode>(nodes: &[N]) -> Result<Vec<N>> {
    GapFiller::default().fill(nodes)
}

/// Returns `true` if `nodes` has no duplicates and every parent is listed
/// before its child.
pub fn is_gap_free<N: TreeNode>(nodes: &[N]) -> bool {
    let mut seen: HashSet<N> = HashSet::with_capacity(nodes.len());
    nodes.iter().all(|node| {
        let parent_seen = node.parent().is_none_or(|p| seen.contains(&p));
        parent_seen && seen.insert(node.clone())
    })
}
