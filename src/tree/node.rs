// src/tree/node.rs

use std::fmt::Debug;
use std::hash::Hash;

/// A position in a rooted tree (or forest) that knows only its parent.
///
/// Identity is whatever `Eq` + `Hash` say it is; the closure never looks at
/// node content. Implementors are expected to be cheap handles (indices,
/// references into an arena), since they get cloned into the output.
///
/// The parent relation must be acyclic and of finite depth. Code walking it
/// reports a violation as
/// [`GapfillError::MalformedHierarchy`](crate::errors::GapfillError::MalformedHierarchy)
/// rather than looping.
pub trait TreeNode: Clone + Eq + Hash + Debug {
    /// Immediate parent, or `None` for a root.
    fn parent(&self) -> Option<Self>;
}
