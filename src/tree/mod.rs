// src/tree/mod.rs

//! Tree model and ancestor closure.
//!
//! - [`node`] defines the one capability the closure needs from a node:
//!   its parent, plus identity.
//! - [`gaps`] holds the closure itself ([`fill_gaps`] / [`GapFiller`]).
//! - [`project`] is the concrete project tree loaded from a project file.

pub mod gaps;
pub mod node;
pub mod project;

pub use gaps::{GapFiller, fill_gaps, is_gap_free};
pub use node::TreeNode;
pub use project::{ProjectEntry, ProjectId, ProjectRef, ProjectTree};
