// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod tree;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, error, info};

use crate::cli::CliArgs;
use crate::config::loader::{default_config_path, load_and_validate};
use crate::config::model::ProjectFile;
use crate::tree::ProjectTree;

pub use crate::tree::{GapFiller, TreeNode, fill_gaps, is_gap_free};

/// High-level entry point used by `main.rs`; writes to stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_to(&args, &mut out)
}

/// Same as [`run`], writing the result into `out`.
///
/// This wires together:
/// - project file loading + validation
/// - project tree construction
/// - resolving the selection (all projects if none given)
/// - the ancestor closure
pub fn run_to<W: Write>(args: &CliArgs, out: &mut W) -> Result<()> {
    let config_path = args
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);

    let cfg = load_and_validate(&config_path)
        .with_context(|| format!("failed to load project file {}", config_path.display()))?;
    let tree = ProjectTree::from_config(&cfg)?;
    info!(path = %config_path.display(), projects = tree.len(), "loaded project tree");

    if args.dry_run {
        print_dry_run(&cfg, &tree, out)?;
        return Ok(());
    }

    let selection = if args.projects.is_empty() {
        tree.iter().collect::<Vec<_>>()
    } else {
        tree.resolve(&args.projects)?
    };
    debug!(?selection, "resolved selection");

    let closed = cfg.gap_filler().fill(&selection).inspect_err(|e| {
        error!(error = %e, "project hierarchy is malformed");
    })?;
    info!(
        selected = selection.len(),
        closed = closed.len(),
        "filled gaps in project selection"
    );

    for project in &closed {
        if args.paths {
            writeln!(out, "{}", project.path()?)?;
        } else {
            writeln!(out, "{project}")?;
        }
    }

    Ok(())
}

/// Simple dry-run output: print config, projects and their parents.
fn print_dry_run<W: Write>(cfg: &ProjectFile, tree: &ProjectTree, out: &mut W) -> Result<()> {
    writeln!(out, "gapfill dry-run")?;
    match cfg.config().max_depth {
        Some(depth) => writeln!(out, "  config.max_depth = {depth}")?,
        None => writeln!(out, "  config.max_depth = unbounded")?,
    }
    writeln!(out)?;

    writeln!(out, "projects ({}):", tree.len())?;
    for project in tree.iter() {
        writeln!(out, "  - {project}")?;
        if let Some(parent) = project.parent() {
            writeln!(out, "      parent: {parent}")?;
        }
    }

    let roots: Vec<_> = tree.roots().collect();
    writeln!(out)?;
    writeln!(out, "roots: {roots:?}")?;

    debug!("dry-run complete (nothing computed)");
    Ok(())
}
