// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `gapfill`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gapfill",
    version,
    about = "Complete a selection of projects with every ancestor it is missing.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the project file (TOML).
    ///
    /// Default: `$GAPFILL_CONFIG`, else `Projects.toml` in the current
    /// working directory.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `GAPFILL_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the project tree, but don't compute anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Print full `:root:child` paths instead of bare project names.
    #[arg(long)]
    pub paths: bool,

    /// Projects to close over, in order. Empty means every project.
    #[arg(value_name = "PROJECT")]
    pub projects: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_projects_keep_order() {
        let args = CliArgs::parse_from(["gapfill", "--paths", "b", "a", "b"]);
        assert!(args.paths);
        assert!(!args.dry_run);
        assert_eq!(args.config, None);
        assert_eq!(args.projects, vec!["b", "a", "b"]);
    }

    #[test]
    fn log_level_is_parsed() {
        let args = CliArgs::parse_from(["gapfill", "--log-level", "debug", "--config", "x.toml"]);
        assert!(matches!(args.log_level, Some(LogLevel::Debug)));
        assert_eq!(args.config.as_deref(), Some("x.toml"));
    }
}
