// src/logging.rs

//! `tracing` subscriber for the `gapfill` binary.
//!
//! The level comes from `--log-level`, then `GAPFILL_LOG`, then `info`.
//! Everything goes to stderr: stdout is reserved for the closure itself,
//! so `gapfill a b | xargs ...` keeps working with logging turned up.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt;

use crate::cli::LogLevel;

/// Environment variable read when no `--log-level` flag is given.
pub const LOG_ENV: &str = "GAPFILL_LOG";

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env_level = std::env::var(LOG_ENV).ok();
    let level = effective_level(cli_level, env_level.as_deref());

    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}

/// Pick the max level: an explicit flag wins, an unparsable env value is
/// ignored.
fn effective_level(cli_level: Option<LogLevel>, env_level: Option<&str>) -> Level {
    if let Some(lvl) = cli_level {
        return match lvl {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        };
    }

    match env_level.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        Some("error") => Level::ERROR,
        Some("warn" | "warning") => Level::WARN,
        Some("debug") => Level::DEBUG,
        Some("trace") => Level::TRACE,
        _ => Level::INFO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_environment() {
        assert_eq!(effective_level(Some(LogLevel::Error), Some("trace")), Level::ERROR);
    }

    #[test]
    fn environment_is_case_and_space_insensitive() {
        assert_eq!(effective_level(None, Some(" Warning ")), Level::WARN);
        assert_eq!(effective_level(None, Some("TRACE")), Level::TRACE);
    }

    #[test]
    fn unknown_or_missing_falls_back_to_info() {
        assert_eq!(effective_level(None, Some("loud")), Level::INFO);
        assert_eq!(effective_level(None, None), Level::INFO);
    }
}
