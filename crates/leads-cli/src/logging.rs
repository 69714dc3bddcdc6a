// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt};

/// Where log lines go. The TUI owns the terminal, so interactive sessions
/// either log to a file or not at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Off,
}

impl LogTarget {
    pub fn for_session(list_mode: bool, file: Option<PathBuf>) -> Self {
        match (file, list_mode) {
            (Some(path), _) => Self::File(path),
            (None, true) => Self::Stderr,
            (None, false) => Self::Off,
        }
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `default_level`.
///
/// Later calls are no-ops.
pub fn init_logging(default_level: &str, target: &LogTarget) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match target {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => {
            fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .try_init()
                .ok();
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| {
                    format!("open log file {}; fix or remove [log].file", path.display())
                })?;
            fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .ok();
        }
    }

    tracing::debug!(?target, "logging initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{LogTarget, init_logging};
    use anyhow::Result;
    use std::path::PathBuf;

    #[test]
    fn session_target_prefers_configured_file() {
        let path = PathBuf::from("/tmp/leads.log");
        assert_eq!(
            LogTarget::for_session(false, Some(path.clone())),
            LogTarget::File(path.clone())
        );
        assert_eq!(
            LogTarget::for_session(true, Some(path.clone())),
            LogTarget::File(path)
        );
    }

    #[test]
    fn session_target_without_file_depends_on_mode() {
        assert_eq!(LogTarget::for_session(true, None), LogTarget::Stderr);
        assert_eq!(LogTarget::for_session(false, None), LogTarget::Off);
    }

    #[test]
    fn off_target_installs_nothing() -> Result<()> {
        init_logging("debug", &LogTarget::Off)
    }

    #[test]
    fn unwritable_log_file_is_reported() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("missing-dir").join("leads.log");
        let error = init_logging("info", &LogTarget::File(path))
            .expect_err("log file in a missing directory should fail");
        assert!(error.to_string().contains("[log].file"));
        Ok(())
    }
}
