//! Integration test harness for create-refine-app.
//!
//! [`FakeCompanion`] stands in for superplate: a shell script that appends
//! each argument it receives to a log file and exits with a chosen status.
//! [`dispatcher_command`] builds a `Command` for the real binary that is
//! wired to the fake through the override environment variable.

#![cfg(unix)]

use anyhow::{Context, Result};
use create_refine_app::companion::OVERRIDE_ENV;
use create_refine_app::logging::LOG_ENV;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub struct FakeCompanion {
    // Keeps the script and log alive for the duration of the test.
    _dir: TempDir,
    program: PathBuf,
    log: PathBuf,
}

impl FakeCompanion {
    /// A fake superplate that records its arguments and exits with `exit_code`.
    pub fn new(exit_code: i32) -> Result<Self> {
        let dir = tempfile::tempdir().context("Failed to create temp dir")?;
        let program = dir.path().join("superplate");
        let log = dir.path().join("argv.log");

        let script = format!(
            "#!/bin/sh\n\
             : > '{log}'\n\
             for arg in \"$@\"; do\n\
             \tprintf '%s\\n' \"$arg\" >> '{log}'\n\
             done\n\
             exit {exit_code}\n",
            log = log.display(),
        );
        fs::write(&program, script)
            .with_context(|| format!("Failed to write {}", program.display()))?;
        fs::set_permissions(&program, fs::Permissions::from_mode(0o755))?;

        Ok(Self {
            _dir: dir,
            program,
            log,
        })
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// The arguments of the last run, or `None` if the fake was never started.
    pub fn recorded_args(&self) -> Result<Option<Vec<String>>> {
        if !self.log.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.log)
            .with_context(|| format!("Failed to read {}", self.log.display()))?;
        Ok(Some(content.lines().map(str::to_string).collect()))
    }
}

/// A command running `binary` with superplate resolved to `companion`.
///
/// Logging is switched off so the dispatcher's own output can be compared
/// exactly.
pub fn dispatcher_command(binary: impl AsRef<Path>, companion: &Path) -> Command {
    let mut cmd = Command::new(binary.as_ref());
    cmd.env(OVERRIDE_ENV, companion).env_remove(LOG_ENV);
    cmd
}
