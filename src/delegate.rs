//! Handing an invocation over to superplate.

use crate::PROJECT_FLAG;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Everything that can go wrong between "run superplate" and superplate
/// finishing successfully.
#[derive(Debug, thiserror::Error)]
pub enum DelegateError {
    #[error("could not find the `{name}` executable")]
    CompanionNotFound { name: String },

    #[error("failed to start {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} exited with {}", program.display(), describe_exit(*code))]
    Exited { program: PathBuf, code: Option<i32> },
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Runs an external program to completion.
///
/// The process is expected to share the caller's terminal; `launch` blocks
/// until it exits and reports anything but a zero exit status as an error.
pub trait Launcher {
    fn launch(&self, program: &Path, args: &[OsString]) -> Result<(), DelegateError>;
}

/// Spawns the program with stdin, stdout and stderr inherited from this
/// process.
#[derive(Debug, Default, Clone, Copy)]
pub struct InheritStdio;

impl Launcher for InheritStdio {
    fn launch(&self, program: &Path, args: &[OsString]) -> Result<(), DelegateError> {
        tracing::debug!(program = %program.display(), ?args, "spawning");

        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|source| DelegateError::Spawn {
                program: program.to_path_buf(),
                source,
            })?;

        if !status.success() {
            return Err(DelegateError::Exited {
                program: program.to_path_buf(),
                code: status.code(),
            });
        }

        Ok(())
    }
}

/// The user's arguments, untouched and in order, with the project flag last.
pub fn forwarded_args(args: &[OsString]) -> Vec<OsString> {
    let mut forwarded = Vec::with_capacity(args.len() + 1);
    forwarded.extend_from_slice(args);
    forwarded.push(OsString::from(PROJECT_FLAG));
    forwarded
}

/// Run `program` with the user's arguments plus the project flag.
pub fn delegate(
    launcher: &impl Launcher,
    program: &Path,
    args: &[OsString],
) -> Result<(), DelegateError> {
    launcher.launch(program, &forwarded_args(args))
}
