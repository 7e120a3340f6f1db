use crate::cli::{self, Invocation};
use crate::companion::CompanionLocator;
use crate::delegate::{self, DelegateError, Launcher};
use anyhow::Result;
use std::ffi::OsString;
use std::io::Write;

/// Carries out an [`Invocation`].
pub struct Dispatcher<L> {
    locator: CompanionLocator,
    launcher: L,
}

impl<L: Launcher> Dispatcher<L> {
    pub fn new(locator: CompanionLocator, launcher: L) -> Self {
        Self { locator, launcher }
    }

    /// Print help or the version to `out`, or run superplate.
    ///
    /// A superplate failure is not an error of the dispatcher: whatever
    /// superplate printed is already on the terminal, and we add nothing.
    pub fn dispatch(&self, invocation: Invocation, out: &mut impl Write) -> Result<()> {
        match invocation {
            Invocation::Help => {
                write!(out, "{}", cli::render_help())?;
            }
            Invocation::Version => {
                writeln!(out, "{}", crate::VERSION)?;
            }
            Invocation::Delegate(args) => {
                if let Err(err) = self.delegate(&args) {
                    tracing::debug!(%err, "ignoring {} failure", self.locator.name());
                }
            }
        }
        out.flush()?;
        Ok(())
    }

    fn delegate(&self, args: &[OsString]) -> Result<(), DelegateError> {
        let program = self.locator.locate()?;
        delegate::delegate(&self.launcher, &program, args)
    }
}
