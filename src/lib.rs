//! create-refine-app
//!
//! A thin bootstrapper for new refine projects. It answers `--version` and
//! `--help` itself and hands every other invocation to the `superplate`
//! scaffolding tool, appending `--project=refine` so superplate picks the
//! refine template.
//!
//! ```bash
//! create-refine-app my-app            # superplate my-app --project=refine
//! create-refine-app --lang=ts my-app  # superplate --lang=ts my-app --project=refine
//! create-refine-app --version
//! ```

pub mod cli;
pub mod companion;
pub mod delegate;
pub mod dispatch;
pub mod logging;

pub use cli::{Cli, Invocation};
pub use companion::CompanionLocator;
pub use delegate::{DelegateError, InheritStdio, Launcher};
pub use dispatch::Dispatcher;

/// Version from the package manifest, fixed at build time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Flag appended to every forwarded argument list.
pub const PROJECT_FLAG: &str = "--project=refine";
