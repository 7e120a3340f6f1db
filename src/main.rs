//! create-refine-app - Main entry point

use anyhow::Result;
use create_refine_app::{CompanionLocator, Dispatcher, InheritStdio, cli, logging};

fn main() -> Result<()> {
    logging::setup_logging(std::env::var(logging::LOG_ENV).ok());

    let invocation = cli::parse(std::env::args_os()).unwrap_or_else(|e| e.exit());
    tracing::debug!(?invocation, "parsed command line");

    let dispatcher = Dispatcher::new(CompanionLocator::from_env(), InheritStdio);
    dispatcher.dispatch(invocation, &mut std::io::stdout().lock())
}
