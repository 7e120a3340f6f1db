//! Opt-in diagnostics.
//!
//! Nothing is logged unless `CREATE_REFINE_APP_LOG` is set: superplate owns
//! the terminal and its prompts should not be interleaved with our output.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "CREATE_REFINE_APP_LOG";

/// Set up logging if requested.
///
/// Accepts a level (error, warn, info, debug, trace) or a RUST_LOG-style
/// filter string such as `create_refine_app=trace`. Output goes to stderr.
pub fn setup_logging(filter: Option<String>) {
    if let Some(filter) = filter.filter(|f| !f.trim().is_empty()) {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(std::io::stderr)
            .init();
    }
}
