//! User interface module - terminal output and logging setup.
//!
//! Separates concerns:
//! - `formatter` - Message formatting and printing
//! - This module - Installing the `tracing` subscriber

use tracing_subscriber::EnvFilter;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_status, display_success, display_tag_outcome, format_error,
    format_tag_outcome,
};

/// Default log filter for the given verbosity.
///
/// `RUST_LOG`, when set, takes precedence.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "gittable=debug"
    } else {
        "warn"
    }
}

/// Install the global `tracing` subscriber, writing to stderr.
///
/// Calling it more than once is harmless; later calls are ignored.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
