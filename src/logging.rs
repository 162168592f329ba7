//! Diagnostic logging via `tracing`.
//!
//! Events go to stderr; stdout is reserved for the confirmation prompt.
//! `RUST_LOG` overrides the default `warn` filter unless `--verbose` is set.

use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("autodoc=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A second init (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
