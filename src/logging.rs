//! Tracing setup shared by the binaries.
//!
//! Solvers emit `tracing` events (`debug` per solve, `trace` per repair move). The binaries
//! print their results on stdout, so diagnostics go to stderr, filtered by `RUST_LOG`
//! (default `warn`).

use tracing_subscriber::EnvFilter;

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
