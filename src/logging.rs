//! Logging setup
//!
//! Uses `tracing` with `tracing-subscriber`. The filter comes from `ELB_LOG`,
//! then `RUST_LOG`, defaulting to `warn` so normal command output stays clean.
//! Logs go to stderr.

use tracing_subscriber::{fmt, EnvFilter};

pub const ENV_LOG: &str = "ELB_LOG";

/// Initialize logging for the CLI
///
/// `verbose` raises the default level to `debug` when no filter is set.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(ENV_LOG)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(verbose)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Initialize logging for tests, captured by the test harness
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
