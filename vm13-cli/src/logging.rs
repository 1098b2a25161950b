//! Logging setup

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging with a default filter.
///
/// `RUST_LOG` overrides the default. Without it, only warnings are shown,
/// or per-instruction `debug` output for the VM crates when `verbose` is set.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("warn,vm13_cli=debug,vm13_runtime=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
