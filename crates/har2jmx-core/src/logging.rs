//! Logging init: stderr with env-filter override.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr. The default level is `info` with
/// `debug` for this crate's targets; `RUST_LOG` overrides both.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,har2jmx_core=debug,har2jmx_cli=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
