//! Logging init: diagnostics go to stderr, never to a file.

use tracing_subscriber::EnvFilter;

/// Default filter for a verbosity level (`-v` count).
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "warn,qdl_core=info,qdl_cli=info",
        _ => "info,qdl_core=debug,qdl_cli=debug",
    }
}

/// Initialize logging to stderr. `RUST_LOG` takes precedence over `verbosity`.
pub fn init_logging(verbosity: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}
