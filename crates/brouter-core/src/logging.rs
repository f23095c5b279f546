//! Logging init: stderr only, `RUST_LOG` controls verbosity.
//!
//! The handler is typically invoked invisibly by the OS with no console
//! attached, so nothing is persisted to disk.

use tracing_subscriber::EnvFilter;

pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,brouter=info,brouter_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
