//! Logging initialization.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

/// Parse a textual log level, falling back to `INFO` for unknown values.
pub fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr so that stdout stays free for the STDIO transport.
/// `RUST_LOG` directives are honored on top of the configured level.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::from_default_env().add_directive(parse_level(level).into());

    // A second init (e.g. from tests) is not an error worth failing on
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .try_init();
}
