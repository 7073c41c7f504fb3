//! Logging bootstrap.
//!
//! All output goes to stderr; stdout carries the MCP stream in stdio mode.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

use super::config::{LogFormat, LoggingConfig};

/// Map a configured level name to a tracing level. Unknown names give INFO.
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

/// Install the global subscriber.
///
/// `RUST_LOG` directives are combined with the configured level.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::from_default_env().add_directive(parse_level(&config.level).into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    match config.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}
