//! Configuration management for the MCP server.
//!
//! Values come from command-line flags, falling back to environment
//! variables (optionally loaded from a `.env` file) and then to defaults.
//! The API key is only ever read from the environment.

use std::ffi::OsString;
use std::fmt;
use std::str::FromStr;

use clap::Parser;
use serde::{Deserialize, Serialize};
use url::Url;

use super::error::{Error, Result};
use super::transport::TransportConfig;
use crate::domains::tools::definitions::analytics::DEFAULT_API_BASE_URL;

/// Environment variable holding the upstream API key.
pub const API_KEY_ENV: &str = "API_KEY";

/// Log levels accepted by `--log-level`.
pub const VALID_LOG_LEVELS: [&str; 4] = ["debug", "info", "warn", "error"];

/// Upstream request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream analytics API configuration.
    pub api: ApiConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Lowercase log level: one of [`VALID_LOG_LEVELS`].
    pub level: String,

    /// Output format.
    pub format: LogFormat,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable text.
    Text,
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            _ => Err(Error::config(format!(
                "invalid log format '{}', must be one of: json, text",
                s
            ))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Text => f.write_str("text"),
        }
    }
}

/// Configuration for the upstream analytics API.
#[derive(Clone)]
pub struct ApiConfig {
    /// Base URL requests are built from.
    pub base_url: String,

    /// Key sent in `X-API-KEY`. Environment only.
    pub api_key: Option<String>,

    /// Upstream request timeout in seconds.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact secrets from logs.
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: env!("CARGO_PKG_NAME").replace('_', "-"),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Json,
            },
            transport: TransportConfig::default(),
            api: ApiConfig::default(),
        }
    }
}

/// Command-line interface. Every flag falls back to an environment variable.
#[derive(Debug, Parser)]
#[command(name = "analytics-mcp-server", version, about = "MCP server for the DAP analytics API")]
struct Cli {
    /// HTTP address to listen on (host:port or :port). Empty serves over stdin/stdout.
    #[arg(long = "http", env = "HTTP_ADDR", value_name = "ADDR")]
    http_addr: Option<String>,

    /// Log level: debug, info, warn, error.
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Log format: json, text.
    #[arg(long, env = "LOG_FORMAT", default_value = "json")]
    log_format: String,

    /// Analytics API base URL.
    #[arg(long, env = "API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    api_base_url: String,

    /// Upstream request timeout in seconds.
    #[arg(long = "request-timeout", env = "API_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    request_timeout: u64,
}

impl Config {
    /// Load `.env` if present, then parse the process arguments.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::load_from(std::env::args_os())
    }

    /// Parse and validate configuration from an explicit argument vector.
    ///
    /// The first element is the program name, as with `std::env::args_os`.
    pub fn load_from<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)?;

        let http_addr = cli.http_addr.unwrap_or_default();
        let transport = TransportConfig::from_addr(&http_addr)
            .map_err(|e| Error::config(e.to_string()))?;

        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty());

        let config = Self {
            logging: LoggingConfig {
                level: cli.log_level.to_lowercase(),
                format: cli.log_format.parse()?,
            },
            transport,
            api: ApiConfig {
                base_url: cli.api_base_url,
                api_key,
                timeout_secs: cli.request_timeout,
            },
            ..Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Check the values that cannot be enforced by their types.
    pub fn validate(&self) -> Result<()> {
        if !VALID_LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(Error::config(format!(
                "invalid log level '{}', must be one of: {}",
                self.logging.level,
                VALID_LOG_LEVELS.join(", ")
            )));
        }

        if !self.api.base_url.is_empty() {
            Url::parse(&self.api.base_url).map_err(|e| {
                Error::config(format!(
                    "invalid API base URL '{}': {}",
                    self.api.base_url, e
                ))
            })?;
        }

        if self.api.timeout_secs == 0 {
            return Err(Error::config("request timeout must be at least 1 second"));
        }

        Ok(())
    }
}
