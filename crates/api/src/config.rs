use std::str::FromStr;

use anyhow::{anyhow, Context};
use axum::http::HeaderValue;

/// Default allowed origins: the static frontend served on ports 5500 / 5533.
const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:5500,http://127.0.0.1:5500,http://localhost:5533,http://127.0.0.1:5533";

/// Log output format selected by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-field lines.
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow!("unknown log format '{other}' (expected 'pretty' or 'json')")),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// PostgreSQL connection string (`DATABASE_URL`, required).
    pub database_url: String,
    /// Maximum pooled database connections (default: `20`).
    pub db_max_connections: u32,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Whether entity lookups are served from the in-process cache (default: `true`).
    pub cache_enabled: bool,
    /// Log output format (default: pretty).
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                              |
    /// |------------------------|--------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                            |
    /// | `PORT`                 | `8080`                               |
    /// | `DATABASE_URL`         | required                             |
    /// | `DB_MAX_CONNECTIONS`   | `20`                                 |
    /// | `CORS_ORIGINS`         | `http://localhost:5500` and friends  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                 |
    /// | `CACHE_ENABLED`        | `true`                               |
    /// | `LOG_FORMAT`           | `pretty`                             |
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", 8080u16)?;

        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .context("DATABASE_URL must be set")?;
        let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 20u32)?;

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .with_context(|| format!("Invalid CORS origin '{origin}'"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30u64)?;
        let cache_enabled = parse_or(&lookup, "CACHE_ENABLED", true)?;
        let log_format = parse_or(&lookup, "LOG_FORMAT", LogFormat::Pretty)?;

        Ok(Self {
            host,
            port,
            database_url,
            db_max_connections,
            cors_origins,
            request_timeout_secs,
            cache_enabled,
            log_format,
        })
    }
}

/// Parse `key` with `FromStr`, falling back to `default` when unset.
fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("{key} has invalid value '{raw}': {e}")),
        None => Ok(default),
    }
}
