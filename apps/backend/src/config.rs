//! Service configuration read from the environment.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Runtime settings for the HTTP service.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - DATABASE_URL: PostgreSQL connection string
    ///
    /// Optional env vars:
    /// - HOST: bind address (default "0.0.0.0")
    /// - PORT: bind port (default 3000)
    /// - DATABASE_MAX_CONNECTIONS: pool size (default 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_var("PORT", 3000)?;
        let max_connections = parse_var("DATABASE_MAX_CONNECTIONS", 10)?;

        Ok(Self {
            database_url,
            host,
            port,
            max_connections,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}
