//! Connection settings, read once at startup.

use crate::error::ConfigError;
use std::{fmt::Display, str::FromStr, time::Duration};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Full connection URL; takes precedence over the individual parts
    pub url: Option<String>,
    pub driver: String,
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub max_connections: u32,
    pub connect_timeout: Duration,
    /// Log every SQL statement at info level
    pub log_sql: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            driver: "postgresql".to_string(),
            username: "postgres".to_string(),
            password: "postgres".to_string(),
            host: "localhost".to_string(),
            port: 5432,
            name: "Clubdata".to_string(),
            max_connections: 10,
            connect_timeout: Duration::from_secs(8),
            log_sql: true,
        }
    }
}

impl DatabaseConfig {
    /// Reads the process environment; call after `.env` has been loaded
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_connections = parse_var(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?;
        if max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "DB_MAX_CONNECTIONS",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
            driver: lookup("DB_DRIVER").unwrap_or(defaults.driver),
            username: lookup("DB_USERNAME").unwrap_or(defaults.username),
            password: lookup("DB_PASSWORD").unwrap_or(defaults.password),
            host: lookup("DB_HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "DB_PORT", defaults.port)?,
            name: lookup("DB_NAME").unwrap_or(defaults.name),
            max_connections,
            connect_timeout: Duration::from_secs(parse_var(
                &lookup,
                "DB_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout.as_secs(),
            )?),
            log_sql: parse_var(&lookup, "DB_LOG_SQL", defaults.log_sql)?,
        })
    }

    /// The URL handed to the driver
    pub fn connection_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!(
                "{}://{}:{}@{}:{}/{}",
                self.driver, self.username, self.password, self.host, self.port, self.name
            ),
        }
    }
}

/// Parses `key` from `lookup`, or returns `default` when it is unset
pub fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|err: T::Err| ConfigError::InvalidValue {
                key,
                value: raw.clone(),
                reason: err.to_string(),
            }),
    }
}
