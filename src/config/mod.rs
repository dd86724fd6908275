use dashmap::DashMap;
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::controller::RouterKind;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: String,
        value: String,
        reason: String,
    },
}

/// Key/value configuration source
///
/// Seeded from the process environment. `.env` files are picked up by
/// [`ConfigService::from_env`] before the snapshot is taken.
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment overrides from {}", path.display());
        }
        let service = Self::new();
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }

    /// Parse `key` as `T`, falling back to `default` when it is unset.
    pub fn parse<T>(&self, key: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
                key: key.to_string(),
                value: raw.clone(),
                reason: e.to_string(),
            }),
        }
    }
}

/// Typed settings for the server process.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub sql_logging: bool,
    pub router: RouterKind,
    pub auto_schema: bool,
}

impl AppConfig {
    pub fn from_service(config: &ConfigService) -> Result<Self, ConfigError> {
        Ok(Self {
            host: config.get_or("HOST", "0.0.0.0"),
            port: config.parse("PORT", 8080)?,
            database_url: config.get_or("DATABASE_URL", "sqlite://users.db?mode=rwc"),
            max_connections: config.parse("DB_MAX_CONNECTIONS", 10)?,
            min_connections: config.parse("DB_MIN_CONNECTIONS", 1)?,
            connect_timeout: Duration::from_secs(config.parse("DB_CONNECT_TIMEOUT_SECS", 8)?),
            sql_logging: config.parse("DB_SQL_LOGGING", false)?,
            router: config.parse("ROUTER", RouterKind::Full)?,
            auto_schema: config.parse("AUTO_SCHEMA", true)?,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
            key: "HOST".to_string(),
            value: self.host.clone(),
            reason: e.to_string(),
        })
    }
}
