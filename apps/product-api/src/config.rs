//! Product API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//! `DATABASE_URL` has no default and must be non-empty.

use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use product_db::DbConfig;

/// How `Delete` treats ownership.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeletePolicy {
    /// Delete by id alone; `user_id` on the request is ignored.
    #[default]
    Unchecked,
    /// Delete only when the request's `user_id` owns the product.
    OwnerChecked,
}

impl FromStr for DeletePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unchecked" => Ok(DeletePolicy::Unchecked),
            "owner-checked" | "owner_checked" => Ok(DeletePolicy::OwnerChecked),
            _ => Err(ConfigError::InvalidValue("DELETE_POLICY".to_string())),
        }
    }
}

impl fmt::Display for DeletePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeletePolicy::Unchecked => f.write_str("unchecked"),
            DeletePolicy::OwnerChecked => f.write_str("owner-checked"),
        }
    }
}

/// Product API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// gRPC listen address
    pub listen_address: SocketAddr,

    /// PostgreSQL connection string
    pub database_url: String,

    /// Pool upper bound
    pub db_max_connections: u32,

    /// Connections kept open while idle
    pub db_min_connections: u32,

    /// How long a request may wait for a pooled connection
    pub db_acquire_timeout: Duration,

    /// Server-wide deadline for every RPC
    pub request_timeout: Duration,

    /// Max decoded message size in bytes (default: 4MB)
    pub max_message_size: usize,

    /// Ownership rule for Delete
    pub delete_policy: DeletePolicy,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let listen_address = var("LISTEN_ADDRESS", "0.0.0.0:8081");
        if listen_address.trim().is_empty() {
            return Err(ConfigError::MissingRequired("LISTEN_ADDRESS".to_string()));
        }

        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingRequired("DATABASE_URL".to_string()))?;

        Ok(ApiConfig {
            listen_address: listen_address
                .parse()
                .map_err(|_| ConfigError::InvalidValue("LISTEN_ADDRESS".to_string()))?,

            database_url,

            db_max_connections: parse_var("DB_MAX_CONNECTIONS", &var("DB_MAX_CONNECTIONS", "20"))?,

            db_min_connections: parse_var("DB_MIN_CONNECTIONS", &var("DB_MIN_CONNECTIONS", "1"))?,

            db_acquire_timeout: Duration::from_secs(parse_var(
                "DB_ACQUIRE_TIMEOUT_SECS",
                &var("DB_ACQUIRE_TIMEOUT_SECS", "30"),
            )?),

            request_timeout: Duration::from_secs(parse_var(
                "REQUEST_TIMEOUT_SECS",
                &var("REQUEST_TIMEOUT_SECS", "30"),
            )?),

            max_message_size: parse_var("MAX_MESSAGE_SIZE", &var("MAX_MESSAGE_SIZE", "4194304"))?,

            delete_policy: var("DELETE_POLICY", "unchecked").parse()?,
        })
    }

    /// Pool settings derived from this configuration.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(self.database_url.clone())
            .max_connections(self.db_max_connections)
            .min_connections(self.db_min_connections)
            .acquire_timeout(self.db_acquire_timeout)
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(key.to_string()))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
