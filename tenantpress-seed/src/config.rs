/// Configuration management for the seeder
///
/// This module loads configuration from environment variables (after reading
/// a `.env` file if one is present) and provides a type-safe configuration
/// struct.
///
/// # Environment Variables
///
/// - `DATABASE_URL`: SQLite connection string (default: sqlite://dev.db)
/// - `DATABASE_MAX_CONNECTIONS`: Pool size (default: 1)
/// - `DATABASE_CONNECT_TIMEOUT_SECONDS`: Acquire timeout (default: 30)
/// - `RUST_LOG`: Log filter (default: tenantpress_seed=info,tenantpress_shared=info)
///
/// # Example
///
/// ```no_run
/// use tenantpress_seed::config::Config;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config::from_env()?;
/// println!("Seeding {}", config.database.url);
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use std::env;
use tenantpress_shared::db::pool::{self, DEFAULT_DATABASE_URL};

/// Error raised when an environment variable holds an unusable value
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Value could not be parsed into the expected type
    #[error("{var} has invalid value {value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Complete seeder configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database configuration
    pub database: DatabaseConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite connection URL of the pre-existing database
    pub url: String,

    /// Maximum number of connections in pool
    pub max_connections: u32,

    /// Timeout for acquiring a connection (seconds)
    pub connect_timeout_seconds: u64,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable has an invalid value
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let max_connections = parse_var(&lookup, "DATABASE_MAX_CONNECTIONS", 1u32)?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: "DATABASE_MAX_CONNECTIONS",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let connect_timeout_seconds = parse_var(&lookup, "DATABASE_CONNECT_TIMEOUT_SECONDS", 30u64)?;

        Ok(Self {
            database: DatabaseConfig {
                url,
                max_connections,
                connect_timeout_seconds,
            },
        })
    }

    /// Converts into the pool configuration of the shared crate
    pub fn pool_config(&self) -> pool::DatabaseConfig {
        pool::DatabaseConfig {
            url: self.database.url.clone(),
            max_connections: self.database.max_connections,
            connect_timeout_seconds: self.database.connect_timeout_seconds,
        }
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            var,
            reason: e.to_string(),
            value,
        }),
    }
}
