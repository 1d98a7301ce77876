/// Database connection pool management
///
/// This module opens the SQLite connection pool used by the seeder. The
/// database file must already exist; it is never created here. Foreign key
/// enforcement is switched on for every connection so that deletion and
/// insertion order are checked by the database itself.
///
/// # Example
///
/// ```no_run
/// use tenantpress_shared::db::pool::{close_pool, create_pool, DatabaseConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         url: "sqlite://dev.db".to_string(),
///         max_connections: 1,
///         connect_timeout_seconds: 30,
///     };
///
///     let pool = create_pool(config).await?;
///
///     let row: (i64,) = sqlx::query_as("SELECT ?")
///         .bind(42i64)
///         .fetch_one(&pool)
///         .await?;
///
///     close_pool(pool).await;
///     Ok(())
/// }
/// ```

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// Default connection string, relative to the working directory
pub const DEFAULT_DATABASE_URL: &str = "sqlite://dev.db";

/// Configuration for the database connection pool
///
/// All timeouts are specified in seconds for ease of configuration from environment variables.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection URL (e.g., "sqlite://dev.db")
    pub url: String,

    /// Maximum number of connections in the pool
    ///
    /// Default: 1 (one sequential client on a file-backed database)
    pub max_connections: u32,

    /// Timeout for acquiring a connection from the pool (seconds)
    ///
    /// Default: 30 seconds
    pub connect_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 1,
            connect_timeout_seconds: 30,
        }
    }
}

/// Creates and initializes a SQLite connection pool
///
/// This function:
/// 1. Parses the connection URL and enables foreign key enforcement
/// 2. Creates a pool with the specified configuration
/// 3. Performs a health check to verify database connectivity
///
/// # Errors
///
/// Returns an error if:
/// - The database URL is invalid
/// - The database file does not exist or cannot be opened
/// - Health check fails
pub async fn create_pool(config: DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    info!(
        max_connections = config.max_connections,
        connect_timeout_seconds = config.connect_timeout_seconds,
        "Creating database connection pool"
    );

    let connect_options = SqliteConnectOptions::from_str(&config.url)?
        .foreign_keys(true)
        .create_if_missing(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .connect_with(connect_options)
        .await?;

    health_check(&pool).await?;

    info!("Database connection pool created successfully");
    Ok(pool)
}

/// Performs a health check on the database connection
///
/// Executes a simple query to verify the database is reachable and responding.
///
/// # Errors
///
/// Returns an error if the health check query fails
pub async fn health_check(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    debug!("Performing database health check");

    sqlx::query("SELECT 1").execute(pool).await?;

    debug!("Database health check passed");
    Ok(())
}

/// Gracefully closes the connection pool
///
/// Called exactly once when the seeder finishes, on success and on failure.
pub async fn close_pool(pool: SqlitePool) {
    info!("Closing database connection pool");
    pool.close().await;
    info!("Database connection pool closed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_config_default() {
        let config = DatabaseConfig::default();
        assert_eq!(config.url, "sqlite://dev.db");
        assert_eq!(config.max_connections, 1);
        assert_eq!(config.connect_timeout_seconds, 30);
    }

    #[tokio::test]
    async fn test_create_pool_missing_file_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.db");
        let config = DatabaseConfig {
            url: format!("sqlite://{}", path.display()),
            connect_timeout_seconds: 2,
            ..Default::default()
        };

        let result = create_pool(config).await;
        assert!(result.is_err(), "Missing database file must not be created");
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_create_pool_and_close() {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            ..Default::default()
        };

        let pool = create_pool(config).await.expect("Failed to create pool");
        health_check(&pool).await.expect("Health check should pass");

        let handle = pool.clone();
        close_pool(pool).await;
        assert!(handle.is_closed());
    }
}
