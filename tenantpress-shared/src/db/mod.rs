/// Database layer for tenantpress
///
/// This module provides connection pooling for the file-backed SQLite
/// database. The schema itself is owned by external tooling.
///
/// # Modules
///
/// - `pool`: SQLite connection pool management with health checks
/// - Models are in the `models` module at crate root level
///
/// # Example
///
/// ```no_run
/// use tenantpress_shared::db::pool::{create_pool, DatabaseConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         url: "sqlite://dev.db".to_string(),
///         ..Default::default()
///     };
///
///     let pool = create_pool(config).await?;
///     Ok(())
/// }
/// ```

pub mod pool;
