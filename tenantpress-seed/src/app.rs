/// Seeder lifecycle
///
/// Opens the pool once, runs the seeder, logs the resulting row counts and
/// closes the pool on both the success and the failure path.
///
/// # Example
///
/// ```no_run
/// use tenantpress_seed::{app, config::Config};
///
/// # async fn example() -> anyhow::Result<()> {
/// let report = app::run(Config::from_env()?).await?;
/// assert_eq!(report.tenants, 1);
/// # Ok(())
/// # }
/// ```

use anyhow::Context;
use sqlx::SqlitePool;
use tenantpress_shared::db::pool::{close_pool, create_pool};
use tracing::info;

use crate::config::Config;
use crate::error::SeedResult;
use crate::seed::report::SeedReport;
use crate::seed::Seeder;

/// Connects to the configured database and seeds it
///
/// # Errors
///
/// Returns an error if the database cannot be opened or seeding fails
pub async fn run(config: Config) -> anyhow::Result<SeedReport> {
    info!(url = %config.database.url, "Connecting to database");

    let pool = create_pool(config.pool_config())
        .await
        .with_context(|| format!("Failed to open database {}", config.database.url))?;

    let report = seed_and_close(pool).await?;
    Ok(report)
}

/// Seeds through `pool`, then closes it whatever the outcome
pub async fn seed_and_close(pool: SqlitePool) -> SeedResult<SeedReport> {
    let result = seed(&pool).await;
    close_pool(pool).await;
    result
}

async fn seed(pool: &SqlitePool) -> SeedResult<SeedReport> {
    Seeder::new(pool).run().await?;

    let report = SeedReport::collect(pool).await?;
    info!(
        tenants = report.tenants,
        users = report.users,
        profiles = report.profiles,
        categories = report.categories,
        posts = report.posts,
        post_categories = report.post_categories,
        "Row counts after seeding"
    );

    Ok(report)
}
