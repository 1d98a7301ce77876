//! Removal of previously seeded rows.
//!
//! Tables are cleared children first so no delete ever trips a foreign key:
//! `PostCategory`, `Category`, `Post`, `Profile`, `User`, `Tenant`.

use sqlx::SqlitePool;
use tenantpress_shared::models::{
    category::Category, post::Post, post_category::PostCategory, profile::Profile, tenant::Tenant,
    user::User,
};
use tracing::{debug, info};

/// A seeded table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    PostCategory,
    Category,
    Post,
    Profile,
    User,
    Tenant,
}

/// Tables in the order they are cleared
pub const CLEANUP_ORDER: [Table; 6] = [
    Table::PostCategory,
    Table::Category,
    Table::Post,
    Table::Profile,
    Table::User,
    Table::Tenant,
];

impl Table {
    /// Table name as it appears in the schema
    pub fn name(self) -> &'static str {
        match self {
            Table::PostCategory => "PostCategory",
            Table::Category => "Category",
            Table::Post => "Post",
            Table::Profile => "Profile",
            Table::User => "User",
            Table::Tenant => "Tenant",
        }
    }

    async fn delete_all(self, pool: &SqlitePool) -> Result<u64, sqlx::Error> {
        match self {
            Table::PostCategory => PostCategory::delete_all(pool).await,
            Table::Category => Category::delete_all(pool).await,
            Table::Post => Post::delete_all(pool).await,
            Table::Profile => Profile::delete_all(pool).await,
            Table::User => User::delete_all(pool).await,
            Table::Tenant => Tenant::delete_all(pool).await,
        }
    }
}

/// A delete failed; tables after `table` in [`CLEANUP_ORDER`] were not touched
#[derive(Debug, thiserror::Error)]
#[error("Failed to clear table {table}: {source}")]
pub struct CleanupError {
    pub table: &'static str,
    pub source: sqlx::Error,
}

/// Rows removed per table, in deletion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub deleted: Vec<(&'static str, u64)>,
}

impl CleanupReport {
    /// Total number of rows removed
    pub fn total(&self) -> u64 {
        self.deleted.iter().map(|(_, rows)| rows).sum()
    }

    fn record(
        &mut self,
        table: &'static str,
        result: Result<u64, sqlx::Error>,
    ) -> Result<(), CleanupError> {
        let rows = result.map_err(|source| CleanupError { table, source })?;
        debug!(table, rows, "Cleared table");
        self.deleted.push((table, rows));
        Ok(())
    }
}

/// Deletes every row of the seeded tables
///
/// Stops at the first failing delete. Deletes are not wrapped in a
/// transaction, so tables cleared before the failure stay cleared.
///
/// # Errors
///
/// Returns [`CleanupError`] naming the table whose delete failed
pub async fn clear_existing_data(pool: &SqlitePool) -> Result<CleanupReport, CleanupError> {
    let mut report = CleanupReport::default();

    for table in CLEANUP_ORDER {
        report.record(table.name(), table.delete_all(pool).await)?;
    }

    info!(rows = report.total(), "Old data removed");
    Ok(report)
}
