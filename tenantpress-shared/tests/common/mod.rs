//! Common test utilities for integration tests
//!
//! Every test gets its own throwaway SQLite file with the content schema
//! applied, so tests can run in parallel.

#![allow(dead_code)]

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Executor;
use tempfile::TempDir;

/// Content schema applied to every test database
pub const SCHEMA: &str = include_str!("../fixtures/schema.sql");

/// A schema-initialized database living in a temporary directory
pub struct TestDatabase {
    /// Keeps the directory (and the database file) alive for the test
    pub dir: TempDir,
    pub url: String,
    pub pool: SqlitePool,
}

impl TestDatabase {
    /// Creates a new database file and applies the content schema
    pub async fn new() -> anyhow::Result<Self> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("test.db");

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        pool.execute(SCHEMA).await?;

        Ok(Self {
            url: format!("sqlite://{}", path.display()),
            dir,
            pool,
        })
    }
}
