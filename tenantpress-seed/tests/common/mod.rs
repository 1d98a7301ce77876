//! Common test utilities for integration tests
//!
//! This module provides shared infrastructure for integration tests:
//! - Throwaway SQLite database files with the content schema applied
//! - Trigger helpers that make a chosen statement fail

#![allow(dead_code)]

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Executor;
use std::path::PathBuf;
use tempfile::TempDir;

/// Content schema, shared with the data-layer tests
pub const SCHEMA: &str = include_str!("../../../tenantpress-shared/tests/fixtures/schema.sql");

/// A database file in a temporary directory
pub struct TestDatabase {
    pub dir: TempDir,
    pub path: PathBuf,
    pub url: String,
}

impl TestDatabase {
    /// Creates a database file with the content schema applied
    pub async fn new() -> anyhow::Result<Self> {
        let db = Self::empty().await?;
        let pool = db.connect().await?;
        pool.execute(SCHEMA).await?;
        pool.close().await;
        Ok(db)
    }

    /// Creates a database file with no tables at all
    pub async fn empty() -> anyhow::Result<Self> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("test.db");

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        // Force the file onto disk
        pool.execute("PRAGMA user_version = 0").await?;
        pool.close().await;

        Ok(Self {
            url: format!("sqlite://{}", path.display()),
            dir,
            path,
        })
    }

    /// Opens a fresh single-connection pool on the database file
    pub async fn connect(&self) -> anyhow::Result<SqlitePool> {
        let options = SqliteConnectOptions::new()
            .filename(&self.path)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        Ok(pool)
    }

    /// Runs one statement on a short-lived connection
    pub async fn execute(&self, sql: &str) -> anyhow::Result<()> {
        let pool = self.connect().await?;
        pool.execute(sql).await?;
        pool.close().await;
        Ok(())
    }

    /// Makes every `event` (INSERT or DELETE) on `table` fail
    pub async fn reject(&self, event: &str, table: &str) -> anyhow::Result<()> {
        self.execute(&format!(
            r#"CREATE TRIGGER "reject_{event}_{table}" BEFORE {event} ON "{table}"
               BEGIN SELECT RAISE(ABORT, 'rejected by test trigger'); END"#
        ))
        .await
    }
}
