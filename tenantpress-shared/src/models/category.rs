/// Category model and database operations
///
/// Categories are named tags attached to posts through the
/// [`PostCategory`](super::post_category::PostCategory) join table.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE "Category" (
///     "id"   INTEGER PRIMARY KEY AUTOINCREMENT,
///     "name" TEXT NOT NULL UNIQUE
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Category model representing a named tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    /// Unique category ID (autoincrement)
    pub id: i64,

    /// Category name
    pub name: String,
}

/// Input for creating a new category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategory {
    /// Category name
    pub name: String,
}

impl Category {
    /// Creates a new category
    ///
    /// # Errors
    ///
    /// Returns an error if a category with the same name exists or the
    /// insert fails
    pub async fn create(pool: &SqlitePool, data: CreateCategory) -> Result<Self, sqlx::Error> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO "Category" ("name")
            VALUES (?1)
            RETURNING "id", "name"
            "#,
        )
        .bind(data.name)
        .fetch_one(pool)
        .await?;

        Ok(category)
    }

    /// Finds a category by name
    pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Self>, sqlx::Error> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT "id", "name"
            FROM "Category"
            WHERE "name" = ?1
            "#,
        )
        .bind(name)
        .fetch_optional(pool)
        .await?;

        Ok(category)
    }

    /// Lists all categories, ordered by ID
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT "id", "name"
            FROM "Category"
            ORDER BY "id"
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(categories)
    }

    /// Counts total number of categories
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM "Category""#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Deletes every category
    ///
    /// Join rows reference categories and must be removed first.
    pub async fn delete_all(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(r#"DELETE FROM "Category""#)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}
