/// Post model and database operations
///
/// # Schema
///
/// ```sql
/// CREATE TABLE "Post" (
///     "id"    INTEGER PRIMARY KEY AUTOINCREMENT,
///     "title" TEXT NOT NULL
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Post model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    /// Unique post ID (autoincrement)
    pub id: i64,

    /// Post title
    pub title: String,
}

/// Input for creating a new post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePost {
    /// Post title
    pub title: String,
}

impl Post {
    /// Creates a new post
    pub async fn create(pool: &SqlitePool, data: CreatePost) -> Result<Self, sqlx::Error> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO "Post" ("title")
            VALUES (?1)
            RETURNING "id", "title"
            "#,
        )
        .bind(data.title)
        .fetch_one(pool)
        .await?;

        Ok(post)
    }

    /// Finds a post by ID
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT "id", "title"
            FROM "Post"
            WHERE "id" = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(post)
    }

    /// Lists all posts, ordered by ID
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT "id", "title"
            FROM "Post"
            ORDER BY "id"
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(posts)
    }

    /// Counts total number of posts
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM "Post""#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Deletes every post
    ///
    /// Join rows reference posts and must be removed first.
    pub async fn delete_all(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(r#"DELETE FROM "Post""#)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}
