/// PostCategory join model and database operations
///
/// Implements the many-to-many relationship between posts and categories.
/// A join row can only be written once both the post and the category exist.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE "PostCategory" (
///     "postId"     INTEGER NOT NULL REFERENCES "Post"("id"),
///     "categoryId" INTEGER NOT NULL REFERENCES "Category"("id"),
///     PRIMARY KEY ("postId", "categoryId")
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use tenantpress_shared::models::post_category::{PostCategory, CreatePostCategory};
/// use sqlx::SqlitePool;
///
/// # async fn example(pool: SqlitePool) -> Result<(), sqlx::Error> {
/// let inserted = PostCategory::create_many(&pool, &[
///     CreatePostCategory { post_id: 1, category_id: 1 },
///     CreatePostCategory { post_id: 1, category_id: 2 },
/// ]).await?;
/// assert_eq!(inserted, 2);
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// Join record pairing one post with one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PostCategory {
    /// Referenced post
    #[sqlx(rename = "postId")]
    pub post_id: i64,

    /// Referenced category
    #[sqlx(rename = "categoryId")]
    pub category_id: i64,
}

/// Input for creating a join record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostCategory {
    /// Referenced post, which must already exist
    pub post_id: i64,

    /// Referenced category, which must already exist
    pub category_id: i64,
}

impl PostCategory {
    /// Inserts all links in a single multi-row statement
    ///
    /// Either every row is written or none is.
    ///
    /// # Returns
    ///
    /// Number of rows inserted (0 for an empty slice, without touching the database)
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced post or category is missing, a link
    /// already exists, or the insert fails
    pub async fn create_many(
        pool: &SqlitePool,
        links: &[CreatePostCategory],
    ) -> Result<u64, sqlx::Error> {
        if links.is_empty() {
            return Ok(0);
        }

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(r#"INSERT INTO "PostCategory" ("postId", "categoryId") "#);

        builder.push_values(links, |mut row, link| {
            row.push_bind(link.post_id).push_bind(link.category_id);
        });

        let result = builder.build().execute(pool).await?;

        Ok(result.rows_affected())
    }

    /// Lists the category links of a post, ordered by category ID
    pub async fn list_for_post(
        pool: &SqlitePool,
        post_id: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let links = sqlx::query_as::<_, PostCategory>(
            r#"
            SELECT "postId", "categoryId"
            FROM "PostCategory"
            WHERE "postId" = ?1
            ORDER BY "categoryId"
            "#,
        )
        .bind(post_id)
        .fetch_all(pool)
        .await?;

        Ok(links)
    }

    /// Counts total number of join rows
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM "PostCategory""#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Deletes every join row
    pub async fn delete_all(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(r#"DELETE FROM "PostCategory""#)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}
