/// Profile model and database operations
///
/// A profile is the one-to-one extension of a user. Profiles are only ever
/// created together with their user, see
/// [`User::create_with_profile`](super::user::User::create_with_profile).
///
/// # Schema
///
/// ```sql
/// CREATE TABLE "Profile" (
///     "id"     INTEGER PRIMARY KEY AUTOINCREMENT,
///     "bio"    TEXT,
///     "userId" INTEGER NOT NULL UNIQUE REFERENCES "User"("id")
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Profile model holding a user's biography
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Profile {
    /// Unique profile ID (autoincrement)
    pub id: i64,

    /// Free-text biography
    pub bio: Option<String>,

    /// Owning user (unique)
    #[sqlx(rename = "userId")]
    pub user_id: i64,
}

/// Input for creating a profile alongside its user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProfile {
    /// Free-text biography
    pub bio: Option<String>,
}

impl Profile {
    /// Finds the profile of a user
    pub async fn find_by_user(
        pool: &SqlitePool,
        user_id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            SELECT "id", "bio", "userId"
            FROM "Profile"
            WHERE "userId" = ?1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(profile)
    }

    /// Counts total number of profiles
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM "Profile""#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Deletes every profile
    ///
    /// # Returns
    ///
    /// Number of rows deleted
    pub async fn delete_all(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(r#"DELETE FROM "Profile""#)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_profile_default() {
        let create = CreateProfile::default();
        assert!(create.bio.is_none());
    }
}
