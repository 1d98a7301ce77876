/// User model and database operations
///
/// This module provides the User model and the operations the seeder needs
/// to manage user accounts. Each user belongs to one tenant and owns at most
/// one profile.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE "User" (
///     "id"       INTEGER PRIMARY KEY AUTOINCREMENT,
///     "email"    TEXT NOT NULL UNIQUE,
///     "name"     TEXT,
///     "password" TEXT NOT NULL,
///     "role"     TEXT NOT NULL DEFAULT 'USER',
///     "tenantId" INTEGER NOT NULL REFERENCES "Tenant"("id")
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use tenantpress_shared::models::user::{User, CreateUser, Role};
/// use tenantpress_shared::models::profile::CreateProfile;
/// use tenantpress_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example(tenant_id: i64) -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let (user, profile) = User::create_with_profile(
///     &pool,
///     CreateUser {
///         email: "user@example.com".to_string(),
///         name: Some("Jane Doe".to_string()),
///         password_hash: "$2b$10$...".to_string(),
///         role: Role::User,
///         tenant_id,
///     },
///     CreateProfile {
///         bio: Some("Writes about Rust.".to_string()),
///     },
/// )
/// .await?;
///
/// let found = User::find_by_email(&pool, "user@example.com").await?;
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use super::profile::{CreateProfile, Profile};

/// Access role of a user within its tenant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Administers the tenant
    Admin,

    /// Regular account
    User,
}

impl Role {
    /// Converts role to its stored text form
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }

    /// Parses role from its stored text form
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ADMIN" => Some(Role::Admin),
            "USER" => Some(Role::User),
            _ => None,
        }
    }
}

/// User model representing an account inside a tenant
///
/// Passwords are stored as bcrypt hashes, never in plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (autoincrement)
    pub id: i64,

    /// Email address, unique across all users
    pub email: String,

    /// Optional display name
    pub name: Option<String>,

    /// bcrypt password hash
    #[sqlx(rename = "password")]
    pub password_hash: String,

    /// Access role
    pub role: Role,

    /// Owning tenant
    #[sqlx(rename = "tenantId")]
    pub tenant_id: i64,
}

/// Input for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Email address
    pub email: String,

    /// Optional display name
    pub name: Option<String>,

    /// bcrypt password hash (NOT plaintext password!)
    pub password_hash: String,

    /// Access role
    pub role: Role,

    /// Owning tenant, which must already exist
    pub tenant_id: i64,
}

impl User {
    /// Creates a user together with its profile
    ///
    /// Both inserts run in one transaction: if the profile cannot be created
    /// the user row is rolled back as well.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Email already exists (unique constraint violation)
    /// - The tenant does not exist (foreign key violation)
    /// - Database connection fails
    pub async fn create_with_profile(
        pool: &SqlitePool,
        data: CreateUser,
        profile: CreateProfile,
    ) -> Result<(Self, Profile), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO "User" ("email", "name", "password", "role", "tenantId")
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING "id", "email", "name", "password", "role", "tenantId"
            "#,
        )
        .bind(data.email)
        .bind(data.name)
        .bind(data.password_hash)
        .bind(data.role)
        .bind(data.tenant_id)
        .fetch_one(&mut *tx)
        .await?;

        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO "Profile" ("bio", "userId")
            VALUES (?1, ?2)
            RETURNING "id", "bio", "userId"
            "#,
        )
        .bind(profile.bio)
        .bind(user.id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok((user, profile))
    }

    /// Finds a user by ID
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT "id", "email", "name", "password", "role", "tenantId"
            FROM "User"
            WHERE "id" = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by email address (exact match)
    pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT "id", "email", "name", "password", "role", "tenantId"
            FROM "User"
            WHERE "email" = ?1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Lists the users of a tenant, ordered by ID
    pub async fn list_by_tenant(
        pool: &SqlitePool,
        tenant_id: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT "id", "email", "name", "password", "role", "tenantId"
            FROM "User"
            WHERE "tenantId" = ?1
            ORDER BY "id"
            "#,
        )
        .bind(tenant_id)
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    /// Counts total number of users
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM "User""#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Deletes every user
    ///
    /// Profiles reference users and must be removed first.
    ///
    /// # Returns
    ///
    /// Number of rows deleted
    pub async fn delete_all(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(r#"DELETE FROM "User""#)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}
