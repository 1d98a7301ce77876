/// Tenant model and database operations
///
/// Tenants are the organizational root of the content schema. Every user
/// belongs to exactly one tenant through `User.tenantId`.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE "Tenant" (
///     "id"   INTEGER PRIMARY KEY AUTOINCREMENT,
///     "name" TEXT NOT NULL
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use tenantpress_shared::models::tenant::{Tenant, CreateTenant};
/// use tenantpress_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let tenant = Tenant::create(&pool, CreateTenant {
///     name: "Acme Corp".to_string(),
/// }).await?;
/// println!("Created tenant: {}", tenant.id);
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Tenant model representing an organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tenant {
    /// Unique tenant ID (autoincrement)
    pub id: i64,

    /// Organization name
    pub name: String,
}

/// Input for creating a new tenant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTenant {
    /// Organization name
    pub name: String,
}

impl Tenant {
    /// Creates a new tenant in the database
    ///
    /// # Returns
    ///
    /// The newly created tenant with its generated ID
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create(pool: &SqlitePool, data: CreateTenant) -> Result<Self, sqlx::Error> {
        let tenant = sqlx::query_as::<_, Tenant>(
            r#"
            INSERT INTO "Tenant" ("name")
            VALUES (?1)
            RETURNING "id", "name"
            "#,
        )
        .bind(data.name)
        .fetch_one(pool)
        .await?;

        Ok(tenant)
    }

    /// Finds a tenant by ID
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let tenant = sqlx::query_as::<_, Tenant>(
            r#"
            SELECT "id", "name"
            FROM "Tenant"
            WHERE "id" = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(tenant)
    }

    /// Finds a tenant by name (case-sensitive)
    ///
    /// Names are not unique; the oldest matching tenant is returned.
    pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Self>, sqlx::Error> {
        let tenant = sqlx::query_as::<_, Tenant>(
            r#"
            SELECT "id", "name"
            FROM "Tenant"
            WHERE "name" = ?1
            ORDER BY "id"
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(pool)
        .await?;

        Ok(tenant)
    }

    /// Lists all tenants, ordered by ID
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let tenants = sqlx::query_as::<_, Tenant>(
            r#"
            SELECT "id", "name"
            FROM "Tenant"
            ORDER BY "id"
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(tenants)
    }

    /// Counts total number of tenants
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM "Tenant""#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Deletes every tenant
    ///
    /// Fails with a foreign key violation while any user still references a
    /// tenant; users must be removed first.
    ///
    /// # Returns
    ///
    /// Number of rows deleted
    pub async fn delete_all(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(r#"DELETE FROM "Tenant""#)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}
