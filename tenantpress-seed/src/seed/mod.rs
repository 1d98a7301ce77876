/// Demonstration-data seeding
///
/// The seeder clears the content tables and inserts a fixed data set:
/// one tenant, two users with profiles, two categories, one post and the
/// links between the post and both categories.
///
/// # Modules
///
/// - `data`: The fixed data set
/// - `cleanup`: Best-effort removal of existing rows
/// - `report`: Row counts after a run
///
/// # Example
///
/// ```no_run
/// use tenantpress_seed::seed::Seeder;
/// use sqlx::SqlitePool;
///
/// # async fn example(pool: SqlitePool) -> Result<(), Box<dyn std::error::Error>> {
/// let summary = Seeder::new(&pool).run().await?;
/// println!("Seeded tenant {}", summary.tenant_id);
/// # Ok(())
/// # }
/// ```

pub mod cleanup;
pub mod data;
pub mod report;

use serde::Serialize;
use sqlx::SqlitePool;
use tenantpress_shared::auth::password::{hash_password_with_salt, Salt};
use tenantpress_shared::models::category::{Category, CreateCategory};
use tenantpress_shared::models::post::{CreatePost, Post};
use tenantpress_shared::models::post_category::{CreatePostCategory, PostCategory};
use tenantpress_shared::models::profile::CreateProfile;
use tenantpress_shared::models::tenant::{CreateTenant, Tenant};
use tenantpress_shared::models::user::{CreateUser, User};
use tracing::{debug, info, warn};

use crate::error::SeedResult;
use cleanup::clear_existing_data;
use data::{SeedData, DEMO_DATA};

/// IDs of every row created by a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub tenant_id: i64,
    pub user_ids: Vec<i64>,
    pub profile_ids: Vec<i64>,
    pub category_ids: Vec<i64>,
    pub post_id: i64,
    pub links_created: u64,
    /// Whether the cleanup phase completed
    pub cleanup_completed: bool,
}

/// Runs the seed procedure against one pool
pub struct Seeder<'a> {
    pool: &'a SqlitePool,
    data: &'static SeedData,
}

impl<'a> Seeder<'a> {
    /// Creates a seeder for the demonstration data set
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self {
            pool,
            data: &DEMO_DATA,
        }
    }

    /// Clears existing rows, then inserts the data set
    ///
    /// A failing cleanup is logged and ignored. Every insert is awaited
    /// before the next one starts; the first failing insert aborts the run
    /// and rows inserted before it are left in place.
    ///
    /// # Errors
    ///
    /// Returns an error if hashing or any insert fails
    pub async fn run(&self) -> SeedResult<SeedSummary> {
        info!("Starting database seed");

        let cleanup_completed = match clear_existing_data(self.pool).await {
            Ok(_) => true,
            Err(e) => {
                warn!(
                    table = e.table,
                    error = %e.source,
                    "Database was empty or cleanup failed, continuing"
                );
                false
            }
        };

        // One salt for the whole run
        let salt = Salt::generate();
        let password_hashes = self
            .data
            .users
            .iter()
            .map(|user| hash_password_with_salt(user.password, &salt))
            .collect::<Result<Vec<_>, _>>()?;

        let tenant = Tenant::create(
            self.pool,
            CreateTenant {
                name: self.data.tenant_name.to_string(),
            },
        )
        .await?;
        debug!(tenant_id = tenant.id, "Created tenant");

        let mut user_ids = Vec::with_capacity(self.data.users.len());
        let mut profile_ids = Vec::with_capacity(self.data.users.len());
        for (seed_user, password_hash) in self.data.users.iter().zip(password_hashes) {
            let (user, profile) = User::create_with_profile(
                self.pool,
                CreateUser {
                    email: seed_user.email.to_string(),
                    name: Some(seed_user.name.to_string()),
                    password_hash,
                    role: seed_user.role,
                    tenant_id: tenant.id,
                },
                CreateProfile {
                    bio: Some(seed_user.bio.to_string()),
                },
            )
            .await?;
            debug!(user_id = user.id, email = %user.email, role = user.role.as_str(), "Created user");

            user_ids.push(user.id);
            profile_ids.push(profile.id);
        }

        let mut category_ids = Vec::with_capacity(self.data.categories.len());
        for name in self.data.categories {
            let category = Category::create(
                self.pool,
                CreateCategory {
                    name: name.to_string(),
                },
            )
            .await?;
            category_ids.push(category.id);
        }

        let post = Post::create(
            self.pool,
            CreatePost {
                title: self.data.post_title.to_string(),
            },
        )
        .await?;

        let links: Vec<CreatePostCategory> = category_ids
            .iter()
            .map(|&category_id| CreatePostCategory {
                post_id: post.id,
                category_id,
            })
            .collect();
        let links_created = PostCategory::create_many(self.pool, &links).await?;

        info!(
            tenant_id = tenant.id,
            users = user_ids.len(),
            categories = category_ids.len(),
            post_id = post.id,
            "Database seeded successfully"
        );

        Ok(SeedSummary {
            tenant_id: tenant.id,
            user_ids,
            profile_ids,
            category_ids,
            post_id: post.id,
            links_created,
            cleanup_completed,
        })
    }
}
