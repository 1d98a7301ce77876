//! Row counts of the seeded tables.

use serde::Serialize;
use sqlx::SqlitePool;
use tenantpress_shared::models::{
    category::Category, post::Post, post_category::PostCategory, profile::Profile, tenant::Tenant,
    user::User,
};

/// Number of rows in each seeded table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub tenants: i64,
    pub users: i64,
    pub profiles: i64,
    pub categories: i64,
    pub posts: i64,
    pub post_categories: i64,
}

impl SeedReport {
    /// Counts the rows of all six tables
    pub async fn collect(pool: &SqlitePool) -> Result<Self, sqlx::Error> {
        Ok(Self {
            tenants: Tenant::count(pool).await?,
            users: User::count(pool).await?,
            profiles: Profile::count(pool).await?,
            categories: Category::count(pool).await?,
            posts: Post::count(pool).await?,
            post_categories: PostCategory::count(pool).await?,
        })
    }

    /// Counts produced by one successful run on a cleared database
    pub fn expected() -> Self {
        Self {
            tenants: 1,
            users: 2,
            profiles: 2,
            categories: 2,
            posts: 1,
            post_categories: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_matches_data_set() {
        let data = super::super::data::DEMO_DATA;
        let expected = SeedReport::expected();

        assert_eq!(expected.users as usize, data.users.len());
        assert_eq!(expected.profiles as usize, data.users.len());
        assert_eq!(expected.categories as usize, data.categories.len());
        assert_eq!(expected.post_categories as usize, data.categories.len());
    }
}
