/// Error handling for the seeder
///
/// Insertion failures are fatal and surface as [`SeedError`]. Cleanup
/// failures have their own type, [`CleanupError`](crate::seed::cleanup::CleanupError),
/// because the seeder logs them and carries on.
///
/// # Example
///
/// ```
/// use tenantpress_seed::error::SeedError;
///
/// let err = SeedError::from(sqlx::Error::RowNotFound);
/// assert!(err.to_string().starts_with("Database error"));
/// assert!(!err.is_unique_violation());
/// ```

use tenantpress_shared::auth::password::PasswordError;

/// Seed result type alias
pub type SeedResult<T> = Result<T, SeedError>;

/// Fatal error raised while inserting seed data
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// A query failed (constraint violation, missing table, lost connection)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A seed password could not be hashed
    #[error("Password hashing failed: {0}")]
    Password(#[from] PasswordError),
}

impl SeedError {
    /// Whether the failure is a uniqueness constraint violation
    ///
    /// Typically a seed email that survived a failed cleanup.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            SeedError::Database(sqlx::Error::Database(db_err)) => db_err.is_unique_violation(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SeedError::Password(PasswordError::HashError("bad cost".to_string()));
        assert_eq!(
            err.to_string(),
            "Password hashing failed: Failed to hash password: bad cost"
        );

        let err = SeedError::Database(sqlx::Error::PoolClosed);
        assert!(err.to_string().starts_with("Database error: "));
    }

    #[test]
    fn test_non_database_error_is_not_unique_violation() {
        let err = SeedError::Password(PasswordError::HashError("x".to_string()));
        assert!(!err.is_unique_violation());
    }
}
