/// Password hashing module using bcrypt
///
/// The application that consumes the seeded database authenticates users
/// against bcrypt hashes, so stored passwords are produced in the same format.
///
/// # Security
///
/// - **Algorithm**: bcrypt, `$2b$` variant
/// - **Cost**: 10 (2^10 key expansion rounds)
/// - **Salt**: 16 random bytes from the OS RNG
///
/// # Example
///
/// ```
/// use tenantpress_shared::auth::password::{hash_password, verify_password};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("super_secret_password_123")?;
///
/// assert!(verify_password("super_secret_password_123", &hash)?);
/// assert!(!verify_password("wrong_password", &hash)?);
/// # Ok(())
/// # }
/// ```

use bcrypt::{BcryptError, Version};
use rand::{rngs::OsRng, RngCore};

/// Fixed bcrypt cost factor for every stored password
pub const HASH_COST: u32 = 10;

/// Error type for password hashing operations
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    /// Failed to hash password
    #[error("Failed to hash password: {0}")]
    HashError(String),

    /// Failed to verify password
    #[error("Failed to verify password: {0}")]
    VerifyError(String),

    /// Invalid password hash format
    #[error("Invalid password hash format: {0}")]
    InvalidHash(String),
}

/// A 16-byte bcrypt salt
///
/// One salt can be shared across several [`hash_password_with_salt`] calls;
/// the seeder generates one per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Salt([u8; 16]);

impl Salt {
    /// Generates a random salt using the OS RNG
    pub fn generate() -> Self {
        let mut bytes = [0u8; 16];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Wraps raw salt bytes
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

/// Hashes a password with a fresh random salt
///
/// # Returns
///
/// Modular crypt format hash, e.g. `$2b$10$<22 char salt><31 char hash>`
///
/// # Errors
///
/// Returns `PasswordError::HashError` if hashing fails
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    hash_password_with_salt(password, &Salt::generate())
}

/// Hashes a password with the given salt at [`HASH_COST`]
///
/// # Errors
///
/// Returns `PasswordError::HashError` if hashing fails
///
/// # Example
///
/// ```
/// use tenantpress_shared::auth::password::{hash_password_with_salt, Salt};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let salt = Salt::generate();
/// let admin = hash_password_with_salt("admin123", &salt)?;
/// let user = hash_password_with_salt("user123", &salt)?;
///
/// // Same salt, same 29-character prefix
/// assert_eq!(admin[..29], user[..29]);
/// # Ok(())
/// # }
/// ```
pub fn hash_password_with_salt(password: &str, salt: &Salt) -> Result<String, PasswordError> {
    let parts = bcrypt::hash_with_salt(password, HASH_COST, salt.0)
        .map_err(|e| PasswordError::HashError(format!("Hash generation failed: {}", e)))?;

    Ok(parts.format_for_version(Version::TwoB))
}

/// Verifies a password against a stored bcrypt hash
///
/// # Returns
///
/// `Ok(true)` if password matches, `Ok(false)` if it doesn't match
///
/// # Errors
///
/// Returns `PasswordError::InvalidHash` if the stored hash cannot be parsed,
/// `PasswordError::VerifyError` for any other failure.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    match bcrypt::verify(password, hash) {
        Ok(matches) => Ok(matches),
        Err(e @ (BcryptError::InvalidHash(_)
        | BcryptError::InvalidPrefix(_)
        | BcryptError::InvalidCost(_)
        | BcryptError::InvalidBase64(_))) => Err(PasswordError::InvalidHash(format!(
            "Failed to parse hash: {}",
            e
        ))),
        Err(e) => Err(PasswordError::VerifyError(format!("Verification failed: {}", e))),
    }
}
