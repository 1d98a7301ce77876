/// Database models for tenantpress
///
/// This module contains the table models of the content schema and their
/// CRUD operations. Table and column names follow the ORM-generated schema
/// (PascalCase tables, camelCase columns), so every identifier is quoted.
///
/// # Models
///
/// - `tenant`: Organizational root for multi-tenancy
/// - `user`: User accounts, each owned by one tenant
/// - `profile`: One-to-one biography extension of a user
/// - `category`: Named tags
/// - `post`: Content entries
/// - `post_category`: Many-to-many join between posts and categories
///
/// # Dependency order
///
/// Foreign keys point from children to parents:
///
/// ```text
/// PostCategory ──> Post
///              └─> Category
/// Profile ──> User ──> Tenant
/// ```
///
/// Rows must be deleted children first and inserted parents first.

pub mod category;
pub mod post;
pub mod post_category;
pub mod profile;
pub mod tenant;
pub mod user;
