/// Integration tests for the seeder
///
/// Each test seeds its own temporary SQLite database.

mod common;

use common::TestDatabase;
use tenantpress_seed::app::seed_and_close;
use tenantpress_seed::seed::cleanup::clear_existing_data;
use tenantpress_seed::seed::data::DEMO_DATA;
use tenantpress_seed::seed::report::SeedReport;
use tenantpress_seed::seed::Seeder;
use tenantpress_shared::auth::password::verify_password;
use tenantpress_shared::models::category::Category;
use tenantpress_shared::models::post::Post;
use tenantpress_shared::models::post_category::PostCategory;
use tenantpress_shared::models::profile::Profile;
use tenantpress_shared::models::tenant::Tenant;
use tenantpress_shared::models::user::{Role, User};

#[tokio::test]
async fn test_seed_creates_expected_rows() {
    let db = TestDatabase::new().await.unwrap();
    let pool = db.connect().await.unwrap();

    let summary = Seeder::new(&pool).run().await.expect("Seeding should succeed");
    assert!(summary.cleanup_completed);
    assert_eq!(summary.links_created, 2);

    assert_eq!(SeedReport::collect(&pool).await.unwrap(), SeedReport::expected());

    let tenants = Tenant::list(&pool).await.unwrap();
    assert_eq!(tenants.len(), 1);
    assert_eq!(tenants[0].name, "Corporación Nicaragua Tech");
    assert_eq!(tenants[0].id, summary.tenant_id);

    let users = User::list_by_tenant(&pool, summary.tenant_id).await.unwrap();
    assert_eq!(users.len(), 2);
    for user in &users {
        let profile = Profile::find_by_user(&pool, user.id)
            .await
            .unwrap()
            .expect("Every user has a profile");
        assert_eq!(profile.user_id, user.id);
    }

    let admin = User::find_by_email(&pool, "admin@nigatech.com").await.unwrap().unwrap();
    assert_eq!(admin.name.as_deref(), Some("Admin Principal"));
    assert_eq!(admin.role, Role::Admin);
    let admin_profile = Profile::find_by_user(&pool, admin.id).await.unwrap().unwrap();
    assert_eq!(admin_profile.bio.as_deref(), Some("Administrador del sistema."));

    let student = User::find_by_email(&pool, "estudiante@uam.com").await.unwrap().unwrap();
    assert_eq!(student.name.as_deref(), Some("Juan Pérez"));
    assert_eq!(student.role, Role::User);

    let category_names: Vec<String> = Category::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(category_names, vec!["Desarrollo", "Ciberseguridad"]);

    let posts = Post::list(&pool).await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "Tutorial de Prisma");

    let links = PostCategory::list_for_post(&pool, posts[0].id).await.unwrap();
    let mut linked: Vec<i64> = links.iter().map(|l| l.category_id).collect();
    linked.sort_unstable();
    let mut expected = summary.category_ids.clone();
    expected.sort_unstable();
    assert_eq!(linked, expected);

    pool.close().await;
}

#[tokio::test]
async fn test_passwords_are_hashed() {
    let db = TestDatabase::new().await.unwrap();
    let pool = db.connect().await.unwrap();

    Seeder::new(&pool).run().await.unwrap();

    for seed_user in DEMO_DATA.users {
        let user = User::find_by_email(&pool, seed_user.email).await.unwrap().unwrap();

        assert_ne!(user.password_hash, seed_user.password);
        assert!(user.password_hash.starts_with("$2b$10$"));
        assert!(verify_password(seed_user.password, &user.password_hash).unwrap());
        assert!(!verify_password("wrong", &user.password_hash).unwrap());
    }

    pool.close().await;
}

#[tokio::test]
async fn test_seeding_twice_is_idempotent() {
    let db = TestDatabase::new().await.unwrap();
    let pool = db.connect().await.unwrap();

    Seeder::new(&pool).run().await.unwrap();
    let first = SeedReport::collect(&pool).await.unwrap();

    let second_run = Seeder::new(&pool).run().await.unwrap();
    let second = SeedReport::collect(&pool).await.unwrap();

    assert!(second_run.cleanup_completed);
    assert_eq!(first, second);
    assert_eq!(second, SeedReport::expected());

    pool.close().await;
}

#[tokio::test]
async fn test_cleanup_removes_rows_in_dependency_order() {
    let db = TestDatabase::new().await.unwrap();
    let pool = db.connect().await.unwrap();

    Seeder::new(&pool).run().await.unwrap();

    let report = clear_existing_data(&pool).await.expect("Cleanup should succeed");
    assert_eq!(
        report.deleted,
        vec![
            ("PostCategory", 2),
            ("Category", 2),
            ("Post", 1),
            ("Profile", 2),
            ("User", 2),
            ("Tenant", 1),
        ]
    );
    assert_eq!(SeedReport::collect(&pool).await.unwrap(), SeedReport::default());

    pool.close().await;
}

#[tokio::test]
async fn test_failed_cleanup_still_seeds() {
    let db = TestDatabase::new().await.unwrap();

    // A leftover link that cannot be deleted aborts the cleanup at its first step
    db.execute(
        r#"
        INSERT INTO "Post" ("title") VALUES ('Leftover');
        INSERT INTO "Category" ("name") VALUES ('Archivo');
        INSERT INTO "PostCategory" ("postId", "categoryId") VALUES (1, 1);
        "#,
    )
    .await
    .unwrap();
    db.reject("DELETE", "PostCategory").await.unwrap();

    let pool = db.connect().await.unwrap();
    let err = clear_existing_data(&pool).await.unwrap_err();
    assert_eq!(err.table, "PostCategory");

    let summary = Seeder::new(&pool).run().await.expect("Seeding should proceed");
    assert!(!summary.cleanup_completed);

    let report = SeedReport::collect(&pool).await.unwrap();
    assert_eq!(report.tenants, 1);
    assert_eq!(report.users, 2);
    assert_eq!(report.profiles, 2);
    assert_eq!(report.categories, 3);
    assert_eq!(report.posts, 2);
    assert_eq!(report.post_categories, 3);

    pool.close().await;
}

#[tokio::test]
async fn test_insert_failure_closes_pool() {
    let db = TestDatabase::new().await.unwrap();
    db.reject("INSERT", "Post").await.unwrap();

    let pool = db.connect().await.unwrap();
    let handle = pool.clone();

    let result = seed_and_close(pool).await;

    assert!(result.is_err(), "Rejected post insert must fail the run");
    assert!(handle.is_closed(), "Pool must be closed on the failure path");

    // Rows inserted before the failure are not rolled back
    let pool = db.connect().await.unwrap();
    let report = SeedReport::collect(&pool).await.unwrap();
    assert_eq!(report.tenants, 1);
    assert_eq!(report.users, 2);
    assert_eq!(report.posts, 0);
    assert_eq!(report.post_categories, 0);
    pool.close().await;
}

#[tokio::test]
async fn test_duplicate_email_is_unique_violation() {
    let db = TestDatabase::new().await.unwrap();

    // Cleanup fails at the user table, so the seeded admin email survives
    db.execute(
        r#"
        INSERT INTO "Tenant" ("name") VALUES ('Old tenant');
        INSERT INTO "User" ("email", "name", "password", "role", "tenantId")
        VALUES ('admin@nigatech.com', 'Old admin', 'x', 'ADMIN', 1);
        "#,
    )
    .await
    .unwrap();
    db.reject("DELETE", "User").await.unwrap();

    let pool = db.connect().await.unwrap();
    let handle = pool.clone();

    let err = seed_and_close(pool).await.unwrap_err();
    assert!(err.is_unique_violation(), "unexpected error: {}", err);
    assert!(handle.is_closed());
}

#[tokio::test]
async fn test_success_closes_pool() {
    let db = TestDatabase::new().await.unwrap();
    let pool = db.connect().await.unwrap();
    let handle = pool.clone();

    let report = seed_and_close(pool).await.unwrap();

    assert_eq!(report, SeedReport::expected());
    assert!(handle.is_closed());
}
