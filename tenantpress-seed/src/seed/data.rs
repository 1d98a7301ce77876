//! The fixed demonstration data set.

use tenantpress_shared::models::user::Role;

/// A demonstration user with its plaintext password and profile biography
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedUser {
    pub email: &'static str,
    pub name: &'static str,
    pub password: &'static str,
    pub role: Role,
    pub bio: &'static str,
}

/// Everything the seeder inserts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedData {
    pub tenant_name: &'static str,
    pub users: [SeedUser; 2],
    pub categories: [&'static str; 2],
    /// The post is linked to every category
    pub post_title: &'static str,
}

pub const ADMIN_USER: SeedUser = SeedUser {
    email: "admin@nigatech.com",
    name: "Admin Principal",
    password: "admin123",
    role: Role::Admin,
    bio: "Administrador del sistema.",
};

pub const REGULAR_USER: SeedUser = SeedUser {
    email: "estudiante@uam.com",
    name: "Juan Pérez",
    password: "user123",
    role: Role::User,
    bio: "Estudiante de sistemas.",
};

pub const DEMO_DATA: SeedData = SeedData {
    tenant_name: "Corporación Nicaragua Tech",
    users: [ADMIN_USER, REGULAR_USER],
    categories: ["Desarrollo", "Ciberseguridad"],
    post_title: "Tutorial de Prisma",
};
