//! User entity model and DTOs.

use sqlx::FromRow;
use voluntech_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
///
/// Contains the password hash, so it is deliberately not `Serialize`.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A user joined with its role name and profile ids.
///
/// This is what login needs to build a token without further lookups.
#[derive(Debug, Clone, FromRow)]
pub struct UserAccount {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub school_id: Option<DbId>,
    pub volunteer_id: Option<DbId>,
}

/// DTO for creating a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role_id: DbId,
}

/// Profile created alongside a user at registration.
#[derive(Debug, Clone)]
pub enum NewProfile {
    School(super::school::CreateSchool),
    Volunteer(super::volunteer::CreateVolunteer),
    None,
}

/// Result of registering a user together with its profile.
#[derive(Debug, Clone)]
pub struct RegisteredUser {
    pub user: User,
    pub school: Option<super::school::School>,
    pub volunteer: Option<super::volunteer::Volunteer>,
}
