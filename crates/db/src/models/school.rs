//! School profile model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use voluntech_core::types::{DbId, Timestamp};

/// A row from the `schools` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct School {
    pub id: DbId,
    pub user_id: DbId,
    pub school_name: String,
    pub contact_person: String,
    pub phone: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A school with its owning user's public details.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SchoolWithOwner {
    pub id: DbId,
    pub user_id: DbId,
    pub school_name: String,
    pub contact_person: String,
    pub phone: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub user_name: String,
    pub user_email: String,
}

/// DTO for creating a school profile.
#[derive(Debug, Clone)]
pub struct CreateSchool {
    pub school_name: String,
    pub contact_person: String,
    pub phone: String,
}

/// DTO for updating a school. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSchool {
    pub school_name: Option<String>,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
}
