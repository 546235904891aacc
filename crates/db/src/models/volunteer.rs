//! Volunteer profile model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use voluntech_core::types::{DbId, Timestamp};

/// A row from the `volunteers` table.
///
/// `modality` is stored as text constrained to `online`/`presencial`; parse
/// it with [`voluntech_core::volunteer::Modality`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Volunteer {
    pub id: DbId,
    pub user_id: DbId,
    pub specialties: Vec<String>,
    pub modality: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a volunteer profile.
#[derive(Debug, Clone)]
pub struct CreateVolunteer {
    pub specialties: Vec<String>,
    pub modality: String,
}

/// DTO for updating a volunteer profile. All fields are optional.
#[derive(Debug, Clone, Default)]
pub struct UpdateVolunteer {
    pub specialties: Option<Vec<String>>,
    pub modality: Option<String>,
}
