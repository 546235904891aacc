//! Repository for the `volunteers` table.

use sqlx::{PgPool, Postgres, Transaction};
use voluntech_core::types::DbId;

use crate::models::volunteer::{CreateVolunteer, UpdateVolunteer, Volunteer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, specialties, modality, created_at, updated_at";

/// Provides CRUD operations for volunteer profiles.
pub struct VolunteerRepo;

impl VolunteerRepo {
    /// Find the volunteer profile owned by a user.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Volunteer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM volunteers WHERE user_id = $1");
        sqlx::query_as::<_, Volunteer>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update specialties and/or modality. `None` fields are left untouched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVolunteer,
    ) -> Result<Option<Volunteer>, sqlx::Error> {
        let query = format!(
            "UPDATE volunteers SET
                specialties = COALESCE($2, specialties),
                modality = COALESCE($3, modality)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Volunteer>(&query)
            .bind(id)
            .bind(&input.specialties)
            .bind(&input.modality)
            .fetch_optional(pool)
            .await
    }
}

/// Insert a volunteer profile inside an open registration transaction.
pub(crate) async fn insert(
    tx: &mut Transaction<'_, Postgres>,
    user_id: DbId,
    input: &CreateVolunteer,
) -> Result<Volunteer, sqlx::Error> {
    let query = format!(
        "INSERT INTO volunteers (user_id, specialties, modality)
         VALUES ($1, $2, $3)
         RETURNING {COLUMNS}"
    );
    sqlx::query_as::<_, Volunteer>(&query)
        .bind(user_id)
        .bind(&input.specialties)
        .bind(&input.modality)
        .fetch_one(&mut **tx)
        .await
}
