//! Repository for the `schools` table.

use sqlx::{PgPool, Postgres, Transaction};
use voluntech_core::types::DbId;

use crate::models::school::{CreateSchool, School, SchoolWithOwner, UpdateSchool};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, school_name, contact_person, phone, created_at, updated_at";

/// Provides CRUD operations for school profiles.
pub struct SchoolRepo;

impl SchoolRepo {
    /// Find the school profile owned by a user.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<School>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM schools WHERE user_id = $1");
        sqlx::query_as::<_, School>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a school with its owning user's name and email.
    pub async fn find_with_owner(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SchoolWithOwner>, sqlx::Error> {
        sqlx::query_as::<_, SchoolWithOwner>(
            "SELECT s.id, s.user_id, s.school_name, s.contact_person, s.phone,
                    s.created_at, s.updated_at,
                    u.name AS user_name, u.email AS user_email
             FROM schools s
             JOIN users u ON u.id = s.user_id
             WHERE s.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Update a school. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSchool,
    ) -> Result<Option<School>, sqlx::Error> {
        let query = format!(
            "UPDATE schools SET
                school_name = COALESCE($2, school_name),
                contact_person = COALESCE($3, contact_person),
                phone = COALESCE($4, phone)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, School>(&query)
            .bind(id)
            .bind(&input.school_name)
            .bind(&input.contact_person)
            .bind(&input.phone)
            .fetch_optional(pool)
            .await
    }
}

/// Insert a school profile inside an open registration transaction.
pub(crate) async fn insert(
    tx: &mut Transaction<'_, Postgres>,
    user_id: DbId,
    input: &CreateSchool,
) -> Result<School, sqlx::Error> {
    let query = format!(
        "INSERT INTO schools (user_id, school_name, contact_person, phone)
         VALUES ($1, $2, $3, $4)
         RETURNING {COLUMNS}"
    );
    sqlx::query_as::<_, School>(&query)
        .bind(user_id)
        .bind(&input.school_name)
        .bind(&input.contact_person)
        .bind(&input.phone)
        .fetch_one(&mut **tx)
        .await
}
