//! Repository for the `availabilities` table.

use sqlx::PgPool;
use voluntech_core::availability::SlotFilter;
use voluntech_core::types::DbId;
use voluntech_core::volunteer::Modality;

use crate::models::availability::{Availability, CreateAvailability, PublicSlot, PublicSlotRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, volunteer_id, date, start_time, end_time, reserved, created_at, updated_at";

/// Outcome of [`AvailabilityRepo::delete_unreserved`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotDeletion {
    Deleted,
    NotFound,
    /// The slot belongs to a different volunteer.
    NotOwner,
    /// A booking currently holds the slot.
    Reserved,
}

/// Provides CRUD operations for availability slots.
pub struct AvailabilityRepo;

impl AvailabilityRepo {
    /// Insert a new, unreserved slot.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAvailability,
    ) -> Result<Availability, sqlx::Error> {
        let query = format!(
            "INSERT INTO availabilities (volunteer_id, date, start_time, end_time, reserved)
             VALUES ($1, $2, $3, $4, false)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Availability>(&query)
            .bind(input.volunteer_id)
            .bind(input.date)
            .bind(input.start_time)
            .bind(input.end_time)
            .fetch_one(pool)
            .await
    }

    /// Find a slot by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Availability>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM availabilities WHERE id = $1");
        sqlx::query_as::<_, Availability>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All slots of a volunteer, reserved or not, earliest first.
    pub async fn list_by_volunteer(
        pool: &PgPool,
        volunteer_id: DbId,
    ) -> Result<Vec<Availability>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM availabilities
             WHERE volunteer_id = $1
             ORDER BY date ASC, start_time ASC, id ASC"
        );
        sqlx::query_as::<_, Availability>(&query)
            .bind(volunteer_id)
            .fetch_all(pool)
            .await
    }

    /// Unreserved slots joined with their volunteer's public profile.
    ///
    /// Reserved slots are never returned, whatever the filter.
    pub async fn list_open(
        pool: &PgPool,
        filter: &SlotFilter,
    ) -> Result<Vec<PublicSlot>, sqlx::Error> {
        let rows = sqlx::query_as::<_, PublicSlotRow>(
            "SELECT a.id, a.date, a.start_time, a.end_time, a.volunteer_id,
                    u.name AS volunteer_name, u.email AS volunteer_email,
                    v.specialties, v.modality
             FROM availabilities a
             JOIN volunteers v ON v.id = a.volunteer_id
             JOIN users u ON u.id = v.user_id
             WHERE a.reserved = false
               AND ($1::text IS NULL OR $1 = ANY(v.specialties))
               AND ($2::text IS NULL OR v.modality = $2)
               AND ($3::date IS NULL OR a.date = $3)
             ORDER BY a.date ASC, a.start_time ASC, a.id ASC",
        )
        .bind(filter.specialty.as_deref())
        .bind(filter.modality.map(Modality::as_str))
        .bind(filter.date)
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(PublicSlot::from).collect())
    }

    /// Delete a slot owned by `volunteer_id` unless it is reserved.
    ///
    /// The ownership and reservation checks are part of the `DELETE` itself,
    /// so a booking landing concurrently cannot be orphaned.
    pub async fn delete_unreserved(
        pool: &PgPool,
        id: DbId,
        volunteer_id: DbId,
    ) -> Result<SlotDeletion, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM availabilities
             WHERE id = $1 AND volunteer_id = $2 AND reserved = false",
        )
        .bind(id)
        .bind(volunteer_id)
        .execute(pool)
        .await?;

        if result.rows_affected() > 0 {
            return Ok(SlotDeletion::Deleted);
        }

        // Nothing deleted: work out why.
        Ok(match Self::find_by_id(pool, id).await? {
            None => SlotDeletion::NotFound,
            Some(slot) if slot.volunteer_id != volunteer_id => SlotDeletion::NotOwner,
            Some(_) => SlotDeletion::Reserved,
        })
    }
}
