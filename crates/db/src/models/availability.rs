//! Availability slot model and DTOs.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use sqlx::FromRow;
use voluntech_core::types::{DbId, Timestamp};

/// A row from the `availabilities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Availability {
    pub id: DbId,
    pub volunteer_id: DbId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub reserved: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a slot. New slots are always unreserved.
#[derive(Debug, Clone)]
pub struct CreateAvailability {
    pub volunteer_id: DbId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// Flat row for the public listing: an open slot joined with its volunteer.
#[derive(Debug, Clone, FromRow)]
pub struct PublicSlotRow {
    pub id: DbId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub volunteer_id: DbId,
    pub volunteer_name: String,
    pub volunteer_email: String,
    pub specialties: Vec<String>,
    pub modality: String,
}

/// Public profile of the volunteer offering a slot.
#[derive(Debug, Clone, Serialize)]
pub struct VolunteerSummary {
    pub name: String,
    pub email: String,
    pub specialties: Vec<String>,
    pub modality: String,
}

/// An open slot as returned by the public listing.
#[derive(Debug, Clone, Serialize)]
pub struct PublicSlot {
    pub id: DbId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub volunteer_id: DbId,
    pub volunteer: VolunteerSummary,
}

impl From<PublicSlotRow> for PublicSlot {
    fn from(row: PublicSlotRow) -> Self {
        Self {
            id: row.id,
            date: row.date,
            start_time: row.start_time,
            end_time: row.end_time,
            volunteer_id: row.volunteer_id,
            volunteer: VolunteerSummary {
                name: row.volunteer_name,
                email: row.volunteer_email,
                specialties: row.specialties,
                modality: row.modality,
            },
        }
    }
}
