//! Project posting model and DTOs.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use sqlx::FromRow;
use voluntech_core::types::{DbId, Timestamp};

/// A row from the `projects` table.
///
/// Serialized in camelCase (`startTime`, `reservedBy`, ...).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub school_id: DbId,
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// Volunteer id of the claimant, `None` until claimed.
    pub reserved_by: Option<DbId>,
    pub reserved_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a project.
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub school_id: DbId,
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}
