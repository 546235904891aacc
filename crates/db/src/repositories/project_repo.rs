//! Repository for the `projects` table.

use sqlx::PgPool;
use voluntech_core::project::Claim;
use voluntech_core::types::DbId;

use crate::models::project::{CreateProject, Project};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, school_id, name, description, date, start_time, end_time, \
                       reserved_by, reserved_name, created_at, updated_at";

/// Outcome of [`ProjectRepo::claim`].
#[derive(Debug, Clone)]
pub enum ClaimOutcome {
    Claimed(Project),
    NotFound,
    /// Another volunteer claimed the project first.
    AlreadyClaimed,
}

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new, unclaimed project.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (school_id, name, description, date, start_time, end_time)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(input.school_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.date)
            .bind(input.start_time)
            .bind(input.end_time)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a school's projects, earliest first.
    pub async fn list_by_school(
        pool: &PgPool,
        school_id: DbId,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE school_id = $1
             ORDER BY date ASC, start_time ASC, id ASC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(school_id)
            .fetch_all(pool)
            .await
    }

    /// Attach a volunteer to an unclaimed project.
    ///
    /// Check-and-set in one statement: the first claimant wins and is never
    /// overwritten.
    pub async fn claim(pool: &PgPool, id: DbId, claim: &Claim) -> Result<ClaimOutcome, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET reserved_by = $2, reserved_name = $3
             WHERE id = $1 AND reserved_by IS NULL
             RETURNING {COLUMNS}"
        );
        let claimed = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(claim.volunteer_id)
            .bind(&claim.volunteer_name)
            .fetch_optional(pool)
            .await?;

        if let Some(project) = claimed {
            return Ok(ClaimOutcome::Claimed(project));
        }

        Ok(match Self::find_by_id(pool, id).await? {
            Some(_) => ClaimOutcome::AlreadyClaimed,
            None => ClaimOutcome::NotFound,
        })
    }
}
