//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use voluntech_core::error::CoreError;
use voluntech_core::project::{Claim, NewProject};
use voluntech_core::roles::{Permission, Role};
use voluntech_core::types::DbId;
use voluntech_db::models::project::{CreateProject, Project};
use voluntech_db::repositories::{ClaimOutcome, ProjectRepo};

use super::{resolve_school, resolve_volunteer};
use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /projects`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListQuery {
    pub school_id: Option<DbId>,
}

/// Request body for `POST /projects`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// Request body for `PUT /projects/{id}/reserve`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRequest {
    pub volunteer_id: Option<DbId>,
    pub volunteer_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/projects?schoolId=
///
/// Without `schoolId`, a school caller gets its own projects.
pub async fn list(
    user: AuthUser,
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ProjectListQuery>,
) -> AppResult<Json<Vec<Project>>> {
    user.require(Permission::ViewProjects)?;

    let school_id = match (query.school_id, user.role) {
        (Some(id), _) => id,
        (None, Role::School) => resolve_school(&state.pool, &user).await?.id,
        (None, _) => {
            return Err(AppError::Core(CoreError::Validation(
                "Missing required query parameter: schoolId".into(),
            )))
        }
    };

    let projects = ProjectRepo::list_by_school(&state.pool, school_id).await?;
    Ok(Json(projects))
}

/// POST /api/projects
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<Project>)> {
    user.require(Permission::ManageProjects)?;
    let school = resolve_school(&state.pool, &user).await?;

    let posting = NewProject::parse(
        input.name.as_deref(),
        input.description.as_deref(),
        input.date.as_deref(),
        input.start_time.as_deref(),
        input.end_time.as_deref(),
    )?;

    let project = ProjectRepo::create(
        &state.pool,
        &CreateProject {
            school_id: school.id,
            name: posting.name,
            description: posting.description,
            date: posting.window.date,
            start_time: posting.window.start_time,
            end_time: posting.window.end_time,
        },
    )
    .await?;

    tracing::info!(project_id = project.id, school_id = school.id, "Project created");

    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    user: AuthUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Project>> {
    user.require(Permission::ViewProjects)?;
    ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .map(Json)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
}

/// PUT /api/projects/{id}/reserve
///
/// Attach the calling volunteer to an unclaimed project. The first claim
/// wins; later claims get 409 and leave the claimant unchanged.
pub async fn reserve(
    user: AuthUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<ClaimRequest>,
) -> AppResult<Json<Project>> {
    user.require(Permission::ClaimProject)?;
    let claim = Claim::parse(input.volunteer_id, input.volunteer_name.as_deref())?;

    let volunteer = resolve_volunteer(&state.pool, &user).await?;
    if claim.volunteer_id != volunteer.id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Projects can only be reserved for your own volunteer profile".into(),
        )));
    }

    match ProjectRepo::claim(&state.pool, id, &claim).await? {
        ClaimOutcome::Claimed(project) => {
            tracing::info!(project_id = id, volunteer_id = volunteer.id, "Project reserved");
            Ok(Json(project))
        }
        ClaimOutcome::NotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        })),
        ClaimOutcome::AlreadyClaimed => Err(AppError::Core(CoreError::Conflict(
            "Project is already reserved".into(),
        ))),
    }
}
