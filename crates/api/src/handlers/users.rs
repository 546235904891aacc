//! Handlers for the `/users` resource: generic (non-profile) accounts.
//!
//! Login for these accounts is the same operation as `/auth/login`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use voluntech_core::roles::Role;
use voluntech_core::types::DbId;

use super::auth::{create_account, validate_registration, RegisterRequest};
use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Response body for `POST /users/register`.
#[derive(Debug, Serialize)]
pub struct RegisteredUserResponse {
    pub id: DbId,
    pub name: String,
    pub email: String,
}

/// POST /api/users/register
///
/// Create a `user`-role account. Any `role` in the body is ignored.
pub async fn register(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisteredUserResponse>)> {
    let registration = validate_registration(
        input.name.as_deref(),
        input.email.as_deref(),
        input.password.as_deref(),
    )?;

    let user = create_account(&state, &registration, Role::User).await?.user;

    tracing::info!(user_id = user.id, "Generic user registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisteredUserResponse {
            id: user.id,
            name: user.name,
            email: user.email,
        }),
    ))
}
