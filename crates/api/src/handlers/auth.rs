//! Handlers for the `/auth` resource (register, login, me).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use voluntech_core::credentials::{validate_email, validate_password_strength};
use voluntech_core::error::{required, CoreError};
use voluntech_core::roles::Role;
use voluntech_core::types::DbId;
use voluntech_core::volunteer::Modality;
use voluntech_db::models::school::CreateSchool;
use voluntech_db::models::user::{CreateUser, NewProfile, RegisteredUser};
use voluntech_db::models::volunteer::CreateVolunteer;
use voluntech_db::repositories::{RoleRepo, UserRepo};

use crate::auth::jwt::{generate_access_token, TokenSubject};
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Same message for unknown email and wrong password.
const INVALID_CREDENTIALS: &str = "Invalid credentials";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
///
/// Fields are optional so that missing values surface as validation errors
/// naming the field instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// Request body for `POST /auth/login` and `POST /users/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful authentication response returned by register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Public user info embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school: Option<ProfileRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volunteer: Option<ProfileRef>,
}

#[derive(Debug, Serialize)]
pub struct ProfileRef {
    pub id: DbId,
}

/// Validated registration input.
#[derive(Debug)]
pub(crate) struct Registration<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/register
///
/// Create an account with a role-specific profile and return a token.
pub async fn register(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let registration = validate_registration(
        input.name.as_deref(),
        input.email.as_deref(),
        input.password.as_deref(),
    )?;

    let role: Role = required(input.role.as_deref(), "role")?.parse()?;
    if !role.is_self_assignable() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Role '{role}' cannot be chosen at registration"
        ))));
    }

    let registered = create_account(&state, &registration, role).await?;
    let school_id = registered.school.as_ref().map(|s| s.id);
    let volunteer_id = registered.volunteer.as_ref().map(|v| v.id);
    let user = registered.user;

    let token = issue_token(&state, user.id, &user.email, &user.name, role, school_id)?;

    tracing::info!(user_id = user.id, role = %role, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: UserInfo {
                id: user.id,
                name: user.name,
                email: user.email,
                role,
                school: school_id.map(|id| ProfileRef { id }),
                volunteer: volunteer_id.map(|id| ProfileRef { id }),
            },
        }),
    ))
}

/// POST /api/auth/login
///
/// Authenticate with email + password. Unknown email and wrong password are
/// indistinguishable to the caller.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let email = required(input.email.as_deref(), "email")?;
    let password = required_secret(input.password.as_deref(), "password")?;
    validate_email(email)?;

    let account = UserRepo::find_account_by_email(&state.pool, email)
        .await?
        .ok_or_else(invalid_credentials)?;

    let valid = verify_password(password, &account.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !valid {
        tracing::warn!(user_id = account.id, "Failed login attempt");
        return Err(invalid_credentials());
    }

    let role: Role = account.role.parse().map_err(|_| {
        AppError::InternalError(format!("Unknown role '{}' stored for user", account.role))
    })?;

    let token = issue_token(
        &state,
        account.id,
        &account.email,
        &account.name,
        role,
        account.school_id,
    )?;

    tracing::info!(user_id = account.id, role = %role, "User logged in");

    Ok(Json(AuthResponse {
        token,
        user: UserInfo {
            id: account.id,
            name: account.name,
            email: account.email,
            role,
            school: account.school_id.map(|id| ProfileRef { id }),
            volunteer: account.volunteer_id.map(|id| ProfileRef { id }),
        },
    }))
}

/// GET /api/auth/me
///
/// Echo the identity carried by the caller's token.
pub async fn me(user: AuthUser) -> Json<AuthUser> {
    Json(user)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Check name, email and password for presence, shape and strength.
pub(crate) fn validate_registration<'a>(
    name: Option<&'a str>,
    email: Option<&'a str>,
    password: Option<&'a str>,
) -> Result<Registration<'a>, CoreError> {
    let name = required(name, "name")?;
    let email = required(email, "email")?;
    let password = required_secret(password, "password")?;

    validate_email(email)?;
    validate_password_strength(password)?;

    Ok(Registration {
        name,
        email,
        password,
    })
}

/// Persist the user and its profile for `role` in one transaction.
pub(crate) async fn create_account(
    state: &AppState,
    registration: &Registration<'_>,
    role: Role,
) -> AppResult<RegisteredUser> {
    if UserRepo::email_exists(&state.pool, registration.email).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Email already registered".into(),
        )));
    }

    let role_row = RoleRepo::find_by_name(&state.pool, role.as_str())
        .await?
        .ok_or_else(|| AppError::InternalError(format!("Role '{role}' is not seeded")))?;

    let password_hash = hash_password(registration.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let profile = match role {
        Role::School => NewProfile::School(CreateSchool {
            school_name: default_school_name(registration.name),
            contact_person: registration.name.to_string(),
            phone: String::new(),
        }),
        Role::Volunteer => NewProfile::Volunteer(CreateVolunteer {
            specialties: Vec::new(),
            modality: Modality::default().as_str().to_string(),
        }),
        Role::User | Role::Admin => NewProfile::None,
    };

    let input = CreateUser {
        name: registration.name.to_string(),
        email: registration.email.to_string(),
        password_hash,
        role_id: role_row.id,
    };

    // A concurrent registration that slipped past the pre-check fails on
    // uq_users_email and is reported as 409 by the error mapping.
    Ok(UserRepo::create_with_profile(&state.pool, &input, &profile).await?)
}

fn issue_token(
    state: &AppState,
    user_id: DbId,
    email: &str,
    name: &str,
    role: Role,
    school_id: Option<DbId>,
) -> AppResult<String> {
    let subject = TokenSubject {
        user_id,
        email,
        name,
        role,
        school_id,
    };
    generate_access_token(&subject, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))
}

/// Like [`required`] but does not trim: whitespace is part of a password.
fn required_secret<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, CoreError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CoreError::Validation(format!("Missing required field: {field}"))),
    }
}

/// Placeholder school name until the school edits its profile.
fn default_school_name(account_name: &str) -> String {
    format!("Escuela de {account_name}")
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into()))
}
