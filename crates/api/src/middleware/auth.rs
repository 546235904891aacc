//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use serde::Serialize;
use voluntech_core::error::CoreError;
use voluntech_core::roles::Role;
use voluntech_core::types::DbId;

use crate::auth::jwt::{validate_token, Claims};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT Bearer token in the `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     user.require(Permission::CreateBooking)?;
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_id: Option<DbId>,
}

impl TryFrom<Claims> for AuthUser {
    type Error = AppError;

    /// Fails when the role claim is not a known role.
    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let role: Role = claims
            .role
            .parse()
            .map_err(|_| unauthorized("Invalid or expired token"))?;

        Ok(AuthUser {
            user_id: claims.sub,
            email: claims.email,
            name: claims.name,
            role,
            school_id: claims.school_id,
        })
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| unauthorized("Invalid Authorization format. Expected: Bearer <token>"))?;

        let claims = validate_token(token, &state.config.jwt)
            .map_err(|_| unauthorized("Invalid or expired token"))?;

        AuthUser::try_from(claims)
    }
}

fn unauthorized(message: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(message.into()))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn claims(role: &str) -> Claims {
        Claims {
            sub: 9,
            email: "vol@example.org".into(),
            role: role.into(),
            name: "Vol".into(),
            school_id: None,
            exp: 0,
            iat: 0,
            jti: "x".into(),
        }
    }

    #[test]
    fn known_role_claim_becomes_auth_user() {
        let user = AuthUser::try_from(claims("volunteer")).unwrap();
        assert_eq!(user.user_id, 9);
        assert_eq!(user.role, Role::Volunteer);
    }

    #[test]
    fn unknown_role_claim_is_unauthorized() {
        assert_matches!(
            AuthUser::try_from(claims("superuser")),
            Err(AppError::Core(CoreError::Unauthorized(_)))
        );
    }
}
