//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::school::School;
use crate::models::user::{CreateUser, NewProfile, RegisteredUser, User, UserAccount};
use crate::models::volunteer::Volunteer;
use crate::repositories::school_repo;
use crate::repositories::volunteer_repo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, password_hash, role_id, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a user and its role profile in one transaction.
    ///
    /// Either both rows exist afterwards or neither does. A duplicate email
    /// surfaces as a `uq_users_email` unique violation.
    pub async fn create_with_profile(
        pool: &PgPool,
        input: &CreateUser,
        profile: &NewProfile,
    ) -> Result<RegisteredUser, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO users (name, email, password_hash, role_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(input.role_id)
            .fetch_one(&mut *tx)
            .await?;

        let mut school: Option<School> = None;
        let mut volunteer: Option<Volunteer> = None;
        match profile {
            NewProfile::School(s) => {
                school = Some(school_repo::insert(&mut tx, user.id, s).await?);
            }
            NewProfile::Volunteer(v) => {
                volunteer = Some(volunteer_repo::insert(&mut tx, user.id, v).await?);
            }
            NewProfile::None => {}
        }

        tx.commit().await?;
        Ok(RegisteredUser {
            user,
            school,
            volunteer,
        })
    }

    /// Find a user by email together with its role name and profile ids.
    pub async fn find_account_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<UserAccount>, sqlx::Error> {
        sqlx::query_as::<_, UserAccount>(
            "SELECT u.id, u.name, u.email, u.password_hash, r.name AS role,
                    s.id AS school_id, v.id AS volunteer_id
             FROM users u
             JOIN roles r ON r.id = u.role_id
             LEFT JOIN schools s ON s.user_id = u.id
             LEFT JOIN volunteers v ON v.user_id = u.id
             WHERE u.email = $1",
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    /// Returns `true` if a user with this email already exists.
    pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
