//! HTTP-level tests for registration and login.

mod common;

use axum::http::StatusCode;
use common::{body_json, expect_json, get_auth, post_json, register, PASSWORD};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_school_creates_profile(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        &app,
        "/api/auth/register",
        json!({ "name": "Escuela 12", "email": "escuela@example.org", "password": PASSWORD, "role": "school" }),
    )
    .await;

    let json = expect_json(response, StatusCode::CREATED).await;
    assert!(json["token"].is_string());
    assert_eq!(json["user"]["role"], "school");
    assert_eq!(json["user"]["email"], "escuela@example.org");
    assert!(json["user"]["school"]["id"].is_i64());
    assert!(json["user"].get("volunteer").is_none());

    let school_id = json["user"]["school"]["id"].as_i64().unwrap();
    let token = json["token"].as_str().unwrap();
    let school = expect_json(
        get_auth(&app, &format!("/api/school/{school_id}"), token).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(school["school_name"], "Escuela de Escuela 12");
    assert_eq!(school["contact_person"], "Escuela 12");
    assert_eq!(school["phone"], "");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_volunteer_defaults(pool: PgPool) {
    let app = common::build_test_app(pool);
    let volunteer = register(&app, "Ana", "ana@example.org", "volunteer").await;
    assert!(volunteer.volunteer_id.is_some());

    let profile = expect_json(
        get_auth(&app, "/api/volunteers/me", &volunteer.token).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(profile["modality"], "online");
    assert_eq!(profile["specialties"], json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_email_is_conflict(pool: PgPool) {
    let app = common::build_test_app(pool);
    register(&app, "Ana", "ana@example.org", "volunteer").await;

    let response = post_json(
        &app,
        "/api/auth/register",
        json!({ "name": "Otra", "email": "ana@example.org", "password": PASSWORD, "role": "school" }),
    )
    .await;
    let json = expect_json(response, StatusCode::CONFLICT).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success_returns_profile_ids(pool: PgPool) {
    let app = common::build_test_app(pool);
    let school = register(&app, "Escuela", "escuela@example.org", "school").await;

    let response = post_json(
        &app,
        "/api/auth/login",
        json!({ "email": "escuela@example.org", "password": PASSWORD }),
    )
    .await;
    let json = expect_json(response, StatusCode::OK).await;
    assert!(json["token"].is_string());
    assert_eq!(json["user"]["id"], school.user_id);
    assert_eq!(json["user"]["school"]["id"], school.school_id.unwrap());

    let me = expect_json(
        get_auth(&app, "/api/auth/me", json["token"].as_str().unwrap()).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(me["school_id"], school.school_id.unwrap());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_errors_do_not_reveal_which_part_failed(pool: PgPool) {
    let app = common::build_test_app(pool);
    register(&app, "Ana", "ana@example.org", "volunteer").await;

    let wrong_password = post_json(
        &app,
        "/api/auth/login",
        json!({ "email": "ana@example.org", "password": "Incorrecta123" }),
    )
    .await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    let wrong_password = body_json(wrong_password).await;

    let unknown_email = post_json(
        &app,
        "/api/auth/login",
        json!({ "email": "nadie@example.org", "password": PASSWORD }),
    )
    .await;
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    let unknown_email = body_json(unknown_email).await;

    assert_eq!(wrong_password, unknown_email);
    assert_eq!(wrong_password["message"], "Invalid credentials");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_generic_user_register_and_login(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        &app,
        "/api/users/register",
        json!({ "name": "Pablo", "email": "pablo@example.org", "password": PASSWORD, "role": "admin" }),
    )
    .await;
    let created = expect_json(response, StatusCode::CREATED).await;
    assert_eq!(created["name"], "Pablo");
    assert_eq!(created["email"], "pablo@example.org");
    assert!(created.get("password_hash").is_none());

    let response = post_json(
        &app,
        "/api/users/login",
        json!({ "email": "pablo@example.org", "password": PASSWORD }),
    )
    .await;
    let json = expect_json(response, StatusCode::OK).await;
    assert_eq!(json["user"]["role"], "user");
}
