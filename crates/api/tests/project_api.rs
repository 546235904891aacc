//! HTTP-level tests for the project registry.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{expect_json, get_auth, post_json_auth, put_json_auth, register, Account};
use serde_json::json;
use sqlx::PgPool;

async fn create_project(app: &Router, school: &Account, date: &str) -> i64 {
    let response = post_json_auth(
        app,
        "/api/projects",
        json!({
            "name": "Club de robótica",
            "description": "Sesiones semanales",
            "date": date,
            "startTime": "09:00",
            "endTime": "12:00"
        }),
        &school.token,
    )
    .await;
    expect_json(response, StatusCode::CREATED).await["id"]
        .as_i64()
        .unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_and_list_projects(pool: PgPool) {
    let app = common::build_test_app(pool);
    let school = register(&app, "Escuela", "escuela@example.org", "school").await;
    let volunteer = register(&app, "Ana", "ana@example.org", "volunteer").await;

    let later = create_project(&app, &school, "2024-07-01").await;
    let sooner = create_project(&app, &school, "2024-06-01").await;

    // Schools default to their own projects.
    let own = expect_json(get_auth(&app, "/api/projects", &school.token).await, StatusCode::OK).await;
    let ids: Vec<i64> = own.as_array().unwrap().iter().map(|p| p["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![sooner, later]);
    assert_eq!(own[0]["startTime"], "09:00:00");
    assert_eq!(own[0]["reservedBy"], serde_json::Value::Null);

    // Other roles must name the school.
    let response = get_auth(&app, "/api/projects", &volunteer.token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let school_id = school.school_id.unwrap();
    let listed = expect_json(
        get_auth(&app, &format!("/api/projects?schoolId={school_id}"), &volunteer.token).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(listed.as_array().unwrap().len(), 2);

    let one = expect_json(
        get_auth(&app, &format!("/api/projects/{sooner}"), &volunteer.token).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(one["schoolId"], school_id);

    let response = get_auth(&app, "/api/projects/999999", &volunteer.token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_project_validation_and_role(pool: PgPool) {
    let app = common::build_test_app(pool);
    let school = register(&app, "Escuela", "escuela@example.org", "school").await;
    let volunteer = register(&app, "Ana", "ana@example.org", "volunteer").await;

    let response = post_json_auth(
        &app,
        "/api/projects",
        json!({ "name": "Sin fecha", "description": "x", "startTime": "09:00", "endTime": "10:00" }),
        &school.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json_auth(
        &app,
        "/api/projects",
        json!({ "name": "n", "description": "d", "date": "2024-06-01", "startTime": "09:00", "endTime": "10:00" }),
        &volunteer.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_claim_project(pool: PgPool) {
    let app = common::build_test_app(pool);
    let school = register(&app, "Escuela", "escuela@example.org", "school").await;
    let ana = register(&app, "Ana", "ana@example.org", "volunteer").await;
    let luis = register(&app, "Luis", "luis@example.org", "volunteer").await;
    let project = create_project(&app, &school, "2024-06-01").await;
    let uri = format!("/api/projects/{project}/reserve");

    let ana_id = ana.volunteer_id.unwrap();
    let luis_id = luis.volunteer_id.unwrap();

    // Missing name.
    let response = put_json_auth(&app, &uri, json!({ "volunteerId": ana_id }), &ana.token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Claiming on behalf of someone else.
    let response = put_json_auth(
        &app,
        &uri,
        json!({ "volunteerId": luis_id, "volunteerName": "Luis" }),
        &ana.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = put_json_auth(
        &app,
        &uri,
        json!({ "volunteerId": ana_id, "volunteerName": "Ana" }),
        &ana.token,
    )
    .await;
    let claimed = expect_json(response, StatusCode::OK).await;
    assert_eq!(claimed["reservedBy"], ana_id);
    assert_eq!(claimed["reservedName"], "Ana");

    let response = put_json_auth(
        &app,
        &uri,
        json!({ "volunteerId": luis_id, "volunteerName": "Luis" }),
        &luis.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let stored = expect_json(
        get_auth(&app, &format!("/api/projects/{project}"), &luis.token).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(stored["reservedBy"], ana_id);

    let response = put_json_auth(
        &app,
        "/api/projects/999999/reserve",
        json!({ "volunteerId": luis_id, "volunteerName": "Luis" }),
        &luis.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
