//! HTTP-level tests for the availability ledger.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_slot, delete_auth, expect_json, get, get_auth, post_json_auth,
    put_json_auth, register,
};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_and_list_own_slots(pool: PgPool) {
    let app = common::build_test_app(pool);
    let volunteer = register(&app, "Ana", "ana@example.org", "volunteer").await;

    let late = create_slot(&app, &volunteer, "2024-05-02", "09:00", "10:00").await;
    let early = create_slot(&app, &volunteer, "2024-05-01", "10:00", "11:00").await;

    let slots = expect_json(
        get_auth(&app, "/api/availability/my", &volunteer.token).await,
        StatusCode::OK,
    )
    .await;
    let ids: Vec<i64> = slots
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![early, late]);
    assert_eq!(slots[0]["reserved"], false);
    assert_eq!(slots[0]["start_time"], "10:00:00");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_invalid_slots_are_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let volunteer = register(&app, "Ana", "ana@example.org", "volunteer").await;

    for body in [
        json!({ "date": "2024-05-01", "start_time": "10:00" }),
        json!({ "date": "mañana", "start_time": "10:00", "end_time": "11:00" }),
        json!({ "date": "2024-05-01", "start_time": "11:00", "end_time": "10:00" }),
    ] {
        let response = post_json_auth(&app, "/api/availability", body, &volunteer.token).await;
        let json = expect_json(response, StatusCode::BAD_REQUEST).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_slot_rules(pool: PgPool) {
    let app = common::build_test_app(pool);
    let owner = register(&app, "Ana", "ana@example.org", "volunteer").await;
    let other = register(&app, "Luis", "luis@example.org", "volunteer").await;
    let school = register(&app, "Escuela", "escuela@example.org", "school").await;

    let open = create_slot(&app, &owner, "2024-05-01", "10:00", "11:00").await;
    let booked = create_slot(&app, &owner, "2024-05-01", "12:00", "13:00").await;
    let response = post_json_auth(
        &app,
        "/api/bookings",
        json!({ "availabilityId": booked }),
        &school.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = delete_auth(&app, &format!("/api/availability/{booked}"), &owner.token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = delete_auth(&app, &format!("/api/availability/{open}"), &other.token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = delete_auth(&app, &format!("/api/availability/{open}"), &owner.token).await;
    let json = expect_json(response, StatusCode::OK).await;
    assert!(json["message"].is_string());

    let response = delete_auth(&app, &format!("/api/availability/{open}"), &owner.token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_available_filters(pool: PgPool) {
    let app = common::build_test_app(pool);
    let ana = register(&app, "Ana", "ana@example.org", "volunteer").await;
    let luis = register(&app, "Luis", "luis@example.org", "volunteer").await;
    let school = register(&app, "Escuela", "escuela@example.org", "school").await;

    let response = put_json_auth(
        &app,
        "/api/volunteers/me",
        json!({ "specialties": ["math", " math ", "robotics"], "modality": "Presencial" }),
        &ana.token,
    )
    .await;
    let profile = expect_json(response, StatusCode::OK).await;
    assert_eq!(profile["specialties"], json!(["math", "robotics"]));
    assert_eq!(profile["modality"], "presencial");

    let ana_slot = create_slot(&app, &ana, "2024-05-01", "10:00", "11:00").await;
    let luis_slot = create_slot(&app, &luis, "2024-05-02", "10:00", "11:00").await;

    let all = expect_json(
        get_auth(&app, "/api/availability/available", &school.token).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(all.as_array().unwrap().len(), 2);
    assert_eq!(all[0]["id"], ana_slot);
    assert_eq!(all[0]["volunteer"]["name"], "Ana");
    assert_eq!(all[0]["volunteer"]["modality"], "presencial");

    let filtered = expect_json(
        get_auth(
            &app,
            "/api/availability/available?specialty=robotics&modality=presencial",
            &school.token,
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(filtered.as_array().unwrap().len(), 1);
    assert_eq!(filtered[0]["id"], ana_slot);

    let by_date = expect_json(
        get_auth(&app, "/api/availability/available?date=2024-05-02", &school.token).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(by_date[0]["id"], luis_slot);

    let response = get_auth(
        &app,
        "/api/availability/available?modality=hologram",
        &school.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_public_and_per_volunteer_listings(pool: PgPool) {
    let app = common::build_test_app(pool);
    let ana = register(&app, "Ana", "ana@example.org", "volunteer").await;
    let school = register(&app, "Escuela", "escuela@example.org", "school").await;
    let slot = create_slot(&app, &ana, "2024-05-01", "10:00", "11:00").await;

    let public = get(&app, "/api/availability/public").await;
    let public = expect_json(public, StatusCode::OK).await;
    assert_eq!(public[0]["id"], slot);
    assert_eq!(public[0]["volunteer"]["email"], "ana@example.org");

    let volunteer_id = ana.volunteer_id.unwrap();
    let response = get_auth(
        &app,
        &format!("/api/availability/volunteer/{volunteer_id}"),
        &school.token,
    )
    .await;
    let slots = body_json(response).await;
    assert_eq!(slots.as_array().unwrap().len(), 1);
    assert_eq!(slots[0]["volunteer_id"], volunteer_id);
}
