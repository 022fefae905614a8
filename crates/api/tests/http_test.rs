mod test_utils;

use axum_test::TestServer;
use chrono::{NaiveDate, NaiveTime};
use serde_json::json;

fn server(state: std::sync::Arc<tripsync_api::ApiState>) -> TestServer {
    TestServer::new(tripsync_api::app_router(state)).expect("Failed to start test server")
}

#[tokio::test]
async fn health_endpoints_respond() {
    let server = server(test_utils::build_test_state());

    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));

    let response = server.get("/version").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn availability_endpoint_maps_engine_outcomes_to_statuses() {
    let server = server(test_utils::build_test_state());

    let response = server
        .get("/api/availability")
        .add_query_param("date", "2024-02-01")
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["slots"].as_array().unwrap().len(), 34);
    assert_eq!(body["slots"][0], "07:00");

    // Missing date
    let response = server.get("/api/availability").await;
    response.assert_status_bad_request();

    // Same-day request violates the advance window
    let response = server
        .get("/api/availability")
        .add_query_param("date", "2024-01-10")
        .await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn contact_booking_collision_returns_409() {
    let state = test_utils::build_test_state();
    state
        .registry
        .reserve(
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        )
        .unwrap();
    let server = server(state);

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "Asha Verma",
            "email": "asha@example.com",
            "meeting_date": "2024-02-01",
            "meeting_time": "12:00",
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
    let body: serde_json::Value = response.json();
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("selected time slot is not available")
    );
}

#[tokio::test]
async fn contact_booking_window_violation_returns_400() {
    let server = server(test_utils::build_test_state());

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "Asha Verma",
            "email": "asha@example.com",
            "meeting_date": "2024-01-09",
            "meeting_time": "12:00",
        }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn admin_api_requires_a_bearer_token() {
    let server = server(test_utils::build_test_state());

    let response = server.get("/api/admin/submissions").await;
    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);

    let response = server
        .get("/api/admin/submissions")
        .add_header(
            axum::http::header::AUTHORIZATION,
            axum::http::HeaderValue::from_static("Bearer not-a-jwt"),
        )
        .await;
    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);

    let response = server
        .post("/api/admin/cities")
        .json(&json!({ "title": "Delhi", "description": "x", "image": "y" }))
        .await;
    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
}
