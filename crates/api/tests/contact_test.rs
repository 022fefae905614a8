mod test_utils;

use axum::{Json, extract::State};
use chrono::{NaiveDate, NaiveTime};
use tripsync_api::handlers::contact::submit_contact_form;
use tripsync_core::{errors::TourError, models::contact::ContactRequest};

fn payload(json: serde_json::Value) -> ContactRequest {
    serde_json::from_value(json).expect("Failed to build contact payload")
}

fn booking_payload(date: &str, time: &str) -> ContactRequest {
    payload(serde_json::json!({
        "name": "Asha Verma",
        "email": "asha@example.com",
        "meeting_date": date,
        "meeting_time": time,
        "user_time_zone": "America/New_York",
    }))
}

#[tokio::test]
async fn blank_name_is_rejected() {
    let state = test_utils::build_test_state();
    let request = payload(serde_json::json!({ "name": "  ", "email": "a@b.com" }));

    let err = submit_contact_form(State(state), Json(request))
        .await
        .unwrap_err();

    assert!(matches!(err.0, TourError::Validation(_)));
}

#[tokio::test]
async fn booking_for_today_violates_the_window() {
    let state = test_utils::build_test_state();

    // "Now" is pinned to 2024-01-10 15:00 IST.
    let err = submit_contact_form(State(state), Json(booking_payload("2024-01-10", "16:00")))
        .await
        .unwrap_err();

    assert!(matches!(err.0, TourError::Policy(_)));
}

#[tokio::test]
async fn off_grid_time_is_a_validation_error() {
    let state = test_utils::build_test_state();

    let err = submit_contact_form(State(state), Json(booking_payload("2024-02-01", "10:15")))
        .await
        .unwrap_err();

    assert!(matches!(err.0, TourError::Validation(_)));
}

#[tokio::test]
async fn taken_slot_is_a_conflict() {
    let state = test_utils::build_test_state();
    state
        .registry
        .reserve(
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        )
        .unwrap();

    let err = submit_contact_form(
        State(state.clone()),
        Json(booking_payload("2024-02-01", "12:00")),
    )
    .await
    .unwrap_err();

    match err.0 {
        TourError::Conflict(message) => {
            assert_eq!(message, "selected time slot is not available");
        }
        other => panic!("expected Conflict, got {other:?}"),
    }
}

#[tokio::test]
async fn slot_adjacent_to_a_booking_is_a_conflict() {
    let state = test_utils::build_test_state();
    state
        .registry
        .reserve(
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        )
        .unwrap();

    let err = submit_contact_form(
        State(state.clone()),
        Json(booking_payload("2024-02-01", "12:30")),
    )
    .await
    .unwrap_err();

    assert!(matches!(err.0, TourError::Conflict(_)));
}
