mod test_utils;

use axum::extract::{Query, State};
use chrono::{NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;
use tripsync_api::handlers::availability::{AvailabilityQuery, get_available_slots};
use tripsync_core::errors::TourError;

fn query(date: Option<&str>) -> Query<AvailabilityQuery> {
    Query(AvailabilityQuery {
        date: date.map(str::to_string),
    })
}

#[tokio::test]
async fn open_date_returns_the_full_grid() {
    let state = test_utils::build_test_state();

    let response = get_available_slots(State(state), query(Some("2024-02-01")))
        .await
        .unwrap();

    assert_eq!(response.0.slots.len(), 34);
    assert_eq!(response.0.slots[0], "07:00");
    assert_eq!(response.0.slots[33], "23:30");
}

#[tokio::test]
async fn booked_slot_and_neighbors_disappear_from_the_response() {
    let state = test_utils::build_test_state();
    state
        .registry
        .reserve(
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        )
        .unwrap();

    let response = get_available_slots(State(state.clone()), query(Some("2024-02-01")))
        .await
        .unwrap();

    assert!(!response.0.slots.contains(&"09:30".to_string()));
    assert!(!response.0.slots.contains(&"10:00".to_string()));
    assert!(!response.0.slots.contains(&"10:30".to_string()));
    assert!(response.0.slots.contains(&"09:00".to_string()));
    assert!(response.0.slots.contains(&"11:00".to_string()));
    assert_eq!(response.0.slots.len(), 31);
}

#[tokio::test]
async fn missing_date_is_a_validation_error() {
    let state = test_utils::build_test_state();

    let err = get_available_slots(State(state), query(None))
        .await
        .unwrap_err();

    assert!(matches!(err.0, TourError::Validation(_)));
}

#[tokio::test]
async fn same_day_requests_violate_the_booking_window() {
    let state = test_utils::build_test_state();

    let err = get_available_slots(State(state), query(Some("2024-01-10")))
        .await
        .unwrap_err();

    match err.0 {
        TourError::Policy(message) => {
            assert_eq!(message, "bookings are allowed from tomorrow onwards");
        }
        other => panic!("expected Policy, got {other:?}"),
    }
}
