use std::error::Error;
use tripsync_core::errors::{TourError, TourResult};

#[test]
fn test_tour_error_display() {
    let not_found = TourError::NotFound("Tour not found".to_string());
    let validation = TourError::Validation("date is required".to_string());
    let policy = TourError::Policy("bookings are allowed from tomorrow onwards".to_string());
    let conflict = TourError::Conflict("selected time slot is not available".to_string());
    let authentication = TourError::Authentication("Invalid credentials".to_string());
    let authorization = TourError::Authorization("Not authorized".to_string());
    let database = TourError::Database(eyre::eyre!("Database connection failed"));
    let internal = TourError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(not_found.to_string(), "Resource not found: Tour not found");
    assert_eq!(validation.to_string(), "Validation error: date is required");
    assert_eq!(
        policy.to_string(),
        "Booking policy violation: bookings are allowed from tomorrow onwards"
    );
    assert_eq!(
        conflict.to_string(),
        "Booking conflict: selected time slot is not available"
    );
    assert_eq!(
        authentication.to_string(),
        "Authentication error: Invalid credentials"
    );
    assert_eq!(
        authorization.to_string(),
        "Authorization error: Not authorized"
    );
    assert!(database.to_string().contains("Database error:"));
    assert!(internal.to_string().contains("Internal server error:"));
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let tour_error = TourError::Internal(Box::new(io_error));

    assert!(tour_error.source().is_some());
}

#[test]
fn test_tour_result() {
    let result: TourResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: TourResult<i32> = Err(TourError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_from_trait_implementation() {
    let eyre_error = eyre::eyre!("Database error");
    let tour_error = TourError::Database(eyre_error);

    assert!(tour_error.to_string().contains("Database error"));
}
