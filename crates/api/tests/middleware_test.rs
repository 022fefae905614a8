use tripsync_api::middleware::auth;
use tripsync_core::errors::TourError;
use uuid::Uuid;

#[tokio::test]
async fn test_error_handling_not_found() {
    let error = TourError::NotFound("Resource not found".to_string());
    let response = tripsync_api::middleware::error_handling::map_error(error);
    assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_handling_validation() {
    let error = TourError::Validation("Invalid input".to_string());
    let response = tripsync_api::middleware::error_handling::map_error(error);
    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_policy() {
    let error = TourError::Policy("bookings are allowed from tomorrow onwards".to_string());
    let response = tripsync_api::middleware::error_handling::map_error(error);
    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_conflict() {
    let error = TourError::Conflict("selected time slot is not available".to_string());
    let response = tripsync_api::middleware::error_handling::map_error(error);
    assert_eq!(response.status(), axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_error_handling_authentication() {
    let error = TourError::Authentication("Invalid credentials".to_string());
    let response = tripsync_api::middleware::error_handling::map_error(error);
    assert_eq!(response.status(), axum::http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_error_handling_authorization() {
    let error = TourError::Authorization("Not authorized".to_string());
    let response = tripsync_api::middleware::error_handling::map_error(error);
    assert_eq!(response.status(), axum::http::StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_error_handling_database() {
    let error = TourError::Database(eyre::eyre!("Database error"));
    let response = tripsync_api::middleware::error_handling::map_error(error);
    assert_eq!(response.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_hash_password() {
    let password = "test_password";
    let hashed = auth::hash_password(password).unwrap();

    assert_ne!(hashed, password);
    assert!(hashed.starts_with("$argon2"));
}

#[tokio::test]
async fn test_hashes_are_salted() {
    let password = "test_password";
    let first = auth::hash_password(password).unwrap();
    let second = auth::hash_password(password).unwrap();

    assert_ne!(first, second);
}

#[test]
fn test_admin_token_round_trip() {
    let admin_id = Uuid::new_v4();
    let token = auth::issue_admin_token(admin_id, "admin@tripsync.test", "secret", 3600).unwrap();

    let claims = auth::decode_admin_token(&token, "secret").unwrap();
    assert_eq!(claims.sub, admin_id.to_string());
    assert_eq!(claims.email, "admin@tripsync.test");
    assert_eq!(claims.role, "admin");
}

#[test]
fn test_admin_token_rejects_wrong_secret() {
    let token =
        auth::issue_admin_token(Uuid::new_v4(), "admin@tripsync.test", "secret", 3600).unwrap();

    let err = auth::decode_admin_token(&token, "other-secret").unwrap_err();
    assert!(matches!(err, TourError::Authentication(_)));
}

#[test]
fn test_admin_token_rejects_garbage() {
    let err = auth::decode_admin_token("not-a-jwt", "secret").unwrap_err();
    assert!(matches!(err, TourError::Authentication(_)));
}
