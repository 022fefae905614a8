//! Maps domain errors onto HTTP status codes and JSON error bodies so every
//! endpoint fails the same way.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tripsync_core::errors::TourError;

/// Wrapper that lets handlers return `TourError` through `?` and still
/// produce a proper HTTP response.
#[derive(Debug)]
pub struct AppError(pub TourError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            TourError::NotFound(_) => StatusCode::NOT_FOUND,
            TourError::Validation(_) => StatusCode::BAD_REQUEST,
            TourError::Policy(_) => StatusCode::BAD_REQUEST,
            TourError::Conflict(_) => StatusCode::CONFLICT,
            TourError::Authentication(_) => StatusCode::UNAUTHORIZED,
            TourError::Authorization(_) => StatusCode::FORBIDDEN,
            TourError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            TourError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

impl From<TourError> for AppError {
    fn from(err: TourError) -> Self {
        AppError(err)
    }
}

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(TourError::Database(err))
    }
}

pub fn map_error(err: TourError) -> Response {
    AppError(err).into_response()
}
