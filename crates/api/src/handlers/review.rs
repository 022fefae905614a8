use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;
use tripsync_core::{
    errors::TourError,
    models::{
        ordering::ReorderRequest,
        review::{
            CreateReviewRequest, MAX_REVIEW_LENGTH, Review, ReviewListResponse,
            SetReviewStatusRequest, UpdateReviewRequest,
        },
    },
};
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

fn validate_rating(rating: i32) -> Result<(), AppError> {
    if !(1..=5).contains(&rating) {
        return Err(AppError(TourError::Validation(
            "Rating must be between 1 and 5.".to_string(),
        )));
    }
    Ok(())
}

#[axum::debug_handler]
pub async fn create_review(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateReviewRequest>,
) -> Result<Json<Review>, AppError> {
    if payload.customer_name.trim().is_empty() || payload.review.trim().is_empty() {
        return Err(AppError(TourError::Validation(
            "Customer name, rating, and review are required.".to_string(),
        )));
    }
    if payload.image.trim().is_empty() {
        return Err(AppError(TourError::Validation(
            "Customer image is required.".to_string(),
        )));
    }
    if payload.review.len() > MAX_REVIEW_LENGTH {
        return Err(AppError(TourError::Validation(format!(
            "Review must be at most {MAX_REVIEW_LENGTH} characters."
        ))));
    }
    validate_rating(payload.rating)?;

    let db_review = tripsync_db::repositories::review::create_review(
        &state.db_pool,
        &payload.customer_name,
        payload.rating,
        &payload.review,
        &payload.image,
    )
    .await
    .map_err(TourError::Database)?;

    Ok(Json(db_review.into()))
}

/// Public listing: active reviews only, in curated order.
#[axum::debug_handler]
pub async fn get_active_reviews(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ReviewListResponse>, AppError> {
    let reviews: Vec<Review> =
        tripsync_db::repositories::review::get_active_reviews(&state.db_pool)
            .await
            .map_err(TourError::Database)?
            .into_iter()
            .map(Into::into)
            .collect();

    Ok(Json(ReviewListResponse {
        count: reviews.len(),
        reviews,
    }))
}

/// Admin listing: inactive reviews included.
#[axum::debug_handler]
pub async fn get_all_reviews(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ReviewListResponse>, AppError> {
    let reviews: Vec<Review> = tripsync_db::repositories::review::get_all_reviews(&state.db_pool)
        .await
        .map_err(TourError::Database)?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(ReviewListResponse {
        count: reviews.len(),
        reviews,
    }))
}

#[axum::debug_handler]
pub async fn get_review_by_id(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Review>, AppError> {
    let db_review = tripsync_db::repositories::review::get_review_by_id(&state.db_pool, id)
        .await
        .map_err(TourError::Database)?
        .ok_or_else(|| TourError::NotFound(format!("Review with ID {} not found", id)))?;

    Ok(Json(db_review.into()))
}

#[axum::debug_handler]
pub async fn update_review(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateReviewRequest>,
) -> Result<Json<Review>, AppError> {
    if let Some(rating) = payload.rating {
        validate_rating(rating)?;
    }
    if let Some(review) = &payload.review {
        if review.len() > MAX_REVIEW_LENGTH {
            return Err(AppError(TourError::Validation(format!(
                "Review must be at most {MAX_REVIEW_LENGTH} characters."
            ))));
        }
    }

    let db_review = tripsync_db::repositories::review::update_review(
        &state.db_pool,
        id,
        payload.customer_name.as_deref(),
        payload.rating,
        payload.review.as_deref(),
        payload.image.as_deref(),
        payload.is_active,
    )
    .await
    .map_err(TourError::Database)?
    .ok_or_else(|| TourError::NotFound(format!("Review with ID {} not found", id)))?;

    Ok(Json(db_review.into()))
}

#[axum::debug_handler]
pub async fn delete_review(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Review>, AppError> {
    let db_review = tripsync_db::repositories::review::delete_review(&state.db_pool, id)
        .await
        .map_err(TourError::Database)?
        .ok_or_else(|| TourError::NotFound(format!("Review with ID {} not found", id)))?;

    Ok(Json(db_review.into()))
}

#[axum::debug_handler]
pub async fn set_review_status(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SetReviewStatusRequest>,
) -> Result<Json<Review>, AppError> {
    let db_review =
        tripsync_db::repositories::review::set_review_status(&state.db_pool, id, payload.is_active)
            .await
            .map_err(TourError::Database)?
            .ok_or_else(|| TourError::NotFound(format!("Review with ID {} not found", id)))?;

    Ok(Json(db_review.into()))
}

#[axum::debug_handler]
pub async fn reorder_reviews(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<ReorderRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    if payload.entries.is_empty() {
        return Err(AppError(TourError::Validation(
            "Review orders array is required".to_string(),
        )));
    }

    tripsync_db::repositories::review::reorder_reviews(&state.db_pool, &payload.entries)
        .await
        .map_err(TourError::Database)?;

    Ok(Json(
        serde_json::json!({ "success": true, "message": "Reviews reordered successfully" }),
    ))
}
