use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;
use tripsync_core::{
    errors::TourError,
    models::{
        ordering::ReorderRequest,
        tour::{CreateTourRequest, SetFeaturedRequest, Tour, TourListResponse, UpdateTourRequest},
    },
};
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

#[axum::debug_handler]
pub async fn create_tour(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateTourRequest>,
) -> Result<Json<Tour>, AppError> {
    if payload.title.trim().is_empty()
        || payload.duration.trim().is_empty()
        || payload.destinations.is_empty()
        || payload.itinerary.is_empty()
    {
        return Err(AppError(TourError::Validation(
            "title, duration, destinations and itinerary are required".to_string(),
        )));
    }

    // The tour must land in an existing city.
    tripsync_db::repositories::city::get_city_by_id(&state.db_pool, payload.city_id)
        .await
        .map_err(TourError::Database)?
        .ok_or_else(|| TourError::NotFound(format!("City with ID {} not found", payload.city_id)))?;

    let db_tour = tripsync_db::repositories::tour::create_tour(
        &state.db_pool,
        payload.city_id,
        &payload.title,
        &payload.duration,
        &payload.destinations,
        &payload.itinerary,
        payload.image.as_deref(),
    )
    .await
    .map_err(TourError::Database)?;

    Ok(Json(db_tour.into()))
}

#[axum::debug_handler]
pub async fn get_tour_by_id(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Tour>, AppError> {
    let db_tour = tripsync_db::repositories::tour::get_tour_by_id(&state.db_pool, id)
        .await
        .map_err(TourError::Database)?
        .ok_or_else(|| TourError::NotFound(format!("Tour with ID {} not found", id)))?;

    Ok(Json(db_tour.into()))
}

#[axum::debug_handler]
pub async fn get_tours_by_city(
    State(state): State<Arc<ApiState>>,
    Path(city_id): Path<Uuid>,
) -> Result<Json<TourListResponse>, AppError> {
    let tours: Vec<Tour> =
        tripsync_db::repositories::tour::get_tours_by_city_id(&state.db_pool, city_id)
            .await
            .map_err(TourError::Database)?
            .into_iter()
            .map(Into::into)
            .collect();

    Ok(Json(TourListResponse {
        count: tours.len(),
        tours,
    }))
}

/// Featured tours drive the storefront hero section.
#[axum::debug_handler]
pub async fn get_featured_tours(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<TourListResponse>, AppError> {
    let tours: Vec<Tour> = tripsync_db::repositories::tour::get_featured_tours(&state.db_pool)
        .await
        .map_err(TourError::Database)?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(TourListResponse {
        count: tours.len(),
        tours,
    }))
}

#[axum::debug_handler]
pub async fn update_tour(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTourRequest>,
) -> Result<Json<Tour>, AppError> {
    let db_tour = tripsync_db::repositories::tour::update_tour(
        &state.db_pool,
        id,
        payload.title.as_deref(),
        payload.duration.as_deref(),
        payload.destinations.as_deref(),
        payload.itinerary.as_deref(),
        payload.image.as_deref(),
    )
    .await
    .map_err(TourError::Database)?
    .ok_or_else(|| TourError::NotFound(format!("Tour with ID {} not found", id)))?;

    Ok(Json(db_tour.into()))
}

#[axum::debug_handler]
pub async fn delete_tour(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Tour>, AppError> {
    let db_tour = tripsync_db::repositories::tour::delete_tour(&state.db_pool, id)
        .await
        .map_err(TourError::Database)?
        .ok_or_else(|| TourError::NotFound(format!("Tour with ID {} not found", id)))?;

    Ok(Json(db_tour.into()))
}

#[axum::debug_handler]
pub async fn set_featured(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SetFeaturedRequest>,
) -> Result<Json<Tour>, AppError> {
    let db_tour =
        tripsync_db::repositories::tour::set_featured(&state.db_pool, id, payload.featured)
            .await
            .map_err(TourError::Database)?
            .ok_or_else(|| TourError::NotFound(format!("Tour with ID {} not found", id)))?;

    Ok(Json(db_tour.into()))
}

#[axum::debug_handler]
pub async fn reorder_tours(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<ReorderRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    if payload.entries.is_empty() {
        return Err(AppError(TourError::Validation(
            "reorder entries are required".to_string(),
        )));
    }

    tripsync_db::repositories::tour::reorder_tours(&state.db_pool, &payload.entries)
        .await
        .map_err(TourError::Database)?;

    Ok(Json(
        serde_json::json!({ "success": true, "message": "Tours reordered successfully" }),
    ))
}
