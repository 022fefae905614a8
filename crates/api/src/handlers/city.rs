use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;
use tripsync_core::{
    errors::TourError,
    models::{
        city::{
            City, CityListResponse, CityWithToursResponse, CreateCityRequest, DeleteCityResponse,
            UpdateCityRequest,
        },
        ordering::ReorderRequest,
    },
};
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

#[axum::debug_handler]
pub async fn create_city(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateCityRequest>,
) -> Result<Json<City>, AppError> {
    if payload.title.trim().is_empty() || payload.description.trim().is_empty() {
        return Err(AppError(TourError::Validation(
            "title and description are required".to_string(),
        )));
    }
    if payload.image.trim().is_empty() {
        return Err(AppError(TourError::Validation(
            "image is required".to_string(),
        )));
    }

    let db_city = tripsync_db::repositories::city::create_city(
        &state.db_pool,
        &payload.title,
        &payload.description,
        &payload.image,
    )
    .await
    .map_err(TourError::Database)?;

    Ok(Json(db_city.into()))
}

#[axum::debug_handler]
pub async fn get_all_cities(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<CityListResponse>, AppError> {
    let cities: Vec<City> = tripsync_db::repositories::city::get_all_cities(&state.db_pool)
        .await
        .map_err(TourError::Database)?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(CityListResponse {
        count: cities.len(),
        cities,
    }))
}

#[axum::debug_handler]
pub async fn get_city_with_tours(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CityWithToursResponse>, AppError> {
    let db_city = tripsync_db::repositories::city::get_city_by_id(&state.db_pool, id)
        .await
        .map_err(TourError::Database)?
        .ok_or_else(|| TourError::NotFound(format!("City with ID {} not found", id)))?;

    let tours = tripsync_db::repositories::tour::get_tours_by_city_id(&state.db_pool, id)
        .await
        .map_err(TourError::Database)?;

    Ok(Json(CityWithToursResponse {
        id: db_city.id,
        title: db_city.title,
        description: db_city.description,
        image: db_city.image,
        tours: tours.into_iter().map(Into::into).collect(),
    }))
}

#[axum::debug_handler]
pub async fn update_city(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCityRequest>,
) -> Result<Json<City>, AppError> {
    let db_city = tripsync_db::repositories::city::update_city(
        &state.db_pool,
        id,
        payload.title.as_deref(),
        payload.description.as_deref(),
        payload.image.as_deref(),
    )
    .await
    .map_err(TourError::Database)?
    .ok_or_else(|| TourError::NotFound(format!("City with ID {} not found", id)))?;

    Ok(Json(db_city.into()))
}

/// Deleting a city removes its tours as well; the response reports how many
/// went with it.
#[axum::debug_handler]
pub async fn delete_city(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteCityResponse>, AppError> {
    let deleted_tours = tripsync_db::repositories::tour::count_tours_for_city(&state.db_pool, id)
        .await
        .map_err(TourError::Database)?;

    let db_city = tripsync_db::repositories::city::delete_city(&state.db_pool, id)
        .await
        .map_err(TourError::Database)?
        .ok_or_else(|| TourError::NotFound(format!("City with ID {} not found", id)))?;

    Ok(Json(DeleteCityResponse {
        id: db_city.id,
        deleted_tours: deleted_tours as u64,
    }))
}

#[axum::debug_handler]
pub async fn reorder_cities(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<ReorderRequest>,
) -> Result<Json<CityListResponse>, AppError> {
    if payload.entries.is_empty() {
        return Err(AppError(TourError::Validation(
            "reorder entries are required".to_string(),
        )));
    }

    tripsync_db::repositories::city::reorder_cities(&state.db_pool, &payload.entries)
        .await
        .map_err(TourError::Database)?;

    let cities: Vec<City> = tripsync_db::repositories::city::get_all_cities(&state.db_pool)
        .await
        .map_err(TourError::Database)?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(CityListResponse {
        count: cities.len(),
        cities,
    }))
}
