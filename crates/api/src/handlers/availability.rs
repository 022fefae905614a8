use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use std::sync::Arc;
use tripsync_core::{
    models::contact::AvailableSlotsResponse,
    scheduling::{availability::available_slots, clock::Clock, slots::format_slot},
};

use crate::{ApiState, middleware::error_handling::AppError};

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub date: Option<String>,
}

/// `GET /api/availability?date=YYYY-MM-DD`
///
/// Returns the bookable slots for a date as `HH:MM` strings, ascending. The
/// engine rejects dates inside the advance-booking window with 400.
#[axum::debug_handler]
pub async fn get_available_slots(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailableSlotsResponse>, AppError> {
    let raw_date = query.date.unwrap_or_default();

    let open = available_slots(&raw_date, state.clock.now_utc(), &state.registry)?;

    Ok(Json(AvailableSlotsResponse {
        slots: open.into_iter().map(format_slot).collect(),
    }))
}
