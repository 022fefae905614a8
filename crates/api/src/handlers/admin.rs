use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use std::sync::Arc;
use tripsync_core::{
    errors::TourError,
    models::{
        admin::{AdminAuthResponse, AdminLoginRequest, AdminSignupRequest},
        contact::SubmissionListResponse,
    },
};

use crate::{
    ApiState,
    middleware::{auth, error_handling::AppError},
};

#[axum::debug_handler]
pub async fn signup(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<AdminSignupRequest>,
) -> Result<Json<AdminAuthResponse>, AppError> {
    if payload.email.trim().is_empty() || payload.password.trim().is_empty() {
        return Err(AppError(TourError::Validation(
            "email and password are required".to_string(),
        )));
    }

    let existing =
        tripsync_db::repositories::admin::get_admin_by_email(&state.db_pool, &payload.email)
            .await
            .map_err(TourError::Database)?;
    if existing.is_some() {
        return Err(AppError(TourError::Validation(
            "Admin already exists".to_string(),
        )));
    }

    let password_hash = auth::hash_password(&payload.password).map_err(TourError::Database)?;
    let admin =
        tripsync_db::repositories::admin::create_admin(&state.db_pool, &payload.email, &password_hash)
            .await
            .map_err(TourError::Database)?;

    let token = auth::issue_admin_token(
        admin.id,
        &admin.email,
        &state.config.jwt_secret,
        state.config.token_ttl,
    )
    .map_err(TourError::Database)?;

    Ok(Json(AdminAuthResponse { token }))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<AdminLoginRequest>,
) -> Result<Json<AdminAuthResponse>, AppError> {
    let admin = tripsync_db::repositories::admin::verify_credentials(
        &state.db_pool,
        &payload.email,
        &payload.password,
    )
    .await
    .map_err(TourError::Database)?
    .ok_or_else(|| TourError::Authentication("Invalid credentials".to_string()))?;

    let token = auth::issue_admin_token(
        admin.id,
        &admin.email,
        &state.config.jwt_secret,
        state.config.token_ttl,
    )
    .map_err(TourError::Database)?;

    Ok(Json(AdminAuthResponse { token }))
}

#[derive(Debug, Deserialize)]
pub struct SubmissionQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub email: Option<String>,
    pub date: Option<String>,
}

/// `GET /api/admin/submissions?page=1&limit=20&email=...&date=...`
#[axum::debug_handler]
pub async fn list_submissions(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<SubmissionQuery>,
) -> Result<Json<SubmissionListResponse>, AppError> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(20).clamp(1, 100);

    let data = tripsync_db::repositories::contact_submission::list_submissions(
        &state.db_pool,
        query.email.as_deref(),
        query.date.as_deref(),
        page,
        limit,
    )
    .await
    .map_err(TourError::Database)?
    .into_iter()
    .map(Into::into)
    .collect();

    let total = tripsync_db::repositories::contact_submission::count_submissions(
        &state.db_pool,
        query.email.as_deref(),
        query.date.as_deref(),
    )
    .await
    .map_err(TourError::Database)?;

    Ok(Json(SubmissionListResponse {
        data,
        total,
        page,
        limit,
    }))
}
