use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

/// Credential endpoints stay outside the bearer guard.
pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/admin/signup", post(handlers::admin::signup))
        .route("/api/admin/login", post(handlers::admin::login))
}

pub fn admin_routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/admin/submissions",
        get(handlers::admin::list_submissions),
    )
}
