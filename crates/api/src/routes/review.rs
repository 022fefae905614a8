use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route("/api/reviews", get(handlers::review::get_active_reviews))
}

pub fn admin_routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/admin/reviews", get(handlers::review::get_all_reviews))
        .route("/api/admin/reviews", post(handlers::review::create_review))
        .route("/api/admin/reviews/reorder", put(handlers::review::reorder_reviews))
        .route("/api/admin/reviews/:id", get(handlers::review::get_review_by_id))
        .route("/api/admin/reviews/:id", put(handlers::review::update_review))
        .route("/api/admin/reviews/:id", delete(handlers::review::delete_review))
        .route("/api/admin/reviews/:id/status", put(handlers::review::set_review_status))
}
