use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/tours/featured", get(handlers::tour::get_featured_tours))
        .route("/api/tours/city/:city_id", get(handlers::tour::get_tours_by_city))
        .route("/api/tours/:id", get(handlers::tour::get_tour_by_id))
}

pub fn admin_routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/admin/tours", post(handlers::tour::create_tour))
        .route("/api/admin/tours/reorder", put(handlers::tour::reorder_tours))
        .route("/api/admin/tours/:id", put(handlers::tour::update_tour))
        .route("/api/admin/tours/:id", delete(handlers::tour::delete_tour))
        .route("/api/admin/tours/:id/featured", put(handlers::tour::set_featured))
}
