use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/cities", get(handlers::city::get_all_cities))
        .route("/api/cities/:id", get(handlers::city::get_city_with_tours))
}

pub fn admin_routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/admin/cities", post(handlers::city::create_city))
        .route("/api/admin/cities/reorder", put(handlers::city::reorder_cities))
        .route("/api/admin/cities/:id", put(handlers::city::update_city))
        .route("/api/admin/cities/:id", delete(handlers::city::delete_city))
}
