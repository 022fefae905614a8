//! # TripSync API
//!
//! Web server for the TripSync tour-and-travel backend. It exposes the
//! public storefront endpoints (cities, tours, reviews, contact/enquiry,
//! meeting-slot availability) and the JWT-guarded admin back-office.
//!
//! The crate follows a layered layout:
//!
//! - **Routes**: endpoint tables
//! - **Handlers**: request processing logic
//! - **Middleware**: auth guard and error mapping
//! - **Mailer**: transactional-mail port
//! - **Config**: environment configuration

pub mod config;
pub mod handlers;
pub mod mailer;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use chrono::{NaiveDate, NaiveTime};
use eyre::Result;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;
use tripsync_core::scheduling::{
    clock::{Clock, SystemClock},
    registry::BookingRegistry,
    timezone::REFERENCE_ZONE,
};

use crate::mailer::{HttpMailer, Mailer, NoopMailer};

/// Shared application state handed to every request handler.
pub struct ApiState {
    pub db_pool: PgPool,
    /// Authoritative in-process booking state; preloaded from the
    /// submission store at boot.
    pub registry: BookingRegistry,
    pub clock: Arc<dyn Clock>,
    pub mailer: Arc<dyn Mailer>,
    pub config: config::ApiConfig,
}

/// Assembles the shared state: picks the mailer from config and warms the
/// booking registry with every future meeting already on record, so a
/// restart cannot resurrect taken slots.
pub async fn build_state(config: config::ApiConfig, db_pool: PgPool) -> Result<Arc<ApiState>> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let mailer: Arc<dyn Mailer> = match (&config.mail_endpoint, &config.mail_api_key) {
        (Some(endpoint), Some(key)) => Arc::new(HttpMailer::new(
            endpoint.clone(),
            key.clone(),
            config.mail_from.clone(),
        )),
        _ => Arc::new(NoopMailer),
    };

    let registry = BookingRegistry::new();
    let today = clock.now_utc().with_timezone(&REFERENCE_ZONE).date_naive();
    let persisted = tripsync_db::repositories::contact_submission::get_upcoming_meetings(
        &db_pool,
        &today.format("%Y-%m-%d").to_string(),
    )
    .await?;
    let entries = persisted.into_iter().filter_map(|(date, time)| {
        let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d").ok()?;
        let time = NaiveTime::parse_from_str(&time, "%H:%M").ok()?;
        Some((date, time))
    });
    registry.preload(entries, today);

    Ok(Arc::new(ApiState {
        db_pool,
        registry,
        clock,
        mailer,
        config,
    }))
}

/// Builds the full application router over the given state.
pub fn app_router(state: Arc<ApiState>) -> Router {
    let admin_api = Router::new()
        .merge(routes::city::admin_routes())
        .merge(routes::tour::admin_routes())
        .merge(routes::review::admin_routes())
        .merge(routes::admin::admin_routes())
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_admin,
        ));

    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Public storefront endpoints
        .merge(routes::availability::routes())
        .merge(routes::contact::routes())
        .merge(routes::city::routes())
        .merge(routes::tour::routes())
        .merge(routes::review::routes())
        // Admin credentials (unguarded) and guarded back-office
        .merge(routes::admin::routes())
        .merge(admin_api)
        .with_state(state)
}

/// Starts the API server with the provided configuration and database pool.
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cors_origins = config.cors_origins.clone();
    let request_timeout = config.request_timeout;
    let addr = config.server_addr();

    let state = build_state(config, db_pool).await?;
    let app = app_router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &cors_origins {
        let origins = origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect::<Vec<axum::http::HeaderValue>>();
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(tower_http::timeout::TimeoutLayer::new(
                std::time::Duration::from_secs(request_timeout),
            ))
            .into_inner(),
    );

    // Start the HTTP server
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
