//! Environment-driven configuration for the TripSync API server.
//!
//! Variables:
//!
//! - `API_HOST`: bind address (default: "0.0.0.0")
//! - `API_PORT`: listen port (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `LOG_LEVEL`: logging level (default: "info")
//! - `API_CORS_ORIGINS`: comma-separated allowed CORS origins
//! - `JWT_SECRET`: secret for admin bearer tokens
//! - `API_REQUEST_TIMEOUT_SECONDS`: request timeout (default: 30)
//! - `MAIL_API_ENDPOINT` / `MAIL_API_KEY`: transactional-mail API; mail is
//!   logged instead of sent when unset
//! - `MAIL_FROM` / `CONTACT_RECIPIENT`: envelope addresses for enquiry mail

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub log_level: Level,
    pub cors_origins: Option<Vec<String>>,
    pub jwt_secret: String,
    /// Admin token lifetime in seconds.
    pub token_ttl: i64,
    pub request_timeout: u64,
    pub mail_endpoint: Option<String>,
    pub mail_api_key: Option<String>,
    pub mail_from: String,
    pub contact_recipient: String,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url = env::var("DATABASE_URL")
            .wrap_err("DATABASE_URL environment variable must be set")?;

        // Logging settings
        let log_level = match env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS")
            .ok()
            .map(|origins| origins.split(',').map(|s| s.trim().to_string()).collect());

        // Security settings
        let jwt_secret =
            env::var("JWT_SECRET").unwrap_or_else(|_| "tripsync-dev-secret".to_string());
        let token_ttl = env::var("ADMIN_TOKEN_TTL_SECONDS")
            .unwrap_or_else(|_| "86400".to_string())
            .parse()
            .unwrap_or(86400);

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Mail settings
        let mail_endpoint = env::var("MAIL_API_ENDPOINT").ok();
        let mail_api_key = env::var("MAIL_API_KEY").ok();
        let mail_from =
            env::var("MAIL_FROM").unwrap_or_else(|_| "no-reply@tripsync.example".to_string());
        let contact_recipient = env::var("CONTACT_RECIPIENT")
            .unwrap_or_else(|_| "enquiries@tripsync.example".to_string());

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            jwt_secret,
            token_ttl,
            request_timeout,
            mail_endpoint,
            mail_api_key,
            mail_from,
            contact_recipient,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
