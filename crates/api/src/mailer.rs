//! Transactional-mail port. Booking outcomes never depend on delivery: the
//! contact handler spawns sends and only logs failures.

use async_trait::async_trait;
use eyre::Result;
use serde_json::json;
use tracing::info;

#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    async fn send(&self, to: &str, subject: &str, text: &str, html: &str) -> Result<()>;
}

/// Posts messages to an HTTP transactional-mail API as JSON.
#[derive(Debug, Clone)]
pub struct HttpMailer {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    from: String,
}

impl HttpMailer {
    pub fn new(endpoint: String, api_key: String, from: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            api_key,
            from,
        }
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, to: &str, subject: &str, text: &str, html: &str) -> Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "from": self.from,
                "to": to,
                "subject": subject,
                "text": text,
                "html": html,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(eyre::eyre!(
                "mail API returned status {}",
                response.status()
            ));
        }

        Ok(())
    }
}

/// Logs instead of sending; the fallback when no mail endpoint is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMailer;

#[async_trait]
impl Mailer for NoopMailer {
    async fn send(&self, to: &str, subject: &str, _text: &str, _html: &str) -> Result<()> {
        info!("mail delivery disabled; would send {subject:?} to {to}");
        Ok(())
    }
}
