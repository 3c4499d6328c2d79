//! Resend mail adapter.
//!
//! Implements the `Mailer` port against the Resend HTTP API
//! (`POST {base_url}/emails`, bearer authentication).
//!
//! # Configuration
//!
//! ```ignore
//! let config = ResendConfig::new(api_key, "credits@example.com", "Agri Credit");
//! let mailer = ResendMailer::new(config)?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::ports::{DeliveryError, Mailer, OutboundEmail};

/// Default Resend API base URL.
pub const RESEND_API_BASE_URL: &str = "https://api.resend.com";

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Resend API configuration.
pub struct ResendConfig {
    /// API key (re_...).
    api_key: SecretString,

    /// Sender address.
    from_email: String,

    /// Sender display name.
    from_name: String,

    /// Base URL for the API (overridable for testing).
    base_url: String,

    /// Per-request timeout.
    timeout: Duration,
}

impl ResendConfig {
    /// Creates a configuration with the default base URL and timeout.
    pub fn new(
        api_key: impl Into<String>,
        from_email: impl Into<String>,
        from_name: impl Into<String>,
    ) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            from_email: from_email.into(),
            from_name: from_name.into(),
            base_url: RESEND_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Set a custom API base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `Name <address>` form used in the `from` field.
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.base_url.trim_end_matches('/'))
    }
}

impl std::fmt::Debug for ResendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendConfig")
            .field("api_key", &"[REDACTED]")
            .field("from_email", &self.from_email)
            .field("from_name", &self.from_name)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct ResendEmailRequest<'a> {
    from: String,
    to: Vec<&'a str>,
    subject: &'a str,
    html: &'a str,
}

/// Mailer backed by the Resend API.
pub struct ResendMailer {
    config: ResendConfig,
    client: Client,
}

impl ResendMailer {
    /// Creates a mailer with its own HTTP client.
    ///
    /// # Errors
    ///
    /// - `DeliveryError::Transport` if the HTTP client cannot be built
    pub fn new(config: ResendConfig) -> Result<Self, DeliveryError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DeliveryError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn to_resend_request<'a>(&self, email: &'a OutboundEmail) -> ResendEmailRequest<'a> {
        ResendEmailRequest {
            from: self.config.from_header(),
            to: vec![email.to.as_str()],
            subject: &email.subject,
            html: &email.html_body,
        }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), DeliveryError> {
        let body = self.to_resend_request(&email);

        let response = self
            .client
            .post(self.config.emails_url())
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DeliveryError::Transport(format!(
                        "Request timed out after {}s",
                        self.config.timeout.as_secs()
                    ))
                } else if e.is_connect() {
                    DeliveryError::Transport(format!("Connection failed: {}", e))
                } else {
                    DeliveryError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(to = %email.to, subject = %email.subject, "Mail accepted by Resend");
        Ok(())
    }
}
