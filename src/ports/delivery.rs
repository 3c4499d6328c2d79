//! Outbound delivery ports: mail and realtime push.
//!
//! Both channels are best-effort. Callers log a `DeliveryError` and carry on;
//! an unconfigured channel is replaced by a no-op implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;

/// Errors that can occur while delivering a mail or push event.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DeliveryError {
    /// Network or connection failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// Provider answered with a non-success status
    #[error("Provider rejected delivery ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// Payload could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DeliveryError {
    /// Whether retrying later could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            DeliveryError::Transport(_) => true,
            DeliveryError::Rejected { status, .. } => *status == 429 || *status >= 500,
            DeliveryError::Serialization(_) => false,
        }
    }
}

/// An HTML mail ready to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Port for sending mail.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutboundEmail) -> Result<(), DeliveryError>;
}

/// Port for pushing a JSON event to every open connection of a user.
#[async_trait]
pub trait PushChannel: Send + Sync {
    async fn send_event(&self, user_id: &UserId, payload: serde_json::Value) -> Result<(), DeliveryError>;
}
