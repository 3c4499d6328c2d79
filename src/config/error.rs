//! Configuration errors

use thiserror::Error;

/// The environment could not be read into [`super::AppConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// A loaded value is outside what the service accepts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Port must be non-zero")]
    InvalidPort,

    #[error("Resend API key must start with 're_'")]
    InvalidResendKey,

    #[error("Sender address is not an email address")]
    InvalidFromEmail,

    #[error("Email API base URL must be http(s)")]
    InvalidEmailBaseUrl,

    #[error("Email timeout must be between 1 and 60 seconds")]
    InvalidEmailTimeout,

    #[error("Lifecycle notification templates must use distinct ids")]
    DuplicateTemplateIds,

    #[error("Push channel capacity must be between 1 and 10000")]
    InvalidChannelCapacity,
}
