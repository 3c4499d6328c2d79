//! Request lifecycle error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors raised by the request lifecycle handlers.
#[derive(Debug, Clone, Error)]
pub enum RequestError {
    /// A profile, request, credit type or status does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// A reference id on the input points at no row.
    #[error("Invalid reference for '{field}': {id}")]
    InvalidReference { field: &'static str, id: String },

    /// Seed data the lifecycle depends on is missing.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Persistence failure, propagated untouched.
    #[error("Repository error: {0}")]
    Repository(DomainError),
}

impl RequestError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        RequestError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn invalid_reference(field: &'static str, id: impl ToString) -> Self {
        RequestError::InvalidReference {
            field,
            id: id.to_string(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        RequestError::Configuration(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            RequestError::NotFound { entity, .. } => match *entity {
                "client profile" => ErrorCode::ClientProfileNotFound,
                "credit type" => ErrorCode::CreditTypeNotFound,
                "request status" => ErrorCode::StatusNotFound,
                "notification" => ErrorCode::NotificationNotFound,
                _ => ErrorCode::RequestNotFound,
            },
            RequestError::InvalidReference { .. } => ErrorCode::InvalidReference,
            RequestError::Configuration(_) => ErrorCode::ConfigurationError,
            RequestError::Validation(_) => ErrorCode::ValidationFailed,
            RequestError::Repository(err) => err.code,
        }
    }

    /// HTTP status a controller should answer with.
    pub fn http_status(&self) -> u16 {
        match self {
            RequestError::NotFound { .. } => 404,
            RequestError::InvalidReference { .. } | RequestError::Validation(_) => 400,
            RequestError::Configuration(_) | RequestError::Repository(_) => 500,
        }
    }
}

impl From<DomainError> for RequestError {
    fn from(err: DomainError) -> Self {
        RequestError::Repository(err)
    }
}
