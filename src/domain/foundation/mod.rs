//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the credit origination domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CreditTypeId, NotificationId, RequestId, StatusId, UserId, UserNotificationId};
pub use timestamp::Timestamp;
