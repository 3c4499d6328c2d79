//! Notification repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, NotificationId, Timestamp, UserId, UserNotificationId};
use crate::domain::notification::{Notification, NotificationView, UserNotification};

/// Storage for notification templates and their per-user deliveries.
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Insert a delivery row.
    async fn create(&self, delivery: &UserNotification) -> Result<(), DomainError>;

    /// Delivery joined with its template. `None` when either is missing.
    async fn find_by_id(&self, id: &UserNotificationId) -> Result<Option<NotificationView>, DomainError>;

    /// All deliveries of a user, joined with their templates.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<NotificationView>, DomainError>;

    /// # Errors
    ///
    /// - `NotificationNotFound` if the delivery doesn't exist
    async fn mark_read(&self, id: &UserNotificationId, read_at: Timestamp) -> Result<(), DomainError>;

    async fn find_template(&self, id: &NotificationId) -> Result<Option<Notification>, DomainError>;
}
