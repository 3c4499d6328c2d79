//! Notification handlers.
//!
//! - `NotificationDispatcher` - Creates a delivery and returns it joined with its template
//! - `ViewNotificationHandler` - Marks a delivery as read
//! - `ListUserNotificationsHandler` - All deliveries of a client

mod dispatch;
mod list_user_notifications;
mod view_notification;

pub use dispatch::NotificationDispatcher;
pub use list_user_notifications::{ListUserNotificationsHandler, ListUserNotificationsQuery};
pub use view_notification::{ViewNotificationCommand, ViewNotificationHandler};

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;

    use crate::domain::foundation::{DomainError, NotificationId, Timestamp, UserId, UserNotificationId};
    use crate::domain::notification::{Notification, NotificationView, UserNotification};
    use crate::ports::NotificationRepository;

    /// Notification store whose every call fails.
    pub struct FailingNotificationRepository;

    #[async_trait]
    impl NotificationRepository for FailingNotificationRepository {
        async fn create(&self, _delivery: &UserNotification) -> Result<(), DomainError> {
            Err(DomainError::database("notification store offline"))
        }

        async fn find_by_id(&self, _id: &UserNotificationId) -> Result<Option<NotificationView>, DomainError> {
            Err(DomainError::database("notification store offline"))
        }

        async fn find_by_user(&self, _user_id: &UserId) -> Result<Vec<NotificationView>, DomainError> {
            Err(DomainError::database("notification store offline"))
        }

        async fn mark_read(&self, _id: &UserNotificationId, _read_at: Timestamp) -> Result<(), DomainError> {
            Err(DomainError::database("notification store offline"))
        }

        async fn find_template(&self, _id: &NotificationId) -> Result<Option<Notification>, DomainError> {
            Err(DomainError::database("notification store offline"))
        }
    }
}
