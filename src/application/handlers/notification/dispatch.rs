//! NotificationDispatcher - Records a notification for a user.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, NotificationId, UserId};
use crate::domain::notification::{NotificationView, UserNotification};
use crate::ports::NotificationRepository;

/// Creates unread deliveries of notification templates.
#[derive(Clone)]
pub struct NotificationDispatcher {
    repository: Arc<dyn NotificationRepository>,
}

impl NotificationDispatcher {
    pub fn new(repository: Arc<dyn NotificationRepository>) -> Self {
        Self { repository }
    }

    /// Inserts an unread delivery of `template_id` for `user_id` and
    /// re-reads it joined with its template.
    ///
    /// Returns `None` when the template is missing, in which case there is
    /// nothing to push.
    pub async fn dispatch(
        &self,
        user_id: UserId,
        template_id: NotificationId,
    ) -> Result<Option<NotificationView>, DomainError> {
        let delivery = UserNotification::new(user_id, template_id);
        self.repository.create(&delivery).await?;

        let view = self.repository.find_by_id(&delivery.id).await?;
        if view.is_none() {
            tracing::warn!(
                user_id = %user_id,
                notification_id = %template_id,
                "Notification template missing, delivery has no payload"
            );
        }
        Ok(view)
    }
}
