//! ViewNotificationHandler - Marks a delivered notification as read.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp, UserNotificationId};
use crate::domain::notification::NotificationView;
use crate::ports::NotificationRepository;

/// Command to mark a notification as read.
#[derive(Debug, Clone)]
pub struct ViewNotificationCommand {
    pub notification_id: UserNotificationId,
}

/// Handler for viewing notifications.
pub struct ViewNotificationHandler {
    repository: Arc<dyn NotificationRepository>,
}

impl ViewNotificationHandler {
    pub fn new(repository: Arc<dyn NotificationRepository>) -> Self {
        Self { repository }
    }

    /// Returns `None` for an unknown id. Viewing twice keeps the first read time.
    pub async fn handle(
        &self,
        cmd: ViewNotificationCommand,
    ) -> Result<Option<NotificationView>, DomainError> {
        let Some(mut view) = self.repository.find_by_id(&cmd.notification_id).await? else {
            return Ok(None);
        };

        if view.read_at.is_none() {
            let now = Timestamp::now();
            self.repository.mark_read(&view.id, now).await?;
            view.read_at = Some(now);
            view.updated_at = now;
            tracing::debug!(notification_id = %view.id, user_id = %view.user_id, "Notification read");
        }

        Ok(Some(view))
    }
}
