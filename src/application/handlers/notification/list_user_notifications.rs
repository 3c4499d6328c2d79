//! ListUserNotificationsHandler - Query handler for a client's notifications.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::notification::NotificationView;
use crate::ports::{ClientProfileReader, NotificationRepository};

/// Query for the notifications of one user.
#[derive(Debug, Clone)]
pub struct ListUserNotificationsQuery {
    pub user_id: UserId,
}

/// Handler for listing notifications.
pub struct ListUserNotificationsHandler {
    profiles: Arc<dyn ClientProfileReader>,
    repository: Arc<dyn NotificationRepository>,
}

impl ListUserNotificationsHandler {
    pub fn new(
        profiles: Arc<dyn ClientProfileReader>,
        repository: Arc<dyn NotificationRepository>,
    ) -> Self {
        Self {
            profiles,
            repository,
        }
    }

    /// Users without a client profile have no notifications.
    pub async fn handle(
        &self,
        query: ListUserNotificationsQuery,
    ) -> Result<Vec<NotificationView>, DomainError> {
        if self.profiles.get_profile(&query.user_id).await?.is_none() {
            return Ok(Vec::new());
        }
        self.repository.find_by_user(&query.user_id).await
    }
}
