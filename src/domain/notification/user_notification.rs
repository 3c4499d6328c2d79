//! Notification templates and their per-user deliveries.

use serde::{Deserialize, Serialize};

use super::events::LifecycleEvent;
use crate::domain::foundation::{NotificationId, Timestamp, UserId, UserNotificationId};

/// A seeded notification template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    pub created_at: Timestamp,
}

impl Notification {
    pub fn new(id: NotificationId, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            message: message.into(),
            created_at: Timestamp::now(),
        }
    }
}

/// One template delivered to one user. Unread while `read_at` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserNotification {
    pub id: UserNotificationId,
    pub notification_id: NotificationId,
    pub user_id: UserId,
    pub read_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl UserNotification {
    pub fn new(user_id: UserId, notification_id: NotificationId) -> Self {
        let now = Timestamp::now();
        Self {
            id: UserNotificationId::new(),
            notification_id,
            user_id,
            read_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }

    /// Stamps the read time. A second call keeps the first read time.
    pub fn mark_read(&mut self) {
        if self.read_at.is_none() {
            let now = Timestamp::now();
            self.read_at = Some(now);
            self.updated_at = now;
        }
    }
}

/// A user notification joined with its template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationView {
    pub id: UserNotificationId,
    pub notification_id: NotificationId,
    pub user_id: UserId,
    pub read_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub notification: Notification,
}

impl NotificationView {
    pub fn join(delivery: UserNotification, notification: Notification) -> Self {
        Self {
            id: delivery.id,
            notification_id: delivery.notification_id,
            user_id: delivery.user_id,
            read_at: delivery.read_at,
            created_at: delivery.created_at,
            updated_at: delivery.updated_at,
            notification,
        }
    }
}

/// Template ids used for each lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleTemplates {
    pub submitted: NotificationId,
    pub approved: NotificationId,
    pub rejected: NotificationId,
}

impl LifecycleTemplates {
    pub fn for_event(&self, event: LifecycleEvent) -> NotificationId {
        match event {
            LifecycleEvent::Created => self.submitted,
            LifecycleEvent::Approved => self.approved,
            LifecycleEvent::Rejected => self.rejected,
        }
    }
}
