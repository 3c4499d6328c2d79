//! Push payloads sent over the websocket channel.

use serde::{Deserialize, Serialize};

use super::user_notification::NotificationView;
use crate::domain::foundation::RequestId;

/// Value of the `type` field of every lifecycle push.
pub const NEW_NOTIFICATION_EVENT: &str = "new_notification";

/// Lifecycle step that produced a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleEvent {
    Created,
    Approved,
    Rejected,
}

impl LifecycleEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleEvent::Created => "created",
            LifecycleEvent::Approved => "approved",
            LifecycleEvent::Rejected => "rejected",
        }
    }
}

/// Payload pushed to the client when a notification is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPushEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub notification_id: String,
    pub title: String,
    pub message: String,
    pub read_at: Option<String>,
    pub created_at: Option<String>,
    pub user_id: String,
    pub request_id: String,
    pub status: LifecycleEvent,
}

impl NotificationPushEvent {
    pub fn new(view: &NotificationView, request_id: &RequestId, status: LifecycleEvent) -> Self {
        Self {
            event_type: NEW_NOTIFICATION_EVENT.to_string(),
            notification_id: view.id.to_string(),
            title: view.notification.title.clone(),
            message: view.notification.message.clone(),
            read_at: view.read_at.map(|t| t.to_rfc3339()),
            created_at: Some(view.created_at.to_rfc3339()),
            user_id: view.user_id.to_string(),
            request_id: request_id.to_string(),
            status,
        }
    }
}
