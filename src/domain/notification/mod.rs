//! Notifications - templates, per-user deliveries and push payloads.

mod events;
mod user_notification;

pub use events::{LifecycleEvent, NotificationPushEvent, NEW_NOTIFICATION_EVENT};
pub use user_notification::{LifecycleTemplates, Notification, NotificationView, UserNotification};
