//! Notification template configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::NotificationId;
use crate::domain::notification::LifecycleTemplates;

/// Ids of the seeded notification templates used by the request lifecycle
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationsConfig {
    /// Template sent when a request is submitted
    #[serde(default = "default_submitted_template")]
    pub submitted_template_id: NotificationId,

    /// Template sent when a request is approved
    #[serde(default = "default_approved_template")]
    pub approved_template_id: NotificationId,

    /// Template sent when a request is rejected
    #[serde(default = "default_rejected_template")]
    pub rejected_template_id: NotificationId,
}

impl NotificationsConfig {
    pub fn templates(&self) -> LifecycleTemplates {
        LifecycleTemplates {
            submitted: self.submitted_template_id,
            approved: self.approved_template_id,
            rejected: self.rejected_template_id,
        }
    }

    /// Validate notification configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.submitted_template_id == self.approved_template_id
            || self.submitted_template_id == self.rejected_template_id
            || self.approved_template_id == self.rejected_template_id
        {
            return Err(ValidationError::DuplicateTemplateIds);
        }
        Ok(())
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            submitted_template_id: default_submitted_template(),
            approved_template_id: default_approved_template(),
            rejected_template_id: default_rejected_template(),
        }
    }
}

fn seeded(raw: &str) -> NotificationId {
    NotificationId::from_uuid(uuid::Uuid::parse_str(raw).unwrap_or_else(|_| uuid::Uuid::nil()))
}

fn default_submitted_template() -> NotificationId {
    seeded("a3f1e6d2-4b8c-4d5e-9b0f-123456789abc")
}

fn default_approved_template() -> NotificationId {
    seeded("b2d9f7c3-5c9d-4e6f-8a1b-23456789abcd")
}

fn default_rejected_template() -> NotificationId {
    seeded("c7a8d9e4-6d0e-5f7a-9c2d-3456789abcde")
}
