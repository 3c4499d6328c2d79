//! In-memory notification templates and deliveries.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, NotificationId, Timestamp, UserId, UserNotificationId};
use crate::domain::notification::{LifecycleTemplates, Notification, NotificationView, UserNotification};
use crate::ports::NotificationRepository;

/// The three lifecycle templates under the given ids.
pub fn default_templates(ids: &LifecycleTemplates) -> Vec<Notification> {
    vec![
        Notification::new(
            ids.submitted,
            "Credit request received",
            "We received your credit request and it is now under evaluation.",
        ),
        Notification::new(
            ids.approved,
            "Credit request approved",
            "Congratulations, your credit request has been approved.",
        ),
        Notification::new(
            ids.rejected,
            "Credit request rejected",
            "Your credit request was not approved. Check your email for details.",
        ),
    ]
}

#[derive(Default)]
pub struct InMemoryNotificationRepository {
    templates: RwLock<HashMap<NotificationId, Notification>>,
    deliveries: RwLock<Vec<UserNotification>>,
}

impl InMemoryNotificationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_templates(templates: Vec<Notification>) -> Self {
        Self {
            templates: RwLock::new(templates.into_iter().map(|t| (t.id, t)).collect()),
            deliveries: RwLock::new(Vec::new()),
        }
    }

    pub async fn delivery_count(&self) -> usize {
        self.deliveries.read().await.len()
    }

    async fn join(&self, delivery: &UserNotification) -> Option<NotificationView> {
        self.templates
            .read()
            .await
            .get(&delivery.notification_id)
            .map(|template| NotificationView::join(delivery.clone(), template.clone()))
    }
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepository {
    async fn create(&self, delivery: &UserNotification) -> Result<(), DomainError> {
        self.deliveries.write().await.push(delivery.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserNotificationId) -> Result<Option<NotificationView>, DomainError> {
        let delivery = self.deliveries.read().await.iter().find(|d| &d.id == id).cloned();
        match delivery {
            Some(delivery) => Ok(self.join(&delivery).await),
            None => Ok(None),
        }
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<NotificationView>, DomainError> {
        let deliveries: Vec<UserNotification> = self
            .deliveries
            .read()
            .await
            .iter()
            .filter(|d| &d.user_id == user_id)
            .cloned()
            .collect();

        let mut views = Vec::with_capacity(deliveries.len());
        for delivery in &deliveries {
            if let Some(view) = self.join(delivery).await {
                views.push(view);
            }
        }
        Ok(views)
    }

    async fn mark_read(&self, id: &UserNotificationId, read_at: Timestamp) -> Result<(), DomainError> {
        let mut deliveries = self.deliveries.write().await;
        match deliveries.iter_mut().find(|d| &d.id == id) {
            Some(delivery) => {
                delivery.read_at = Some(read_at);
                delivery.updated_at = read_at;
                Ok(())
            }
            None => Err(DomainError::new(ErrorCode::NotificationNotFound, "Notification not found")
                .with_detail("notification_id", id.to_string())),
        }
    }

    async fn find_template(&self, id: &NotificationId) -> Result<Option<Notification>, DomainError> {
        Ok(self.templates.read().await.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn templates() -> LifecycleTemplates {
        LifecycleTemplates {
            submitted: NotificationId::new(),
            approved: NotificationId::new(),
            rejected: NotificationId::new(),
        }
    }

    #[tokio::test]
    async fn created_delivery_is_joined_with_template() {
        let ids = templates();
        let repo = InMemoryNotificationRepository::with_templates(default_templates(&ids));
        let delivery = UserNotification::new(UserId::new(), ids.approved);
        repo.create(&delivery).await.unwrap();

        let view = repo.find_by_id(&delivery.id).await.unwrap().unwrap();

        assert_eq!(view.notification.title, "Credit request approved");
        assert!(view.read_at.is_none());
    }

    #[tokio::test]
    async fn delivery_without_template_is_not_found() {
        let repo = InMemoryNotificationRepository::new();
        let delivery = UserNotification::new(UserId::new(), NotificationId::new());
        repo.create(&delivery).await.unwrap();

        assert!(repo.find_by_id(&delivery.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_by_user_returns_only_that_user() {
        let ids = templates();
        let repo = InMemoryNotificationRepository::with_templates(default_templates(&ids));
        let user = UserId::new();
        repo.create(&UserNotification::new(user, ids.submitted)).await.unwrap();
        repo.create(&UserNotification::new(user, ids.approved)).await.unwrap();
        repo.create(&UserNotification::new(UserId::new(), ids.rejected)).await.unwrap();

        assert_eq!(repo.find_by_user(&user).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn mark_read_stamps_delivery() {
        let ids = templates();
        let repo = InMemoryNotificationRepository::with_templates(default_templates(&ids));
        let delivery = UserNotification::new(UserId::new(), ids.submitted);
        repo.create(&delivery).await.unwrap();
        let now = Timestamp::now();

        repo.mark_read(&delivery.id, now).await.unwrap();

        let view = repo.find_by_id(&delivery.id).await.unwrap().unwrap();
        assert_eq!(view.read_at, Some(now));
        assert!(repo.mark_read(&UserNotificationId::new(), now).await.is_err());
    }
}
