//! Shared fixtures for the request handler tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::adapters::email::HtmlMailRenderer;
use crate::adapters::memory::{
    default_templates, InMemoryClientProfiles, InMemoryNotificationRepository,
    InMemoryReferenceData, InMemoryRequestRepository,
};
use crate::domain::client::ClientProfile;
use crate::domain::foundation::{CreditTypeId, NotificationId, RequestId, StatusId, UserId};
use crate::domain::notification::LifecycleTemplates;
use crate::domain::request::{status_codes, CreditRequest, RequestSubmission};
use crate::domain::risk::fixtures;
use crate::ports::{
    DeliveryError, Mailer, OutboundEmail, PushChannel, ReferenceDataReader, RequestMailRenderer,
    RequestRepository,
};

use super::LifecycleNotifier;

// ════════════════════════════════════════════════════════════════════════════
// Mock channels
// ════════════════════════════════════════════════════════════════════════════

pub struct RecordingMailer {
    sent: Mutex<Vec<OutboundEmail>>,
    fail: bool,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Records nothing and rejects every mail.
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), DeliveryError> {
        if self.fail {
            return Err(DeliveryError::Rejected {
                status: 503,
                body: "unavailable".to_string(),
            });
        }
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

pub struct RecordingPushChannel {
    events: Mutex<Vec<(UserId, serde_json::Value)>>,
    fail: bool,
}

impl RecordingPushChannel {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn events(&self) -> Vec<(UserId, serde_json::Value)> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl PushChannel for RecordingPushChannel {
    async fn send_event(&self, user_id: &UserId, payload: serde_json::Value) -> Result<(), DeliveryError> {
        if self.fail {
            return Err(DeliveryError::Transport("socket closed".to_string()));
        }
        self.events.lock().unwrap().push((*user_id, payload));
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Context
// ════════════════════════════════════════════════════════════════════════════

/// In-memory stores, recording channels and one client with a strong profile.
pub struct TestContext {
    pub profiles: Arc<InMemoryClientProfiles>,
    pub reference: Arc<InMemoryReferenceData>,
    pub requests: Arc<InMemoryRequestRepository>,
    pub notifications: Arc<InMemoryNotificationRepository>,
    pub mailer: Arc<RecordingMailer>,
    pub push: Arc<RecordingPushChannel>,
    pub templates: LifecycleTemplates,
    pub client_id: UserId,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::with_channels(Arc::new(RecordingMailer::new()), Arc::new(RecordingPushChannel::new())).await
    }

    pub async fn with_channels(mailer: Arc<RecordingMailer>, push: Arc<RecordingPushChannel>) -> Self {
        let templates = LifecycleTemplates {
            submitted: NotificationId::new(),
            approved: NotificationId::new(),
            rejected: NotificationId::new(),
        };
        let profiles = Arc::new(InMemoryClientProfiles::new());
        let client_id = UserId::new();
        profiles
            .upsert(ClientProfile::new(client_id, "farmer@example.com", fixtures::strong_profile()).unwrap())
            .await;

        Self {
            profiles,
            reference: Arc::new(InMemoryReferenceData::seeded()),
            requests: Arc::new(InMemoryRequestRepository::new()),
            notifications: Arc::new(InMemoryNotificationRepository::with_templates(default_templates(
                &templates,
            ))),
            mailer,
            push,
            templates,
            client_id,
        }
    }

    pub fn renderer(&self) -> Arc<dyn RequestMailRenderer> {
        Arc::new(HtmlMailRenderer::default())
    }

    pub fn notifier(&self) -> LifecycleNotifier {
        LifecycleNotifier::new(
            self.notifications.clone(),
            self.templates,
            self.push.clone(),
            self.mailer.clone(),
            self.renderer(),
            self.profiles.clone(),
        )
    }

    pub async fn status_id(&self, code: &str) -> StatusId {
        self.reference.get_status_by_code(code).await.unwrap().unwrap().id
    }

    pub async fn credit_type_id(&self) -> CreditTypeId {
        self.reference.list_credit_types().await.unwrap()[0].id
    }

    pub async fn submission(&self) -> RequestSubmission {
        RequestSubmission {
            client_id: self.client_id,
            credit_type_id: self.credit_type_id().await,
            status_id: self.status_id(status_codes::PENDING).await,
            terms: fixtures::strong_terms(),
            purpose_description: Some("Irrigation system".to_string()),
            collateral_description: Some("Farm land title".to_string()),
        }
    }

    /// Saves a pending, unscored request for the context's client.
    pub async fn stored_request(&self) -> CreditRequest {
        let submission = self.submission().await;
        let request = CreditRequest::new(
            RequestId::new(),
            submission.client_id,
            submission.credit_type_id,
            submission.status_id,
            submission.terms,
            submission.purpose_description,
            submission.collateral_description,
        )
        .unwrap();
        self.requests.save(&request).await.unwrap();
        request
    }
}
