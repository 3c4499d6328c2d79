//! Composition root.
//!
//! Wires the in-process adapters, the delivery channels and the
//! lifecycle handlers from an [`AppConfig`]. Handlers are created on demand
//! from the shared [`AppState`]; they hold nothing but `Arc` clones.

use std::sync::Arc;

use axum::Router;
use secrecy::ExposeSecret;
use thiserror::Error;
use tower_http::trace::TraceLayer;

use crate::adapters::email::{HtmlMailRenderer, NoopMailer, ResendConfig, ResendMailer};
use crate::adapters::memory::{
    default_templates, InMemoryClientProfiles, InMemoryNotificationRepository,
    InMemoryReferenceData, InMemoryRequestRepository,
};
use crate::adapters::websocket::{websocket_router, NoopPushChannel, PushConnectionRegistry, WebSocketState};
use crate::application::handlers::{
    ApproveRequestHandler, ChangeRequestStatusHandler, CreateRequestHandler, DeleteRequestHandler,
    FindClientRequestHandler, GetRelatedDataHandler, GetRequestHandler, LifecycleNotifier,
    ListRequestsHandler, ListUserNotificationsHandler, NotificationDispatcher,
    RejectRequestHandler, UpdateRequestHandler, ViewNotificationHandler,
};
use crate::config::{AppConfig, ConfigError, EmailConfig, ValidationError};
use crate::domain::notification::LifecycleTemplates;
use crate::ports::{
    ClientProfileReader, DeliveryError, Mailer, NotificationRepository, PushChannel,
    ReferenceDataReader, RequestMailRenderer, RequestRepository,
};
use crate::telemetry::TelemetryError;

/// Startup failures of the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    #[error("Mailer setup failed: {0}")]
    Mailer(#[from] DeliveryError),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shared ports every handler is built from.
#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<dyn ClientProfileReader>,
    pub reference: Arc<dyn ReferenceDataReader>,
    pub requests: Arc<dyn RequestRepository>,
    pub notifications: Arc<dyn NotificationRepository>,
    pub push: Arc<dyn PushChannel>,
    pub mailer: Arc<dyn Mailer>,
    pub renderer: Arc<dyn RequestMailRenderer>,
    pub templates: LifecycleTemplates,
}

impl AppState {
    pub fn lifecycle_notifier(&self) -> LifecycleNotifier {
        LifecycleNotifier::new(
            self.notifications.clone(),
            self.templates,
            self.push.clone(),
            self.mailer.clone(),
            self.renderer.clone(),
            self.profiles.clone(),
        )
    }

    pub fn create_request_handler(&self) -> CreateRequestHandler {
        CreateRequestHandler::new(
            self.requests.clone(),
            self.reference.clone(),
            self.profiles.clone(),
            self.lifecycle_notifier(),
        )
    }

    pub fn update_request_handler(&self) -> UpdateRequestHandler {
        UpdateRequestHandler::new(
            self.requests.clone(),
            self.reference.clone(),
            self.profiles.clone(),
        )
    }

    pub fn approve_request_handler(&self) -> ApproveRequestHandler {
        ApproveRequestHandler::new(
            self.requests.clone(),
            self.reference.clone(),
            self.lifecycle_notifier(),
        )
    }

    pub fn reject_request_handler(&self) -> RejectRequestHandler {
        RejectRequestHandler::new(
            self.requests.clone(),
            self.reference.clone(),
            self.lifecycle_notifier(),
        )
    }

    pub fn change_request_status_handler(&self) -> ChangeRequestStatusHandler {
        ChangeRequestStatusHandler::new(self.requests.clone(), self.reference.clone())
    }

    pub fn delete_request_handler(&self) -> DeleteRequestHandler {
        DeleteRequestHandler::new(self.requests.clone())
    }

    pub fn get_request_handler(&self) -> GetRequestHandler {
        GetRequestHandler::new(self.requests.clone())
    }

    pub fn find_client_request_handler(&self) -> FindClientRequestHandler {
        FindClientRequestHandler::new(self.requests.clone())
    }

    pub fn list_requests_handler(&self) -> ListRequestsHandler {
        ListRequestsHandler::new(self.requests.clone(), self.reference.clone())
    }

    pub fn related_data_handler(&self) -> GetRelatedDataHandler {
        GetRelatedDataHandler::new(self.reference.clone())
    }

    pub fn notification_dispatcher(&self) -> NotificationDispatcher {
        NotificationDispatcher::new(self.notifications.clone())
    }

    pub fn view_notification_handler(&self) -> ViewNotificationHandler {
        ViewNotificationHandler::new(self.notifications.clone())
    }

    pub fn list_user_notifications_handler(&self) -> ListUserNotificationsHandler {
        ListUserNotificationsHandler::new(self.profiles.clone(), self.notifications.clone())
    }
}

/// A fully wired in-process application.
pub struct Application {
    pub state: AppState,
    /// Concrete profile store, so profiles can be registered at runtime.
    pub profiles: Arc<InMemoryClientProfiles>,
    /// `None` when realtime push is disabled.
    pub push_registry: Option<Arc<PushConnectionRegistry>>,
}

impl Application {
    /// Builds every adapter from validated configuration.
    ///
    /// # Errors
    ///
    /// - `AppError::Mailer` if the Resend HTTP client cannot be created
    pub fn build(config: &AppConfig) -> Result<Self, AppError> {
        let templates = config.notifications.templates();
        let profiles = Arc::new(InMemoryClientProfiles::new());

        let push_registry = config
            .push
            .enabled
            .then(|| Arc::new(PushConnectionRegistry::new(config.push.channel_capacity)));
        let push: Arc<dyn PushChannel> = match &push_registry {
            Some(registry) => registry.clone(),
            None => Arc::new(NoopPushChannel),
        };

        let (mailer, renderer) = match &config.email {
            Some(email) => mail_channel(email)?,
            None => {
                tracing::info!("Email not configured, lifecycle mails are disabled");
                let mailer: Arc<dyn Mailer> = Arc::new(NoopMailer);
                let renderer: Arc<dyn RequestMailRenderer> = Arc::new(HtmlMailRenderer::default());
                (mailer, renderer)
            }
        };

        let state = AppState {
            profiles: profiles.clone(),
            reference: Arc::new(InMemoryReferenceData::seeded()),
            requests: Arc::new(InMemoryRequestRepository::new()),
            notifications: Arc::new(InMemoryNotificationRepository::with_templates(
                default_templates(&templates),
            )),
            push,
            mailer,
            renderer,
            templates,
        };

        Ok(Self {
            state,
            profiles,
            push_registry,
        })
    }

    /// HTTP surface: the push endpoint when enabled, wrapped in request tracing.
    pub fn router(&self) -> Router {
        let router = match &self.push_registry {
            Some(registry) => websocket_router().with_state(WebSocketState::new(registry.clone())),
            None => Router::new(),
        };
        router.layer(TraceLayer::new_for_http())
    }
}

fn mail_channel(
    email: &EmailConfig,
) -> Result<(Arc<dyn Mailer>, Arc<dyn RequestMailRenderer>), AppError> {
    let resend = ResendConfig::new(
        email.resend_api_key.expose_secret().as_str(),
        email.from_email.as_str(),
        email.from_name.as_str(),
    )
    .with_base_url(email.api_base_url.as_str())
    .with_timeout(email.timeout());

    tracing::info!(from = %email.from_header(), "Resend mailer configured");

    let mailer: Arc<dyn Mailer> = Arc::new(ResendMailer::new(resend)?);
    let renderer: Arc<dyn RequestMailRenderer> = Arc::new(HtmlMailRenderer::new(
        email.from_name.as_str(),
        email.app_url.as_str(),
    ));
    Ok((mailer, renderer))
}
