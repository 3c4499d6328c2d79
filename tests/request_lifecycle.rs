//! Integration tests for the credit request lifecycle.
//!
//! These drive the public handlers of a fully wired [`Application`] over the
//! in-process adapters, with a recording mailer swapped in and a live
//! websocket registry subscription observing pushes.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, Utc};
use tokio::sync::broadcast;

use agri_credit::adapters::websocket::ClientId;
use agri_credit::app::Application;
use agri_credit::application::handlers::{
    ApproveRequestCommand, ChangeRequestStatusCommand, CreateRequestCommand, DeleteRequestCommand,
    FindClientRequestQuery, GetRequestQuery, ListRequestsQuery, ListUserNotificationsQuery,
    RejectRequestCommand, ViewNotificationCommand,
};
use agri_credit::config::AppConfig;
use agri_credit::domain::client::ClientProfile;
use agri_credit::domain::foundation::UserId;
use agri_credit::domain::request::{status_codes, RequestError, RequestSubmission};
use agri_credit::domain::risk::factors::warnings;
use agri_credit::domain::risk::{ApplicantProfile, LoanTerms, RiskLevel};
use agri_credit::ports::{DeliveryError, Mailer, OutboundEmail};

// ════════════════════════════════════════════════════════════════════════════
// Fixtures
// ════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<OutboundEmail>>,
}

impl RecordingMailer {
    fn subjects(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|mail| mail.subject.clone())
            .collect()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), DeliveryError> {
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

struct Harness {
    app: Application,
    mailer: Arc<RecordingMailer>,
}

impl Harness {
    fn new() -> Self {
        let mut app = Application::build(&AppConfig::default()).unwrap();
        let mailer = Arc::new(RecordingMailer::default());
        app.state.mailer = mailer.clone();
        Self { app, mailer }
    }

    async fn register(&self, email: &str, applicant: ApplicantProfile) -> UserId {
        let user_id = UserId::new();
        self.app
            .profiles
            .upsert(ClientProfile::new(user_id, email, applicant).unwrap())
            .await;
        user_id
    }

    async fn subscribe(&self, user_id: &UserId) -> broadcast::Receiver<serde_json::Value> {
        self.app
            .push_registry
            .as_ref()
            .unwrap()
            .join(user_id, ClientId::new())
            .await
    }

    async fn submission(&self, client_id: UserId, terms: LoanTerms) -> RequestSubmission {
        let related = self.app.state.related_data_handler().handle().await.unwrap();
        let pending = related
            .statuses
            .iter()
            .find(|status| status.has_code(status_codes::PENDING))
            .unwrap();
        RequestSubmission {
            client_id,
            credit_type_id: related.credit_types[0].id,
            status_id: pending.id,
            terms,
            purpose_description: Some("Coffee crop renovation".to_string()),
            collateral_description: None,
        }
    }
}

/// January 1st of the year that makes the applicant `age` today.
fn born_years_ago(age: i32) -> NaiveDate {
    let today = Utc::now().date_naive();
    NaiveDate::from_ymd_opt(today.year() - age, 1, 1).unwrap()
}

fn established_farmer() -> ApplicantProfile {
    ApplicantProfile {
        date_of_birth: born_years_ago(40),
        annual_income: 100_000_000.0,
        years_of_agricultural_experience: 15,
        has_agricultural_insurance: true,
        internal_credit_history_score: 800,
        current_debt_to_income_ratio: 0.15,
        farm_size_hectares: 20.0,
    }
}

fn established_terms() -> LoanTerms {
    LoanTerms {
        requested_amount: 50_000_000.0,
        term_months: 60,
        annual_interest_rate: 10.0,
        applicant_contribution_amount: 10_000_000.0,
        collateral_value: Some(75_000_000.0),
        number_of_dependents: 0,
        other_income_sources: 5_000_000.0,
        previous_defaults: 0,
    }
}

fn young_indebted_farmer() -> ApplicantProfile {
    ApplicantProfile {
        date_of_birth: born_years_ago(22),
        annual_income: 25_000_000.0,
        years_of_agricultural_experience: 1,
        has_agricultural_insurance: false,
        internal_credit_history_score: 500,
        current_debt_to_income_ratio: 0.6,
        farm_size_hectares: 10.0,
    }
}

fn oversized_terms() -> LoanTerms {
    LoanTerms {
        requested_amount: 150_000_000.0,
        term_months: 12,
        annual_interest_rate: 30.0,
        applicant_contribution_amount: 0.0,
        collateral_value: None,
        number_of_dependents: 5,
        other_income_sources: 0.0,
        previous_defaults: 2,
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Scenarios
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn established_farmer_is_scored_very_low_risk() {
    let harness = Harness::new();
    let client = harness.register("established@example.com", established_farmer()).await;
    let submission = harness.submission(client, established_terms()).await;

    let result = harness
        .app
        .state
        .create_request_handler()
        .handle(CreateRequestCommand { submission })
        .await
        .unwrap();

    assert!(result.created);
    let level = RiskLevel::from_percentage(result.request.risk_score().unwrap());
    assert_eq!(level, RiskLevel::VeryLow);
    assert!(level.recommends_approval());
    assert!(result.request.warning_flags().is_empty());
    let details = result.request.risk_assessment_details().unwrap();
    assert_eq!(details.age_calculated, 40);
    assert_eq!(harness.mailer.subjects(), vec!["Credit request submitted"]);
}

#[tokio::test]
async fn young_indebted_farmer_is_scored_critical() {
    let harness = Harness::new();
    let client = harness.register("young@example.com", young_indebted_farmer()).await;
    let submission = harness.submission(client, oversized_terms()).await;

    let result = harness
        .app
        .state
        .create_request_handler()
        .handle(CreateRequestCommand { submission })
        .await
        .unwrap();

    let level = RiskLevel::from_percentage(result.request.risk_score().unwrap());
    assert_eq!(level, RiskLevel::Critical);
    assert!(!level.recommends_approval());
    let flags: Vec<&str> = result
        .request
        .warning_flags()
        .iter()
        .map(String::as_str)
        .collect();
    assert!(flags.contains(&warnings::VERY_LOW_CREDIT_SCORE));
    assert!(flags.contains(&warnings::EXCESSIVE_PAYMENT_RATIO));
    assert!(flags.contains(&warnings::NO_COLLATERAL));
}

#[tokio::test]
async fn resubmission_updates_the_single_request_of_a_client() {
    let harness = Harness::new();
    let client = harness.register("repeat@example.com", established_farmer()).await;
    let handler = harness.app.state.create_request_handler();

    let first = handler
        .handle(CreateRequestCommand {
            submission: harness.submission(client, established_terms()).await,
        })
        .await
        .unwrap();

    let mut terms = established_terms();
    terms.previous_defaults = 1;
    let second = handler
        .handle(CreateRequestCommand {
            submission: harness.submission(client, terms).await,
        })
        .await
        .unwrap();

    assert!(first.created);
    assert!(!second.created);
    assert_eq!(second.request.id(), first.request.id());
    assert!(second.request.risk_score().unwrap() > first.request.risk_score().unwrap());

    let page = harness
        .app
        .state
        .list_requests_handler()
        .handle(ListRequestsQuery {
            client_id: Some(client),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.total, 1);

    let found = harness
        .app
        .state
        .find_client_request_handler()
        .handle(FindClientRequestQuery { client_id: client })
        .await
        .unwrap();
    assert_eq!(found.map(|r| *r.id()), Some(*first.request.id()));
}

#[tokio::test]
async fn resubmission_without_collateral_is_scored_without_it() {
    let harness = Harness::new();
    let client = harness.register("dropped@example.com", established_farmer()).await;
    let handler = harness.app.state.create_request_handler();
    let mut first = harness.submission(client, established_terms()).await;
    first.collateral_description = Some("Farm land title".to_string());
    let original = handler
        .handle(CreateRequestCommand { submission: first })
        .await
        .unwrap();
    assert_eq!(original.request.collateral_description(), Some("Farm land title"));

    let mut terms = established_terms();
    terms.collateral_value = None;
    let resubmitted = handler
        .handle(CreateRequestCommand {
            submission: harness.submission(client, terms.clone()).await,
        })
        .await
        .unwrap();

    let fresh_client = harness.register("fresh@example.com", established_farmer()).await;
    let fresh = handler
        .handle(CreateRequestCommand {
            submission: harness.submission(fresh_client, terms).await,
        })
        .await
        .unwrap();

    assert!(!resubmitted.created);
    assert_eq!(resubmitted.request.terms().collateral_value, None);
    assert_eq!(resubmitted.request.collateral_description(), None);
    assert_eq!(resubmitted.request.risk_score(), fresh.request.risk_score());
    let flags = resubmitted.request.warning_flags();
    assert!(flags.iter().any(|flag| flag == warnings::NO_COLLATERAL));
}

#[tokio::test]
async fn approval_records_one_notification_and_pushes_one_event() {
    let harness = Harness::new();
    let client = harness.register("approve@example.com", established_farmer()).await;
    let created = harness
        .app
        .state
        .create_request_handler()
        .handle(CreateRequestCommand {
            submission: harness.submission(client, established_terms()).await,
        })
        .await
        .unwrap();
    let mut events = harness.subscribe(&client).await;
    let notifications = harness.app.state.list_user_notifications_handler();
    let before = notifications
        .handle(ListUserNotificationsQuery { user_id: client })
        .await
        .unwrap();

    let approved = harness
        .app
        .state
        .approve_request_handler()
        .handle(ApproveRequestCommand {
            request_id: *created.request.id(),
            analyst_id: UserId::new(),
            approved_amount: Some(45_000_000.0),
        })
        .await
        .unwrap();

    assert_eq!(approved.approved_amount(), Some(45_000_000.0));
    assert!(approved.approved_at().is_some());
    assert_eq!(approved.risk_score(), created.request.risk_score());

    let after = notifications
        .handle(ListUserNotificationsQuery { user_id: client })
        .await
        .unwrap();
    assert_eq!(after.len(), before.len() + 1);
    let approved_template = harness.app.state.templates.approved;
    let approval_records = after
        .iter()
        .filter(|view| view.notification_id == approved_template)
        .count();
    assert_eq!(approval_records, 1);

    let event = events.try_recv().unwrap();
    assert_eq!(event["status"], "approved");
    assert_eq!(event["request_id"], created.request.id().to_string());
    assert!(events.try_recv().is_err());

    assert_eq!(
        harness.mailer.subjects(),
        vec!["Credit request submitted", "Credit request approved"]
    );
}

#[tokio::test]
async fn rejection_stores_reason_and_mails_it() {
    let harness = Harness::new();
    let client = harness.register("reject@example.com", young_indebted_farmer()).await;
    let created = harness
        .app
        .state
        .create_request_handler()
        .handle(CreateRequestCommand {
            submission: harness.submission(client, oversized_terms()).await,
        })
        .await
        .unwrap();

    let rejected = harness
        .app
        .state
        .reject_request_handler()
        .handle(RejectRequestCommand {
            request_id: *created.request.id(),
            analyst_id: UserId::new(),
            reason: Some("Insufficient repayment capacity".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(rejected.rejection_reason(), Some("Insufficient repayment capacity"));
    assert_eq!(rejected.approved_amount(), Some(0.0));

    let mails = harness.mailer.sent.lock().unwrap().clone();
    let rejection = mails.last().unwrap();
    assert_eq!(rejection.to, "reject@example.com");
    assert_eq!(rejection.subject, "Credit request rejected");
    assert!(rejection.html_body.contains("Insufficient repayment capacity"));
}

#[tokio::test]
async fn notification_can_be_marked_read_once() {
    let harness = Harness::new();
    let client = harness.register("reader@example.com", established_farmer()).await;
    harness
        .app
        .state
        .create_request_handler()
        .handle(CreateRequestCommand {
            submission: harness.submission(client, established_terms()).await,
        })
        .await
        .unwrap();
    let delivery = harness
        .app
        .state
        .list_user_notifications_handler()
        .handle(ListUserNotificationsQuery { user_id: client })
        .await
        .unwrap()
        .remove(0);
    assert!(delivery.read_at.is_none());

    let viewer = harness.app.state.view_notification_handler();
    let first = viewer
        .handle(ViewNotificationCommand {
            notification_id: delivery.id,
        })
        .await
        .unwrap()
        .unwrap();
    let second = viewer
        .handle(ViewNotificationCommand {
            notification_id: delivery.id,
        })
        .await
        .unwrap()
        .unwrap();

    assert!(first.read_at.is_some());
    assert_eq!(second.read_at, first.read_at);
}

#[tokio::test]
async fn status_change_and_delete() {
    let harness = Harness::new();
    let client = harness.register("status@example.com", established_farmer()).await;
    let created = harness
        .app
        .state
        .create_request_handler()
        .handle(CreateRequestCommand {
            submission: harness.submission(client, established_terms()).await,
        })
        .await
        .unwrap();
    let request_id = *created.request.id();
    let related = harness.app.state.related_data_handler().handle().await.unwrap();
    let rejected_status = related
        .statuses
        .iter()
        .find(|status| status.has_code(status_codes::REJECTED))
        .unwrap()
        .id;

    let changed = harness
        .app
        .state
        .change_request_status_handler()
        .handle(ChangeRequestStatusCommand {
            request_id,
            status_id: rejected_status,
        })
        .await
        .unwrap();
    assert_eq!(*changed.status_id(), rejected_status);

    harness
        .app
        .state
        .delete_request_handler()
        .handle(DeleteRequestCommand { request_id })
        .await
        .unwrap();

    let result = harness
        .app
        .state
        .get_request_handler()
        .handle(GetRequestQuery { request_id })
        .await;
    assert!(matches!(result, Err(RequestError::NotFound { .. })));
}

#[tokio::test]
async fn listing_pages_through_requests_of_many_clients() {
    let harness = Harness::new();
    let handler = harness.app.state.create_request_handler();
    for n in 0..5 {
        let client = harness
            .register(&format!("farmer{}@example.com", n), established_farmer())
            .await;
        let mut terms = established_terms();
        terms.requested_amount = 10_000_000.0 * (n as f64 + 1.0);
        handler
            .handle(CreateRequestCommand {
                submission: harness.submission(client, terms).await,
            })
            .await
            .unwrap();
    }

    let page = harness
        .app
        .state
        .list_requests_handler()
        .handle(ListRequestsQuery {
            page: Some(2),
            per_page: Some(2),
            order_by: Some("requested_amount".to_string()),
            sort_order: Some("desc".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages, 3);
    let amounts: Vec<f64> = page
        .items
        .iter()
        .map(|request| request.terms().requested_amount)
        .collect();
    assert_eq!(amounts, vec![30_000_000.0, 20_000_000.0]);

    let invalid = harness
        .app
        .state
        .list_requests_handler()
        .handle(ListRequestsQuery {
            order_by: Some("password".to_string()),
            ..Default::default()
        })
        .await;
    assert!(matches!(invalid, Err(RequestError::Validation(_))));
}
