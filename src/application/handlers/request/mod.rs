//! Credit request lifecycle handlers.
//!
//! Commands: create, update, approve, reject, change status, delete.
//! Queries: get, find by client, paginated list, related reference data.
//!
//! Every command validates before it mutates and persists before it
//! notifies. Notification side effects run through [`LifecycleNotifier`].

mod approve_request;
mod change_request_status;
mod create_request;
mod delete_request;
mod get_related_data;
mod get_request;
mod list_requests;
mod notifier;
mod references;
mod reject_request;
mod scoring;
mod update_request;

#[cfg(test)]
pub(crate) mod test_support;

pub use approve_request::{ApproveRequestCommand, ApproveRequestHandler};
pub use change_request_status::{ChangeRequestStatusCommand, ChangeRequestStatusHandler};
pub use create_request::{CreateRequestCommand, CreateRequestHandler, CreateRequestResult};
pub use delete_request::{DeleteRequestCommand, DeleteRequestHandler};
pub use get_related_data::GetRelatedDataHandler;
pub use get_request::{
    FindClientRequestHandler, FindClientRequestQuery, GetRequestHandler, GetRequestQuery,
};
pub use list_requests::{ListRequestsHandler, ListRequestsQuery};
pub use notifier::LifecycleNotifier;
pub use reject_request::{RejectRequestCommand, RejectRequestHandler};
pub use update_request::{UpdateRequestCommand, UpdateRequestHandler};
