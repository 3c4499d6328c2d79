//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod notification;
pub mod request;

pub use notification::{
    ListUserNotificationsHandler, ListUserNotificationsQuery, NotificationDispatcher,
    ViewNotificationCommand, ViewNotificationHandler,
};
pub use request::{
    ApproveRequestCommand, ApproveRequestHandler, ChangeRequestStatusCommand,
    ChangeRequestStatusHandler, CreateRequestCommand, CreateRequestHandler, CreateRequestResult,
    DeleteRequestCommand, DeleteRequestHandler, FindClientRequestHandler, FindClientRequestQuery,
    GetRelatedDataHandler, GetRequestHandler, GetRequestQuery, LifecycleNotifier,
    ListRequestsHandler, ListRequestsQuery, RejectRequestCommand, RejectRequestHandler,
    UpdateRequestCommand, UpdateRequestHandler,
};
