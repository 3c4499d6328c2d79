//! Credit request lifecycle types.

mod aggregate;
mod changes;
mod errors;
mod query;
mod reference;

pub use aggregate::{CreditRequest, MAX_DESCRIPTION_LENGTH, MAX_REJECTION_REASON_LENGTH};
pub use changes::{RequestChanges, RequestSubmission};
pub use errors::RequestError;
pub use query::{
    Page, PageRequest, RequestFilter, RequestQuery, SortField, SortOrder, DEFAULT_PER_PAGE,
    MAX_PER_PAGE,
};
pub use reference::{status_codes, CreditType, RelatedData, RequestStatus};
