//! Reference data rows: credit types and request statuses.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CreditTypeId, StatusId};

/// Business codes of the statuses the lifecycle looks up by code.
pub mod status_codes {
    pub const PENDING: &str = "PENDING";
    pub const APPROVED: &str = "APPROVED";
    pub const REJECTED: &str = "REJECTED";
}

/// A credit product, e.g. working capital or machinery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditType {
    pub id: CreditTypeId,
    pub code: String,
    pub name: String,
}

impl CreditType {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: CreditTypeId::new(),
            code: code.into(),
            name: name.into(),
        }
    }
}

/// A request status row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestStatus {
    pub id: StatusId,
    pub code: String,
    pub name: String,
}

impl RequestStatus {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: StatusId::new(),
            code: code.into(),
            name: name.into(),
        }
    }

    pub fn has_code(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code)
    }
}

/// Both reference lists, as offered to request forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedData {
    pub credit_types: Vec<CreditType>,
    pub statuses: Vec<RequestStatus>,
}
