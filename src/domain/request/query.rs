//! Paginated request listing: filter, sort allow-list and page shape.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::aggregate::CreditRequest;
use crate::domain::foundation::{CreditTypeId, StatusId, UserId, ValidationError};

/// Largest page size accepted.
pub const MAX_PER_PAGE: u32 = 100;

/// Page size used when the caller gives none.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Optional equality filters, combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestFilter {
    pub client_id: Option<UserId>,
    pub status_id: Option<StatusId>,
    pub credit_type_id: Option<CreditTypeId>,
}

impl RequestFilter {
    pub fn matches(&self, request: &CreditRequest) -> bool {
        self.client_id.map_or(true, |id| request.client_id() == &id)
            && self.status_id.map_or(true, |id| request.status_id() == &id)
            && self
                .credit_type_id
                .map_or(true, |id| request.credit_type_id() == &id)
    }
}

/// Columns a listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    RequestedAmount,
    ApprovedAmount,
    TermMonths,
    AnnualInterestRate,
    RiskScore,
    Id,
}

impl SortField {
    pub const ALL: [SortField; 8] = [
        SortField::CreatedAt,
        SortField::UpdatedAt,
        SortField::RequestedAmount,
        SortField::ApprovedAmount,
        SortField::TermMonths,
        SortField::AnnualInterestRate,
        SortField::RiskScore,
        SortField::Id,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "created_at",
            SortField::UpdatedAt => "updated_at",
            SortField::RequestedAmount => "requested_amount",
            SortField::ApprovedAmount => "approved_amount",
            SortField::TermMonths => "term_months",
            SortField::AnnualInterestRate => "annual_interest_rate",
            SortField::RiskScore => "risk_score",
            SortField::Id => "id",
        }
    }

    /// Compares two requests on this column.
    ///
    /// Missing values sort last ascending and first descending.
    pub fn compare(&self, a: &CreditRequest, b: &CreditRequest, order: SortOrder) -> Ordering {
        let ordering = match self {
            SortField::CreatedAt => Some(a.created_at().cmp(b.created_at())),
            SortField::UpdatedAt => Some(a.updated_at().cmp(b.updated_at())),
            SortField::RequestedAmount => {
                a.terms().requested_amount.partial_cmp(&b.terms().requested_amount)
            }
            SortField::TermMonths => Some(a.terms().term_months.cmp(&b.terms().term_months)),
            SortField::AnnualInterestRate => a
                .terms()
                .annual_interest_rate
                .partial_cmp(&b.terms().annual_interest_rate),
            SortField::Id => Some(a.id().cmp(b.id())),
            SortField::ApprovedAmount => {
                return nullable(a.approved_amount(), b.approved_amount(), order)
            }
            SortField::RiskScore => return nullable(a.risk_score(), b.risk_score(), order),
        };
        order.apply(ordering.unwrap_or(Ordering::Equal))
    }
}

fn nullable(a: Option<f64>, b: Option<f64>, order: SortOrder) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => order.apply(x.partial_cmp(&y).unwrap_or(Ordering::Equal)),
        (None, None) => Ordering::Equal,
        // NULL is the largest value: last ascending, first descending
        (None, Some(_)) => order.apply(Ordering::Greater),
        (Some(_), None) => order.apply(Ordering::Less),
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("order_by", format!("sorting by '{}' is not allowed", s))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(ValidationError::invalid_format(
                "sort_order",
                format!("sort order '{}' is not allowed", other),
            )),
        }
    }
}

/// One-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    pub fn new(page: u32, per_page: u32) -> Result<Self, ValidationError> {
        if page == 0 {
            return Err(ValidationError::out_of_range("page", 1.0, u32::MAX as f64, 0.0));
        }
        if per_page == 0 || per_page > MAX_PER_PAGE {
            return Err(ValidationError::out_of_range(
                "per_page",
                1.0,
                MAX_PER_PAGE as f64,
                per_page as f64,
            ));
        }
        Ok(Self { page, per_page })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn offset(&self) -> usize {
        (self.page as usize - 1) * self.per_page as usize
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Full listing query handed to the repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestQuery {
    pub filter: RequestFilter,
    pub page: PageRequest,
    pub order_by: SortField,
    pub sort_order: SortOrder,
}

/// One page of results plus the total match count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        let per_page = request.per_page() as u64;
        let total_pages = ((total + per_page - 1) / per_page) as u32;
        Self {
            items,
            total,
            page: request.page(),
            per_page: request.per_page(),
            total_pages,
        }
    }
}
