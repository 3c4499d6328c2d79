//! GetRelatedDataHandler - Reference lists offered to request forms.

use std::sync::Arc;

use crate::domain::request::{RelatedData, RequestError};
use crate::ports::ReferenceDataReader;

pub struct GetRelatedDataHandler {
    reference: Arc<dyn ReferenceDataReader>,
}

impl GetRelatedDataHandler {
    pub fn new(reference: Arc<dyn ReferenceDataReader>) -> Self {
        Self { reference }
    }

    pub async fn handle(&self) -> Result<RelatedData, RequestError> {
        Ok(RelatedData {
            credit_types: self.reference.list_credit_types().await?,
            statuses: self.reference.list_statuses().await?,
        })
    }
}
