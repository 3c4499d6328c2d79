//! Client profile reader port.

use async_trait::async_trait;

use crate::domain::client::ClientProfile;
use crate::domain::foundation::{DomainError, UserId};

/// Read access to client profiles.
#[async_trait]
pub trait ClientProfileReader: Send + Sync {
    /// Returns `None` if the user has no profile.
    async fn get_profile(&self, user_id: &UserId) -> Result<Option<ClientProfile>, DomainError>;
}
