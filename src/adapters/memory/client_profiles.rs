//! In-memory client profile store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::client::ClientProfile;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::ClientProfileReader;

#[derive(Default)]
pub struct InMemoryClientProfiles {
    profiles: RwLock<HashMap<UserId, ClientProfile>>,
}

impl InMemoryClientProfiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a profile.
    pub async fn upsert(&self, profile: ClientProfile) {
        self.profiles.write().await.insert(profile.user_id, profile);
    }

    pub async fn remove(&self, user_id: &UserId) -> Option<ClientProfile> {
        self.profiles.write().await.remove(user_id)
    }
}

#[async_trait]
impl ClientProfileReader for InMemoryClientProfiles {
    async fn get_profile(&self, user_id: &UserId) -> Result<Option<ClientProfile>, DomainError> {
        Ok(self.profiles.read().await.get(user_id).cloned())
    }
}
