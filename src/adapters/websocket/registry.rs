//! Per-user push connection registry.
//!
//! Every user with at least one open socket owns a broadcast channel; each
//! socket (browser tab, device) subscribes to it. Pushing to a user is a
//! single `send` on that channel.
//!
//! ```text
//! user-1            user-2
//! ├── client-a      └── client-c
//! └── client-b
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{broadcast, RwLock};
use uuid::Uuid;

use crate::domain::foundation::UserId;
use crate::ports::{DeliveryError, PushChannel};

/// Default buffer size of each user's channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Unique identifier for one socket connection.
///
/// Generated server-side when a client connects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientId(Uuid);

impl ClientId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tracks open push connections per user.
///
/// # Thread Safety
///
/// Uses `RwLock` for the channel map since pushes (reads) outnumber
/// joins and leaves (writes).
pub struct PushConnectionRegistry {
    /// user_id → broadcast sender shared by the user's sockets.
    channels: RwLock<HashMap<UserId, broadcast::Sender<serde_json::Value>>>,

    /// client_id → user_id for cleanup on disconnect.
    clients: RwLock<HashMap<ClientId, UserId>>,

    channel_capacity: usize,
}

impl PushConnectionRegistry {
    pub fn new(channel_capacity: usize) -> Self {
        Self {
            channels: RwLock::new(HashMap::new()),
            clients: RwLock::new(HashMap::new()),
            channel_capacity,
        }
    }

    /// Registers a socket for `user_id` and returns its event receiver.
    pub async fn join(
        &self,
        user_id: &UserId,
        client_id: ClientId,
    ) -> broadcast::Receiver<serde_json::Value> {
        let mut channels = self.channels.write().await;

        let sender = channels.entry(*user_id).or_insert_with(|| {
            let (tx, _) = broadcast::channel(self.channel_capacity);
            tx
        });

        self.clients.write().await.insert(client_id, *user_id);

        sender.subscribe()
    }

    /// Removes a socket. Drops the user's channel once nobody listens.
    ///
    /// Call after the socket's receiver has been dropped.
    pub async fn leave(&self, client_id: &ClientId) {
        let mut clients = self.clients.write().await;

        if let Some(user_id) = clients.remove(client_id) {
            let still_connected = clients.values().any(|u| u == &user_id);
            drop(clients);
            let mut channels = self.channels.write().await;
            let empty = channels
                .get(&user_id)
                .map_or(false, |sender| sender.receiver_count() == 0);
            if empty && !still_connected {
                channels.remove(&user_id);
            }
        }
    }

    /// Sends `payload` to every socket of `user_id`.
    ///
    /// Returns how many sockets received it; 0 when the user is offline.
    pub async fn send_to_user(&self, user_id: &UserId, payload: serde_json::Value) -> usize {
        let channels = self.channels.read().await;
        match channels.get(user_id) {
            Some(sender) => sender.send(payload).unwrap_or(0),
            None => 0,
        }
    }

    /// Number of open sockets for a user.
    pub async fn connection_count(&self, user_id: &UserId) -> usize {
        self.channels
            .read()
            .await
            .get(user_id)
            .map(|s| s.receiver_count())
            .unwrap_or(0)
    }

    /// Number of open sockets across all users.
    pub async fn total_connection_count(&self) -> usize {
        self.clients.read().await.len()
    }

    pub async fn connected_users(&self) -> Vec<UserId> {
        self.channels.read().await.keys().copied().collect()
    }
}

impl Default for PushConnectionRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }
}

#[async_trait]
impl PushChannel for PushConnectionRegistry {
    async fn send_event(&self, user_id: &UserId, payload: serde_json::Value) -> Result<(), DeliveryError> {
        let delivered = self.send_to_user(user_id, payload).await;
        tracing::debug!(user_id = %user_id, delivered, "Push event dispatched");
        Ok(())
    }
}

/// Push channel used when realtime delivery is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPushChannel;

#[async_trait]
impl PushChannel for NoopPushChannel {
    async fn send_event(&self, _user_id: &UserId, _payload: serde_json::Value) -> Result<(), DeliveryError> {
        Ok(())
    }
}
