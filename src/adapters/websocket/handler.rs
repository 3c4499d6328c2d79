//! WebSocket upgrade handler for the push endpoint.
//!
//! Connection lifecycle:
//! 1. Parse the user id from the path
//! 2. Upgrade to WebSocket and join the user's channel
//! 3. Forward pushed events until either side closes
//! 4. Leave the channel

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use futures::{SinkExt, StreamExt};

use crate::domain::foundation::{Timestamp, UserId};

use super::{
    messages::{ClientMessage, ConnectedMessage},
    registry::{ClientId, PushConnectionRegistry},
};

/// State required for WebSocket handling.
#[derive(Clone)]
pub struct WebSocketState {
    pub registry: Arc<PushConnectionRegistry>,
}

impl WebSocketState {
    pub fn new(registry: Arc<PushConnectionRegistry>) -> Self {
        Self { registry }
    }
}

/// Route: `GET /ws/:user_id`
///
/// The caller is trusted to have authenticated `user_id` upstream.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    Path(user_id): Path<String>,
    State(state): State<WebSocketState>,
) -> Response {
    let user_id: UserId = match user_id.parse() {
        Ok(id) => id,
        Err(_) => return (StatusCode::BAD_REQUEST, "Invalid user ID").into_response(),
    };

    ws.on_upgrade(move |socket| handle_socket(socket, user_id, state))
}

async fn handle_socket(socket: WebSocket, user_id: UserId, state: WebSocketState) {
    let (mut sender, mut receiver) = socket.split();
    let client_id = ClientId::new();

    let mut events = state.registry.join(&user_id, client_id.clone()).await;
    tracing::info!(user_id = %user_id, client_id = %client_id, "Push client connected");

    let connected = ConnectedMessage {
        user_id: user_id.to_string(),
        client_id: client_id.to_string(),
        timestamp: Timestamp::now().to_rfc3339(),
    };
    let greeting = match serde_json::to_string(&connected) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to encode connected message");
            drop(events);
            state.registry.leave(&client_id).await;
            return;
        }
    };
    if sender.send(Message::Text(greeting)).await.is_err() {
        drop(events);
        state.registry.leave(&client_id).await;
        return;
    }

    let mut send_task = {
        let client_id = client_id.clone();
        tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(payload) => {
                        if let Err(e) = sender.send(Message::Text(payload.to_string())).await {
                            tracing::debug!(client_id = %client_id, "Send error, closing connection: {}", e);
                            break;
                        }
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(client_id = %client_id, skipped, "Push client lagging, events dropped");
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    };

    let mut recv_task = {
        let client_id = client_id.clone();
        tokio::spawn(async move {
            while let Some(result) = receiver.next().await {
                match result {
                    Ok(Message::Text(text)) => {
                        if let Ok(ClientMessage::Ping) = serde_json::from_str::<ClientMessage>(&text) {
                            tracing::trace!(client_id = %client_id, "Received ping");
                        }
                    }
                    Ok(Message::Close(_)) => {
                        tracing::debug!(client_id = %client_id, "Client sent close frame");
                        break;
                    }
                    Ok(_) => {}
                    Err(e) => {
                        tracing::debug!(client_id = %client_id, "Receive error: {}", e);
                        break;
                    }
                }
            }
        })
    };

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => {
            send_task.abort();
            // Wait for the receiver to drop so leave() can free the channel.
            let _ = send_task.await;
        }
    }

    state.registry.leave(&client_id).await;
    tracing::info!(user_id = %user_id, client_id = %client_id, "Push client disconnected");
}

/// Create axum router for the push endpoint.
pub fn websocket_router() -> axum::Router<WebSocketState> {
    use axum::routing::get;

    axum::Router::new().route("/ws/:user_id", get(ws_handler))
}
