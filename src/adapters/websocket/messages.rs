//! Control messages of the push socket.
//!
//! Lifecycle events are forwarded to the client as-is; these types only
//! cover the connection handshake and client keepalives.

use serde::{Deserialize, Serialize};

/// Sent once after the socket has joined the user's channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "connected")]
pub struct ConnectedMessage {
    pub user_id: String,
    pub client_id: String,
    pub timestamp: String,
}

/// Messages a client may send.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    Ping,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connected_message_is_tagged() {
        let msg = ConnectedMessage {
            user_id: "u".to_string(),
            client_id: "c".to_string(),
            timestamp: "2024-01-01T00:00:00+00:00".to_string(),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "connected");
        assert_eq!(json["user_id"], "u");
    }

    #[test]
    fn ping_deserializes() {
        let msg: ClientMessage = serde_json::from_str(r#"{"type":"ping"}"#).unwrap();
        assert_eq!(msg, ClientMessage::Ping);
    }
}
