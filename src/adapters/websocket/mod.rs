//! WebSocket adapters for realtime notification push.
//!
//! ```text
//! lifecycle handler ──PushChannel──▶ PushConnectionRegistry ──▶ user's sockets
//!                                           ▲
//!                     GET /ws/:user_id ─────┘ join / leave
//! ```
//!
//! # Components
//!
//! - [`registry`] - Per-user broadcast channels, implements `PushChannel`
//! - [`handler`] - Axum WebSocket upgrade handler
//! - [`messages`] - Handshake and keepalive messages

pub mod handler;
pub mod messages;
pub mod registry;

pub use handler::{websocket_router, ws_handler, WebSocketState};
pub use messages::{ClientMessage, ConnectedMessage};
pub use registry::{ClientId, NoopPushChannel, PushConnectionRegistry, DEFAULT_CHANNEL_CAPACITY};
