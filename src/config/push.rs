//! Realtime push configuration

use serde::Deserialize;

use super::error::ValidationError;

const MAX_CHANNEL_CAPACITY: usize = 10_000;

/// Websocket push configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PushConfig {
    /// Serve `/ws/:user_id` and push lifecycle events
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Buffered events per user before slow sockets start lagging
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl PushConfig {
    /// Validate push configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.channel_capacity == 0 || self.channel_capacity > MAX_CHANNEL_CAPACITY {
            return Err(ValidationError::InvalidChannelCapacity);
        }
        Ok(())
    }
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_channel_capacity() -> usize {
    64
}
