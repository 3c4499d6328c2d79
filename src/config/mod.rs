//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `AGRI_CREDIT` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use agri_credit::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Listening on {}", config.server.socket_addr());
//! ```

mod email;
mod error;
mod notifications;
mod push;
mod server;

pub use email::EmailConfig;
pub use error::{ConfigError, ValidationError};
pub use notifications::NotificationsConfig;
pub use push::PushConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
/// Every section has defaults except `email`, which is absent unless a
/// Resend key is provided.
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Email configuration (Resend)
    #[serde(default)]
    pub email: Option<EmailConfig>,

    /// Lifecycle notification template ids
    #[serde(default)]
    pub notifications: NotificationsConfig,

    /// Websocket push settings
    #[serde(default)]
    pub push: PushConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AGRI_CREDIT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AGRI_CREDIT__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `AGRI_CREDIT__EMAIL__RESEND_API_KEY=re_...` -> `email.resend_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AGRI_CREDIT")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        if let Some(email) = &self.email {
            email.validate()?;
        }
        self.notifications.validate()?;
        self.push.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "AGRI_CREDIT__SERVER__PORT",
        "AGRI_CREDIT__SERVER__ENVIRONMENT",
        "AGRI_CREDIT__EMAIL__RESEND_API_KEY",
        "AGRI_CREDIT__EMAIL__FROM_EMAIL",
        "AGRI_CREDIT__PUSH__CHANNEL_CAPACITY",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert!(config.email.is_none());
        assert_eq!(config.push.channel_capacity, 64);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_email_section() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AGRI_CREDIT__EMAIL__RESEND_API_KEY", "re_test_123");
        env::set_var("AGRI_CREDIT__EMAIL__FROM_EMAIL", "credits@example.com");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        let email = config.email.as_ref().unwrap();
        assert_eq!(email.resend_api_key.expose_secret(), "re_test_123");
        assert_eq!(email.from_email, "credits@example.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_server_port_and_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AGRI_CREDIT__SERVER__PORT", "3000");
        env::set_var("AGRI_CREDIT__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.is_production());
    }

    #[test]
    fn test_invalid_email_section_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AGRI_CREDIT__EMAIL__RESEND_API_KEY", "sk_wrong");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidResendKey)
        ));
    }

    #[test]
    fn test_invalid_push_capacity_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AGRI_CREDIT__PUSH__CHANNEL_CAPACITY", "0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_err());
    }
}
