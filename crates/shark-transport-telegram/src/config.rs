//! Telegram transport settings.

use config::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Telegram transport settings loaded from environment variables.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TelegramSettings {
    /// Telegram Bot API token (`BOT_TOKEN`).
    pub bot_token: String,
    /// Base URL of the relay service.
    #[serde(default = "default_relay_url")]
    pub relay_url: String,
    /// Upper bound for one relay call.
    #[serde(default = "default_relay_timeout_secs")]
    pub relay_timeout_secs: u64,
}

fn default_relay_url() -> String {
    "http://localhost:8000".to_string()
}

const fn default_relay_timeout_secs() -> u64 {
    30
}

impl TelegramSettings {
    /// Create new settings by loading from environment and files.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if loading fails or `BOT_TOKEN` is unset.
    pub fn new() -> Result<Self, ConfigError> {
        shark_core::config::load()
    }

    /// Relay call timeout as a `Duration`.
    #[must_use]
    pub const fn relay_timeout(&self) -> Duration {
        Duration::from_secs(self.relay_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_keys() -> Result<(), ConfigError> {
        let settings: TelegramSettings = config::Config::builder()
            .set_override("bot_token", "123:abc")?
            .build()?
            .try_deserialize()?;
        assert_eq!(settings.bot_token, "123:abc");
        assert_eq!(settings.relay_url, "http://localhost:8000");
        assert_eq!(settings.relay_timeout(), Duration::from_secs(30));
        Ok(())
    }

    #[test]
    fn test_token_is_required() {
        let result: Result<TelegramSettings, ConfigError> = config::Config::builder()
            .build()
            .and_then(|c| c.try_deserialize());
        assert!(result.is_err());
    }
}
