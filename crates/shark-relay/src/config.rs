//! Relay settings.

use config::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings of the relay process
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RelaySettings {
    /// Listen address
    #[serde(default = "default_relay_bind")]
    pub relay_bind: String,
    /// yt-dlp executable (path or name on `PATH`)
    #[serde(default = "default_ytdlp_path")]
    pub ytdlp_path: String,
    /// Upper bound for one yt-dlp run
    #[serde(default = "default_ytdlp_timeout_secs")]
    pub ytdlp_timeout_secs: u64,
    /// Upper bound for one Instagram request
    #[serde(default = "default_instagram_timeout_secs")]
    pub instagram_timeout_secs: u64,
}

fn default_relay_bind() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_ytdlp_path() -> String {
    "yt-dlp".to_string()
}

const fn default_ytdlp_timeout_secs() -> u64 {
    60
}

const fn default_instagram_timeout_secs() -> u64 {
    30
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            relay_bind: default_relay_bind(),
            ytdlp_path: default_ytdlp_path(),
            ytdlp_timeout_secs: default_ytdlp_timeout_secs(),
            instagram_timeout_secs: default_instagram_timeout_secs(),
        }
    }
}

impl RelaySettings {
    /// Loads settings from config files and the environment.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if loading fails.
    pub fn new() -> Result<Self, ConfigError> {
        shark_core::config::load()
    }

    /// yt-dlp timeout as a `Duration`.
    #[must_use]
    pub const fn ytdlp_timeout(&self) -> Duration {
        Duration::from_secs(self.ytdlp_timeout_secs)
    }

    /// Instagram request timeout as a `Duration`.
    #[must_use]
    pub const fn instagram_timeout(&self) -> Duration {
        Duration::from_secs(self.instagram_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = RelaySettings::default();
        assert_eq!(settings.relay_bind, "0.0.0.0:8000");
        assert_eq!(settings.ytdlp_timeout(), Duration::from_secs(60));
        assert_eq!(settings.instagram_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_config_keeps_defaults() -> Result<(), ConfigError> {
        let settings: RelaySettings = config::Config::builder()
            .set_override("ytdlp_path", "/opt/bin/yt-dlp")?
            .build()?
            .try_deserialize()?;
        assert_eq!(settings.ytdlp_path, "/opt/bin/yt-dlp");
        assert_eq!(settings.ytdlp_timeout_secs, 60);
        Ok(())
    }
}
