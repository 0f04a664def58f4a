//! Layered settings loader shared by the relay and the bot.
//!
//! Sources, lowest precedence first: `config/default`, `config/{RUN_MODE}`,
//! `config/local` (all optional), `APP__*` variables, then plain
//! environment variables. Empty variables count as unset.

use config::{Config, ConfigError, Environment, File};
use serde::de::DeserializeOwned;

/// Builds the layered source stack.
///
/// # Errors
///
/// Returns a `ConfigError` if a present file cannot be parsed.
pub fn build_config() -> Result<Config, ConfigError> {
    let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
        // Not checked into git
        .add_source(File::with_name("config/local").required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        // UPPER_SNAKE_CASE maps to snake_case keys
        .add_source(Environment::default().ignore_empty(true))
        .build()
}

/// Loads and deserializes a settings struct from [`build_config`].
///
/// # Errors
///
/// Returns a `ConfigError` if loading fails or a required key is missing.
pub fn load<T: DeserializeOwned>() -> Result<T, ConfigError> {
    build_config()?.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Defaults {
        #[serde(default = "default_marker")]
        shark_test_marker_key: String,
    }

    fn default_marker() -> String {
        "fallback".to_string()
    }

    #[test]
    fn test_load_applies_serde_defaults() -> Result<(), ConfigError> {
        let settings: Defaults = load()?;
        assert_eq!(settings.shark_test_marker_key, "fallback");
        Ok(())
    }
}
