//! Environment configuration
//!
//! All runtime configuration comes from environment variables, read once
//! at start-up into an immutable [`RelayConfig`] that is handed to every
//! component needing it. Nothing reads ambient process state after that.

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variables recognized as the API credential, in priority order.
const API_KEY_VARS: [&str; 3] = ["ULTIMATE_AI_API_KEY", "GEMINI_API_KEY", "OPENAI_API_KEY"];

/// Process-wide configuration, immutable after start-up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Base URL of the OpenAI-compatible gateway
    pub api_base_url: String,
    /// Default model label; shown in logs, never consulted by dispatch
    pub default_model: String,
    /// Enables debug-level logging (`DEBUG_MCP=true`)
    pub debug: bool,
    /// Bearer credential, resolved from the first recognized source
    #[serde(skip)]
    pub api_key: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://smart.ultimateai.org/v1".to_string(),
            default_model: "Gemini 2.0 Flash".to_string(),
            debug: false,
            api_key: String::new(),
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no API key found: set ULTIMATE_AI_API_KEY, GEMINI_API_KEY, or OPENAI_API_KEY")]
    MissingApiKey,

    #[error("invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
}

/// Loads [`RelayConfig`] from the process environment
pub struct ConfigLoader;

impl ConfigLoader {
    /// Read configuration from the environment.
    ///
    /// A missing credential is fatal: the server refuses to start rather
    /// than serve requests it cannot authenticate.
    pub fn load() -> Result<RelayConfig, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(RelayConfig::default()))
            .merge(
                Env::raw()
                    .only(&["API_BASE_URL", "DEFAULT_MODEL", "DEBUG_MCP"])
                    .map(|key| {
                        if key.as_str().eq_ignore_ascii_case("DEBUG_MCP") {
                            "debug".into()
                        } else {
                            key.as_str().to_ascii_lowercase().into()
                        }
                    }),
            );

        let mut config: RelayConfig = figment.extract().map_err(Box::new)?;
        config.api_key = Self::resolve_api_key().ok_or(ConfigError::MissingApiKey)?;
        Ok(config)
    }

    /// First non-empty credential among the recognized sources.
    fn resolve_api_key() -> Option<String> {
        API_KEY_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty())
    }
}
